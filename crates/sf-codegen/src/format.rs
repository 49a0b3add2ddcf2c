//! Source formatting for generated TypeScript.
//!
//! Re-indents by bracket depth, strips trailing whitespace and collapses runs
//! of blank lines. Formatting already-formatted text is a no-op.

const INDENT: &str = "    ";

/// Format generated declarations. Empty input stays empty.
pub fn format_source(source: &str) -> String {
    let mut out = String::new();
    let mut depth: usize = 0;
    let mut blank_pending = false;

    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() {
            blank_pending = !out.is_empty();
            continue;
        }

        if is_comment(line) {
            flush_blank(&mut out, &mut blank_pending, line);
            push_indent(&mut out, depth);
            if line.starts_with('*') {
                out.push(' ');
            }
            out.push_str(line);
            out.push('\n');
            continue;
        }

        let leading_closers = line.chars().take_while(|c| is_closer(*c)).count();
        flush_blank(&mut out, &mut blank_pending, line);
        push_indent(&mut out, depth.saturating_sub(leading_closers));
        out.push_str(line);
        out.push('\n');

        let opens = line.chars().filter(|c| is_opener(*c)).count();
        let closes = line.chars().filter(|c| is_closer(*c)).count();
        depth = (depth + opens).saturating_sub(closes);
    }

    out
}

/// Emit at most one blank line, never directly before a closing bracket.
fn flush_blank(out: &mut String, blank_pending: &mut bool, next_line: &str) {
    if *blank_pending && !next_line.starts_with(is_closer) && !out.ends_with("{\n") {
        out.push('\n');
    }
    *blank_pending = false;
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')
}

fn is_opener(c: char) -> bool {
    matches!(c, '{' | '[' | '(')
}

fn is_closer(c: char) -> bool {
    matches!(c, '}' | ']' | ')')
}
