//! Running a plan: generate every object, format, print and persist.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use busbar_sf_codegen::{format_source, ObjectGenerator};
use tracing::{debug, info, instrument, warn};

use crate::error::{Error, ErrorKind, Result};
use crate::plan::GenerationPlan;

/// Scratch file used when no output path is configured. Never written.
pub const PREVIEW_PATH: &str = "./tmp.ts";

/// Where a run's output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Written to this file.
    File(PathBuf),
    /// Printed only; the path is cleared but not written.
    Preview(PathBuf),
}

impl OutputTarget {
    pub fn resolve(out_path: Option<&Path>, preview_path: &Path) -> Self {
        match out_path {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::Preview(preview_path.to_path_buf()),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            OutputTarget::File(path) | OutputTarget::Preview(path) => path,
        }
    }

    pub fn persists(&self) -> bool {
        matches!(self, OutputTarget::File(_))
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub persisted: bool,
    pub objects: usize,
    /// The formatted output, as printed.
    pub output: String,
}

/// Drives generation for a plan with a given [`ObjectGenerator`].
#[derive(Debug)]
pub struct Orchestrator<G> {
    generator: G,
    preview_path: PathBuf,
}

impl<G: ObjectGenerator> Orchestrator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            preview_path: PathBuf::from(PREVIEW_PATH),
        }
    }

    /// Use another scratch path for preview runs.
    pub fn with_preview_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preview_path = path.into();
        self
    }

    /// Generate every entry in order and emit the formatted result.
    ///
    /// Any file at the target path is removed first. Objects are generated one
    /// at a time; the first failure aborts the run and nothing is printed or
    /// written. The formatted output is always printed to `console`, and
    /// written to `out_path` when one is given.
    #[instrument(skip_all, fields(objects = plan.len()))]
    pub async fn run<W: Write>(
        &self,
        plan: &GenerationPlan,
        out_path: Option<&Path>,
        console: &mut W,
    ) -> Result<RunSummary> {
        let target = OutputTarget::resolve(out_path, &self.preview_path);
        remove_existing(target.path());

        let mut parts = Vec::with_capacity(plan.len());
        for entry in plan {
            debug!(sobject = %entry.api_name, "generating");
            let text = self.generator.generate(entry).await.map_err(|e| {
                Error::with_source(
                    ErrorKind::Generation {
                        api_name: entry.api_name.clone(),
                        message: e.to_string(),
                    },
                    e,
                )
            })?;
            parts.push(text);
        }

        let output = format_source(&parts.join("\n"));

        console
            .write_all(output.as_bytes())
            .and_then(|_| console.flush())
            .map_err(|e| persist_error(Path::new("<stdout>"), e))?;

        if target.persists() {
            persist(target.path(), &output)?;
            info!(path = %target.path().display(), objects = plan.len(), "declarations written");
        } else {
            debug!("no output path, printed only");
        }

        Ok(RunSummary {
            path: target.path().to_path_buf(),
            persisted: target.persists(),
            objects: plan.len(),
            output,
        })
    }
}

/// Remove `path` if it exists. Failures other than absence are logged and ignored.
fn remove_existing(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed previous output"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "could not remove previous output"),
    }
}

fn persist(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| persist_error(path, e))?;
    }
    fs::write(path, contents).map_err(|e| persist_error(path, e))
}

fn persist_error(path: &Path, err: io::Error) -> Error {
    Error::with_source(
        ErrorKind::Persist {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
        err,
    )
}
