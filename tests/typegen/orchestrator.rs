//! Run behavior: ordering, abort on failure, idempotent output.

use std::fs;

use busbar_sf_typegen::{plan, ErrorKind, ObjectRequest, Orchestrator};

use crate::common::FakeGenerator;

fn requests(names: &[&str]) -> Vec<ObjectRequest> {
    names.iter().map(|n| ObjectRequest::from(*n)).collect()
}

#[tokio::test]
async fn test_empty_plan_prints_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let generator = FakeGenerator::default();
    let mut console = Vec::new();

    let summary = Orchestrator::new(generator.clone())
        .with_preview_path(dir.path().join("tmp.ts"))
        .run(&plan(&[]), None, &mut console)
        .await
        .unwrap();

    assert_eq!(summary.objects, 0);
    assert!(summary.output.is_empty());
    assert!(console.is_empty());
    assert!(generator.seen().is_empty());
}

#[tokio::test]
async fn test_failure_aborts_without_persisting() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sobs.ts");
    fs::write(&out, "previous run").unwrap();
    let generator = FakeGenerator::failing_on("Broken__c");
    let mut console = Vec::new();

    let err = Orchestrator::new(generator.clone())
        .run(
            &plan(&requests(&["Account", "Broken__c", "Contact"])),
            Some(&out),
            &mut console,
        )
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Generation { ref api_name, .. } if api_name == "Broken__c"));
    assert_eq!(generator.seen(), vec!["Account", "Broken__c"]);
    assert!(!out.exists());
    assert!(console.is_empty());
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sobs.ts");
    let plan = plan(&requests(&["Account", "Contact", "Account"]));
    let orchestrator = Orchestrator::new(FakeGenerator::default());

    orchestrator.run(&plan, Some(&out), &mut Vec::new()).await.unwrap();
    let first = fs::read(&out).unwrap();
    orchestrator.run(&plan, Some(&out), &mut Vec::new()).await.unwrap();
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert_eq!(text.matches("export interface Account {").count(), 2);
    assert!(text.contains("    name?: string;\n"));
}

#[tokio::test]
async fn test_unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "").unwrap();
    let out = blocker.join("sobs.ts");
    let mut console = Vec::new();

    let err = Orchestrator::new(FakeGenerator::default())
        .run(&plan(&requests(&["Account"])), Some(&out), &mut console)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Persist { ref path, .. } if *path == out));
    assert!(!console.is_empty());
}
