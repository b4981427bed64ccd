//! End-to-end tests of the setup command against recording hosts.

use storey::host::setup::{CONFIRMATION_MESSAGE, CONFIRMATION_TITLE};
use storey::prelude::*;
use storey_test_utils::{
    form, meters, request, DocCall, RecordingDocument, RecordingNotifier, ScriptedSource,
};

fn meters_setup(policy: ValidationPolicy) -> ProjectSetup {
    let config = LayoutConfig {
        units: meters(),
        ..LayoutConfig::default()
    };
    ProjectSetup::new(config, SetupOptions { policy }).unwrap()
}

fn seeded_document(levels: &[(&str, f64)]) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    for (index, &(name, elevation)) in levels.iter().enumerate() {
        doc.seed_level(LevelSpec {
            index,
            name: name.to_string(),
            elevation,
        });
    }
    doc
}

#[test]
fn call_order_is_info_grids_delete_create_commit() {
    let mut doc = RecordingDocument::wrap(seeded_document(&[("Old", 0.0)]));
    let layout = LayoutGenerator::default().generate(&request(1, 1, 8.0, &[3.0, 3.0]));
    apply_setup(&mut doc, &ProjectInfo::default(), &layout).unwrap();

    let old_id = ElementId(0);
    assert_eq!(
        doc.calls(),
        [
            DocCall::Begin("Set Project Defaults".to_string()),
            DocCall::SetProjectInfo,
            DocCall::CreateGrid("X1".to_string()),
            DocCall::CreateGrid("Y1".to_string()),
            DocCall::DeleteLevel(old_id),
            DocCall::CreateLevel("Level 1".to_string()),
            DocCall::CreateLevel("Level 2".to_string()),
            DocCall::Commit,
        ]
    );
}

#[test]
fn injected_failure_during_level_creation_rolls_back() {
    // Mutations: 0 info, 1-2 grids, 3-4 deletes, 5 first level.
    let mut doc =
        RecordingDocument::wrap(seeded_document(&[("Ground", 0.0), ("Roof", 4.0)])).fail_at(5);
    let layout = LayoutGenerator::default().generate(&request(1, 1, 8.0, &[3.0]));

    let err = apply_setup(&mut doc, &ProjectInfo::default(), &layout).unwrap_err();
    assert!(matches!(err, HostError::Rejected { .. }));
    assert_eq!(doc.calls().last(), Some(&DocCall::Rollback));

    let inner = doc.inner();
    let names: Vec<&str> = inner.levels().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Ground", "Roof"]);
    assert_eq!(inner.grids().count(), 0);
    assert!(inner.project_info().is_none());
}

#[test]
fn rerun_replaces_levels_but_rejects_duplicate_grids() {
    let setup = meters_setup(ValidationPolicy::Permissive);
    let mut doc = MemoryDocument::new();
    let mut notes = RecordingNotifier::default();

    let mut source = ScriptedSource::new([
        Some(form("2", "2", "8", "3,3,3")),
        Some(form("2", "2", "8", "4")),
    ]);
    setup.run(&mut source, &mut doc, &mut notes).unwrap();
    let elevations: Vec<f64> = doc.levels().map(|l| l.elevation).collect();
    assert_eq!(elevations, vec![3.0, 6.0, 9.0]);

    match setup.run(&mut source, &mut doc, &mut notes) {
        Err(SetupError::Host(HostError::DuplicateName { name })) => assert_eq!(name, "X1"),
        other => panic!("expected Host(DuplicateName), got {other:?}"),
    }
    // Second run left no trace.
    let elevations: Vec<f64> = doc.levels().map(|l| l.elevation).collect();
    assert_eq!(elevations, vec![3.0, 6.0, 9.0]);
    assert_eq!(notes.messages.len(), 1);
    assert_eq!(source.asked(), 2);
}

#[test]
fn cancellation_then_success() {
    let setup = meters_setup(ValidationPolicy::Strict);
    let mut doc = seeded_document(&[("Existing", 0.0)]);
    let mut notes = RecordingNotifier::default();
    let mut source = ScriptedSource::new([None, Some(form("3", "2", "6", "4.5;3.5"))]);

    let first = setup.run(&mut source, &mut doc, &mut notes).unwrap();
    assert_eq!(first, SetupOutcome::Cancelled);
    assert_eq!(doc.levels().count(), 1);
    assert!(notes.messages.is_empty());

    let second = setup.run(&mut source, &mut doc, &mut notes).unwrap();
    match second {
        SetupOutcome::Succeeded(report) => {
            assert_eq!(report.grids.len(), 5);
            assert_eq!(report.removed_levels, 1);
        }
        other => panic!("expected Succeeded, got {other:?}"),
    }
    let elevations: Vec<f64> = doc.levels().map(|l| l.elevation).collect();
    assert_eq!(elevations, vec![4.5, 8.0]);
    assert_eq!(
        notes.messages,
        vec![(CONFIRMATION_TITLE.to_string(), CONFIRMATION_MESSAGE.to_string())]
    );
}

#[test]
fn exhausted_script_cancels() {
    let setup = meters_setup(ValidationPolicy::Permissive);
    let mut doc = MemoryDocument::new();
    let mut source = ScriptedSource::default();
    let outcome = setup
        .run(&mut source, &mut doc, &mut RecordingNotifier::default())
        .unwrap();
    assert_eq!(outcome, SetupOutcome::Cancelled);
    assert!(doc.is_empty());
}

#[test]
fn strict_policy_rejects_negative_spacing() {
    let setup = meters_setup(ValidationPolicy::Strict);
    let mut doc = MemoryDocument::new();
    let mut source = Some(form("2", "2", "-8", "3"));
    match setup.run(&mut source, &mut doc, &mut RecordingNotifier::default()) {
        Err(SetupError::Request(RequestError::InvalidSpacing { axis: Axis::X, .. })) => {}
        other => panic!("expected Request(InvalidSpacing(X)), got {other:?}"),
    }
    assert!(doc.is_empty());
}

#[test]
fn layout_result_is_serializable_for_out_of_process_hosts() {
    let layout = LayoutGenerator::default().generate(&request(2, 1, 8.0, &[3.0]));
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["grids"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["levels"][0]["name"], "Level 1");
    assert_eq!(json["grids"][1]["start"]["x"], 8.0);
}
