//! End-to-end generation from the Movement demo

use aspectgen::config::load_generator_config;
use aspectgen::generator::{generate, Column, GenerationTarget, WriteOutcome};
use aspectgen::model::load_model;
use std::fs;
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_generate_movement_form() {
    let model = load_model(&demo("movement.aspect.yaml")).unwrap();
    let config = load_generator_config(&demo("movement.config.json")).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let report = generate(&model, &config, GenerationTarget::Form, dir.path(), false).unwrap();
    let root = dir.path().join("movement-form");
    assert_eq!(report.root_dir, root);
    assert_eq!(report.fields, 9);
    // nine fields, two position children (altitude excluded), two email parts
    assert_eq!(report.components.len(), 13);
    assert_eq!(report.written(), 13 * 2 + 1 + 2);
    assert!(report
        .artifacts
        .iter()
        .all(|a| a.outcome == WriteOutcome::Written));

    assert!(root.join("shared/form-validators.ts").exists());
    assert!(root.join("position/latitude/latitude.component.ts").exists());
    assert!(!root.join("position/altitude").exists());
    assert!(root.join("driver-email/username/username.component.html").exists());

    let latitude =
        fs::read_to_string(root.join("position/latitude/latitude.component.ts")).unwrap();
    assert!(latitude.contains("FormValidators.rangeValidator(-90, 90, 'AT_LEAST', 'AT_MOST')"));
    assert!(latitude.contains("from '../../shared/form-validators'"));

    let email = fs::read_to_string(root.join("driver-email/driver-email.component.ts")).unwrap();
    assert!(email.contains("FormValidators.deconstructionRuleValidator("));
    assert!(!email.contains("Validators.required"));

    let trip = fs::read_to_string(root.join("trip-duration/trip-duration.component.ts")).unwrap();
    assert!(trip.contains("FormValidators.dayTimeDurationValidator()"));

    let notes = fs::read_to_string(root.join("notes/notes.component.ts")).unwrap();
    assert!(notes.contains("FormValidators.lengthValidator(undefined, 280)"));
    assert!(notes.contains("FormValidators.encodingValidator('UTF-8')"));

    let validators = fs::read_to_string(root.join("shared/form-validators.ts")).unwrap();
    for factory in [
        "rangeValidator",
        "lengthValidator",
        "patternValidator",
        "encodingValidator",
        "fixedPointValidator",
        "uniqueValuesValidator",
        "deconstructionRuleValidator",
        "durationValidator",
        "dayTimeDurationValidator",
        "yearMonthDurationValidator",
        "timeValidator",
    ] {
        assert!(validators.contains(factory), "missing {factory}");
    }

    let form = fs::read_to_string(root.join("movement-form.component.ts")).unwrap();
    assert!(form.contains("export class MovementFormComponent"));
}

#[test]
fn test_generate_movement_table() {
    let model = load_model(&demo("movement.aspect.yaml")).unwrap();
    let mut config = load_generator_config(&demo("movement.config.json")).unwrap();
    config.name = String::new();
    let dir = tempfile::tempdir().unwrap();

    let report = generate(&model, &config, GenerationTarget::Table, dir.path(), false).unwrap();
    assert_eq!(report.root_dir, dir.path().join("movement-table"));
    let keys: Vec<String> = report.columns.iter().map(Column::key).collect();
    assert_eq!(
        keys,
        vec![
            "isMoving",
            "position.latitude",
            "position.longitude",
            "speed",
            "speedLimitWarning",
            "recordedAt",
            "driverEmail",
            "tripDuration",
            "notes",
            "waypoints"
        ]
    );

    let html =
        fs::read_to_string(report.root_dir.join("movement-table.component.html")).unwrap();
    assert!(html.contains("{{ row.recordedAt | date: 'medium' }}"));
    assert!(html.contains("{{ row.isMoving ? 'Yes' : 'No' }}"));
    assert!(html.contains("<mat-paginator"));
}

#[test]
fn test_generate_for_entity() {
    let model = load_model(&demo("movement.aspect.yaml")).unwrap();
    let mut config = load_generator_config(&demo("movement.config.json")).unwrap();
    config.name = String::new();
    config.selected_model_element = Some("SpatialPosition".to_string());
    let dir = tempfile::tempdir().unwrap();

    let report = generate(&model, &config, GenerationTarget::Card, dir.path(), false).unwrap();
    assert_eq!(report.element, "SpatialPosition");
    assert_eq!(report.root_dir, dir.path().join("spatial-position-card"));
    // root-level exclusion applies to the entity's own properties too
    assert_eq!(report.fields, 2);
}
