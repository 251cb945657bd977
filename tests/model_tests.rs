//! Integration tests for loading model documents

use aspectgen::model::{load_model, Characteristic, ModelElement, ModelError};
use std::fs;
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_load_movement_demo() {
    let model = load_model(&demo("movement.aspect.yaml")).unwrap();
    assert_eq!(model.aspect.name, "Movement");
    assert_eq!(model.aspect.properties.len(), 9);
    assert_eq!(model.entities.len(), 1);

    let position = &model.aspect.properties[1];
    let entity = position
        .characteristic
        .data_type()
        .and_then(|d| d.entity())
        .expect("position is an entity");
    assert_eq!(entity.name, "SpatialPosition");
    assert_eq!(entity.properties.len(), 3);
    assert!(std::sync::Arc::ptr_eq(entity, &model.entities[0]));

    assert!(matches!(
        model.aspect.properties[3].characteristic,
        Characteristic::Enumeration(_)
    ));
    assert_eq!(
        model.aspect.properties[4]
            .characteristic
            .data_type()
            .map(|d| d.short_urn()),
        Some("dateTime")
    );
}

#[test]
fn test_select_entity_by_name_and_urn() {
    let model = load_model(&demo("movement.aspect.yaml")).unwrap();
    let by_name = model.select(Some("SpatialPosition")).unwrap();
    assert!(matches!(by_name, ModelElement::Entity(_)));
    let by_urn = model
        .select(Some("urn:samm:org.eclipse.examples.movement:1.0.0#SpatialPosition"))
        .unwrap();
    assert_eq!(by_urn.name(), "SpatialPosition");
    assert_eq!(model.select(None).unwrap().name(), "Movement");
}

#[test]
fn test_load_json_document() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("linter")
        .join("clean.aspect.json");
    let model = load_model(&path).unwrap();
    assert_eq!(model.aspect.name, "Thermometer");
    assert!(model.aspect.properties[1].optional);
}

#[test]
fn test_unknown_entity_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.aspect.yaml");
    fs::write(
        &path,
        r#"
aspect:
  name: Fleet
  properties:
    - name: lead
      characteristic: { kind: singleEntity, dataType: { entity: Vehicle } }
"#,
    )
    .unwrap();
    let err = load_model(&path).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ModelError>(),
        Some(&ModelError::UnknownEntity {
            name: "Vehicle".to_string(),
            referenced_from: "lead".to_string(),
        })
    );
}

#[test]
fn test_missing_file_names_the_path() {
    let err = load_model(&demo("does-not-exist.aspect.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.aspect.yaml"));
}
