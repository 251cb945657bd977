#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the model linter

use crate::linter::{has_errors, lint_model, lint_model_file, LintIssue, LintSeverity};
use crate::model::{parse_model, ModelFormat};
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to parse a YAML model and lint it
fn lint_yaml(content: &str) -> Vec<LintIssue> {
    let model = parse_model(content, ModelFormat::Yaml).expect("parse model");
    lint_model(&model)
}

fn of_kind<'a>(issues: &'a [LintIssue], kind: &str) -> Vec<&'a LintIssue> {
    issues.iter().filter(|i| i.kind == kind).collect()
}

#[test]
fn test_clean_model_has_no_issues() {
    let model = r#"
aspect:
  name: Movement
  properties:
    - name: isMoving
      characteristic: { kind: boolean, dataType: "xsd:boolean" }
    - name: speed
      characteristic:
        kind: trait
        base: { kind: measurement, dataType: "xsd:float" }
        constraints:
          - { kind: range, minValue: 0, maxValue: 300 }
"#;
    let issues = lint_yaml(model);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    assert!(!has_errors(&issues));
}

#[test]
fn test_lint_structured_value_mismatch() {
    let model = r#"
aspect:
  name: Contact
  properties:
    - name: email
      characteristic:
        kind: structuredValue
        name: EmailAddress
        dataType: "xsd:string"
        deconstructionRule: "([\\w.]+)@([\\w.]+)@(x)"
        elements:
          - name: local
            characteristic: { kind: text, dataType: "xsd:string" }
          - "@"
          - name: domain
            characteristic: { kind: text, dataType: "xsd:string" }
"#;
    let issues = lint_yaml(model);
    let mismatches = of_kind(&issues, "structured_value_mismatch");
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].severity, LintSeverity::Error);
    assert_eq!(mismatches[0].location, "Contact.email");
    assert!(mismatches[0].message.contains("3 part(s)"));
    assert!(mismatches[0].suggestion.is_some());
    assert!(has_errors(&issues));
}

#[test]
fn test_lint_aligned_structured_value_is_clean() {
    let model = r#"
aspect:
  name: Contact
  properties:
    - name: email
      characteristic:
        kind: structuredValue
        dataType: "xsd:string"
        deconstructionRule: "([\\w.]+)@([\\w.]+)"
        elements:
          - name: local
            characteristic: { kind: text, dataType: "xsd:string" }
          - "@"
          - name: domain
            characteristic: { kind: text, dataType: "xsd:string" }
"#;
    assert!(lint_yaml(model).is_empty());
}

#[test]
fn test_lint_invalid_patterns() {
    let model = r#"
aspect:
  name: Part
  properties:
    - name: code
      characteristic:
        kind: trait
        base: { kind: code, dataType: "xsd:string" }
        constraints:
          - { kind: regularExpression, value: "[A-Z" }
    - name: serial
      characteristic:
        kind: structuredValue
        dataType: "xsd:string"
        deconstructionRule: "(\\d+"
        elements:
          - name: number
            characteristic: { kind: text, dataType: "xsd:string" }
"#;
    let issues = lint_yaml(model);
    let pattern = of_kind(&issues, "invalid_regular_expression");
    assert_eq!(pattern.len(), 1);
    assert_eq!(pattern[0].location, "Part.code");
    let rule = of_kind(&issues, "invalid_deconstruction_rule");
    assert_eq!(rule.len(), 1);
    assert_eq!(rule[0].location, "Part.serial");
    assert_eq!(rule[0].severity, LintSeverity::Error);
}

#[test]
fn test_lint_lookaround_and_backreference_are_warnings() {
    let model = r#"
aspect:
  name: Account
  properties:
    - name: password
      characteristic:
        kind: trait
        base: { kind: text, dataType: "xsd:string" }
        constraints:
          - { kind: regularExpression, value: "^(?=.*\\d).{8,}$" }
    - name: initials
      characteristic:
        kind: structuredValue
        dataType: "xsd:string"
        deconstructionRule: "(\\w)\\1"
        elements:
          - name: letter
            characteristic: { kind: text, dataType: "xsd:string" }
"#;
    let issues = lint_yaml(model);
    let unchecked = of_kind(&issues, "unchecked_regular_expression");
    assert_eq!(unchecked.len(), 2, "unexpected issues: {issues:?}");
    assert!(unchecked.iter().all(|i| i.severity == LintSeverity::Warning));
    assert_eq!(unchecked[0].location, "Account.password");
    assert_eq!(unchecked[1].location, "Account.initials");
    assert!(of_kind(&issues, "invalid_regular_expression").is_empty());
    assert!(!has_errors(&issues));
}

#[test]
fn test_lint_unsupported_encoding() {
    let model = r#"
aspect:
  name: Label
  properties:
    - name: caption
      characteristic:
        kind: trait
        base: { kind: text, dataType: "xsd:string" }
        constraints:
          - { kind: encoding, value: "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#Shift_JIS" }
    - name: note
      characteristic:
        kind: trait
        base: { kind: text, dataType: "xsd:string" }
        constraints:
          - { kind: encoding, value: "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#UTF-8" }
"#;
    let issues = lint_yaml(model);
    let encodings = of_kind(&issues, "unsupported_encoding");
    assert_eq!(encodings.len(), 1);
    assert_eq!(encodings[0].severity, LintSeverity::Warning);
    assert_eq!(encodings[0].location, "Label.caption");
    assert!(!has_errors(&issues));
}

#[test]
fn test_lint_nested_trait() {
    let model = r#"
aspect:
  name: Sensor
  properties:
    - name: reading
      characteristic:
        kind: trait
        name: Outer
        base:
          kind: trait
          name: Inner
          base: { kind: measurement, dataType: "xsd:double" }
          constraints:
            - { kind: range, minValue: 0 }
        constraints:
          - { kind: range, maxValue: 10 }
"#;
    let issues = lint_yaml(model);
    let nested = of_kind(&issues, "nested_trait");
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].severity, LintSeverity::Warning);
    assert!(nested[0].message.contains("'Outer'"));
    assert!(nested[0].message.contains("'Inner'"));
    assert!(of_kind(&issues, "vacuous_constraint").is_empty());
}

#[test]
fn test_lint_default_strategy_fallback() {
    let model = r#"
aspect:
  name: Document
  properties:
    - name: qualifiedName
      characteristic: { kind: characteristic, name: QName, dataType: "xsd:QName" }
    - name: title
      characteristic: { kind: text, dataType: "xsd:string" }
"#;
    let issues = lint_yaml(model);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "default_strategy");
    assert_eq!(issues[0].severity, LintSeverity::Info);
    assert_eq!(issues[0].location, "Document.qualifiedName");
    assert!(issues[0].message.contains("QName"));
}

#[test]
fn test_lint_vacuous_constraints() {
    let model = r#"
aspect:
  name: Note
  properties:
    - name: body
      characteristic:
        kind: trait
        base: { kind: text, dataType: "xsd:string" }
        constraints:
          - { kind: length }
          - { kind: regularExpression, value: "" }
    - name: score
      characteristic:
        kind: trait
        base: { kind: measurement, dataType: "xsd:int" }
        constraints:
          - { kind: range }
"#;
    let issues = lint_yaml(model);
    let vacuous = of_kind(&issues, "vacuous_constraint");
    assert_eq!(vacuous.len(), 3);
    assert!(vacuous.iter().all(|i| i.severity == LintSeverity::Info));
    let locations: Vec<&str> = vacuous.iter().map(|i| i.location.as_str()).collect();
    assert_eq!(locations, vec!["Note.body", "Note.body", "Note.score"]);
}

#[test]
fn test_lint_either_branches() {
    let model = r#"
aspect:
  name: Result
  properties:
    - name: outcome
      characteristic:
        kind: either
        name: Outcome
        left:
          name: value
          characteristic: { kind: text, dataType: "xsd:string" }
        right:
          name: value
          characteristic: { kind: measurement, dataType: "xsd:int" }
"#;
    let issues = lint_yaml(model);
    let duplicates = of_kind(&issues, "duplicate_either_branch");
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].severity, LintSeverity::Error);
    assert_eq!(duplicates[0].location, "Result.outcome");
}

#[test]
fn test_lint_recurses_into_either_branches() {
    let model = r#"
aspect:
  name: Result
  properties:
    - name: outcome
      characteristic:
        kind: either
        left:
          name: error
          characteristic:
            kind: trait
            base: { kind: text, dataType: "xsd:string" }
            constraints:
              - { kind: encoding, value: "EBCDIC" }
        right:
          name: success
          characteristic: { kind: boolean, dataType: "xsd:boolean" }
"#;
    let issues = lint_yaml(model);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "unsupported_encoding");
    assert_eq!(issues[0].location, "Result.outcome.error");
}

#[test]
fn test_lint_property_names() {
    let model = r#"
aspect:
  name: Inventory
  properties:
    - name: 2ndShelf
      characteristic: { kind: text, dataType: "xsd:string" }
    - name: item-count
      characteristic: { kind: measurement, dataType: "xsd:int" }
    - name: item-count
      characteristic: { kind: measurement, dataType: "xsd:int" }
"#;
    let issues = lint_yaml(model);
    let names = of_kind(&issues, "invalid_property_name");
    assert_eq!(names.len(), 3);
    assert!(names.iter().all(|i| i.severity == LintSeverity::Warning));
    let duplicates = of_kind(&issues, "duplicate_property");
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].location, "Inventory.item-count");
    assert_eq!(duplicates[0].severity, LintSeverity::Error);
}

#[test]
fn test_lint_reports_entity_properties_under_entity_name() {
    let model = r#"
aspect:
  name: Fleet
  properties:
    - name: primary
      characteristic: { kind: singleEntity, dataType: { entity: Vehicle } }
    - name: backup
      characteristic: { kind: singleEntity, dataType: { entity: Vehicle } }
entities:
  Vehicle:
    properties:
      - name: plate
        characteristic:
          kind: trait
          base: { kind: text, dataType: "xsd:string" }
          constraints:
            - { kind: length }
"#;
    let issues = lint_yaml(model);
    assert_eq!(issues.len(), 1, "shared entity reported once: {issues:?}");
    assert_eq!(issues[0].location, "Vehicle.plate");
}

#[test]
fn test_lint_model_file() {
    let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
    temp.write_all(
        br#"
aspect:
  name: Tag
  properties:
    - name: label
      characteristic: { kind: characteristic, dataType: "urn:example#Custom" }
"#,
    )
    .expect("write model");
    temp.flush().expect("flush");

    let issues = lint_model_file(temp.path()).expect("lint model");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "default_strategy");
}

#[test]
fn test_lint_model_file_rejects_unknown_extension() {
    let temp = NamedTempFile::with_suffix(".ttl").expect("create temp file");
    assert!(lint_model_file(temp.path()).is_err());
}

#[test]
fn test_severity_display() {
    assert_eq!(LintSeverity::Error.to_string(), "error");
    assert_eq!(LintSeverity::Warning.to_string(), "warning");
    assert_eq!(LintSeverity::Info.to_string(), "info");
}
