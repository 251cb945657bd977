use crate::strategy::{FieldConfig, StrategyKind, ValidatorConfig};
use heck::{ToKebabCase, ToTitleCase, ToUpperCamelCase};
use serde_json::Value;

/// Angular component class name for a path of field names
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(class_name(&["position", "latitude"]), "PositionLatitudeComponent");
/// ```
pub fn class_name(segments: &[&str]) -> String {
    let stem: String = segments.iter().map(|s| s.to_upper_camel_case()).collect();
    format!("{stem}Component")
}

/// Element selector for a path of field names (`app-position-latitude`).
pub fn selector(segments: &[&str]) -> String {
    let parts: Vec<String> = segments.iter().map(|s| s.to_kebab_case()).collect();
    format!("app-{}", parts.join("-"))
}

/// Human-readable label, with the unit appended when there is one.
pub fn label(field: &FieldConfig) -> String {
    let title = field.name.to_title_case();
    match &field.unit_name {
        Some(unit) => format!("{title} ({unit})"),
        None => title,
    }
}

/// Whether the field carries the required validator.
pub fn is_required(field: &FieldConfig) -> bool {
    field.validators.iter().any(ValidatorConfig::is_required)
}

/// TypeScript type of the value a field holds.
pub fn ts_type(field: &FieldConfig) -> String {
    match field.strategy {
        StrategyKind::Boolean => "boolean".to_string(),
        StrategyKind::Number => "number".to_string(),
        StrategyKind::List => "unknown[]".to_string(),
        StrategyKind::Enumeration => enumeration_type(field.values.as_deref().unwrap_or_default()),
        StrategyKind::Complex | StrategyKind::Either => object_type(field.children()),
        StrategyKind::StructuredValue
        | StrategyKind::Text
        | StrategyKind::TextArea
        | StrategyKind::Date
        | StrategyKind::DateTime
        | StrategyKind::Duration
        | StrategyKind::Time
        | StrategyKind::DatePartial
        | StrategyKind::Default => "string".to_string(),
    }
}

fn enumeration_type(values: &[Value]) -> String {
    if values.is_empty() || !values.iter().all(|v| v.is_string() || v.is_number()) {
        return "unknown".to_string();
    }
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Inline object type for a set of fields (`{ a: string; b?: number }`).
pub fn object_type(children: &[FieldConfig]) -> String {
    if children.is_empty() {
        return "Record<string, unknown>".to_string();
    }
    let members: Vec<String> = children
        .iter()
        .map(|c| {
            let optional = if is_required(c) { "" } else { "?" };
            format!("{}{optional}: {}", c.name, ts_type(c))
        })
        .collect();
    format!("{{ {} }}", members.join("; "))
}

/// Optional-chained accessor for a dotted path (`row.position?.latitude`).
pub fn accessor(root: &str, path: &[String]) -> String {
    let mut out = root.to_string();
    for (i, segment) in path.iter().enumerate() {
        out.push_str(if i == 0 { "." } else { "?." });
        out.push_str(segment);
    }
    out
}

/// Relative prefix from a directory `depth` levels below the form root back to it.
pub fn up_levels(depth: usize) -> String {
    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    fn field(name: &str, strategy: StrategyKind) -> FieldConfig {
        FieldConfig {
            name: name.to_string(),
            name_dasherized: name.to_kebab_case(),
            strategy,
            validators: vec![],
            example_value: None,
            values: None,
            unit_name: None,
            children: None,
            data_format: None,
            placeholder: None,
            hint: None,
            deconstruction_rule: None,
        }
    }

    #[test]
    fn test_component_names() {
        assert_eq!(class_name(&["position", "latitude"]), "PositionLatitudeComponent");
        assert_eq!(class_name(&["movement-form"]), "MovementFormComponent");
        assert_eq!(selector(&["isMoving"]), "app-is-moving");
        assert_eq!(selector(&["position", "altitudeMsl"]), "app-position-altitude-msl");
    }

    #[test]
    fn test_label_includes_unit() {
        let mut speed = field("speedLimit", StrategyKind::Number);
        assert_eq!(label(&speed), "Speed Limit");
        speed.unit_name = Some("kilometrePerHour".to_string());
        assert_eq!(label(&speed), "Speed Limit (kilometrePerHour)");
    }

    #[test]
    fn test_ts_types() {
        let mut status = field("status", StrategyKind::Enumeration);
        status.values = Some(vec![json!("Open"), json!("Closed")]);
        assert_eq!(ts_type(&status), r#""Open" | "Closed""#);

        let mut street = field("street", StrategyKind::Text);
        street.validators.push(ValidatorConfig::required());
        let mut address = field("address", StrategyKind::Complex);
        address.children = Some(vec![street, field("zip", StrategyKind::Number)]);
        assert_eq!(ts_type(&address), "{ street: string; zip?: number }");
    }

    #[test]
    fn test_required_is_detected_by_definition() {
        let mut code = field("code", StrategyKind::Text);
        code.validators.push(ValidatorConfig::direct(
            "required",
            r#"FormValidators.patternValidator("^[A-Z]+$")"#,
        ));
        assert!(!is_required(&code));
        code.validators.push(ValidatorConfig::required());
        assert!(is_required(&code));
    }

    #[test]
    fn test_accessor_and_levels() {
        let path = vec!["position".to_string(), "latitude".to_string()];
        assert_eq!(accessor("row", &path), "row.position?.latitude");
        assert_eq!(up_levels(0), "./");
        assert_eq!(up_levels(2), "../../");
    }
}
