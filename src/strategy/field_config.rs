use super::kind::StrategyKind;
use serde::Serialize;
use serde_json::Value;

const REQUIRED_DEFINITION: &str = "Validators.required";

/// One validator attached to a generated control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    pub name: String,
    /// TypeScript expression producing the validator.
    pub definition: String,
    /// `false` means the validator is lifted onto each child of a list or
    /// complex field instead of the field itself.
    pub is_direct_group_validator: bool,
}

impl ValidatorConfig {
    pub fn direct(name: impl Into<String>, definition: impl Into<String>) -> Self {
        ValidatorConfig {
            name: name.into(),
            definition: definition.into(),
            is_direct_group_validator: true,
        }
    }

    pub fn required() -> Self {
        ValidatorConfig::direct("required", REQUIRED_DEFINITION)
    }

    /// Whether this is the required validator; constraint validators may
    /// carry any user-chosen name, so the definition decides.
    pub fn is_required(&self) -> bool {
        self.definition == REQUIRED_DEFINITION
    }
}

/// Template-independent description of one generated UI field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub name: String,
    pub name_dasherized: String,
    /// Strategy that produced this record; templates pick a control from it.
    pub strategy: StrategyKind,
    pub validators: Vec<ValidatorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Present exactly when the strategy has children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FieldConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deconstruction_rule: Option<String>,
}

impl FieldConfig {
    pub fn children(&self) -> &[FieldConfig] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Validators applied to the control itself.
    pub fn direct_validators(&self) -> impl Iterator<Item = &ValidatorConfig> {
        self.validators.iter().filter(|v| v.is_direct_group_validator)
    }

    /// Validators lifted onto every child or list item.
    pub fn lifted_validators(&self) -> impl Iterator<Item = &ValidatorConfig> {
        self.validators
            .iter()
            .filter(|v| !v.is_direct_group_validator)
    }
}
