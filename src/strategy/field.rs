use super::constraint::ConstraintValidatorStrategy;
use super::data_types::{
    date_format, duration_placeholder, partial_date_hint, temporal_validator, TIME_PLACEHOLDER,
};
use super::field_config::{FieldConfig, ValidatorConfig};
use super::kind::StrategyKind;
use super::select::select_strategy;
use crate::config::GeneratorConfig;
use crate::model::{Characteristic, Constraint, Property};
use heck::ToKebabCase;
use serde_json::{json, Value};
use tracing::warn;

/// A selected strategy bound to one node of the model tree.
///
/// Built by [`select_strategy`]; the characteristic is already unwrapped from
/// its trait and `constraints` holds the trait's constraints (or nothing).
#[derive(Debug, Clone)]
pub struct FieldStrategy<'a> {
    kind: StrategyKind,
    options: &'a GeneratorConfig,
    parent: &'a Property,
    characteristic: &'a Characteristic,
    field_name: String,
    constraints: &'a [Constraint],
}

impl<'a> FieldStrategy<'a> {
    pub(super) fn new(
        kind: StrategyKind,
        options: &'a GeneratorConfig,
        parent: &'a Property,
        characteristic: &'a Characteristic,
        field_name: String,
        constraints: &'a [Constraint],
    ) -> Self {
        FieldStrategy {
            kind,
            options,
            parent,
            characteristic,
            field_name,
            constraints,
        }
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn has_children(&self) -> bool {
        self.kind.has_children()
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn parent(&self) -> &'a Property {
        self.parent
    }

    pub fn characteristic(&self) -> &'a Characteristic {
        self.characteristic
    }

    pub fn constraints(&self) -> &'a [Constraint] {
        self.constraints
    }

    fn short_urn(&self) -> Option<&'a str> {
        self.characteristic.data_type().map(|d| d.short_urn())
    }

    fn base_config(&self) -> FieldConfig {
        FieldConfig {
            name: self.field_name.clone(),
            name_dasherized: self.field_name.to_kebab_case(),
            strategy: self.kind,
            validators: self.validators_configs(),
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

    /// Build the configuration for this field and, recursively, its children.
    pub fn build_config(&self) -> FieldConfig {
        let mut config = self.base_config();
        let short = self.short_urn().unwrap_or_default();
        match self.kind {
            StrategyKind::Text
            | StrategyKind::TextArea
            | StrategyKind::Number
            | StrategyKind::Default => {
                config.example_value = self.example_value();
                config.unit_name = self.unit_name();
            }
            StrategyKind::Date | StrategyKind::DateTime => {
                config.data_format = date_format(short).map(String::from);
            }
            StrategyKind::Duration => {
                config.placeholder = duration_placeholder(short).map(String::from);
                config.hint = config
                    .placeholder
                    .as_ref()
                    .map(|p| format!("ISO 8601 duration, e.g. {p}"));
            }
            StrategyKind::Time => {
                config.unit_name = self.unit_name();
                config.placeholder = Some(TIME_PLACEHOLDER.to_string());
            }
            StrategyKind::DatePartial => {
                config.data_format = date_format(short).map(String::from);
                config.hint = partial_date_hint(short).map(String::from);
            }
            StrategyKind::Enumeration => {
                if let Characteristic::Enumeration(e) = self.characteristic {
                    config.values = Some(e.values.clone());
                }
            }
            StrategyKind::StructuredValue => {
                if let Characteristic::StructuredValue(s) = self.characteristic {
                    config.deconstruction_rule = Some(s.deconstruction_rule.clone());
                }
            }
            StrategyKind::Boolean
            | StrategyKind::List
            | StrategyKind::Complex
            | StrategyKind::Either => {}
        }
        if self.has_children() {
            config.children = Some(self.child_configs());
        }
        config
    }

    /// Required, data-type and constraint validators, in that order.
    pub fn validators_configs(&self) -> Vec<ValidatorConfig> {
        let mut validators = self.base_validators_configs();
        validators.extend(self.data_type_validators_configs());
        validators.extend(self.constraint_validators_configs());
        validators
    }

    pub fn base_validators_configs(&self) -> Vec<ValidatorConfig> {
        if self.parent.optional {
            vec![]
        } else {
            vec![ValidatorConfig::required()]
        }
    }

    /// Validators implied by the characteristic itself rather than a constraint node.
    pub fn data_type_validators_configs(&self) -> Vec<ValidatorConfig> {
        match self.kind {
            StrategyKind::Duration | StrategyKind::Time => self
                .short_urn()
                .and_then(temporal_validator)
                .into_iter()
                .collect(),
            StrategyKind::Either => {
                let names: Vec<&str> = self
                    .child_strategies()
                    .iter()
                    .map(|c| c.parent.name.as_str())
                    .collect();
                vec![ValidatorConfig::direct(
                    "uniqueValues",
                    format!("FormValidators.uniqueValuesValidator({})", json!(names)),
                )]
            }
            StrategyKind::StructuredValue => self.deconstruction_validators(),
            _ => vec![],
        }
    }

    pub fn constraint_validators_configs(&self) -> Vec<ValidatorConfig> {
        self.constraints
            .iter()
            .flat_map(|c| ConstraintValidatorStrategy::select(c).validators_configs(self.kind))
            .collect()
    }

    fn deconstruction_validators(&self) -> Vec<ValidatorConfig> {
        let Characteristic::StructuredValue(s) = self.characteristic else {
            return vec![];
        };
        let elements: Vec<&Property> = s.instantiated_elements().collect();
        let rules: Vec<&str> = s.deconstruction_rule.split('@').collect();
        if rules.len() != elements.len() {
            warn!(
                field = %self.field_name,
                rules = rules.len(),
                elements = elements.len(),
                "deconstruction rule parts do not line up with structured value elements"
            );
        }
        let pairs: Vec<Value> = elements
            .iter()
            .zip(rules.iter())
            .map(|(element, rule)| json!({ "name": element.name, "rule": rule }))
            .collect();
        vec![ValidatorConfig::direct(
            "deconstructionRule",
            format!(
                "FormValidators.deconstructionRuleValidator({})",
                Value::Array(pairs)
            ),
        )]
    }

    /// Child strategies in declaration order; empty for leaf strategies.
    pub fn child_strategies(&self) -> Vec<FieldStrategy<'a>> {
        let options = self.options;
        match (self.kind, self.characteristic) {
            (StrategyKind::Either, Characteristic::Either(e)) => [&*e.left, &*e.right]
                .into_iter()
                .map(|branch| select_strategy(options, branch, &branch.characteristic, &branch.name))
                .collect(),
            (StrategyKind::StructuredValue, Characteristic::StructuredValue(s)) => s
                .instantiated_elements()
                .map(|p| select_strategy(options, p, &p.characteristic, &p.name))
                .collect(),
            (StrategyKind::Complex, c) => match c.data_type().and_then(|d| d.entity()) {
                Some(entity) => entity
                    .properties
                    .iter()
                    .filter(|p| !options.is_excluded(p))
                    .map(|p| select_strategy(options, p, &p.characteristic, &p.name))
                    .collect(),
                None => vec![],
            },
            _ => vec![],
        }
    }

    pub fn child_configs(&self) -> Vec<FieldConfig> {
        self.child_strategies()
            .iter()
            .map(FieldStrategy::build_config)
            .collect()
    }

    fn example_value(&self) -> Option<String> {
        self.parent.example_value.as_ref().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    fn unit_name(&self) -> Option<String> {
        self.characteristic.unit().map(|u| u.name.clone())
    }
}
