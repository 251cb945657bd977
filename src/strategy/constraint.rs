//! Constraint validator strategies
//!
//! One strategy per constraint kind. Each turns a constraint node into zero
//! or more [`ValidatorConfig`] records; vacuous constraints produce none.

use super::data_types::supported_encoding;
use super::field_config::ValidatorConfig;
use super::kind::StrategyKind;
use crate::model::{
    Constraint, EncodingConstraint, FixedPointConstraint, LengthConstraint, RangeConstraint,
    RegularExpressionConstraint,
};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub enum ConstraintValidatorStrategy<'a> {
    Range(&'a RangeConstraint),
    Length(&'a LengthConstraint),
    RegularExpression(&'a RegularExpressionConstraint),
    Encoding(&'a EncodingConstraint),
    FixedPoint(&'a FixedPointConstraint),
}

impl<'a> ConstraintValidatorStrategy<'a> {
    pub fn select(constraint: &'a Constraint) -> Self {
        match constraint {
            Constraint::Range(c) => ConstraintValidatorStrategy::Range(c),
            Constraint::Length(c) => ConstraintValidatorStrategy::Length(c),
            Constraint::RegularExpression(c) => ConstraintValidatorStrategy::RegularExpression(c),
            Constraint::Encoding(c) => ConstraintValidatorStrategy::Encoding(c),
            Constraint::FixedPoint(c) => ConstraintValidatorStrategy::FixedPoint(c),
        }
    }

    /// Validators for a field produced by the `owner` strategy.
    pub fn validators_configs(&self, owner: StrategyKind) -> Vec<ValidatorConfig> {
        match *self {
            ConstraintValidatorStrategy::Range(c) => range_validators(c, owner),
            ConstraintValidatorStrategy::Length(c) => length_validators(c),
            ConstraintValidatorStrategy::RegularExpression(c) => pattern_validators(c),
            ConstraintValidatorStrategy::Encoding(c) => encoding_validators(c),
            ConstraintValidatorStrategy::FixedPoint(c) => fixed_point_validators(c),
        }
    }
}

fn ts_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "undefined".to_string(),
        Some(v) => v.to_string(),
    }
}

fn ts_number(value: Option<u64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

fn range_validators(c: &RangeConstraint, owner: StrategyKind) -> Vec<ValidatorConfig> {
    let min = c.min_value.as_ref().filter(|v| !v.is_null());
    let max = c.max_value.as_ref().filter(|v| !v.is_null());
    if min.is_none() && max.is_none() {
        return vec![];
    }
    // a range on a collection or entity constrains every element
    let applies_to_children = matches!(owner, StrategyKind::List | StrategyKind::Complex);
    vec![ValidatorConfig {
        name: c.name.clone().unwrap_or_else(|| "range".to_string()),
        definition: format!(
            "FormValidators.rangeValidator({}, {}, '{}', '{}')",
            ts_value(min),
            ts_value(max),
            c.lower_bound_definition.descriptor(),
            c.upper_bound_definition.descriptor()
        ),
        is_direct_group_validator: !applies_to_children,
    }]
}

fn length_validators(c: &LengthConstraint) -> Vec<ValidatorConfig> {
    if c.min_value.is_none() && c.max_value.is_none() {
        return vec![];
    }
    vec![ValidatorConfig::direct(
        c.name.clone().unwrap_or_else(|| "length".to_string()),
        format!(
            "FormValidators.lengthValidator({}, {})",
            ts_number(c.min_value),
            ts_number(c.max_value)
        ),
    )]
}

fn pattern_validators(c: &RegularExpressionConstraint) -> Vec<ValidatorConfig> {
    if c.value.is_empty() {
        return vec![];
    }
    vec![ValidatorConfig::direct(
        c.name.clone().unwrap_or_else(|| "pattern".to_string()),
        format!(
            "FormValidators.patternValidator({})",
            Value::String(c.value.clone())
        ),
    )]
}

fn encoding_validators(c: &EncodingConstraint) -> Vec<ValidatorConfig> {
    let Some(encoding) = supported_encoding(&c.value) else {
        warn!(value = %c.value, "unsupported encoding constraint, no validator generated");
        return vec![];
    };
    vec![ValidatorConfig::direct(
        c.name.clone().unwrap_or_else(|| "encoding".to_string()),
        format!("FormValidators.encodingValidator('{encoding}')"),
    )]
}

fn fixed_point_validators(c: &FixedPointConstraint) -> Vec<ValidatorConfig> {
    vec![ValidatorConfig::direct(
        c.name.clone().unwrap_or_else(|| "fixedPoint".to_string()),
        format!(
            "FormValidators.fixedPointValidator({}, {})",
            c.integer, c.scale
        ),
    )]
}
