//! # Strategy Module
//!
//! Turns model-tree nodes into [`FieldConfig`] records by dispatching each
//! `(property, characteristic)` pair to one field strategy.
//!
//! ## Selection
//!
//! [`select_strategy`] unwraps a trait once into `(characteristic,
//! constraints)` and walks [`StrategyKind::CANDIDATES`] in order, taking the
//! first kind whose predicate accepts the characteristic:
//!
//! ```text
//! Either → List → StructuredValue → Complex → Enumeration → Boolean → Text
//!   → TextArea → Number → Date → DateTime → Duration → Time → DatePartial
//!   → Default (always matches)
//! ```
//!
//! Structural checks come first because the short-urn checks overlap with
//! them (a list of decimals also carries a decimal data type).
//!
//! ## Building
//!
//! [`FieldStrategy::build_config`] assembles the base record (name, dasherized
//! name, validators), adds the strategy's own extras, and for `Complex`,
//! `Either` and `StructuredValue` recurses into child strategies in
//! declaration order.
//!
//! Constraint validators come from [`ConstraintValidatorStrategy`], one per
//! constraint in the order the trait lists them.

mod constraint;
mod data_types;
mod field;
mod field_config;
mod kind;
mod select;

pub use constraint::ConstraintValidatorStrategy;
pub use data_types::*;
pub use field::FieldStrategy;
pub use field_config::{FieldConfig, ValidatorConfig};
pub use kind::StrategyKind;
pub use select::select_strategy;
