use super::field::FieldStrategy;
use super::kind::StrategyKind;
use crate::config::GeneratorConfig;
use crate::model::{Characteristic, Constraint, Property};
use tracing::debug;

/// Pick and bind the strategy for `child` under `parent`.
///
/// A trait is unwrapped once into its base characteristic and constraints
/// before any predicate sees it. Selection is total: unmatched
/// characteristics get [`StrategyKind::Default`].
pub fn select_strategy<'a>(
    options: &'a GeneratorConfig,
    parent: &'a Property,
    child: &'a Characteristic,
    field_name: impl Into<String>,
) -> FieldStrategy<'a> {
    let (characteristic, constraints): (&'a Characteristic, &'a [Constraint]) = match child {
        Characteristic::Trait(t) => (t.base.as_ref(), t.constraints.as_slice()),
        other => (other, Default::default()),
    };
    let kind = StrategyKind::select(characteristic);
    let field_name = field_name.into();
    debug!(
        field = %field_name,
        characteristic = %characteristic.name(),
        strategy = %kind,
        constraints = constraints.len(),
        "selected field strategy"
    );
    FieldStrategy::new(
        kind,
        options,
        parent,
        characteristic,
        field_name,
        constraints,
    )
}
