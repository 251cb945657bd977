use crate::config::GeneratorConfig;
use crate::model::ModelElement;
use crate::strategy::{select_strategy, FieldConfig, FieldStrategy};
use tracing::debug;

/// One strategy per top-level property of `element`, in declaration order.
///
/// Properties the user excluded are dropped before selection.
pub fn root_strategies<'a>(
    element: &'a ModelElement,
    options: &'a GeneratorConfig,
) -> Vec<FieldStrategy<'a>> {
    element
        .properties()
        .iter()
        .filter(|p| {
            let excluded = options.is_excluded(p);
            if excluded {
                debug!(property = %p.name, "excluded by configuration");
            }
            !excluded
        })
        .map(|p| select_strategy(options, p, &p.characteristic, &p.name))
        .collect()
}

/// Build the FieldConfig forest for `element`.
///
/// Pure and deterministic: the same element and options always give the same
/// forest, in property declaration order.
pub fn compose_fields(element: &ModelElement, options: &GeneratorConfig) -> Vec<FieldConfig> {
    root_strategies(element, options)
        .iter()
        .map(FieldStrategy::build_config)
        .collect()
}
