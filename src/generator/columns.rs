//! Column resolution for the table and card targets
//!
//! Complex properties are flattened into one column per shown nested
//! property (recursively, with dotted keys). Everything else, including
//! lists and enumerations, is a single column.

use super::templates::ColumnView;
use super::typescript::{accessor, label};
use crate::config::GeneratorConfig;
use crate::strategy::{FieldConfig, StrategyKind};
use heck::ToTitleCase;
use serde::Serialize;

/// One table column or card line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Property names from the root down to the shown property
    pub path: Vec<String>,
    pub strategy: StrategyKind,
    pub header: String,
}

impl Column {
    /// Dotted column id (`position.latitude`).
    pub fn key(&self) -> String {
        self.path.join(".")
    }

    /// Angular interpolation that renders this column for `row`.
    pub fn cell(&self) -> String {
        let value = accessor("row", &self.path);
        let expression = match self.strategy {
            StrategyKind::Date => format!("{value} | date"),
            StrategyKind::DateTime => format!("{value} | date: 'medium'"),
            StrategyKind::Boolean => format!("{value} ? 'Yes' : 'No'"),
            StrategyKind::List => format!("{value}?.join(', ')"),
            StrategyKind::Complex | StrategyKind::Either => format!("{value} | json"),
            _ => value,
        };
        format!("{{{{ {expression} }}}}")
    }

    pub fn view(&self) -> ColumnView {
        ColumnView {
            key: self.key(),
            header: self.header.clone(),
            cell: self.cell(),
        }
    }
}

/// Flatten the root fields into columns, in declaration order.
pub fn resolve_columns(fields: &[FieldConfig], options: &GeneratorConfig) -> Vec<Column> {
    let mut columns = Vec::new();
    for field in fields {
        collect(field, &[], options, &mut columns);
    }
    columns
}

fn collect(field: &FieldConfig, prefix: &[&FieldConfig], options: &GeneratorConfig, out: &mut Vec<Column>) {
    if field.strategy == StrategyKind::Complex {
        let shown: Vec<&FieldConfig> = match options.props_to_show(&field.name) {
            Some(names) => field
                .children()
                .iter()
                .filter(|c| names.contains(&c.name))
                .collect(),
            None => field.children().iter().collect(),
        };
        if !shown.is_empty() {
            let mut nested = prefix.to_vec();
            nested.push(field);
            for child in shown {
                collect(child, &nested, options, out);
            }
            return;
        }
    }

    let mut header: Vec<String> = prefix.iter().map(|p| p.name.to_title_case()).collect();
    header.push(label(field));
    out.push(Column {
        path: prefix
            .iter()
            .map(|p| p.name.clone())
            .chain(std::iter::once(field.name.clone()))
            .collect(),
        strategy: field.strategy,
        header: header.join(" "),
    });
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::config::ComplexProp;
    use heck::ToKebabCase;

    fn field(name: &str, strategy: StrategyKind, children: Option<Vec<FieldConfig>>) -> FieldConfig {
        FieldConfig {
            name: name.to_string(),
            name_dasherized: name.to_kebab_case(),
            strategy,
            validators: vec![],
            example_value: None,
            values: None,
            unit_name: None,
            children,
            data_format: None,
            placeholder: None,
            hint: None,
            deconstruction_rule: None,
        }
    }

    fn forest() -> Vec<FieldConfig> {
        let position = field(
            "position",
            StrategyKind::Complex,
            Some(vec![
                field("latitude", StrategyKind::Number, None),
                field("longitude", StrategyKind::Number, None),
                field("altitude", StrategyKind::Number, None),
            ]),
        );
        vec![
            field("isMoving", StrategyKind::Boolean, None),
            position,
            field("tags", StrategyKind::List, None),
        ]
    }

    #[test]
    fn test_complex_properties_expand_into_columns() {
        let columns = resolve_columns(&forest(), &GeneratorConfig::default());
        let keys: Vec<String> = columns.iter().map(Column::key).collect();
        assert_eq!(
            keys,
            vec![
                "isMoving",
                "position.latitude",
                "position.longitude",
                "position.altitude",
                "tags"
            ]
        );
        assert_eq!(columns[1].header, "Position Latitude");
        assert_eq!(columns[1].cell(), "{{ row.position?.latitude }}");
        assert_eq!(columns[0].cell(), "{{ row.isMoving ? 'Yes' : 'No' }}");
        assert_eq!(columns[4].cell(), "{{ row.tags?.join(', ') }}");
    }

    #[test]
    fn test_props_to_show_restricts_nested_columns() {
        let options = GeneratorConfig {
            complex_props: vec![ComplexProp {
                prop: "position".to_string(),
                props_to_show: vec!["altitude".to_string(), "latitude".to_string()],
            }],
            ..Default::default()
        };
        let keys: Vec<String> = resolve_columns(&forest(), &options)
            .iter()
            .map(Column::key)
            .collect();
        // declaration order wins over the order of propsToShow
        assert_eq!(
            keys,
            vec!["isMoving", "position.latitude", "position.altitude", "tags"]
        );
    }

    #[test]
    fn test_complex_without_shown_children_is_one_column() {
        let options = GeneratorConfig {
            complex_props: vec![ComplexProp {
                prop: "position".to_string(),
                props_to_show: vec!["heading".to_string()],
            }],
            ..Default::default()
        };
        let columns = resolve_columns(&forest(), &options);
        assert_eq!(columns[1].key(), "position");
        assert_eq!(columns[1].cell(), "{{ row.position | json }}");
    }
}
