//! Form target emission
//!
//! Walks the FieldConfig forest depth first. Every field becomes one
//! component under `<path>/<name-dasherized>/`; a composite field is emitted
//! after its children so it can import them. Each emission hands a
//! [`RegistryEntry`] back to its parent, and the root form component imports
//! the top-level entries in declaration order.

use super::templates::{
    FieldComponentHtml, FieldComponentTs, FormComponentHtml, FormComponentTs, FormValidatorsTs,
    GroupComponentHtml, GroupComponentTs, RegistryEntry,
};
use super::typescript::{class_name, label, object_type, selector, ts_type, up_levels};
use super::writer::ArtifactWriter;
use crate::strategy::{FieldConfig, StrategyKind, ValidatorConfig};
use askama::Template;
use heck::ToKebabCase;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Location of the shared validators module, relative to the form root.
pub const FORM_VALIDATORS_PATH: &str = "shared/form-validators";

/// Emits the component tree of one form.
pub struct FormEmitter<'w> {
    writer: &'w mut ArtifactWriter,
    /// Every emitted field component, in emission order
    registry: Vec<RegistryEntry>,
}

impl<'w> FormEmitter<'w> {
    pub fn new(writer: &'w mut ArtifactWriter) -> Self {
        FormEmitter {
            writer,
            registry: Vec::new(),
        }
    }

    /// Emit the shared validators, every field component and the root form.
    ///
    /// Returns the registry of field components in emission order.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render or a file cannot be written.
    pub fn emit(mut self, fields: &[FieldConfig], stem: &str, title: &str) -> anyhow::Result<Vec<RegistryEntry>> {
        self.writer
            .write(format!("{FORM_VALIDATORS_PATH}.ts"), &FormValidatorsTs.render()?)?;

        let mut children = Vec::with_capacity(fields.len());
        for field in fields {
            children.push(self.emit_field(field, &[])?);
        }

        let ts = FormComponentTs {
            class_name: class_name(&[stem]),
            selector: selector(&[stem]),
            file_stem: stem.to_string(),
            value_type: object_type(fields),
            children: children.clone(),
        }
        .render()?;
        let html = FormComponentHtml {
            title: title.to_string(),
            children,
        }
        .render()?;
        self.writer.write(format!("{stem}.component.ts"), &ts)?;
        self.writer.write(format!("{stem}.component.html"), &html)?;
        Ok(self.registry)
    }

    fn emit_field(&mut self, field: &FieldConfig, parents: &[&FieldConfig]) -> anyhow::Result<RegistryEntry> {
        let segments: Vec<&str> = parents
            .iter()
            .map(|p| p.name.as_str())
            .chain(std::iter::once(field.name.as_str()))
            .collect();
        let dir: PathBuf = parents
            .iter()
            .map(|p| p.name_dasherized.as_str())
            .chain(std::iter::once(field.name_dasherized.as_str()))
            .collect();
        let stem = &field.name_dasherized;
        let validators_import = format!("{}{FORM_VALIDATORS_PATH}", up_levels(segments.len()));

        let direct: Vec<&ValidatorConfig> = field.direct_validators().collect();
        let lifted: Vec<&ValidatorConfig> = field.lifted_validators().collect();
        let all = direct.iter().chain(lifted.iter());
        let uses_validators = all.clone().any(|v| v.definition.starts_with("Validators."));
        let uses_form_validators = all.clone().any(|v| v.definition.starts_with("FormValidators."));

        let entry = RegistryEntry {
            name: field.name.clone(),
            class_name: class_name(&segments),
            selector: selector(&segments),
            import_path: format!("./{stem}/{stem}.component"),
        };

        let (ts, html) = match &field.children {
            Some(children) => {
                let mut nested = parents.to_vec();
                nested.push(field);
                let mut entries = Vec::with_capacity(children.len());
                for child in children {
                    entries.push(self.emit_field(child, &nested)?);
                }
                let ts = GroupComponentTs {
                    class_name: entry.class_name.clone(),
                    selector: entry.selector.clone(),
                    file_stem: stem.clone(),
                    control_name: field.name.clone(),
                    validators: join_definitions(&direct),
                    child_validators: join_definitions(&lifted),
                    children: entries.clone(),
                    uses_validators,
                    uses_form_validators,
                    validators_import,
                }
                .render()?;
                let html = GroupComponentHtml {
                    label: label(field),
                    hint: field.hint.clone(),
                    children: entries,
                }
                .render()?;
                (ts, html)
            }
            None => {
                let is_list = field.strategy == StrategyKind::List;
                let ts = FieldComponentTs {
                    class_name: entry.class_name.clone(),
                    selector: entry.selector.clone(),
                    file_stem: stem.clone(),
                    control_name: field.name.clone(),
                    ts_type: ts_type(field),
                    validators: join_definitions(&direct),
                    item_validators: join_definitions(&lifted),
                    options: Value::Array(field.values.clone().unwrap_or_default()).to_string(),
                    is_list,
                    is_enumeration: field.strategy == StrategyKind::Enumeration,
                    uses_validators,
                    uses_form_validators,
                    validators_import,
                }
                .render()?;
                let (control, input_type) = control_for(field.strategy);
                let html = FieldComponentHtml {
                    id: segments
                        .iter()
                        .map(|s| s.to_kebab_case())
                        .collect::<Vec<_>>()
                        .join("-"),
                    label: label(field),
                    control,
                    input_type,
                    placeholder: placeholder_for(field),
                    hint: field.hint.clone(),
                    required: direct.iter().any(|v| v.is_required()),
                }
                .render()?;
                (ts, html)
            }
        };

        debug!(field = %field.name, component = %entry.class_name, "emitting form component");
        self.writer.write(dir.join(format!("{stem}.component.ts")), &ts)?;
        self.writer.write(dir.join(format!("{stem}.component.html")), &html)?;
        self.registry.push(entry.clone());
        Ok(entry)
    }
}

fn join_definitions(validators: &[&ValidatorConfig]) -> String {
    validators
        .iter()
        .map(|v| v.definition.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Control kind and HTML input type for a leaf strategy.
fn control_for(strategy: StrategyKind) -> (&'static str, &'static str) {
    match strategy {
        StrategyKind::Boolean => ("checkbox", "checkbox"),
        StrategyKind::TextArea => ("textarea", "text"),
        StrategyKind::Enumeration => ("select", "text"),
        StrategyKind::List => ("list", "text"),
        StrategyKind::Number => ("input", "number"),
        StrategyKind::Date => ("input", "date"),
        StrategyKind::DateTime => ("input", "datetime-local"),
        StrategyKind::Text
        | StrategyKind::Duration
        | StrategyKind::Time
        | StrategyKind::DatePartial
        | StrategyKind::Default
        | StrategyKind::Complex
        | StrategyKind::Either
        | StrategyKind::StructuredValue => ("input", "text"),
    }
}

fn placeholder_for(field: &FieldConfig) -> Option<String> {
    field
        .placeholder
        .clone()
        .or_else(|| match field.strategy {
            // native date inputs render their own format
            StrategyKind::Date | StrategyKind::DateTime => None,
            _ => field.data_format.clone(),
        })
        .or_else(|| field.example_value.as_ref().map(|v| format!("e.g. {v}")))
}
