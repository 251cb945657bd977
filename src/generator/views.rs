//! Table and card target emission

use super::columns::{resolve_columns, Column};
use super::templates::{CardComponentHtml, CardComponentTs, TableComponentHtml, TableComponentTs};
use super::typescript::{class_name, object_type, selector};
use super::writer::ArtifactWriter;
use crate::config::GeneratorConfig;
use crate::strategy::FieldConfig;
use askama::Template;
use heck::ToUpperCamelCase;
use serde_json::json;

/// Names shared by the table and card components of one run.
#[derive(Debug, Clone)]
pub struct ViewNames<'a> {
    pub stem: &'a str,
    pub title: &'a str,
}

impl ViewNames<'_> {
    fn row_type_name(&self) -> String {
        format!("{}Row", self.stem.to_upper_camel_case())
    }
}

/// Write the table component. Returns the resolved columns.
///
/// # Errors
///
/// Returns an error if a template fails to render or a file cannot be written.
pub fn emit_table(
    fields: &[FieldConfig],
    options: &GeneratorConfig,
    names: &ViewNames<'_>,
    writer: &mut ArtifactWriter,
) -> anyhow::Result<Vec<Column>> {
    let columns = resolve_columns(fields, options);
    let keys: Vec<String> = columns.iter().map(Column::key).collect();
    let ts = TableComponentTs {
        class_name: class_name(&[names.stem]),
        selector: selector(&[names.stem]),
        file_stem: names.stem.to_string(),
        row_type_name: names.row_type_name(),
        row_type: object_type(fields),
        column_keys: json!(keys).to_string(),
        enable_pagination: options.enable_pagination,
        enable_command_bar: options.enable_command_bar,
    }
    .render()?;
    let html = TableComponentHtml {
        title: names.title.to_string(),
        columns: columns.iter().map(Column::view).collect(),
        enable_pagination: options.enable_pagination,
        enable_command_bar: options.enable_command_bar,
    }
    .render()?;
    writer.write(format!("{}.component.ts", names.stem), &ts)?;
    writer.write(format!("{}.component.html", names.stem), &html)?;
    Ok(columns)
}

/// Write the card component. Returns the resolved columns.
///
/// # Errors
///
/// Returns an error if a template fails to render or a file cannot be written.
pub fn emit_card(
    fields: &[FieldConfig],
    options: &GeneratorConfig,
    names: &ViewNames<'_>,
    writer: &mut ArtifactWriter,
) -> anyhow::Result<Vec<Column>> {
    let columns = resolve_columns(fields, options);
    let ts = CardComponentTs {
        class_name: class_name(&[names.stem]),
        selector: selector(&[names.stem]),
        file_stem: names.stem.to_string(),
        row_type_name: names.row_type_name(),
        row_type: object_type(fields),
        enable_pagination: options.enable_pagination,
        enable_command_bar: options.enable_command_bar,
    }
    .render()?;
    let html = CardComponentHtml {
        title: names.title.to_string(),
        columns: columns.iter().map(Column::view).collect(),
        enable_pagination: options.enable_pagination,
        enable_command_bar: options.enable_command_bar,
    }
    .render()?;
    writer.write(format!("{}.component.ts", names.stem), &ts)?;
    writer.write(format!("{}.component.html", names.stem), &html)?;
    Ok(columns)
}
