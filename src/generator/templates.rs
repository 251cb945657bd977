use askama::Template;
use serde::Serialize;

/// A generated component as seen by its parent
///
/// Returned by every emission step so the parent can import, declare and
/// place the child in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Form control name the component registers under
    pub name: String,
    /// Component class name
    pub class_name: String,
    /// Element selector
    pub selector: String,
    /// Import path relative to the parent component's directory
    pub import_path: String,
}

/// Template data for a leaf form control (scalars, enumerations, lists)
#[derive(Template)]
#[template(path = "form-field.component.ts.txt", escape = "none")]
pub struct FieldComponentTs {
    pub class_name: String,
    pub selector: String,
    pub file_stem: String,
    pub control_name: String,
    pub ts_type: String,
    /// Comma-separated validator expressions for the control itself
    pub validators: String,
    /// Comma-separated validator expressions for every list item
    pub item_validators: String,
    /// JSON array of enumeration values
    pub options: String,
    pub is_list: bool,
    pub is_enumeration: bool,
    pub uses_validators: bool,
    pub uses_form_validators: bool,
    /// Import path of the shared validators module
    pub validators_import: String,
}

/// Markup for a leaf form control
#[derive(Template)]
#[template(path = "form-field.component.html.txt", escape = "none")]
pub struct FieldComponentHtml {
    pub id: String,
    pub label: String,
    /// `input`, `checkbox`, `textarea`, `select` or `list`
    pub control: &'static str,
    /// HTML input type when `control` is `input`
    pub input_type: &'static str,
    pub placeholder: Option<String>,
    pub hint: Option<String>,
    pub required: bool,
}

/// Template data for a composite control that hosts child components
#[derive(Template)]
#[template(path = "form-group.component.ts.txt", escape = "none")]
pub struct GroupComponentTs {
    pub class_name: String,
    pub selector: String,
    pub file_stem: String,
    pub control_name: String,
    pub validators: String,
    /// Validators lifted onto every child control
    pub child_validators: String,
    pub children: Vec<RegistryEntry>,
    pub uses_validators: bool,
    pub uses_form_validators: bool,
    pub validators_import: String,
}

/// Markup for a composite control
#[derive(Template)]
#[template(path = "form-group.component.html.txt", escape = "none")]
pub struct GroupComponentHtml {
    pub label: String,
    pub hint: Option<String>,
    pub children: Vec<RegistryEntry>,
}

/// Template data for the root form component
#[derive(Template)]
#[template(path = "form.component.ts.txt", escape = "none")]
pub struct FormComponentTs {
    pub class_name: String,
    pub selector: String,
    pub file_stem: String,
    pub value_type: String,
    pub children: Vec<RegistryEntry>,
}

/// Markup for the root form component
#[derive(Template)]
#[template(path = "form.component.html.txt", escape = "none")]
pub struct FormComponentHtml {
    pub title: String,
    pub children: Vec<RegistryEntry>,
}

/// Shared `FormValidators` implementation imported by every form control
#[derive(Template)]
#[template(path = "form-validators.ts.txt", escape = "none")]
pub struct FormValidatorsTs;

/// One rendered table or card column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Column id (dotted path)
    pub key: String,
    pub header: String,
    /// Angular interpolation rendering the cell
    pub cell: String,
}

/// Template data for the table component
#[derive(Template)]
#[template(path = "table.component.ts.txt", escape = "none")]
pub struct TableComponentTs {
    pub class_name: String,
    pub selector: String,
    pub file_stem: String,
    pub row_type_name: String,
    pub row_type: String,
    /// JSON array of column ids in display order
    pub column_keys: String,
    pub enable_pagination: bool,
    pub enable_command_bar: bool,
}

/// Markup for the table component
#[derive(Template)]
#[template(path = "table.component.html.txt", escape = "none")]
pub struct TableComponentHtml {
    pub title: String,
    pub columns: Vec<ColumnView>,
    pub enable_pagination: bool,
    pub enable_command_bar: bool,
}

/// Template data for the card component
#[derive(Template)]
#[template(path = "card.component.ts.txt", escape = "none")]
pub struct CardComponentTs {
    pub class_name: String,
    pub selector: String,
    pub file_stem: String,
    pub row_type_name: String,
    pub row_type: String,
    pub enable_pagination: bool,
    pub enable_command_bar: bool,
}

/// Markup for the card component
#[derive(Template)]
#[template(path = "card.component.html.txt", escape = "none")]
pub struct CardComponentHtml {
    pub title: String,
    pub columns: Vec<ColumnView>,
    pub enable_pagination: bool,
    pub enable_command_bar: bool,
}
