//! # Generator Module
//!
//! Turns a loaded Aspect Model plus a [`GeneratorConfig`] into Angular
//! component sources.
//!
//! ## Overview
//!
//! ```text
//! Model element → Root Composition → FieldConfig forest → Template Rendering → Artifacts
//! ```
//!
//! 1. **Root Composition** ([`compose_fields`]) - one strategy per top-level
//!    property, recursively built into a FieldConfig tree
//! 2. **Emission** - the chosen target renders askama templates from that tree
//! 3. **Writing** - [`ArtifactWriter`] writes (or skips, or plans) every file
//! 4. **Formatting** - optional prettier run via [`format_output`]
//!
//! ## Targets
//!
//! - **Form** - one component per field, nested the same way the model nests,
//!   plus a root form and a shared `FormValidators` module
//! - **Table** - one Angular Material table, complex properties flattened into columns
//! - **Card** - one card list with the same columns as the table
//!
//! ## Generated Structure
//!
//! A form generated for `movement` with name `movement-form`:
//!
//! ```text
//! movement-form/
//! ├── movement-form.component.ts
//! ├── movement-form.component.html
//! ├── shared/
//! │   └── form-validators.ts
//! ├── is-moving/
//! │   ├── is-moving.component.ts
//! │   └── is-moving.component.html
//! └── position/
//!     ├── position.component.ts      # group, imports its children
//!     ├── position.component.html
//!     ├── latitude/
//!     └── longitude/
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aspectgen::generator::{generate, GenerationTarget};
//!
//! let report = generate(&model, &config, GenerationTarget::Form, Path::new("out"), false)?;
//! println!("{} files written", report.written());
//! ```
//!
//! ## Template Customization
//!
//! Templates live in the crate's `templates/` directory and are compiled in
//! by askama:
//!
//! - `form-field.component.{ts,html}.txt` - leaf controls
//! - `form-group.component.{ts,html}.txt` - complex, either and structured values
//! - `form.component.{ts,html}.txt` - root form
//! - `form-validators.ts.txt` - shared validator factories
//! - `table.component.{ts,html}.txt`, `card.component.{ts,html}.txt`

mod columns;
mod compose;
mod form;
mod format;
mod templates;
mod typescript;
mod views;
mod writer;

pub use columns::*;
pub use compose::*;
pub use form::{FormEmitter, FORM_VALIDATORS_PATH};
pub use format::format_output;
pub use templates::*;
pub use typescript::*;
pub use views::*;
pub use writer::*;

use crate::config::GeneratorConfig;
use crate::model::AspectModel;
use heck::{ToKebabCase, ToTitleCase};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GenerationTarget {
    Form,
    Table,
    Card,
}

impl fmt::Display for GenerationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenerationTarget::Form => "form",
            GenerationTarget::Table => "table",
            GenerationTarget::Card => "card",
        };
        write!(f, "{s}")
    }
}

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub target: GenerationTarget,
    /// Name of the aspect or entity generated for
    pub element: String,
    /// Directory holding the generated component(s)
    pub root_dir: PathBuf,
    /// Number of top-level fields
    pub fields: usize,
    /// Form components in emission order (empty for table and card)
    pub components: Vec<RegistryEntry>,
    /// Table or card columns (empty for forms)
    pub columns: Vec<Column>,
    pub artifacts: Vec<Artifact>,
}

impl GenerationReport {
    fn count(&self, outcome: WriteOutcome) -> usize {
        self.artifacts.iter().filter(|a| a.outcome == outcome).count()
    }

    /// Files written, including overwrites.
    pub fn written(&self) -> usize {
        self.count(WriteOutcome::Written) + self.count(WriteOutcome::Overwritten)
    }

    pub fn skipped(&self) -> usize {
        self.count(WriteOutcome::Skipped)
    }

    pub fn planned(&self) -> usize {
        self.count(WriteOutcome::Planned)
    }
}

/// Component name for a run: the configured name, or `<element>-<target>`.
pub fn component_stem(config: &GeneratorConfig, element: &str, target: GenerationTarget) -> String {
    if config.name.trim().is_empty() {
        format!("{element}-{target}").to_kebab_case()
    } else {
        config.name.to_kebab_case()
    }
}

/// Generate one target for the configured model element.
///
/// Files land in `<output>/<component-stem>/`.
///
/// # Errors
///
/// Returns an error if the selected element does not exist, a template fails
/// to render, or a file cannot be written. Nothing is retried; a failure
/// aborts the run.
pub fn generate(
    model: &AspectModel,
    config: &GeneratorConfig,
    target: GenerationTarget,
    output: &Path,
    dry_run: bool,
) -> anyhow::Result<GenerationReport> {
    let element = model.select(config.selected_model_element.as_deref())?;
    let stem = component_stem(config, element.name(), target);
    let title = element.name().to_title_case();
    let root_dir = output.join(&stem);

    info!(
        element = %element.name(),
        target = %target,
        dir = %root_dir.display(),
        dry_run,
        "generating"
    );

    let fields = compose_fields(&element, config);
    let mut writer = ArtifactWriter::new(&root_dir, config.overwrite, dry_run);
    let names = ViewNames {
        stem: &stem,
        title: &title,
    };

    let (components, columns) = match target {
        GenerationTarget::Form => (
            FormEmitter::new(&mut writer).emit(&fields, &stem, &title)?,
            Vec::new(),
        ),
        GenerationTarget::Table => (Vec::new(), emit_table(&fields, config, &names, &mut writer)?),
        GenerationTarget::Card => (Vec::new(), emit_card(&fields, config, &names, &mut writer)?),
    };

    let report = GenerationReport {
        target,
        element: element.name().to_string(),
        root_dir,
        fields: fields.len(),
        components,
        columns,
        artifacts: writer.into_artifacts(),
    };
    info!(
        written = report.written(),
        skipped = report.skipped(),
        planned = report.planned(),
        "generation finished"
    );
    Ok(report)
}
