//! Generator configuration
//!
//! The answers collected by an interactive wizard (or written by hand) that
//! steer a generation run. The record is read once and only ever borrowed
//! immutably by the strategies.

use crate::model::Property;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A property the user chose not to generate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedProperty {
    /// Name of the property the exclusion was chosen under; informational,
    /// matching uses only the urn field
    pub prop: String,
    /// Urn of the property to drop, or its name when it has no urn
    pub prop_to_exclude_aspect_model_urn: String,
}

/// Nested properties to surface for one complex property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComplexProp {
    /// Name of the complex property
    pub prop: String,
    /// Names of its nested properties to show; empty shows all
    #[serde(default)]
    pub props_to_show: Vec<String>,
}

/// Configuration for one generation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Root component name; derived from the selected element when empty
    pub name: String,
    /// Aspect or entity name to generate for; the aspect when absent
    pub selected_model_element: Option<String>,
    pub excluded_properties: Vec<ExcludedProperty>,
    pub complex_props: Vec<ComplexProp>,
    /// Replace files that already exist
    pub overwrite: bool,
    pub enable_pagination: bool,
    pub enable_command_bar: bool,
    /// Output root; the CLI `--output` flag wins over this
    pub output_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Whether `property` was excluded by the user.
    ///
    /// A property with a urn is only matched by that urn.
    pub fn is_excluded(&self, property: &Property) -> bool {
        self.excluded_properties
            .iter()
            .any(|e| e.prop_to_exclude_aspect_model_urn == property.identifier())
    }

    /// Nested property names to show for `prop`, or `None` for all of them.
    pub fn props_to_show(&self, prop: &str) -> Option<&[String]> {
        self.complex_props
            .iter()
            .find(|c| c.prop == prop)
            .map(|c| c.props_to_show.as_slice())
            .filter(|names| !names.is_empty())
    }
}

/// Load a generator configuration from a JSON, YAML or TOML file
///
/// The format is chosen by extension; anything other than `.yaml`, `.yml`
/// or `.toml` is read as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse.
pub fn load_generator_config(config_path: &Path) -> anyhow::Result<GeneratorConfig> {
    let contents = std::fs::read_to_string(config_path).with_context(|| {
        format!(
            "Failed to read generator config: {}",
            config_path.display()
        )
    })?;

    let config: GeneratorConfig = match config_path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&contents).map_err(anyhow::Error::from),
        Some("toml") => toml::from_str(&contents).map_err(anyhow::Error::from),
        _ => serde_json::from_str(&contents).map_err(anyhow::Error::from),
    }
    .with_context(|| {
        format!(
            "Failed to parse generator config: {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn resolve_generator_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    match path {
        Some(p) => load_generator_config(p),
        None => Ok(GeneratorConfig::default()),
    }
}
