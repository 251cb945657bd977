//! # CLI Module
//!
//! Command-line surface of the `aspectgen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate Angular components for an aspect (or one of its entities):
//!
//! ```bash
//! aspectgen generate --model movement.aspect.yaml --config movement.config.json --target form
//! ```
//!
//! Options:
//! - `--model <FILE>` - Aspect Model document, YAML or JSON (required)
//! - `--config <FILE>` - Generator configuration, JSON, YAML or TOML
//! - `--target <TARGET>` - form, table or card (default: form)
//! - `--output <DIR>` - Output directory (default: config `outputDir`, else `.`)
//! - `--name <NAME>` - Component name, overrides the config
//! - `--element <NAME>` - Aspect or entity to generate for, overrides the config
//! - `--force` - Overwrite existing files
//! - `--dry-run` - Show what would be written without touching the disk
//! - `--format` - Run prettier over the generated files
//!
//! ### `inspect`
//!
//! Print the FieldConfig tree the generator would render, as JSON:
//!
//! ```bash
//! aspectgen inspect --model movement.aspect.yaml
//! ```
//!
//! ### `lint`
//!
//! Check a model for constructs that generate degraded or broken forms:
//!
//! ```bash
//! aspectgen lint --model movement.aspect.yaml --fail-on-error
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use aspectgen::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(&cli)?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run, run_cli, Cli, Commands};
