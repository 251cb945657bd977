use crate::config::{resolve_generator_config, GeneratorConfig};
use crate::generator::{
    compose_fields, format_output, generate, GenerationReport, GenerationTarget, WriteOutcome,
};
use crate::linter::{fail_if_errors, lint_model_file, print_lint_issues, LintSeverity};
use crate::model::load_model;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line interface for aspectgen
///
/// Generates Angular form, table and card components from Aspect Models.
#[derive(Parser)]
#[command(name = "aspectgen")]
#[command(about = "Aspect Model to Angular UI generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate Angular components from an Aspect Model
    Generate {
        /// Path to the Aspect Model document (YAML or JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Path to the generator configuration (JSON, YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// What to generate
        #[arg(short, long, value_enum, default_value_t = GenerationTarget::Form)]
        target: GenerationTarget,

        /// Output directory (default: the config's outputDir, else the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Component name, overriding the config's name
        #[arg(long)]
        name: Option<String>,

        /// Aspect or entity to generate for, overriding the config's selectedModelElement
        #[arg(long)]
        element: Option<String>,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Perform a dry run: show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Run prettier over the generated files
        #[arg(long, default_value_t = false)]
        format: bool,
    },
    /// Print the field configuration tree as JSON
    Inspect {
        /// Path to the Aspect Model document (YAML or JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Path to the generator configuration (JSON, YAML or TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Aspect or entity to inspect
        #[arg(long)]
        element: Option<String>,
    },
    /// Lint an Aspect Model
    ///
    /// Checks the model for constructs the generator cannot render faithfully:
    /// - structured values whose deconstruction rule does not match their elements
    /// - invalid regular expressions
    /// - Either characteristics with identically named branches
    /// - unsupported encodings and nested traits
    /// - characteristics that fall back to a plain text field
    Lint {
        /// Path to the Aspect Model document (YAML or JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Parse the process arguments and execute the command
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

/// Execute a parsed command
///
/// # Errors
///
/// Returns an error if:
/// - The model or configuration cannot be loaded or parsed
/// - The selected element does not exist
/// - Rendering or writing a component fails
/// - The formatter fails
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            model,
            config,
            target,
            output,
            name,
            element,
            force,
            dry_run,
            format,
        } => {
            let aspect_model = load_model(model)?;
            let mut options = resolve_generator_config(config.as_deref())?;
            apply_overrides(&mut options, name.as_deref(), element.as_deref(), *force);
            let output_dir = output
                .clone()
                .or_else(|| options.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));

            let report = generate(&aspect_model, &options, *target, &output_dir, *dry_run)?;
            print_report(&report, *dry_run);

            if *format && !*dry_run {
                format_output(&report.root_dir)?;
            }
            Ok(())
        }
        Commands::Inspect {
            model,
            config,
            element,
        } => {
            let aspect_model = load_model(model)?;
            let mut options = resolve_generator_config(config.as_deref())?;
            apply_overrides(&mut options, None, element.as_deref(), false);
            let selected = aspect_model.select(options.selected_model_element.as_deref())?;
            let fields = compose_fields(&selected, &options);
            let json = serde_json::to_string_pretty(&fields)
                .context("Failed to serialize field configuration")?;
            println!("{json}");
            Ok(())
        }
        Commands::Lint {
            model,
            fail_on_error,
            errors_only,
        } => {
            let issues = lint_model_file(model.as_path())?;

            if *errors_only {
                let errors: Vec<_> = issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .cloned()
                    .collect();
                print_lint_issues(&errors);
                if *fail_on_error {
                    fail_if_errors(&errors);
                }
            } else {
                print_lint_issues(&issues);
                if *fail_on_error {
                    fail_if_errors(&issues);
                }
            }

            Ok(())
        }
    }
}

/// Command-line flags win over configuration file values.
pub(crate) fn apply_overrides(
    options: &mut GeneratorConfig,
    name: Option<&str>,
    element: Option<&str>,
    force: bool,
) {
    if let Some(name) = name {
        options.name = name.to_string();
    }
    if let Some(element) = element {
        options.selected_model_element = Some(element.to_string());
    }
    if force {
        options.overwrite = true;
    }
}

fn print_report(report: &GenerationReport, dry_run: bool) {
    if dry_run {
        println!(
            "📝 Dry run: {} {} for {} would write {} file(s) to {}",
            report.target,
            if report.target == GenerationTarget::Form { "components" } else { "component" },
            report.element,
            report.planned(),
            report.root_dir.display()
        );
    } else {
        println!(
            "✅ Generated {} for {} in {}",
            report.target,
            report.element,
            report.root_dir.display()
        );
    }
    for artifact in &report.artifacts {
        println!("   {} {}", outcome_marker(artifact.outcome), display_path(&artifact.path));
    }
    if !dry_run {
        println!(
            "   {} written, {} skipped",
            report.written(),
            report.skipped()
        );
        if report.skipped() > 0 {
            println!("   💡 Use --force to overwrite existing files");
        }
    }
}

fn outcome_marker(outcome: WriteOutcome) -> &'static str {
    match outcome {
        WriteOutcome::Written => "+",
        WriteOutcome::Overwritten => "~",
        WriteOutcome::Skipped => "=",
        WriteOutcome::Planned => "?",
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
