#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for CLI commands

use super::commands::apply_overrides;
use crate::cli::{run, Cli, Commands};
use crate::config::GeneratorConfig;
use crate::generator::GenerationTarget;
use clap::Parser;
use std::fs;

const MODEL: &str = r#"
aspect:
  name: Movement
  properties:
    - name: isMoving
      characteristic: { kind: boolean, dataType: "xsd:boolean" }
    - name: speed
      characteristic: { kind: measurement, dataType: "xsd:float", unit: { name: kilometrePerHour } }
"#;

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "aspectgen",
        "lint",
        "--model",
        "movement.aspect.yaml",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            model,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(model.to_string_lossy(), "movement.aspect.yaml");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_generate_defaults() {
    let cli = Cli::try_parse_from(["aspectgen", "generate", "--model", "m.yaml"]).unwrap();
    match cli.command {
        Commands::Generate {
            target,
            output,
            config,
            force,
            dry_run,
            format,
            ..
        } => {
            assert_eq!(target, GenerationTarget::Form);
            assert!(output.is_none());
            assert!(config.is_none());
            assert!(!force && !dry_run && !format);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_all_flags() {
    let cli = Cli::try_parse_from([
        "aspectgen",
        "generate",
        "-m",
        "m.yaml",
        "-c",
        "c.json",
        "-t",
        "card",
        "-o",
        "out",
        "--name",
        "movement-card",
        "--element",
        "Position",
        "--force",
        "--dry-run",
        "--format",
    ])
    .unwrap();
    match cli.command {
        Commands::Generate {
            target,
            output,
            name,
            element,
            force,
            dry_run,
            format,
            ..
        } => {
            assert_eq!(target, GenerationTarget::Card);
            assert_eq!(output.unwrap().to_string_lossy(), "out");
            assert_eq!(name.as_deref(), Some("movement-card"));
            assert_eq!(element.as_deref(), Some("Position"));
            assert!(force && dry_run && format);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_unknown_target_is_rejected() {
    assert!(Cli::try_parse_from(["aspectgen", "generate", "--model", "m.yaml", "--target", "grid"]).is_err());
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec!["aspectgen", "generate", "--model", "m.yaml"],
        vec!["aspectgen", "inspect", "--model", "m.yaml", "--element", "Position"],
        vec!["aspectgen", "lint", "--model", "m.yaml"],
    ];
    for args in commands {
        assert!(Cli::try_parse_from(&args).is_ok(), "failed to parse {args:?}");
    }
}

#[test]
fn test_flags_override_config() {
    let mut options = GeneratorConfig {
        name: "from-file".to_string(),
        selected_model_element: Some("Aspect".to_string()),
        ..Default::default()
    };
    apply_overrides(&mut options, Some("from-flag"), Some("Position"), true);
    assert_eq!(options.name, "from-flag");
    assert_eq!(options.selected_model_element.as_deref(), Some("Position"));
    assert!(options.overwrite);

    let mut untouched = GeneratorConfig {
        name: "kept".to_string(),
        overwrite: true,
        ..Default::default()
    };
    apply_overrides(&mut untouched, None, None, false);
    assert_eq!(untouched.name, "kept");
    assert!(untouched.overwrite);
}

#[test]
fn test_run_generate_dry_run_and_write() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("movement.aspect.yaml");
    fs::write(&model, MODEL).unwrap();
    let out = dir.path().join("out");

    let dry = Cli::try_parse_from([
        "aspectgen",
        "generate",
        "--model",
        model.to_str().unwrap(),
        "--target",
        "table",
        "--output",
        out.to_str().unwrap(),
        "--dry-run",
    ])
    .unwrap();
    run(&dry).unwrap();
    assert!(!out.exists());

    let real = Cli::try_parse_from([
        "aspectgen",
        "generate",
        "--model",
        model.to_str().unwrap(),
        "--target",
        "table",
        "--output",
        out.to_str().unwrap(),
        "--name",
        "moves",
    ])
    .unwrap();
    run(&real).unwrap();
    assert!(out.join("moves/moves.component.ts").exists());
    assert!(out.join("moves/moves.component.html").exists());
}

#[test]
fn test_run_uses_config_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("movement.aspect.yaml");
    fs::write(&model, MODEL).unwrap();
    let out = dir.path().join("from-config");
    let config = dir.path().join("movement.config.json");
    fs::write(
        &config,
        serde_json::json!({ "name": "movement-card", "outputDir": out }).to_string(),
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "aspectgen",
        "generate",
        "--model",
        model.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--target",
        "card",
    ])
    .unwrap();
    run(&cli).unwrap();
    assert!(out.join("movement-card/movement-card.component.ts").exists());
}

#[test]
fn test_run_reports_unknown_element() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("movement.aspect.yaml");
    fs::write(&model, MODEL).unwrap();
    let cli = Cli::try_parse_from([
        "aspectgen",
        "inspect",
        "--model",
        model.to_str().unwrap(),
        "--element",
        "Trailer",
    ])
    .unwrap();
    let err = run(&cli).unwrap_err();
    assert!(err.to_string().contains("Trailer"));
}
