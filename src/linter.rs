//! # Model Linter Module
//!
//! Static checks over a loaded Aspect Model that predict how generation will
//! degrade before anything is written.
//!
//! ## Checks Performed
//!
//! 1. **Structured value alignment** - deconstruction rule parts must line up
//!    with the instantiated elements (Error)
//! 2. **Regular expressions** - pattern constraints and rule parts must compile (Error);
//!    look-around and backreferences cannot be checked here (Warning)
//! 3. **Either branches** - left and right must have different names (Error)
//! 4. **Duplicate properties** - sibling properties must have distinct names (Error)
//! 5. **Encodings** - unsupported charsets produce no validator (Warning)
//! 6. **Nested traits** - only the outer trait's constraints are applied (Warning)
//! 7. **Property names** - must be usable as TypeScript identifiers (Warning)
//! 8. **Default fallback** - characteristics no strategy recognises (Info)
//! 9. **Vacuous constraints** - constraints that generate nothing (Info)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aspectgen::linter::{lint_model_file, print_lint_issues};
//!
//! let issues = lint_model_file(Path::new("movement.aspect.yaml"))?;
//! print_lint_issues(&issues);
//! ```

use crate::model::{load_model, AspectModel, Characteristic, Constraint, Property, StructuredElement};
use crate::strategy::{supported_encoding, StrategyKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[cfg(test)]
mod tests;

static IDENTIFIER: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$"));

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - generated code will be wrong
    Error,
    /// Warning - generation silently drops something
    Warning,
    /// Info - generation degrades to a plainer field
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LintSeverity::Error => "error",
            LintSeverity::Warning => "warning",
            LintSeverity::Info => "info",
        };
        write!(f, "{s}")
    }
}

/// A lint issue found in a model
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Dotted property path (e.g. "Movement.position.latitude")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g. "unsupported_encoding")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Load and lint a model document
///
/// # Errors
///
/// Returns an error if the document cannot be loaded.
pub fn lint_model_file(model_path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let model = load_model(model_path)?;
    Ok(lint_model(&model))
}

/// Lint a loaded model
///
/// The aspect's properties are checked under the aspect name and every
/// entity's properties under the entity name, so a shared entity is reported
/// once.
pub fn lint_model(model: &AspectModel) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    lint_properties(&mut issues, &model.aspect.name, &model.aspect.properties);
    for entity in &model.entities {
        lint_properties(&mut issues, &entity.name, &entity.properties);
    }
    issues
}

fn lint_properties(issues: &mut Vec<LintIssue>, owner: &str, properties: &[Property]) {
    let mut seen = HashSet::new();
    for property in properties {
        let location = format!("{owner}.{}", property.name);
        if !seen.insert(property.name.as_str()) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "duplicate_property",
                    format!("'{}' is declared more than once under {owner}", property.name),
                )
                .with_suggestion("Rename one of the properties; both would register the same form control"),
            );
        }
        lint_property(issues, &location, property);
    }
}

fn lint_property(issues: &mut Vec<LintIssue>, location: &str, property: &Property) {
    let identifier_ok = match IDENTIFIER.as_ref() {
        Ok(re) => re.is_match(&property.name),
        Err(_) => true,
    };
    if !identifier_ok {
        issues.push(
            LintIssue::new(
                location,
                LintSeverity::Warning,
                "invalid_property_name",
                format!("'{}' is not a valid TypeScript identifier", property.name),
            )
            .with_suggestion("Use letters, digits, '_' or '$', not starting with a digit"),
        );
    }

    let (characteristic, constraints) = match &property.characteristic {
        Characteristic::Trait(t) => {
            if let Characteristic::Trait(inner) = t.base.as_ref() {
                issues.push(
                    LintIssue::new(
                        location,
                        LintSeverity::Warning,
                        "nested_trait",
                        format!(
                            "trait '{}' wraps trait '{}'; only the outer constraints are applied",
                            t.name, inner.name
                        ),
                    )
                    .with_suggestion("Merge the constraints into a single trait"),
                );
            }
            (t.base.as_ref(), t.constraints.as_slice())
        }
        other => (other, &[][..]),
    };

    if StrategyKind::select(characteristic) == StrategyKind::Default {
        let data_type = characteristic
            .data_type()
            .map(|d| d.short_urn().to_string())
            .unwrap_or_else(|| "none".to_string());
        issues.push(LintIssue::new(
            location,
            LintSeverity::Info,
            "default_strategy",
            format!(
                "characteristic '{}' (data type {data_type}) falls back to a plain text field",
                characteristic.name()
            ),
        ));
    }

    for constraint in constraints {
        lint_constraint(issues, location, constraint);
    }

    match characteristic {
        Characteristic::Either(e) => {
            if e.left.name == e.right.name {
                issues.push(
                    LintIssue::new(
                        location,
                        LintSeverity::Error,
                        "duplicate_either_branch",
                        format!("both branches of '{}' are named '{}'", e.name, e.left.name),
                    )
                    .with_suggestion("Give the left and right properties different names"),
                );
            }
            lint_property(issues, &format!("{location}.{}", e.left.name), &e.left);
            lint_property(issues, &format!("{location}.{}", e.right.name), &e.right);
        }
        Characteristic::StructuredValue(s) => {
            let parts: Vec<&str> = s.deconstruction_rule.split('@').collect();
            let elements = s.instantiated_elements().count();
            if parts.len() != elements {
                issues.push(
                    LintIssue::new(
                        location,
                        LintSeverity::Error,
                        "structured_value_mismatch",
                        format!(
                            "deconstruction rule splits into {} part(s) but '{}' has {elements} element(s)",
                            parts.len(),
                            s.name
                        ),
                    )
                    .with_suggestion("Separate one capture pattern per element with '@'"),
                );
            }
            for part in parts {
                if let Some(issue) =
                    check_pattern(location, "invalid_deconstruction_rule", "rule part", part)
                {
                    issues.push(issue);
                }
            }
            for element in &s.elements {
                if let StructuredElement::Property(p) = element {
                    lint_property(issues, &format!("{location}.{}", p.name), p);
                }
            }
        }
        _ => {}
    }
}

fn lint_constraint(issues: &mut Vec<LintIssue>, location: &str, constraint: &Constraint) {
    match constraint {
        Constraint::Range(r) => {
            let unset = |v: &Option<serde_json::Value>| !matches!(v, Some(v) if !v.is_null());
            if unset(&r.min_value) && unset(&r.max_value) {
                issues.push(vacuous(location, "range"));
            }
        }
        Constraint::Length(l) => {
            if l.min_value.is_none() && l.max_value.is_none() {
                issues.push(vacuous(location, "length"));
            }
        }
        Constraint::RegularExpression(r) => {
            if r.value.is_empty() {
                issues.push(vacuous(location, "regular expression"));
            } else if let Some(issue) =
                check_pattern(location, "invalid_regular_expression", "pattern", &r.value)
            {
                issues.push(issue);
            }
        }
        Constraint::Encoding(e) => {
            if supported_encoding(&e.value).is_none() {
                issues.push(
                    LintIssue::new(
                        location,
                        LintSeverity::Warning,
                        "unsupported_encoding",
                        format!("encoding '{}' is not supported; no validator is generated", e.value),
                    )
                    .with_suggestion("Use US-ASCII, ISO-8859-1, UTF-8, UTF-16, UTF-16BE or UTF-16LE"),
                );
            }
        }
        Constraint::FixedPoint(_) => {}
    }
}

/// Compile `pattern` to catch syntax errors before it reaches the browser.
///
/// The generated validators run patterns as JavaScript `RegExp`, which
/// accepts look-around and backreferences. The `regex` crate rejects those as
/// unsupported, so such patterns are reported as unchecked (Warning), not as
/// invalid.
fn check_pattern(location: &str, kind: &str, what: &str, pattern: &str) -> Option<LintIssue> {
    let err = Regex::new(pattern).err()?;
    let unsupported = match &err {
        regex::Error::Syntax(msg) => msg.contains("not supported"),
        _ => true,
    };
    if unsupported {
        return Some(
            LintIssue::new(
                location,
                LintSeverity::Warning,
                "unchecked_regular_expression",
                format!("{what} '{pattern}' uses syntax the linter cannot verify"),
            )
            .with_suggestion("Check the pattern against JavaScript RegExp semantics"),
        );
    }
    Some(LintIssue::new(
        location,
        LintSeverity::Error,
        kind,
        format!("{what} '{pattern}' is not a valid regular expression: {err}"),
    ))
}

fn vacuous(location: &str, what: &str) -> LintIssue {
    LintIssue::new(
        location,
        LintSeverity::Info,
        "vacuous_constraint",
        format!("{what} constraint has no bounds and generates no validator"),
    )
}

/// Whether any issue is an error.
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    // Group by severity
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();
    let infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Info)
        .collect();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    print_group("❌ Errors (must fix):", &errors);
    print_group("⚠️  Warnings (should fix):", &warnings);
    print_group("ℹ️  Info (generation degrades):", &infos);
}

fn print_group(heading: &str, issues: &[&LintIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("{heading}");
    for issue in issues {
        println!("   [{}] {}", issue.kind, issue.location);
        println!("      {}", issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("      💡 Suggestion: {}", suggestion);
        }
    }
    println!();
}

/// Exit with error code if there are any error-level lint issues
pub fn fail_if_errors(issues: &[LintIssue]) {
    if has_errors(issues) {
        print_lint_issues(issues);
        std::process::exit(1);
    }
}
