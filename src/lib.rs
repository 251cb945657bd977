//! # aspectgen
//!
//! **aspectgen** generates Angular form, table and card components from a
//! semantic Aspect Model.
//!
//! ## Overview
//!
//! A model describes a domain object as an aspect with typed properties,
//! nested entities and constraints. aspectgen walks that model and picks one
//! *field strategy* per property by structural predicate. The strategy turns
//! the property into a template-independent field configuration (control
//! kind, validators, hints, children). The configurations are then rendered
//! through askama templates into Angular component sources.
//!
//! ## Architecture
//!
//! - **[`model`]** - Typed Aspect Model tree and the YAML/JSON document loader
//! - **[`strategy`]** - Strategy selector, field strategies and constraint validator strategies
//! - **[`config`]** - Generator configuration (exclusions, complex columns, flags)
//! - **[`generator`]** - Root composition, form/table/card emission and the artifact writer
//! - **[`linter`]** - Static model checks that predict degraded output
//! - **[`logging`]** - tracing subscriber setup
//! - **[`cli`]** - The `aspectgen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(aspectgen)
//!     participant Model as model::load_model
//!     participant Compose as generator::compose_fields
//!     participant Select as strategy::select_strategy
//!     participant Templates as generator::templates
//!     participant Writer as ArtifactWriter
//!
//!     User->>CLI: aspectgen generate --model movement.aspect.yaml
//!     CLI->>Model: load_model(path)
//!     Model-->>CLI: AspectModel
//!     CLI->>Compose: compose_fields(element, config)
//!     loop every property
//!         Compose->>Select: select_strategy(config, property, characteristic)
//!         Select-->>Compose: FieldStrategy
//!         Compose->>Compose: build_config() (recursing into children)
//!     end
//!     Compose-->>CLI: Vec<FieldConfig>
//!     CLI->>Templates: render components
//!     Templates->>Writer: write / skip / plan
//!     Writer-->>CLI: GenerationReport
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! aspectgen lint --model demos/movement.aspect.yaml
//! aspectgen generate --model demos/movement.aspect.yaml \
//!     --config demos/movement.config.json --target form --output out
//! ```
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use aspectgen::config::resolve_generator_config;
//! use aspectgen::generator::{generate, GenerationTarget};
//! use aspectgen::model::load_model;
//!
//! let model = load_model(Path::new("movement.aspect.yaml"))?;
//! let config = resolve_generator_config(None)?;
//! let report = generate(&model, &config, GenerationTarget::Table, Path::new("out"), false)?;
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod linter;
pub mod logging;
pub mod model;
pub mod strategy;
