//! # Model Module
//!
//! The typed, immutable Aspect Model tree consumed by the generator, plus the
//! loader that reads it from a YAML or JSON model document.
//!
//! ## Node kinds
//!
//! - **Aspect / Entity** - ordered property lists
//! - **Property** - name, optionality, example value and a characteristic
//! - **Characteristic** - scalar, enumeration, collection, either, structured
//!   value, single entity, or a trait wrapping one of those with constraints
//! - **Constraint** - range, length, regular expression, encoding, fixed point
//!
//! Entity data types are shared `Arc<Entity>` nodes so an entity referenced
//! by several properties is resolved once.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aspectgen::model::load_model;
//!
//! let model = load_model(Path::new("movement.aspect.yaml"))?;
//! let element = model.select(None)?;
//! for property in element.properties() {
//!     println!("{}", property.name);
//! }
//! ```

mod document;
mod load;
mod types;

pub use document::ModelDocument;
pub use load::*;
pub use types::*;
