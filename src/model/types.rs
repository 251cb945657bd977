use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Namespace of the XML Schema datatypes used by scalar properties.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
/// Namespace of `rdf:langString`.
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// Namespace of the meta-model's own scalar types (`curie`).
pub const SAMM_NS: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#";

/// Final segment of a type identifier (`...XMLSchema#date` → `date`).
pub fn short_urn(urn: &str) -> &str {
    if let Some((_, tail)) = urn.rsplit_once('#') {
        return tail;
    }
    urn.rsplit(|c: char| c == '/' || c == ':').next().unwrap_or(urn)
}

/// Root of a loaded model: the aspect plus every named entity.
#[derive(Debug, Clone)]
pub struct AspectModel {
    pub aspect: Aspect,
    pub entities: Vec<Arc<Entity>>,
}

/// The element whose top-level properties seed generation.
#[derive(Debug, Clone)]
pub enum ModelElement {
    Aspect(Aspect),
    Entity(Arc<Entity>),
}

impl ModelElement {
    pub fn name(&self) -> &str {
        match self {
            ModelElement::Aspect(a) => &a.name,
            ModelElement::Entity(e) => &e.name,
        }
    }

    pub fn properties(&self) -> &[Property] {
        match self {
            ModelElement::Aspect(a) => &a.properties,
            ModelElement::Entity(e) => &e.properties,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Aspect {
    pub name: String,
    pub urn: Option<String>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub urn: Option<String>,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub urn: Option<String>,
    pub optional: bool,
    pub example_value: Option<Value>,
    /// Possibly wrapped in a [`Characteristic::Trait`].
    pub characteristic: Characteristic,
}

impl Property {
    /// Urn when the model declares one, the bare name otherwise.
    pub fn identifier(&self) -> &str {
        self.urn.as_deref().unwrap_or(&self.name)
    }

    /// Data type of the characteristic after unwrapping a trait.
    pub fn effective_data_type(&self) -> Option<&DataType> {
        self.characteristic.unwrapped().data_type()
    }
}

#[derive(Debug, Clone)]
pub enum DataType {
    Scalar { urn: String },
    Entity(Arc<Entity>),
}

impl DataType {
    pub fn scalar(urn: impl Into<String>) -> Self {
        DataType::Scalar { urn: urn.into() }
    }

    pub fn xsd(name: &str) -> Self {
        DataType::Scalar {
            urn: format!("{XSD_NS}{name}"),
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, DataType::Entity(_))
    }

    pub fn short_urn(&self) -> &str {
        match self {
            DataType::Scalar { urn } => short_urn(urn),
            DataType::Entity(e) => &e.name,
        }
    }

    pub fn entity(&self) -> Option<&Arc<Entity>> {
        match self {
            DataType::Entity(e) => Some(e),
            DataType::Scalar { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Characteristic {
    /// Any characteristic without structure of its own (text, measurement, code, ...).
    Scalar(ScalarCharacteristic),
    Enumeration(Enumeration),
    Collection(Collection),
    Either(Either),
    StructuredValue(StructuredValue),
    SingleEntity(SingleEntity),
    Trait(Trait),
}

impl Characteristic {
    pub fn name(&self) -> &str {
        match self {
            Characteristic::Scalar(c) => &c.name,
            Characteristic::Enumeration(c) => &c.name,
            Characteristic::Collection(c) => &c.name,
            Characteristic::Either(c) => &c.name,
            Characteristic::StructuredValue(c) => &c.name,
            Characteristic::SingleEntity(c) => &c.name,
            Characteristic::Trait(c) => &c.name,
        }
    }

    pub fn data_type(&self) -> Option<&DataType> {
        match self {
            Characteristic::Scalar(c) => c.data_type.as_ref(),
            Characteristic::Enumeration(c) => c.data_type.as_ref(),
            Characteristic::Collection(c) => c.data_type.as_ref(),
            Characteristic::Either(_) => None,
            Characteristic::StructuredValue(c) => c.data_type.as_ref(),
            Characteristic::SingleEntity(c) => Some(&c.data_type),
            Characteristic::Trait(c) => c.base.data_type(),
        }
    }

    pub fn unit(&self) -> Option<&Unit> {
        match self {
            Characteristic::Scalar(c) => c.unit.as_ref(),
            _ => None,
        }
    }

    /// The base characteristic of a trait (one level), or `self`.
    pub fn unwrapped(&self) -> &Characteristic {
        match self {
            Characteristic::Trait(t) => &t.base,
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScalarCharacteristic {
    pub name: String,
    pub data_type: Option<DataType>,
    pub unit: Option<Unit>,
}

#[derive(Debug, Clone)]
pub struct Enumeration {
    pub name: String,
    pub data_type: Option<DataType>,
    /// Literal values or entity instances, in declaration order.
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Collection,
    List,
    Set,
    SortedSet,
    TimeSeries,
}

#[derive(Debug, Clone)]
pub struct Collection {
    pub name: String,
    pub kind: CollectionKind,
    pub data_type: Option<DataType>,
    pub element_characteristic: Option<Box<Characteristic>>,
}

#[derive(Debug, Clone)]
pub struct Either {
    pub name: String,
    pub left: Box<Property>,
    pub right: Box<Property>,
}

#[derive(Debug, Clone)]
pub enum StructuredElement {
    /// Separator text between the typed parts.
    Literal(String),
    Property(Property),
}

#[derive(Debug, Clone)]
pub struct StructuredValue {
    pub name: String,
    pub data_type: Option<DataType>,
    pub deconstruction_rule: String,
    pub elements: Vec<StructuredElement>,
}

impl StructuredValue {
    /// Elements that are sub-properties, skipping literal separators.
    pub fn instantiated_elements(&self) -> impl Iterator<Item = &Property> {
        self.elements.iter().filter_map(|e| match e {
            StructuredElement::Property(p) => Some(p),
            StructuredElement::Literal(_) => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SingleEntity {
    pub name: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone)]
pub struct Trait {
    pub name: String,
    pub base: Box<Characteristic>,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone)]
pub enum Constraint {
    Range(RangeConstraint),
    Length(LengthConstraint),
    RegularExpression(RegularExpressionConstraint),
    Encoding(EncodingConstraint),
    FixedPoint(FixedPointConstraint),
}

impl Constraint {
    pub fn name(&self) -> Option<&str> {
        match self {
            Constraint::Range(c) => c.name.as_deref(),
            Constraint::Length(c) => c.name.as_deref(),
            Constraint::RegularExpression(c) => c.name.as_deref(),
            Constraint::Encoding(c) => c.name.as_deref(),
            Constraint::FixedPoint(c) => c.name.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoundDefinition {
    Open,
    AtLeast,
    GreaterThan,
    LessThan,
    AtMost,
}

impl BoundDefinition {
    /// Token passed to the generated range validator, which compares
    /// against the same `BoundDefinition` union in `form-validators.ts`.
    pub fn descriptor(self) -> &'static str {
        match self {
            BoundDefinition::Open => "OPEN",
            BoundDefinition::AtLeast => "AT_LEAST",
            BoundDefinition::GreaterThan => "GREATER_THAN",
            BoundDefinition::LessThan => "LESS_THAN",
            BoundDefinition::AtMost => "AT_MOST",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RangeConstraint {
    pub name: Option<String>,
    pub min_value: Option<Value>,
    pub max_value: Option<Value>,
    pub lower_bound_definition: BoundDefinition,
    pub upper_bound_definition: BoundDefinition,
}

#[derive(Debug, Clone)]
pub struct LengthConstraint {
    pub name: Option<String>,
    pub min_value: Option<u64>,
    pub max_value: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct RegularExpressionConstraint {
    pub name: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct EncodingConstraint {
    pub name: Option<String>,
    /// Urn-style value, e.g. `urn:samm:...#UTF-8`.
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct FixedPointConstraint {
    pub name: Option<String>,
    pub integer: u32,
    pub scale: u32,
}
