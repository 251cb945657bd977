//! Serde shapes of the on-disk model document.
//!
//! These mirror the resolved model in [`super::types`] except that entity
//! data types are referenced by name and resolved in [`super::load`].

use super::types::BoundDefinition;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    pub aspect: AspectDoc,
    #[serde(default)]
    pub entities: BTreeMap<String, EntityDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectDoc {
    pub name: String,
    pub urn: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDoc {
    pub urn: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDoc {
    pub name: String,
    pub urn: Option<String>,
    #[serde(default)]
    pub optional: bool,
    pub example_value: Option<Value>,
    pub characteristic: CharacteristicDoc,
}

/// `xsd:string`, a full urn, or `{ entity: Name }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DataTypeDoc {
    Scalar(String),
    Entity { entity: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitDoc {
    pub name: String,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CharacteristicDoc {
    #[serde(
        alias = "text",
        alias = "boolean",
        alias = "measurement",
        alias = "quantifiable",
        alias = "duration",
        alias = "code",
        alias = "timestamp",
        alias = "multiLanguageText"
    )]
    Characteristic(ScalarDoc),
    #[serde(alias = "state")]
    Enumeration(EnumerationDoc),
    Collection(CollectionDoc),
    List(CollectionDoc),
    Set(CollectionDoc),
    SortedSet(CollectionDoc),
    TimeSeries(CollectionDoc),
    Either(EitherDoc),
    StructuredValue(StructuredValueDoc),
    SingleEntity(SingleEntityDoc),
    Trait(TraitDoc),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarDoc {
    pub name: Option<String>,
    pub data_type: Option<DataTypeDoc>,
    pub unit: Option<UnitDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerationDoc {
    pub name: Option<String>,
    pub data_type: Option<DataTypeDoc>,
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDoc {
    pub name: Option<String>,
    pub data_type: Option<DataTypeDoc>,
    pub element_characteristic: Option<Box<CharacteristicDoc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EitherDoc {
    pub name: Option<String>,
    pub left: Box<PropertyDoc>,
    pub right: Box<PropertyDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StructuredElementDoc {
    Literal(String),
    Property(PropertyDoc),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredValueDoc {
    pub name: Option<String>,
    pub data_type: Option<DataTypeDoc>,
    pub deconstruction_rule: String,
    #[serde(default)]
    pub elements: Vec<StructuredElementDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleEntityDoc {
    pub name: Option<String>,
    pub data_type: DataTypeDoc,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitDoc {
    pub name: Option<String>,
    pub base: Box<CharacteristicDoc>,
    #[serde(default)]
    pub constraints: Vec<ConstraintDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ConstraintDoc {
    Range(RangeDoc),
    Length(LengthDoc),
    RegularExpression(ValueConstraintDoc),
    Encoding(ValueConstraintDoc),
    FixedPoint(FixedPointDoc),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeDoc {
    pub name: Option<String>,
    pub min_value: Option<Value>,
    pub max_value: Option<Value>,
    pub lower_bound_definition: Option<BoundDefinition>,
    pub upper_bound_definition: Option<BoundDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthDoc {
    pub name: Option<String>,
    pub min_value: Option<u64>,
    pub max_value: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueConstraintDoc {
    pub name: Option<String>,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPointDoc {
    pub name: Option<String>,
    pub integer: u32,
    pub scale: u32,
}
