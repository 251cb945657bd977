use super::document::{
    CharacteristicDoc, CollectionDoc, ConstraintDoc, DataTypeDoc, EntityDoc, ModelDocument,
    PropertyDoc, StructuredElementDoc,
};
use super::types::{
    Aspect, AspectModel, BoundDefinition, Characteristic, Collection, CollectionKind, Constraint,
    DataType, Either, EncodingConstraint, Entity, Enumeration, FixedPointConstraint,
    LengthConstraint, ModelElement, Property, RangeConstraint, RegularExpressionConstraint,
    ScalarCharacteristic, SingleEntity, StructuredElement, StructuredValue, Trait, Unit, RDF_NS,
    SAMM_NS, XSD_NS,
};
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Model resolution error
///
/// Returned when a model document parses but does not describe a usable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A `{ entity: Name }` data type names an entity that is not defined
    UnknownEntity {
        /// The missing entity name
        name: String,
        /// Property that referenced it
        referenced_from: String,
    },
    /// Entities reference each other in a loop
    CyclicEntity {
        /// Entity names from the first to the repeated one
        chain: Vec<String>,
    },
    /// The requested model element is neither the aspect nor a known entity
    UnknownElement {
        /// The requested name
        name: String,
    },
    /// The document extension is not one of yaml, yml or json
    UnsupportedFormat {
        /// Offending path
        path: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownEntity {
                name,
                referenced_from,
            } => write!(
                f,
                "Model error: property '{referenced_from}' references undefined entity '{name}'"
            ),
            ModelError::CyclicEntity { chain } => write!(
                f,
                "Model error: entity references form a cycle ({})",
                chain.join(" -> ")
            ),
            ModelError::UnknownElement { name } => write!(
                f,
                "Model error: '{name}' is neither the aspect nor a defined entity"
            ),
            ModelError::UnsupportedFormat { path } => write!(
                f,
                "Model error: unsupported model document '{path}'. Expected .yaml, .yml or .json"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// Serialization format of a model document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Yaml,
    Json,
}

impl ModelFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(ModelFormat::Yaml),
            Some("json") => Some(ModelFormat::Json),
            _ => None,
        }
    }
}

/// Load and resolve a model document from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or
/// references entities that do not resolve.
pub fn load_model(path: &Path) -> anyhow::Result<AspectModel> {
    let format = ModelFormat::from_path(path).ok_or_else(|| ModelError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model document: {}", path.display()))?;
    parse_model(&content, format)
        .with_context(|| format!("Failed to load model document: {}", path.display()))
}

/// Parse and resolve a model document held in memory.
pub fn parse_model(content: &str, format: ModelFormat) -> anyhow::Result<AspectModel> {
    let doc: ModelDocument = match format {
        ModelFormat::Yaml => serde_yaml::from_str(content)?,
        ModelFormat::Json => serde_json::from_str(content)?,
    };
    Ok(resolve_document(&doc)?)
}

/// Turn a parsed document into the immutable model tree.
pub fn resolve_document(doc: &ModelDocument) -> Result<AspectModel, ModelError> {
    let mut resolver = Resolver {
        docs: &doc.entities,
        resolved: HashMap::new(),
        stack: Vec::new(),
    };
    let mut entities = Vec::with_capacity(doc.entities.len());
    for name in doc.entities.keys() {
        entities.push(resolver.entity(name, &doc.aspect.name)?);
    }
    let mut properties = Vec::with_capacity(doc.aspect.properties.len());
    for p in &doc.aspect.properties {
        properties.push(resolver.property(p)?);
    }
    debug!(
        aspect = %doc.aspect.name,
        properties = properties.len(),
        entities = entities.len(),
        "resolved model document"
    );
    Ok(AspectModel {
        aspect: Aspect {
            name: doc.aspect.name.clone(),
            urn: doc.aspect.urn.clone(),
            properties,
        },
        entities,
    })
}

impl AspectModel {
    /// The aspect when `name` is `None`, otherwise the aspect or entity so named.
    pub fn select(&self, name: Option<&str>) -> Result<ModelElement, ModelError> {
        match name {
            None => Ok(ModelElement::Aspect(self.aspect.clone())),
            Some(n) if n == self.aspect.name || self.aspect.urn.as_deref() == Some(n) => {
                Ok(ModelElement::Aspect(self.aspect.clone()))
            }
            Some(n) => self
                .entities
                .iter()
                .find(|e| e.name == n || e.urn.as_deref() == Some(n))
                .map(|e| ModelElement::Entity(Arc::clone(e)))
                .ok_or_else(|| ModelError::UnknownElement {
                    name: n.to_string(),
                }),
        }
    }
}

/// Expand the `xsd:` / `rdf:` / `samm:` shorthands to full urns.
pub fn expand_urn(urn: &str) -> String {
    if let Some(rest) = urn.strip_prefix("xsd:") {
        format!("{XSD_NS}{rest}")
    } else if let Some(rest) = urn.strip_prefix("rdf:") {
        format!("{RDF_NS}{rest}")
    } else if let Some(rest) = urn.strip_prefix("samm:") {
        format!("{SAMM_NS}{rest}")
    } else {
        urn.to_string()
    }
}

struct Resolver<'d> {
    docs: &'d BTreeMap<String, EntityDoc>,
    resolved: HashMap<String, Arc<Entity>>,
    stack: Vec<String>,
}

impl<'d> Resolver<'d> {
    fn entity(&mut self, name: &str, referenced_from: &str) -> Result<Arc<Entity>, ModelError> {
        if let Some(done) = self.resolved.get(name) {
            return Ok(Arc::clone(done));
        }
        if self.stack.iter().any(|s| s == name) {
            let mut chain = self.stack.clone();
            chain.push(name.to_string());
            return Err(ModelError::CyclicEntity { chain });
        }
        let docs = self.docs;
        let doc = docs.get(name).ok_or_else(|| ModelError::UnknownEntity {
            name: name.to_string(),
            referenced_from: referenced_from.to_string(),
        })?;

        self.stack.push(name.to_string());
        let mut properties = Vec::with_capacity(doc.properties.len());
        for p in &doc.properties {
            properties.push(self.property(p)?);
        }
        self.stack.pop();

        let entity = Arc::new(Entity {
            name: name.to_string(),
            urn: doc.urn.clone(),
            properties,
        });
        self.resolved.insert(name.to_string(), Arc::clone(&entity));
        Ok(entity)
    }

    fn property(&mut self, doc: &PropertyDoc) -> Result<Property, ModelError> {
        Ok(Property {
            name: doc.name.clone(),
            urn: doc.urn.clone(),
            optional: doc.optional,
            example_value: doc.example_value.clone(),
            characteristic: self.characteristic(&doc.characteristic, &doc.name)?,
        })
    }

    fn data_type(
        &mut self,
        doc: Option<&DataTypeDoc>,
        owner: &str,
    ) -> Result<Option<DataType>, ModelError> {
        match doc {
            None => Ok(None),
            Some(DataTypeDoc::Scalar(urn)) => Ok(Some(DataType::scalar(expand_urn(urn)))),
            Some(DataTypeDoc::Entity { entity }) => {
                Ok(Some(DataType::Entity(self.entity(entity, owner)?)))
            }
        }
    }

    fn collection(
        &mut self,
        doc: &CollectionDoc,
        kind: CollectionKind,
        owner: &str,
    ) -> Result<Characteristic, ModelError> {
        let element_characteristic = match &doc.element_characteristic {
            Some(c) => Some(Box::new(self.characteristic(c, owner)?)),
            None => None,
        };
        Ok(Characteristic::Collection(Collection {
            name: doc.name.clone().unwrap_or_else(|| format!("{kind:?}")),
            kind,
            data_type: self.data_type(doc.data_type.as_ref(), owner)?,
            element_characteristic,
        }))
    }

    fn characteristic(
        &mut self,
        doc: &CharacteristicDoc,
        owner: &str,
    ) -> Result<Characteristic, ModelError> {
        let c = match doc {
            CharacteristicDoc::Characteristic(s) => {
                Characteristic::Scalar(ScalarCharacteristic {
                    name: s.name.clone().unwrap_or_else(|| "Characteristic".to_string()),
                    data_type: self.data_type(s.data_type.as_ref(), owner)?,
                    unit: s.unit.as_ref().map(|u| Unit {
                        name: u.name.clone(),
                        symbol: u.symbol.clone(),
                    }),
                })
            }
            CharacteristicDoc::Enumeration(e) => Characteristic::Enumeration(Enumeration {
                name: e.name.clone().unwrap_or_else(|| "Enumeration".to_string()),
                data_type: self.data_type(e.data_type.as_ref(), owner)?,
                values: e.values.clone(),
            }),
            CharacteristicDoc::Collection(c) => {
                self.collection(c, CollectionKind::Collection, owner)?
            }
            CharacteristicDoc::List(c) => self.collection(c, CollectionKind::List, owner)?,
            CharacteristicDoc::Set(c) => self.collection(c, CollectionKind::Set, owner)?,
            CharacteristicDoc::SortedSet(c) => {
                self.collection(c, CollectionKind::SortedSet, owner)?
            }
            CharacteristicDoc::TimeSeries(c) => {
                self.collection(c, CollectionKind::TimeSeries, owner)?
            }
            CharacteristicDoc::Either(e) => Characteristic::Either(Either {
                name: e.name.clone().unwrap_or_else(|| "Either".to_string()),
                left: Box::new(self.property(&e.left)?),
                right: Box::new(self.property(&e.right)?),
            }),
            CharacteristicDoc::StructuredValue(s) => {
                let mut elements = Vec::with_capacity(s.elements.len());
                for el in &s.elements {
                    elements.push(match el {
                        StructuredElementDoc::Literal(text) => {
                            StructuredElement::Literal(text.clone())
                        }
                        StructuredElementDoc::Property(p) => {
                            StructuredElement::Property(self.property(p)?)
                        }
                    });
                }
                Characteristic::StructuredValue(StructuredValue {
                    name: s.name.clone().unwrap_or_else(|| "StructuredValue".to_string()),
                    data_type: self.data_type(s.data_type.as_ref(), owner)?,
                    deconstruction_rule: s.deconstruction_rule.clone(),
                    elements,
                })
            }
            CharacteristicDoc::SingleEntity(s) => {
                let data_type = match &s.data_type {
                    DataTypeDoc::Entity { entity } => DataType::Entity(self.entity(entity, owner)?),
                    DataTypeDoc::Scalar(urn) => DataType::scalar(expand_urn(urn)),
                };
                Characteristic::SingleEntity(SingleEntity {
                    name: s.name.clone().unwrap_or_else(|| "SingleEntity".to_string()),
                    data_type,
                })
            }
            CharacteristicDoc::Trait(t) => {
                let base = self.characteristic(&t.base, owner)?;
                Characteristic::Trait(Trait {
                    name: t
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("{}Trait", base.name())),
                    base: Box::new(base),
                    constraints: t.constraints.iter().map(constraint).collect(),
                })
            }
        };
        Ok(c)
    }
}

fn constraint(doc: &ConstraintDoc) -> Constraint {
    match doc {
        ConstraintDoc::Range(r) => Constraint::Range(RangeConstraint {
            name: r.name.clone(),
            min_value: r.min_value.clone(),
            max_value: r.max_value.clone(),
            lower_bound_definition: r.lower_bound_definition.unwrap_or(BoundDefinition::AtLeast),
            upper_bound_definition: r.upper_bound_definition.unwrap_or(BoundDefinition::AtMost),
        }),
        ConstraintDoc::Length(l) => Constraint::Length(LengthConstraint {
            name: l.name.clone(),
            min_value: l.min_value,
            max_value: l.max_value,
        }),
        ConstraintDoc::RegularExpression(r) => {
            Constraint::RegularExpression(RegularExpressionConstraint {
                name: r.name.clone(),
                value: r.value.clone(),
            })
        }
        ConstraintDoc::Encoding(e) => Constraint::Encoding(EncodingConstraint {
            name: e.name.clone(),
            value: e.value.clone(),
        }),
        ConstraintDoc::FixedPoint(f) => Constraint::FixedPoint(FixedPointConstraint {
            name: f.name.clone(),
            integer: f.integer,
            scale: f.scale,
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    const MOVEMENT: &str = r#"
aspect:
  name: Movement
  urn: urn:samm:org.eclipse.examples:1.0.0#Movement
  properties:
    - name: isMoving
      characteristic: { kind: boolean, dataType: "xsd:boolean" }
    - name: position
      characteristic: { kind: singleEntity, dataType: { entity: SpatialPosition } }
entities:
  SpatialPosition:
    properties:
      - name: latitude
        characteristic: { kind: measurement, dataType: "xsd:decimal", unit: { name: degreeUnitOfAngle, symbol: "°" } }
      - name: longitude
        characteristic: { kind: measurement, dataType: "xsd:decimal" }
"#;

    #[test]
    fn test_parse_resolves_entity_references() {
        let model = parse_model(MOVEMENT, ModelFormat::Yaml).unwrap();
        assert_eq!(model.aspect.properties.len(), 2);
        let position = &model.aspect.properties[1];
        let entity = position.effective_data_type().unwrap().entity().unwrap();
        assert_eq!(entity.name, "SpatialPosition");
        assert_eq!(entity.properties.len(), 2);
        assert_eq!(
            entity.properties[0].characteristic.unit().unwrap().name,
            "degreeUnitOfAngle"
        );
        // the shared node is the same allocation as the registry entry
        assert!(Arc::ptr_eq(entity, &model.entities[0]));
    }

    #[test]
    fn test_expand_urn_shorthands() {
        assert_eq!(expand_urn("xsd:date"), format!("{XSD_NS}date"));
        assert_eq!(expand_urn("rdf:langString"), format!("{RDF_NS}langString"));
        assert_eq!(expand_urn("samm:curie"), format!("{SAMM_NS}curie"));
        assert_eq!(expand_urn("urn:custom#thing"), "urn:custom#thing");
    }

    #[test]
    fn test_unknown_entity_is_reported() {
        let doc = r#"
aspect:
  name: Broken
  properties:
    - name: ghost
      characteristic: { kind: singleEntity, dataType: { entity: Missing } }
"#;
        let err = parse_model(doc, ModelFormat::Yaml).unwrap_err();
        let model_err = err.downcast_ref::<ModelError>().unwrap();
        assert_eq!(
            model_err,
            &ModelError::UnknownEntity {
                name: "Missing".to_string(),
                referenced_from: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_cyclic_entities_are_rejected() {
        let doc = r#"
aspect:
  name: Loop
  properties: []
entities:
  A:
    properties:
      - name: b
        characteristic: { kind: singleEntity, dataType: { entity: B } }
  B:
    properties:
      - name: a
        characteristic: { kind: singleEntity, dataType: { entity: A } }
"#;
        let err = parse_model(doc, ModelFormat::Yaml).unwrap_err();
        match err.downcast_ref::<ModelError>() {
            Some(ModelError::CyclicEntity { chain }) => {
                assert_eq!(chain, &vec!["A".to_string(), "B".to_string(), "A".to_string()]);
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_select_element() {
        let model = parse_model(MOVEMENT, ModelFormat::Yaml).unwrap();
        assert_eq!(model.select(None).unwrap().name(), "Movement");
        assert_eq!(
            model.select(Some("SpatialPosition")).unwrap().properties().len(),
            2
        );
        assert!(matches!(
            model.select(Some("Nope")),
            Err(ModelError::UnknownElement { .. })
        ));
    }

    #[test]
    fn test_trait_defaults_bound_definitions() {
        let doc = r#"
aspect:
  name: Sensor
  properties:
    - name: speed
      characteristic:
        kind: trait
        base: { kind: measurement, name: Speed, dataType: "xsd:float" }
        constraints:
          - { kind: range, minValue: 0 }
"#;
        let model = parse_model(doc, ModelFormat::Yaml).unwrap();
        let Characteristic::Trait(t) = &model.aspect.properties[0].characteristic else {
            panic!("expected trait");
        };
        assert_eq!(t.name, "SpeedTrait");
        let Constraint::Range(r) = &t.constraints[0] else {
            panic!("expected range");
        };
        assert_eq!(r.lower_bound_definition, BoundDefinition::AtLeast);
        assert_eq!(r.upper_bound_definition, BoundDefinition::AtMost);
        assert!(r.max_value.is_none());
    }
}
