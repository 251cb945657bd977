use super::data_types::{
    is_one_of, BOOLEAN_TYPES, DATE_TIME_TYPES, DATE_TYPES, DURATION_TYPES, NUMBER_TYPES,
    PARTIAL_DATE_TYPES, TEXT_AREA_TYPES, TEXT_TYPES, TIME_TYPES,
};
use crate::model::Characteristic;
use serde::Serialize;
use std::fmt;

/// The closed set of field strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyKind {
    Either,
    List,
    StructuredValue,
    Complex,
    Enumeration,
    Boolean,
    Text,
    TextArea,
    Number,
    Date,
    DateTime,
    Duration,
    Time,
    DatePartial,
    Default,
}

impl StrategyKind {
    /// Candidates in match order. Predicates overlap, so structural checks
    /// come before short-urn checks; [`StrategyKind::Default`] is the fallback.
    pub const CANDIDATES: [StrategyKind; 14] = [
        StrategyKind::Either,
        StrategyKind::List,
        StrategyKind::StructuredValue,
        StrategyKind::Complex,
        StrategyKind::Enumeration,
        StrategyKind::Boolean,
        StrategyKind::Text,
        StrategyKind::TextArea,
        StrategyKind::Number,
        StrategyKind::Date,
        StrategyKind::DateTime,
        StrategyKind::Duration,
        StrategyKind::Time,
        StrategyKind::DatePartial,
    ];

    /// First candidate whose predicate accepts `characteristic`.
    pub fn select(characteristic: &Characteristic) -> StrategyKind {
        Self::CANDIDATES
            .iter()
            .copied()
            .find(|k| k.is_target(characteristic))
            .unwrap_or(StrategyKind::Default)
    }

    pub fn is_target(self, characteristic: &Characteristic) -> bool {
        let short = characteristic.data_type().map(|d| d.short_urn());
        match self {
            StrategyKind::Either => matches!(characteristic, Characteristic::Either(_)),
            StrategyKind::List => matches!(characteristic, Characteristic::Collection(_)),
            StrategyKind::StructuredValue => {
                matches!(characteristic, Characteristic::StructuredValue(_))
            }
            StrategyKind::Complex => match characteristic {
                Characteristic::SingleEntity(_) | Characteristic::Scalar(_) => characteristic
                    .data_type()
                    .is_some_and(|d| d.is_complex()),
                _ => false,
            },
            StrategyKind::Enumeration => {
                matches!(characteristic, Characteristic::Enumeration(_))
            }
            StrategyKind::Boolean => is_one_of(BOOLEAN_TYPES, short),
            StrategyKind::Text => is_one_of(TEXT_TYPES, short),
            StrategyKind::TextArea => is_one_of(TEXT_AREA_TYPES, short),
            StrategyKind::Number => is_one_of(NUMBER_TYPES, short),
            StrategyKind::Date => is_one_of(DATE_TYPES, short),
            StrategyKind::DateTime => is_one_of(DATE_TIME_TYPES, short),
            StrategyKind::Duration => is_one_of(DURATION_TYPES, short),
            StrategyKind::Time => is_one_of(TIME_TYPES, short),
            StrategyKind::DatePartial => is_one_of(PARTIAL_DATE_TYPES, short),
            StrategyKind::Default => true,
        }
    }

    /// Whether the strategy recurses into child strategies.
    pub fn has_children(self) -> bool {
        matches!(
            self,
            StrategyKind::Complex | StrategyKind::Either | StrategyKind::StructuredValue
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyKind::Either => "either",
            StrategyKind::List => "list",
            StrategyKind::StructuredValue => "structured-value",
            StrategyKind::Complex => "complex",
            StrategyKind::Enumeration => "enumeration",
            StrategyKind::Boolean => "boolean",
            StrategyKind::Text => "text",
            StrategyKind::TextArea => "text-area",
            StrategyKind::Number => "number",
            StrategyKind::Date => "date",
            StrategyKind::DateTime => "date-time",
            StrategyKind::Duration => "duration",
            StrategyKind::Time => "time",
            StrategyKind::DatePartial => "date-partial",
            StrategyKind::Default => "default",
        };
        write!(f, "{s}")
    }
}
