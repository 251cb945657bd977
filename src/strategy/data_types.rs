//! Short-urn type sets and the per-type formatting tables used by the
//! scalar strategies.

use super::field_config::ValidatorConfig;

pub const BOOLEAN_TYPES: &[&str] = &["boolean"];

pub const TEXT_TYPES: &[&str] = &["string", "anyURI", "hexBinary", "curie", "base64Binary"];

pub const TEXT_AREA_TYPES: &[&str] = &["langString"];

pub const NUMBER_TYPES: &[&str] = &[
    "byte",
    "short",
    "int",
    "integer",
    "long",
    "decimal",
    "float",
    "double",
    "unsignedByte",
    "unsignedShort",
    "unsignedInt",
    "unsignedLong",
    "positiveInteger",
    "nonPositiveInteger",
    "negativeInteger",
    "nonNegativeInteger",
];

/// Full calendar dates. The partial `g*` types are owned by [`PARTIAL_DATE_TYPES`].
pub const DATE_TYPES: &[&str] = &["date"];

pub const DATE_TIME_TYPES: &[&str] = &["dateTime", "dateTimeStamp"];

pub const DURATION_TYPES: &[&str] = &["duration", "dayTimeDuration", "yearMonthDuration"];

pub const TIME_TYPES: &[&str] = &["time"];

pub const PARTIAL_DATE_TYPES: &[&str] = &["gDay", "gMonth", "gYear", "gMonthDay", "gYearMonth"];

/// Charsets an encoding constraint may name.
pub const SUPPORTED_ENCODINGS: &[&str] = &[
    "US-ASCII",
    "ISO-8859-1",
    "UTF-8",
    "UTF-16",
    "UTF-16BE",
    "UTF-16LE",
];

pub fn is_one_of(set: &[&str], short_urn: Option<&str>) -> bool {
    short_urn.is_some_and(|s| set.contains(&s))
}

/// Display format handed to the date pickers.
pub fn date_format(short_urn: &str) -> Option<&'static str> {
    let format = match short_urn {
        "date" => "YYYY-MM-DD",
        "gDay" => "---DD",
        "gMonth" => "--MM",
        "gYear" => "YYYY",
        "gMonthDay" => "--MM-DD",
        "gYearMonth" => "YYYY-MM",
        "dateTime" => "YYYY-MM-DDTHH:mm:ss",
        "dateTimeStamp" => "YYYY-MM-DDTHH:mm:ss.SSSZ",
        _ => return None,
    };
    Some(format)
}

pub fn partial_date_hint(short_urn: &str) -> Option<&'static str> {
    let hint = match short_urn {
        "gDay" => "Day of the month, e.g. ---15",
        "gMonth" => "Month of the year, e.g. --04",
        "gYear" => "Year, e.g. 2024",
        "gMonthDay" => "Month and day, e.g. --04-15",
        "gYearMonth" => "Year and month, e.g. 2024-04",
        _ => return None,
    };
    Some(hint)
}

pub fn duration_placeholder(short_urn: &str) -> Option<&'static str> {
    let placeholder = match short_urn {
        "duration" => "P1Y2M3DT4H5M6S",
        "dayTimeDuration" => "P1DT2H3M4S",
        "yearMonthDuration" => "P1Y2M",
        _ => return None,
    };
    Some(placeholder)
}

pub const TIME_PLACEHOLDER: &str = "HH:mm:ss";

/// Format validator implied by a duration or time data type.
pub fn temporal_validator(short_urn: &str) -> Option<ValidatorConfig> {
    let (name, definition) = match short_urn {
        "duration" => ("duration", "FormValidators.durationValidator()"),
        "dayTimeDuration" => ("dayTimeDuration", "FormValidators.dayTimeDurationValidator()"),
        "yearMonthDuration" => (
            "yearMonthDuration",
            "FormValidators.yearMonthDurationValidator()",
        ),
        "time" => ("time", "FormValidators.timeValidator()"),
        _ => return None,
    };
    Some(ValidatorConfig::direct(name, definition))
}

/// Canonical charset for the token after `#` in an encoding value.
pub fn supported_encoding(value: &str) -> Option<&'static str> {
    let token = value.rsplit('#').next().unwrap_or(value);
    SUPPORTED_ENCODINGS
        .iter()
        .copied()
        .find(|e| e.eq_ignore_ascii_case(token))
}
