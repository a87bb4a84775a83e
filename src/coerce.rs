// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Document, Section, Value};
use crate::parser::{RawDocument, RawScalar, RawValue};

/// Optional sign, digits with an optional fraction (or a bare fraction), optional exponent.
static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Decode every section of a raw parse into typed values.
pub fn coerce_document(raw: &RawDocument) -> Document {
    let sections = raw
        .sections
        .iter()
        .map(|(name, section)| {
            let section: Section = section
                .iter()
                .map(|(key, value)| (key.clone(), coerce_value(value)))
                .collect();
            (name.clone(), section)
        })
        .collect();

    Document { sections }
}

/// Decode one raw value.
///
/// Entries that are all `key[]` become a `List`; as soon as one entry is
/// named the whole value becomes a `Map`, and the unnamed entries take the
/// next free integer index as their key.
pub fn coerce_value(raw: &RawValue) -> Value {
    match raw {
        RawValue::Scalar(scalar) => coerce_scalar(scalar),
        RawValue::Entries(entries) if entries.iter().all(|(k, _)| k.is_none()) => {
            Value::List(entries.iter().map(|(_, v)| coerce_scalar(v)).collect())
        }
        RawValue::Entries(entries) => {
            let mut map = IndexMap::new();
            let mut next_index: i64 = 0;

            for (key, value) in entries {
                let key = match key {
                    Some(k) => k.clone(),
                    None => next_index.to_string(),
                };
                if let Some(index) = integer_key(&key) {
                    next_index = next_index.max(index.saturating_add(1));
                }
                map.insert(key, coerce_scalar(value));
            }

            Value::Map(map)
        }
    }
}

/// Quotes only delimit the text; quoted and bare values decode alike.
pub fn coerce_scalar(raw: &RawScalar) -> Value {
    coerce_str(&raw.text)
}

/// Decode a bare string into the value it spells.
///
/// Rules, first match wins:
/// - `true`/`yes`/`on` and `false`/`no`/`off` (any case) are booleans
/// - `null` (any case) is null
/// - numeric strings are integers when their integer and float readings
///   agree, floats otherwise
/// - anything else stays a string
pub fn coerce_str(text: &str) -> Value {
    match text.to_lowercase().as_str() {
        "true" | "yes" | "on" => return Value::Bool(true),
        "false" | "no" | "off" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }

    if NUMERIC.is_match(text) {
        if let Ok(float) = text.parse::<f64>() {
            let int = text.parse::<i64>().unwrap_or(float as i64);
            // Large values compare after rounding to f64, so precision beyond 2^53 is not kept.
            return if int as f64 == float {
                Value::Integer(int)
            } else {
                Value::Float(float)
            };
        }
    }

    Value::String(text.to_string())
}

/// Canonical decimal integers (`0`, `42`, `-7`, never `007` or `+1`) act as
/// positional keys inside a `Map`.
pub(crate) fn integer_key(key: &str) -> Option<i64> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
        && key != "-0";

    if canonical { key.parse().ok() } else { None }
}
