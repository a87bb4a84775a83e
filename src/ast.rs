use indexmap::IndexMap;
use serde::Serialize;

use crate::IniError;

/// A decoded INI value.
///
/// `List` holds positional entries (`key[]=v`), `Map` holds named ones
/// (`key[sub]=v`). Both may only contain scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Null,
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

/// Keys of one `[section]`, in the order they were read or inserted.
pub type Section = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Document {
    pub sections: IndexMap<String, Section>, // [name] -> key/value table
}

impl Value {
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Map(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Integer(n) = self { Some(*n) } else { None }
    }

    /// Integers widen to floats here.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Value::List(items) = self { Some(items) } else { None }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Map(entries) = self { Some(entries) } else { None }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Returns the named section, creating an empty one at the end if needed.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_string()).or_default()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    /// Builder-style insert, handy when constructing documents in code.
    pub fn with(mut self, section: &str, key: &str, value: impl Into<Value>) -> Self {
        self.section_mut(section).insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Build a document from a caller-supplied nested mapping.
    ///
    /// The root must be an object whose entries are objects (sections).
    /// Inside a section, arrays become `List` and objects become `Map`;
    /// neither may contain another array or object.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, IniError> {
        let root = json.as_object().ok_or_else(|| {
            IniError::format(
                "Keys at top level of the document are sections and must point to tables",
                Some("Wrap your settings in an object keyed by section name"),
            )
        })?;

        let mut doc = Document::new();
        for (name, section) in root {
            let entries = section.as_object().ok_or_else(|| {
                IniError::format(
                    format!(
                        "Keys at top level of the document are sections and must point to tables (section '{}')",
                        name
                    ),
                    None,
                )
            })?;

            let section = doc.section_mut(name);
            for (key, value) in entries {
                section.insert(key.clone(), json_to_value(value, true)?);
            }
        }

        Ok(doc)
    }
}

fn json_to_value(json: &serde_json::Value, allow_nesting: bool) -> Result<Value, IniError> {
    use serde_json::Value as Json;

    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => Ok(match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(_) | Json::Object(_) if !allow_nesting => Err(nested_list_error()),
        Json::Array(items) => items
            .iter()
            .map(|item| json_to_value(item, false))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Json::Object(entries) => entries
            .iter()
            .map(|(k, v)| json_to_value(v, false).map(|v| (k.clone(), v)))
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(Value::Map),
    }
}

pub(crate) fn nested_list_error() -> IniError {
    IniError::format(
        "Cannot have nested arrays inside array elements",
        Some("List and map entries must be scalars"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_equality_ignores_order() {
        let a = Document::new().with("s", "a", 1).with("s", "b", 2);
        let b = Document::new().with("s", "b", 2).with("s", "a", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_json_keeps_insertion_order() {
        let doc = Document::from_json(&json!({
            "zeta": { "b": 1, "a": "x" },
            "alpha": { "list": [1, 2], "named": { "yes": true } }
        }))
        .unwrap();

        let names: Vec<_> = doc.sections.keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        let keys: Vec<_> = doc.section("zeta").unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(doc.get("alpha", "list"), Some(&Value::from(vec![1, 2])));
        assert!(doc.get("alpha", "named").unwrap().as_map().is_some());
    }

    #[test]
    fn test_from_json_rejects_scalar_section() {
        let err = Document::from_json(&json!({ "s": "value" })).unwrap_err();
        assert!(err.is_format());

        let err = Document::from_json(&json!(["value"])).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_from_json_rejects_nested_arrays() {
        let err = Document::from_json(&json!({ "s": { "inner": [["inner"]] } })).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("Cannot have nested arrays"));
    }

    #[test]
    fn test_as_f64_widens_integers() {
        assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
        assert_eq!(Value::String("3".into()).as_f64(), None);
    }
}
