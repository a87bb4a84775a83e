// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{nested_list_error, Document, Value};
use crate::coerce::integer_key;
use crate::parser::{is_reserved_word, RESERVED_WORDS};
use crate::IniError;

/// Render a document as INI text.
///
/// The whole document is validated before anything is rendered, so an
/// invalid document never produces partial output.
///
/// Layout:
/// - `[section]` headers in document order, a blank line between sections
/// - `key=value` per scalar, `key[]=value` per list element,
///   `key[sub]=value` per named map entry (`key[]=` for integer-like names)
/// - strings are double-quoted verbatim; embedded quotes are not escaped
///
/// # Examples
/// ```
/// use ini_cfg::{Document, export::export_document};
///
/// let doc = Document::new()
///     .with("server", "host", "localhost")
///     .with("server", "port", 8080);
/// let text = export_document(&doc).unwrap();
/// assert_eq!(text, "[server]\nhost=\"localhost\"\nport=8080\n");
/// ```
pub fn export_document(doc: &Document) -> Result<String, IniError> {
    validate_document(doc)?;

    let mut out = String::new();
    for (name, section) in &doc.sections {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", name));

        for (key, value) in section {
            match value {
                Value::List(items) => {
                    for item in items {
                        push_element(&mut out, &format!("{}[]", key), item);
                    }
                }
                Value::Map(entries) => {
                    for (sub, item) in entries {
                        let inner = if integer_key(sub).is_some() { "" } else { sub.as_str() };
                        push_element(&mut out, &format!("{}[{}]", key, inner), item);
                    }
                }
                scalar => push_element(&mut out, key, scalar),
            }
        }
    }

    Ok(out)
}

/// Reject anything the reader could not parse back: lists or maps nested
/// inside a list or map, non-finite floats, reserved words as keys and
/// names that collide with INI syntax.
pub fn validate_document(doc: &Document) -> Result<(), IniError> {
    for (name, section) in &doc.sections {
        check_name(name, "section name")?;

        for (key, value) in section {
            check_name(key, "key")?;
            if key.starts_with('#') {
                return Err(IniError::format(
                    format!("Invalid key '{}': '#' at the start of a line opens a comment", key),
                    None,
                ));
            }
            if is_reserved_word(key) {
                return Err(IniError::Format {
                    message: format!("Cannot write reserved word '{}' as a key", key),
                    hint: Some(format!(
                        "Reserved words ({}) cannot be used as keys",
                        RESERVED_WORDS.join(", ")
                    )),
                });
            }

            match value {
                Value::List(items) => items.iter().try_for_each(check_element)?,
                Value::Map(entries) => {
                    for (sub, item) in entries {
                        check_name(sub, "sub-key")?;
                        check_element(item)?;
                    }
                }
                scalar => check_scalar(scalar)?,
            }
        }
    }
    Ok(())
}

fn check_element(value: &Value) -> Result<(), IniError> {
    if !value.is_scalar() {
        return Err(nested_list_error());
    }
    check_scalar(value)
}

fn check_scalar(value: &Value) -> Result<(), IniError> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(IniError::format(
            format!("Cannot write non-finite float {}", f),
            Some("INI has no spelling for NaN or infinity"),
        )),
        _ => Ok(()),
    }
}

/// Names are written bare, so they must survive the reader's trimming and
/// must not contain its structural characters.
fn check_name(name: &str, what: &str) -> Result<(), IniError> {
    let invalid = name.is_empty()
        || name.trim() != name
        || name.starts_with(['"', '\''])
        || name.contains(['=', '[', ']', ';', '\n', '\r']);

    if invalid {
        return Err(IniError::format(
            format!("Invalid {} '{}'", what, name.escape_debug()),
            Some("Names must be non-empty, without surrounding blanks, leading quotes, line breaks or any of = [ ] ;"),
        ));
    }
    Ok(())
}

fn push_element(out: &mut String, key: &str, value: &Value) {
    out.push_str(key);
    out.push('=');
    out.push_str(&render_scalar(value));
    out.push('\n');
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Bool(true) => "true".into(),
        Value::Bool(false) => "false".into(),
        Value::Null => "null".into(),
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        // validate_document keeps containers out of element position
        Value::List(_) | Value::Map(_) => String::new(),
    }
}

/// Export a document to pretty-printed JSON.
///
/// Sections become objects, `List` becomes an array and `Map` an object;
/// section and key order are kept.
pub fn export_document_to_json(doc: &Document) -> Result<String, IniError> {
    serde_json::to_string_pretty(doc).map_err(|e| IniError::Format {
        message: format!("Failed to render JSON: {}", e),
        hint: None,
    })
}

/// A single value as JSON; non-finite floats become `null`.
pub fn value_to_json(v: &Value) -> serde_json::Value {
    serde_json::to_value(v).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_export_sections_and_scalars() {
        let doc = Document::new()
            .with("a", "string", "string")
            .with("a", "float", 10.10)
            .with("a", "flag", false)
            .with("a", "nothing", Value::Null)
            .with("b", "n", -3);

        let text = export_document(&doc).unwrap();
        assert_eq!(
            text,
            "[a]\nstring=\"string\"\nfloat=10.1\nflag=false\nnothing=null\n\n[b]\nn=-3\n"
        );
    }

    #[test]
    fn test_export_list_and_map() {
        let mut named = IndexMap::new();
        named.insert("yes".to_string(), Value::Bool(true));
        named.insert("3".to_string(), Value::from("three"));

        let doc = Document::new()
            .with("s", "array", vec![1, 2])
            .with("s", "named", Value::Map(named));

        let text = export_document(&doc).unwrap();
        assert_eq!(
            text,
            "[s]\narray[]=1\narray[]=2\nnamed[yes]=true\nnamed[]=\"three\"\n"
        );
    }

    #[test]
    fn test_export_empty_section_and_list() {
        let mut doc = Document::new().with("a", "empty", Vec::<Value>::new());
        doc.section_mut("b");

        assert_eq!(export_document(&doc).unwrap(), "[a]\n\n[b]\n");
    }

    #[test]
    fn test_export_quotes_are_not_escaped() {
        let doc = Document::new().with("s", "q", "say \"hi\"");
        assert_eq!(export_document(&doc).unwrap(), "[s]\nq=\"say \"hi\"\"\n");
    }

    #[test]
    fn test_export_rejects_nested_list() {
        let doc = Document::new().with(
            "section_1",
            "inner",
            Value::List(vec![Value::List(vec![Value::from("inner")])]),
        );

        let err = export_document(&doc).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("Cannot have nested arrays inside array elements"));
    }

    #[test]
    fn test_export_rejects_non_finite_floats() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let doc = Document::new().with("s", "f", f);
            let err = export_document(&doc).unwrap_err();
            assert!(err.is_format());
            assert!(err.to_string().contains("non-finite float"));

            let doc = Document::new().with("s", "list", vec![Value::from(1.5), Value::Float(f)]);
            assert!(export_document(&doc).unwrap_err().is_format());
        }
    }

    #[test]
    fn test_export_rejects_reserved_word_keys() {
        for key in ["on", "NULL", "Yes", "none"] {
            let doc = Document::new().with("s", key, 1);
            let err = export_document(&doc).unwrap_err();
            assert!(err.is_format(), "{}", key);
            assert!(err.to_string().contains("reserved word"), "{}", key);
        }

        // reserved words are fine as sub-keys
        let mut named = IndexMap::new();
        named.insert("yes".to_string(), Value::Bool(true));
        assert!(export_document(&Document::new().with("s", "array", Value::Map(named))).is_ok());
    }

    #[test]
    fn test_export_rejects_unparseable_names() {
        for key in ["a=b", "a[0]", "semi;colon", "two\nlines", "", " padded", "#hash", "\"quoted"] {
            let doc = Document::new().with("s", key, 1);
            assert!(export_document(&doc).unwrap_err().is_format(), "{:?}", key);
        }

        let doc = Document::new().with("bad]name", "k", 1);
        assert!(export_document(&doc).unwrap_err().is_format());

        let mut named = IndexMap::new();
        named.insert("a]b".to_string(), Value::from(1));
        let doc = Document::new().with("s", "m", Value::Map(named));
        assert!(export_document(&doc).unwrap_err().is_format());
    }

    #[test]
    fn test_validated_output_reads_back() {
        let doc = Document::new()
            .with("site.paths", "web-root", "/var/www")
            .with("site.paths", "key with spaces", "x")
            .with("s", "f", -0.5);

        let text = export_document(&doc).unwrap();
        let reread = crate::coerce::coerce_document(&crate::parser::parse_str(&text).unwrap());
        assert_eq!(reread, doc);
    }

    #[test]
    fn test_export_json_keeps_order_and_types() {
        let doc = Document::new()
            .with("z", "b", 1)
            .with("z", "a", vec![Value::from(1.5), Value::Null])
            .with("y", "s", "text");

        let json_output = export_document_to_json(&doc).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        let names: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["z", "y"]);
        assert_eq!(v["z"]["b"], 1);
        assert_eq!(v["z"]["a"][0], 1.5);
        assert!(v["z"]["a"][1].is_null());
        assert_eq!(v["y"]["s"], "text");
    }

    #[test]
    fn test_value_to_json() {
        let mut named = IndexMap::new();
        named.insert("yes".to_string(), Value::Bool(true));

        assert_eq!(value_to_json(&Value::Map(named)), serde_json::json!({ "yes": true }));
        assert_eq!(value_to_json(&Value::from(vec![1, 2])), serde_json::json!([1, 2]));
        assert!(value_to_json(&Value::Float(f64::NAN)).is_null());
    }
}
