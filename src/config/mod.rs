// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::ast::{Document, Value};
use crate::coerce::coerce_document;
use crate::export::export_document;
use crate::parser;
use crate::IniError;

mod access;
mod conversion;
mod helpers;

/// Read an INI file and decode every value it holds.
///
/// # Errors
/// - `NotFound` if nothing exists at `path`
/// - `Io` if the file exists but cannot be read
/// - `Format` if the text is not valid INI; the message names the file
///   and carries the parser's diagnostic
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document, IniError> {
    read_with_content(path.as_ref()).map(|(doc, _)| doc)
}

/// Write a document to `path`, replacing whatever is there.
///
/// The document is validated and rendered before the file is opened.
/// The write itself is not atomic: a failure part way may leave a
/// truncated file behind.
pub fn write_file<P: AsRef<Path>>(path: P, doc: &Document) -> Result<(), IniError> {
    let path = path.as_ref();
    let text = export_document(doc)?;

    fs::write(path, text).map_err(|source| IniError::Io {
        action: "write",
        path: path.display().to_string(),
        source,
    })
}

/// Write a caller-supplied nested mapping (section -> key -> value).
pub fn write_json_file<P: AsRef<Path>>(path: P, json: &serde_json::Value) -> Result<(), IniError> {
    let doc = Document::from_json(json)?;
    write_file(path, &doc)
}

fn read_with_content(path: &Path) -> Result<(Document, String), IniError> {
    if !path.exists() {
        return Err(IniError::NotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| IniError::Io {
        action: "read",
        path: path.display().to_string(),
        source,
    })?;

    let raw = parser::parse_str(&content).map_err(|e| wrap_parse_error(e, path))?;
    Ok((coerce_document(&raw), content))
}

fn wrap_parse_error(err: IniError, path: &Path) -> IniError {
    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    match err {
        IniError::Syntax { message, line, hint, .. } => IniError::Format {
            message: format!(
                "Error reading ini file '{}': syntax error, {} in {} on line {}",
                basename,
                message,
                path.display(),
                line
            ),
            hint,
        },
        other => other,
    }
}

/// A decoded INI document plus the text it came from, with typed lookups.
pub struct IniConfig {
    document: Document,
    source: Option<PathBuf>,
    raw_content: String, // Store for error reporting
}

impl IniConfig {
    /// Load and decode an INI file.
    ///
    /// # Example
    /// ```no_run
    /// # use ini_cfg::IniConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = IniConfig::from_file("config.ini")?;
    /// let port: u16 = config.get("server.port")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let path = path.as_ref();
        let (document, raw_content) = read_with_content(path)?;

        Ok(Self {
            document,
            source: Some(path.to_path_buf()),
            raw_content,
        })
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            source: None,
            raw_content: String::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Write the document to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IniError> {
        write_file(path, &self.document)
    }

    /// Set a value, creating the section if it does not exist yet.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<Value>) {
        self.document
            .section_mut(section)
            .insert(key.to_string(), value.into());
    }
}

/// Parse INI text directly (no file I/O). Syntax errors stay `Syntax`.
impl FromStr for IniConfig {
    type Err = IniError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let raw = parser::parse_str(content)?;

        Ok(Self {
            document: coerce_document(&raw),
            source: None,
            raw_content: content.to_string(),
        })
    }
}
