use std::io;

use thiserror::Error;

/// The main error type for INI reading, writing and typed access.
#[derive(Debug, Error)]
pub enum IniError {
    /// The file handed to a read does not exist.
    #[error("[INI] Not Found: Could not find ini file to parse: {path}")]
    NotFound { path: String },

    /// Structurally invalid input, either read from disk or built by a caller.
    #[error("[INI] Format Error: {message}{}", hint_suffix(.hint))]
    Format {
        message: String,
        hint: Option<String>,
    },

    /// Raised by the raw tokenizer; `read` folds it into `Format`.
    #[error("[INI] Syntax Error at {line}:{column}: {message}{}", hint_suffix(.hint))]
    Syntax {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
    },

    #[error("[INI] IO Error: Could not {action} ini file {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// A decoded value could not be converted to the requested Rust type.
    #[error("[INI] Type Error{}: {message}{}", line_suffix(.line), hint_suffix(.hint))]
    Type {
        message: String,
        line: usize,
        hint: Option<String>,
    },

    #[error("[INI] Missing Key: '{path}' not found in configuration")]
    MissingKey { path: String },
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
}

fn line_suffix(line: &usize) -> String {
    if *line > 0 {
        format!(" on line {}", line)
    } else {
        String::new()
    }
}

impl IniError {
    pub(crate) fn format(message: impl Into<String>, hint: Option<&str>) -> Self {
        IniError::Format {
            message: message.into(),
            hint: hint.map(String::from),
        }
    }

    pub(crate) fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        IniError::Syntax {
            message: message.into(),
            line,
            column,
            hint: None,
        }
    }

    pub(crate) fn type_error(expected: &str, got: &str) -> Self {
        IniError::Type {
            message: format!("Expected {}, got {}", expected, got),
            line: 0,
            hint: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, IniError::NotFound { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, IniError::Format { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, IniError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, IniError>;
