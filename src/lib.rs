pub mod ast;
pub mod coerce;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;

pub use ast::{Document, Section, Value};
pub use config::{read_file, write_file, write_json_file, IniConfig};
pub use error::IniError;
