use indexmap::IndexMap;

use crate::lexer::{Lexer, Token};
use crate::IniError;

mod document;

/// Words that cannot be used as a key, in any case.
pub(crate) const RESERVED_WORDS: [&str; 8] =
    ["true", "false", "yes", "no", "on", "off", "null", "none"];

pub(crate) fn is_reserved_word(key: &str) -> bool {
    RESERVED_WORDS.contains(&key.to_lowercase().as_str())
}

/// An undecoded value exactly as it appeared after `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScalar {
    pub text: String,
    pub quoted: bool,
}

/// Bracketed keys collect into `Entries`; `None` marks a `key[]` entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Scalar(RawScalar),
    Entries(Vec<(Option<String>, RawScalar)>),
}

pub type RawSection = IndexMap<String, RawValue>;

/// Untyped result of the raw parse: section -> key -> string(s).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDocument {
    pub sections: IndexMap<String, RawSection>,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Option<Token>,
    peek_pos: (usize, usize),
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, IniError> {
        let mut parser = Self {
            lexer: Lexer::new(input),
            peek: None,
            peek_pos: (1, 1),
        };
        parser.advance()?;
        Ok(parser)
    }

    pub(crate) fn bump(&mut self) -> Result<Token, IniError> {
        let curr = self.take_peek()?;
        self.advance()?;
        Ok(curr)
    }

    /// Lex the next token into `peek`, recording where it starts.
    fn advance(&mut self) -> Result<(), IniError> {
        self.lexer.skip_trivia();
        self.peek_pos = (self.lexer.line(), self.lexer.column() + 1);
        self.peek = Some(self.lexer.next_token()?);
        Ok(())
    }

    /// Consume the pending `=` and return the value that follows it.
    ///
    /// The token after `=` has to be lexed in value mode, so it is read
    /// straight from the lexer instead of through `peek`.
    pub(crate) fn take_value(&mut self) -> Result<Token, IniError> {
        self.take_peek()?;
        let value = self.lexer.next_value()?;
        self.advance()?;
        Ok(value)
    }

    fn take_peek(&mut self) -> Result<Token, IniError> {
        self.peek.take().ok_or_else(|| {
            IniError::syntax("unexpected end of input", self.lexer.line(), self.lexer.column())
        })
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.peek.as_ref()
    }

    /// Line and column where the pending token starts.
    pub(crate) fn position(&self) -> (usize, usize) {
        self.peek_pos
    }

    pub fn parse_document(&mut self) -> Result<RawDocument, IniError> {
        document::parse_document(self)
    }
}

/// Parse INI text into its raw, undecoded form.
pub fn parse_str(input: &str) -> Result<RawDocument, IniError> {
    Parser::new(input)?.parse_document()
}
