// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;
use crate::IniError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    /// Bare run of text: a section name, key, sub-key or unquoted value.
    Text(String),
    /// `"..."` or `'...'` taken verbatim, quotes stripped.
    Quoted(String),

    // --- structure ---
    Equals,
    LBracket,
    RBracket,

    // --- layout ---
    Newline,
    Eof,
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
    line_start: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
            line_start: true,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Move past blanks and comments so `line`/`column` point at the next token.
    pub fn skip_trivia(&mut self) {
        scanner::skip_whitespace_and_comments(self);
    }

    /// Tokenization of headers and keys (`=`, `[` and `]` are structure)
    pub fn next_token(&mut self) -> Result<Token, IniError> {
        tokenizer::next_token(self)
    }

    /// Tokenization right after `=` (the rest of the line is one value)
    pub fn next_value(&mut self) -> Result<Token, IniError> {
        tokenizer::next_value(self)
    }
}
