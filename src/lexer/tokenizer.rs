use super::*;
use super::scanner::{bump, skip_whitespace_and_comments};

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, IniError> {
    skip_whitespace_and_comments(lexer);

    match lexer.peek {
        Some('\n') => tokenize_symbol(lexer, Token::Newline),
        Some('=') => tokenize_symbol(lexer, Token::Equals),
        Some('[') => tokenize_symbol(lexer, Token::LBracket),
        Some(']') => tokenize_symbol(lexer, Token::RBracket),
        Some('"') | Some('\'') => tokenize_quoted(lexer),
        Some(_) => Ok(tokenize_text(lexer, |ch| matches!(ch, '=' | '[' | ']' | ';' | '\n'))),
        None => Ok(Token::Eof),
    }
}

pub(super) fn next_value(lexer: &mut Lexer) -> Result<Token, IniError> {
    skip_whitespace_and_comments(lexer);

    match lexer.peek {
        Some('"') | Some('\'') => tokenize_quoted(lexer),
        // `key=` with nothing after it is an empty value
        Some('\n') | None => Ok(Token::Text(String::new())),
        Some(_) => Ok(tokenize_text(lexer, |ch| matches!(ch, ';' | '\n'))),
    }
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Result<Token, IniError> {
    bump(lexer);
    Ok(token)
}

fn tokenize_text(lexer: &mut Lexer, stop: impl Fn(char) -> bool) -> Token {
    let mut text = String::new();

    while let Some(ch) = lexer.peek {
        if stop(ch) {
            break;
        }
        text.push(ch);
        bump(lexer);
    }

    let trimmed_len = text.trim_end().len();
    text.truncate(trimmed_len);
    Token::Text(text)
}

fn tokenize_quoted(lexer: &mut Lexer) -> Result<Token, IniError> {
    let (line, column) = (lexer.line, lexer.column + 1);
    let quote = bump(lexer).unwrap_or('"');
    let mut content = String::new();

    // Raw mode: no escape sequences, the value ends at the next matching quote.
    loop {
        match lexer.peek {
            Some(ch) if ch == quote => {
                bump(lexer);
                return Ok(Token::Quoted(content));
            }
            Some('\n') | None => {
                return Err(IniError::Syntax {
                    message: format!("unterminated string starting with {}", quote),
                    line,
                    column,
                    hint: Some("Close the quoted value on the same line".into()),
                });
            }
            Some(ch) => {
                content.push(ch);
                bump(lexer);
            }
        }
    }
}
