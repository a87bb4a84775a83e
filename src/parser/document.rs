use super::*;

struct Entry {
    key: String,
    sub_key: Option<Option<String>>,
    value: RawScalar,
}

pub(super) fn parse_document(parser: &mut Parser) -> Result<RawDocument, IniError> {
    let mut doc = RawDocument::default();
    let mut current: Option<String> = None;

    while let Some(tok) = parser.peek() {
        match tok {
            Token::Newline => {
                parser.bump()?;
            }
            Token::Eof => {
                break;
            }
            Token::LBracket => {
                let name = parse_section_header(parser)?;
                doc.sections.entry(name.clone()).or_default();
                current = Some(name);
            }
            Token::Text(_) | Token::Quoted(_) => {
                let (line, column) = parser.position();
                let entry = parse_entry(parser)?;
                let Some(name) = current.as_ref() else {
                    return Err(IniError::Syntax {
                        message: format!("key '{}' outside of any section", entry.key),
                        line,
                        column,
                        hint: Some("Add a [section] header before the first key".into()),
                    });
                };
                insert_entry(doc.sections.entry(name.clone()).or_default(), entry);
            }
            _ => {
                let (line, column) = parser.position();
                return Err(IniError::syntax(
                    format!("unexpected {}", describe(tok)),
                    line,
                    column,
                ));
            }
        }
    }

    Ok(doc)
}

fn parse_section_header(parser: &mut Parser) -> Result<String, IniError> {
    parser.bump()?; // consume [

    let (line, column) = parser.position();
    let name = match parser.bump()? {
        Token::Text(n) | Token::Quoted(n) if !n.trim().is_empty() => n.trim().to_string(),
        Token::Text(_) | Token::Quoted(_) | Token::RBracket => {
            return Err(IniError::syntax("empty section name", line, column));
        }
        other => {
            return Err(IniError::syntax(
                format!("unexpected {} in section header", describe(&other)),
                line,
                column,
            ));
        }
    };

    expect(parser, Token::RBracket, "']' to close the section header")?;
    expect_line_end(parser)?;
    Ok(name)
}

fn parse_entry(parser: &mut Parser) -> Result<Entry, IniError> {
    let (line, column) = parser.position();
    let key = if let Token::Text(k) | Token::Quoted(k) = parser.bump()? {
        k.trim().to_string()
    } else {
        unreachable!()
    };

    if key.is_empty() {
        return Err(IniError::syntax("empty key", line, column));
    }
    if is_reserved_word(&key) {
        return Err(IniError::Syntax {
            message: format!("unexpected reserved word '{}'", key),
            line,
            column,
            hint: Some(format!(
                "Reserved words ({}) cannot be used as keys",
                RESERVED_WORDS.join(", ")
            )),
        });
    }

    let sub_key = if let Some(Token::LBracket) = parser.peek() {
        parser.bump()?; // consume [
        let sub = match parser.peek() {
            Some(Token::RBracket) => None,
            Some(Token::Text(_)) | Some(Token::Quoted(_)) => {
                if let Token::Text(s) | Token::Quoted(s) = parser.bump()? {
                    Some(s.trim().to_string())
                } else {
                    unreachable!()
                }
            }
            _ => None,
        };
        expect(parser, Token::RBracket, "']' to close the key index")?;
        Some(sub)
    } else {
        None
    };

    if parser.peek() != Some(&Token::Equals) {
        let (line, column) = parser.position();
        let found = parser.peek().map_or("end of file".to_string(), describe);
        return Err(IniError::syntax(
            format!("unexpected {}, expecting '=' after '{}'", found, key),
            line,
            column,
        ));
    }

    let (line, column) = parser.position();
    let value = match parser.take_value()? {
        Token::Text(text) => RawScalar { text, quoted: false },
        Token::Quoted(text) => RawScalar { text, quoted: true },
        other => {
            return Err(IniError::syntax(
                format!("unexpected {} in value position", describe(&other)),
                line,
                column,
            ));
        }
    };

    expect_line_end(parser)?;
    Ok(Entry { key, sub_key, value })
}

fn insert_entry(section: &mut RawSection, entry: Entry) {
    let Entry { key, sub_key, value } = entry;

    match sub_key {
        // A plain assignment replaces whatever the key held before
        None => {
            section.insert(key, RawValue::Scalar(value));
        }
        Some(sub) => match section.get_mut(&key) {
            Some(RawValue::Entries(entries)) => entries.push((sub, value)),
            _ => {
                section.insert(key, RawValue::Entries(vec![(sub, value)]));
            }
        },
    }
}

fn expect(parser: &mut Parser, expected: Token, what: &str) -> Result<(), IniError> {
    let (line, column) = parser.position();
    let token = parser.bump()?;
    if token != expected {
        return Err(IniError::syntax(
            format!("unexpected {}, expecting {}", describe(&token), what),
            line,
            column,
        ));
    }
    Ok(())
}

fn expect_line_end(parser: &mut Parser) -> Result<(), IniError> {
    match parser.peek() {
        Some(Token::Newline) | Some(Token::Eof) | None => Ok(()),
        Some(tok) => {
            let (line, column) = parser.position();
            Err(IniError::syntax(
                format!("unexpected {}, expecting end of line", describe(tok)),
                line,
                column,
            ))
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Text(t) => format!("'{}'", t),
        Token::Quoted(_) => "quoted string".into(),
        Token::Equals => "'='".into(),
        Token::LBracket => "'['".into(),
        Token::RBracket => "']'".into(),
        Token::Newline => "end of line".into(),
        Token::Eof => "end of file".into(),
    }
}
