use super::*;

/// Advance the character iterator and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 0;
            lexer.line_start = true;
        } else {
            lexer.column += 1;
            if !c.is_whitespace() {
                lexer.line_start = false;
            }
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Skip blanks and comments, stopping in front of the newline.
///
/// `;` opens a comment anywhere, `#` only as the first thing on a line.
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            ' ' | '\t' | '\r' => {
                bump(lexer);
            }
            ';' => skip_to_line_end(lexer),
            '#' if lexer.line_start => skip_to_line_end(lexer),
            _ => break,
        }
    }
}

fn skip_to_line_end(lexer: &mut Lexer) {
    while let Some(ch) = lexer.peek {
        if ch == '\n' {
            break;
        }
        bump(lexer);
    }
}
