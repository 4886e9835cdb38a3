use std::fmt;

use crate::error::ParseError;

/// A lexical token of WKT text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token<'a> {
    Word(&'a str),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "'{word}'"),
            Token::Number(n) => write!(f, "number {n}"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
        }
    }
}

/// A token and the byte offset where it starts.
pub(crate) type Spanned<'a> = (usize, Token<'a>);

fn is_number_start(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.')
}

fn is_number_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'+' | b'.')
}

/// Split WKT text into tokens, skipping whitespace.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Spanned<'_>>, ParseError> {
    let bytes = text.as_bytes();
    let mut tokens = vec![];
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let b = bytes[pos];
        let token = match b {
            b if b.is_ascii_whitespace() => {
                pos += 1;
                continue;
            }
            b'(' => {
                pos += 1;
                Token::LeftParen
            }
            b')' => {
                pos += 1;
                Token::RightParen
            }
            b',' => {
                pos += 1;
                Token::Comma
            }
            b if b.is_ascii_alphabetic() => {
                while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
                    pos += 1;
                }
                Token::Word(&text[start..pos])
            }
            b if is_number_start(b) => {
                while pos < bytes.len() && is_number_continue(bytes[pos]) {
                    pos += 1;
                }
                let literal = &bytes[start..pos];
                let value = lexical_core::parse::<f64>(literal).map_err(|_| {
                    ParseError::new(
                        start,
                        format!("invalid number '{}'", String::from_utf8_lossy(literal)),
                    )
                })?;
                if !value.is_finite() {
                    return Err(ParseError::new(start, "numbers must be finite"));
                }
                Token::Number(value)
            }
            _ => {
                let ch = text[start..].chars().next().unwrap_or_default();
                return Err(ParseError::new(start, format!("unexpected character {ch:?}")));
            }
        };
        tokens.push((start, token));
    }

    Ok(tokens)
}
