//! Tokenization of lenient JSON text.
//!
//! The [`Tokenizer`] performs a single left-to-right scan over the
//! trimmed input with one character of lookahead, producing an ordered
//! [`Token`] sequence. It holds no state after returning; every call to
//! [`tokenize`](Tokenizer::tokenize) is independent.
//!
//! Deviations from strict JSON, by design:
//!
//! - Recognized string escapes are `\n \t \r \b \f \" \\`; any other
//!   character after a backslash is copied verbatim. There is no `\u`
//!   escape support.
//! - Number literals are scanned greedily and then validated against
//!   `-? digits ( '.' digits )? ( [eE] [+-]? digits )?`, so malformed
//!   text such as `1-2.3.4` fails here rather than surfacing later as a
//!   numeric conversion error.
//!
//! ## Usage
//!
//! ```rust
//! use lax_json::{Tokenizer, TokenKind};
//!
//! let tokens = Tokenizer::new("{\"a\": 1}").tokenize().unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind(), TokenKind::ObjectOpen);
//! assert_eq!(tokens[1].text(), "a");
//! ```

use crate::token::{Token, TokenKind};
use crate::{Error, Result};

/// The lenient JSON tokenizer.
///
/// Created via [`Tokenizer::new`]; consumed by [`Tokenizer::tokenize`].
/// Tracks line and column so lex errors point at the offending character.
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given text. Leading and trailing
    /// whitespace is trimmed before scanning.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input: input.trim(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the full input and returns the token sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] on an unterminated string, a malformed
    /// `true`/`false`/`null` keyword, an invalid number literal, or any
    /// other unexpected character.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(current) = self.peek_char() {
            match current {
                '{' => {
                    tokens.push(Token::new(TokenKind::ObjectOpen, "{"));
                    self.next_char();
                }
                '}' => {
                    tokens.push(Token::new(TokenKind::ObjectClose, "}"));
                    self.next_char();
                }
                '[' => {
                    tokens.push(Token::new(TokenKind::ArrayOpen, "["));
                    self.next_char();
                }
                ']' => {
                    tokens.push(Token::new(TokenKind::ArrayClose, "]"));
                    self.next_char();
                }
                ',' => {
                    tokens.push(Token::new(TokenKind::Comma, ","));
                    self.next_char();
                }
                ':' => {
                    tokens.push(Token::new(TokenKind::Colon, ":"));
                    self.next_char();
                }
                '"' => tokens.push(self.lex_string()?),
                't' | 'f' => tokens.push(self.lex_boolean()?),
                'n' => tokens.push(self.lex_null()?),
                c if c.is_ascii_digit() || c == '-' => tokens.push(self.lex_number()?),
                c if c.is_whitespace() => {
                    self.next_char();
                }
                c => {
                    return Err(Error::lex(
                        self.line,
                        self.column,
                        format!("unexpected character `{c}`"),
                    ));
                }
            }
        }
        Ok(tokens)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn lex_string(&mut self) -> Result<Token> {
        self.next_char(); // opening quote
        let mut text = String::new();
        while let Some(ch) = self.next_char() {
            match ch {
                '"' => return Ok(Token::new(TokenKind::String, text)),
                '\\' => match self.next_char() {
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('r') => text.push('\r'),
                    Some('b') => text.push('\u{0008}'),
                    Some('f') => text.push('\u{000C}'),
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    // Unknown escape: the escaped character is kept verbatim.
                    Some(other) => text.push(other),
                    None => break,
                },
                other => text.push(other),
            }
        }
        Err(Error::lex(self.line, self.column, "unterminated string"))
    }

    fn lex_boolean(&mut self) -> Result<Token> {
        if self.input[self.position..].starts_with("true") {
            self.advance_by(4);
            Ok(Token::new(TokenKind::True, "true"))
        } else if self.input[self.position..].starts_with("false") {
            self.advance_by(5);
            Ok(Token::new(TokenKind::False, "false"))
        } else {
            Err(Error::lex(self.line, self.column, "invalid boolean literal"))
        }
    }

    fn lex_null(&mut self) -> Result<Token> {
        if self.input[self.position..].starts_with("null") {
            self.advance_by(4);
            Ok(Token::new(TokenKind::Null, "null"))
        } else {
            Err(Error::lex(self.line, self.column, "invalid null literal"))
        }
    }

    fn lex_number(&mut self) -> Result<Token> {
        let start = self.position;
        let start_line = self.line;
        let start_col = self.column;
        let mut prev = '\0';
        while let Some(ch) = self.peek_char() {
            let take = match ch {
                c if c.is_ascii_digit() => true,
                '.' | '-' | 'e' | 'E' => true,
                // A sign is number-ish only directly after an exponent marker.
                '+' => matches!(prev, 'e' | 'E'),
                _ => false,
            };
            if !take {
                break;
            }
            prev = ch;
            self.next_char();
        }
        let text = &self.input[start..self.position];
        if !is_valid_number(text) {
            return Err(Error::lex(
                start_line,
                start_col,
                format!("invalid number literal `{text}`"),
            ));
        }
        Ok(Token::new(TokenKind::Number, text))
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.next_char();
        }
    }
}

/// Checks a greedily-scanned literal against the number grammar:
/// optional leading `-`, at least one digit, optional fraction with at
/// least one digit, optional exponent with optional sign and at least
/// one digit.
fn is_valid_number(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    if chars.peek() == Some(&'-') {
        chars.next();
    }
    let mut saw_digit = false;
    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        chars.next();
        saw_digit = true;
    }
    if !saw_digit {
        return false;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        let mut saw_fraction = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            saw_fraction = true;
        }
        if !saw_fraction {
            return false;
        }
    }
    if matches!(chars.peek(), Some('e' | 'E')) {
        chars.next();
        if matches!(chars.peek(), Some('+' | '-')) {
            chars.next();
        }
        let mut saw_exponent = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            saw_exponent = true;
        }
        if !saw_exponent {
            return false;
        }
    }
    chars.next().is_none()
}
