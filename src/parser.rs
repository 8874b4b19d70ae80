//! Recursive-descent parsing of token sequences into [`Value`] trees.
//!
//! The [`Parser`] owns a token list and a single cursor shared across its
//! recursive calls. Each successful `expect` advances the cursor by
//! exactly one token; reading past the end of the sequence fails with an
//! end-of-input error naming what was required.
//!
//! The top level is permissive: a document may be an object, an array, or
//! any bare primitive. After the document value, remaining tokens are a
//! hard error — a failed or partial parse never yields a half-built tree.
//!
//! Grammar leniencies carried by this parser:
//!
//! - the comma between object entries is optional
//! - duplicate keys within one object resolve last-write-wins
//!
//! and one strictness: a trailing comma directly before `}` or `]` is
//! rejected.
//!
//! ## Usage
//!
//! ```rust
//! use lax_json::Parser;
//!
//! let mut parser = Parser::from_str("{\"key\": \"value\"}").unwrap();
//! let doc = parser.parse().unwrap();
//! assert_eq!(doc.find_by_key("key").and_then(|v| v.as_str()), Some("value"));
//! ```

use crate::coerce::FromValue;
use crate::lexer::Tokenizer;
use crate::token::{Token, TokenKind};
use crate::{Error, Map, Result, Value};

/// The recursive-descent parser.
///
/// Holds the token sequence and the cursor; no state survives between
/// [`parse`](Parser::parse) invocations except the tokens themselves, so
/// a parser may be re-run and independent parsers never share anything.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Creates a parser over an already-tokenized sequence.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    /// Tokenizes the input text and creates a parser over the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] if tokenization fails.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> Result<Self> {
        Ok(Parser::new(Tokenizer::new(input).tokenize()?))
    }

    /// Parses the token sequence into a single document value.
    ///
    /// The cursor is reset first, so calling `parse` twice yields the same
    /// result. An object, an array, or a bare primitive is accepted at the
    /// top level; tokens left over after the document value are rejected.
    ///
    /// # Errors
    ///
    /// Returns a parse error on empty input, malformed structure,
    /// premature end of input, or trailing tokens.
    pub fn parse(&mut self) -> Result<Value> {
        if self.tokens.is_empty() {
            return Err(Error::parse("no tokens to parse"));
        }
        self.position = 0;
        let value = match self.peek("a value")?.kind() {
            TokenKind::ObjectOpen => self.parse_object()?,
            TokenKind::ArrayOpen => Value::Array(self.parse_array()?),
            TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => self.parse_value()?,
            other => {
                return Err(Error::unexpected_token("a value", other));
            }
        };
        if self.position < self.tokens.len() {
            let trailing = self.tokens[self.position].kind();
            return Err(Error::parse(format!(
                "trailing tokens after the document, starting with {trailing}"
            )));
        }
        Ok(value)
    }

    /// Parses an array at the current cursor position, returning its
    /// elements.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the cursor is not at `[`, an element is
    /// followed by neither `,` nor `]`, a comma trails before `]`, or the
    /// input ends early.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lax_json::Parser;
    ///
    /// let mut parser = Parser::from_str("[1, 2, 3]").unwrap();
    /// let items = parser.parse_array().unwrap();
    /// assert_eq!(items.len(), 3);
    /// ```
    pub fn parse_array(&mut self) -> Result<Vec<Value>> {
        self.expect(TokenKind::ArrayOpen)?;
        let mut items = Vec::new();
        while self.peek("`,` or `]`")?.kind() != TokenKind::ArrayClose {
            items.push(self.parse_value()?);
            match self.peek("`,` or `]`")?.kind() {
                TokenKind::Comma => {
                    self.expect(TokenKind::Comma)?;
                    if self.peek("a value")?.kind() == TokenKind::ArrayClose {
                        return Err(Error::parse("trailing comma before `]`"));
                    }
                }
                TokenKind::ArrayClose => {}
                other => {
                    return Err(Error::unexpected_token("`,` or `]`", other));
                }
            }
        }
        self.expect(TokenKind::ArrayClose)?;
        Ok(items)
    }

    /// Parses the full document, runs the depth-first key search, and
    /// coerces the found value into `T`.
    ///
    /// # Errors
    ///
    /// Propagates parse errors; returns [`Error::KeyNotFound`] when the
    /// search yields nothing, or a coercion error when the found value has
    /// no conversion path to `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lax_json::Parser;
    ///
    /// let mut parser = Parser::from_str("{\"outer\": {\"count\": 3}}").unwrap();
    /// let count: i64 = parser.parse_by_key("count").unwrap();
    /// assert_eq!(count, 3);
    /// ```
    pub fn parse_by_key<T: FromValue>(&mut self, key: &str) -> Result<T> {
        let document = self.parse()?;
        let found = document
            .find_by_key(key)
            .cloned()
            .ok_or_else(|| Error::key_not_found(key))?;
        T::from_value(found)
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.expect(TokenKind::ObjectOpen)?;
        let mut object = Map::new();
        while self.peek("`}` or a key")?.kind() != TokenKind::ObjectClose {
            let key = self.expect(TokenKind::String)?.into_text();
            self.expect(TokenKind::Colon)?;
            let value = self.parse_value()?;
            // Duplicate keys: last write wins.
            object.insert(key, value);
            if self.peek("`}` or a key")?.kind() == TokenKind::Comma {
                self.expect(TokenKind::Comma)?;
                if self.peek("a key")?.kind() == TokenKind::ObjectClose {
                    return Err(Error::parse("trailing comma before `}`"));
                }
            }
        }
        self.expect(TokenKind::ObjectClose)?;
        Ok(Value::Object(object))
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.peek("a value")?.kind() {
            TokenKind::Number => {
                let token = self.expect(TokenKind::Number)?;
                number_from_literal(token.text())
            }
            TokenKind::String => Ok(Value::String(self.expect(TokenKind::String)?.into_text())),
            TokenKind::True => {
                self.expect(TokenKind::True)?;
                Ok(Value::Bool(true))
            }
            TokenKind::False => {
                self.expect(TokenKind::False)?;
                Ok(Value::Bool(false))
            }
            TokenKind::Null => {
                self.expect(TokenKind::Null)?;
                Ok(Value::Null)
            }
            TokenKind::ObjectOpen => self.parse_object(),
            TokenKind::ArrayOpen => Ok(Value::Array(self.parse_array()?)),
            other @ (TokenKind::ObjectClose
            | TokenKind::ArrayClose
            | TokenKind::Comma
            | TokenKind::Colon) => Err(Error::unexpected_token("a value", other)),
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<Token> {
        if self.position >= self.tokens.len() {
            return Err(Error::eof(expected));
        }
        let token = self.tokens[self.position].clone();
        self.position += 1;
        if token.kind() != expected {
            return Err(Error::unexpected_token(expected, token.kind()));
        }
        Ok(token)
    }

    fn peek(&self, expected: &str) -> Result<&Token> {
        self.tokens
            .get(self.position)
            .ok_or_else(|| Error::eof(expected))
    }
}

/// Converts a number literal into a value: the presence of `.`, `e`, or
/// `E` selects a float, otherwise an integer is parsed.
fn number_from_literal(literal: &str) -> Result<Value> {
    if literal.contains(&['.', 'e', 'E'][..]) {
        literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| Error::InvalidNumber(literal.to_string()))
    } else {
        literal
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| Error::InvalidNumber(literal.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_open() -> Token {
        Token::new(TokenKind::ObjectOpen, "{")
    }

    fn object_close() -> Token {
        Token::new(TokenKind::ObjectClose, "}")
    }

    fn string(text: &str) -> Token {
        Token::new(TokenKind::String, text)
    }

    fn colon() -> Token {
        Token::new(TokenKind::Colon, ":")
    }

    fn comma() -> Token {
        Token::new(TokenKind::Comma, ",")
    }

    fn number(text: &str) -> Token {
        Token::new(TokenKind::Number, text)
    }

    #[test]
    fn test_parse_empty_object() {
        let mut parser = Parser::new(vec![object_open(), object_close()]);
        let result = parser.parse().unwrap();
        assert_eq!(result, Value::Object(Map::new()));
    }

    #[test]
    fn test_parse_simple_object() {
        let mut parser = Parser::new(vec![
            object_open(),
            string("key"),
            colon(),
            string("value"),
            object_close(),
        ]);
        let result = parser.parse().unwrap();
        assert_eq!(
            result.as_object().unwrap().get("key").and_then(|v| v.as_str()),
            Some("value")
        );
    }

    #[test]
    fn test_parse_array_of_numbers() {
        let mut parser = Parser::new(vec![
            Token::new(TokenKind::ArrayOpen, "["),
            number("1"),
            comma(),
            number("2"),
            Token::new(TokenKind::ArrayClose, "]"),
        ]);
        let result = parser.parse_array().unwrap();
        assert_eq!(result, vec![Value::Integer(1), Value::Integer(2)]);
    }

    #[test]
    fn test_parse_empty_array() {
        let mut parser = Parser::new(vec![
            Token::new(TokenKind::ArrayOpen, "["),
            Token::new(TokenKind::ArrayClose, "]"),
        ]);
        assert!(parser.parse_array().unwrap().is_empty());
    }

    #[test]
    fn test_parse_array_with_mixed_types() {
        let mut parser = Parser::new(vec![
            Token::new(TokenKind::ArrayOpen, "["),
            number("1"),
            comma(),
            Token::new(TokenKind::True, "true"),
            comma(),
            Token::new(TokenKind::Null, "null"),
            Token::new(TokenKind::ArrayClose, "]"),
        ]);
        let result = parser.parse_array().unwrap();
        assert_eq!(
            result,
            vec![Value::Integer(1), Value::Bool(true), Value::Null]
        );
    }

    #[test]
    fn test_parse_nested_object() {
        let mut parser = Parser::new(vec![
            object_open(),
            string("key"),
            colon(),
            object_open(),
            string("nestedKey"),
            colon(),
            number("123"),
            object_close(),
            object_close(),
        ]);
        let result = parser.parse().unwrap();
        let nested = result.as_object().unwrap().get("key").unwrap();
        assert_eq!(
            nested.as_object().unwrap().get("nestedKey"),
            Some(&Value::Integer(123))
        );
    }

    #[test]
    fn test_parse_boolean_and_null_values() {
        let mut parser = Parser::new(vec![
            object_open(),
            string("key1"),
            colon(),
            Token::new(TokenKind::True, "true"),
            comma(),
            string("key2"),
            colon(),
            Token::new(TokenKind::Null, "null"),
            object_close(),
        ]);
        let result = parser.parse().unwrap();
        let object = result.as_object().unwrap();
        assert_eq!(object.get("key1"), Some(&Value::Bool(true)));
        assert_eq!(object.get("key2"), Some(&Value::Null));
    }

    #[test]
    fn test_missing_comma_between_entries_is_legal() {
        let mut parser = Parser::new(vec![
            object_open(),
            string("a"),
            colon(),
            number("1"),
            string("b"),
            colon(),
            number("2"),
            object_close(),
        ]);
        let result = parser.parse().unwrap();
        assert_eq!(result.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_colon_names_expected_kind() {
        let mut parser = Parser::new(vec![object_open(), string("key")]);
        let err = parser.parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected end of input, expected Colon"
        );
    }

    #[test]
    fn test_unclosed_array_is_end_of_input() {
        let mut parser = Parser::new(vec![Token::new(TokenKind::ArrayOpen, "["), number("1")]);
        let err = parser.parse_array().unwrap_err();
        assert!(err.to_string().starts_with("unexpected end of input"));
    }

    #[test]
    fn test_array_element_requires_comma_or_close() {
        let mut parser = Parser::new(vec![
            Token::new(TokenKind::ArrayOpen, "["),
            number("1"),
            number("2"),
            Token::new(TokenKind::ArrayClose, "]"),
        ]);
        let err = parser.parse_array().unwrap_err();
        assert_eq!(err.to_string(), "expected `,` or `]`, found Number");
    }

    #[test]
    fn test_trailing_comma_rejected_in_object() {
        let mut parser = Parser::new(vec![
            object_open(),
            string("a"),
            colon(),
            number("1"),
            comma(),
            object_close(),
        ]);
        let err = parser.parse().unwrap_err();
        assert!(err.to_string().contains("trailing comma"));
    }

    #[test]
    fn test_trailing_comma_rejected_in_array() {
        let mut parser = Parser::new(vec![
            Token::new(TokenKind::ArrayOpen, "["),
            number("1"),
            comma(),
            Token::new(TokenKind::ArrayClose, "]"),
        ]);
        let err = parser.parse_array().unwrap_err();
        assert!(err.to_string().contains("trailing comma"));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let mut parser = Parser::new(vec![
            object_open(),
            string("k"),
            colon(),
            number("1"),
            comma(),
            string("k"),
            colon(),
            number("2"),
            object_close(),
        ]);
        let result = parser.parse().unwrap();
        assert_eq!(
            result.as_object().unwrap().get("k"),
            Some(&Value::Integer(2))
        );
        assert_eq!(result.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_bare_top_level_string() {
        let mut parser = Parser::new(vec![string("This is a simple string")]);
        let result = parser.parse().unwrap();
        assert_eq!(result.as_str(), Some("This is a simple string"));
    }

    #[test]
    fn test_empty_token_list() {
        let mut parser = Parser::new(vec![]);
        let err = parser.parse().unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let mut parser = Parser::new(vec![
            object_open(),
            object_close(),
            Token::new(TokenKind::Null, "null"),
        ]);
        let err = parser.parse().unwrap_err();
        assert!(err.to_string().contains("trailing tokens"));
    }

    #[test]
    fn test_structural_token_in_value_position() {
        let mut parser = Parser::new(vec![
            object_open(),
            string("a"),
            colon(),
            colon(),
            object_close(),
        ]);
        let err = parser.parse().unwrap_err();
        assert_eq!(err.to_string(), "expected a value, found Colon");
    }

    #[test]
    fn test_number_conversion_selects_variant() {
        assert_eq!(number_from_literal("42").unwrap(), Value::Integer(42));
        assert_eq!(number_from_literal("4.5").unwrap(), Value::Float(4.5));
        assert_eq!(number_from_literal("1e3").unwrap(), Value::Float(1000.0));
        assert_eq!(number_from_literal("2E2").unwrap(), Value::Float(200.0));
    }

    #[test]
    fn test_integer_overflow_is_invalid_number() {
        let err = number_from_literal("99999999999999999999").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber(_)));
    }

    #[test]
    fn test_parse_resets_cursor() {
        let mut parser = Parser::new(vec![object_open(), object_close()]);
        assert!(parser.parse().is_ok());
        assert!(parser.parse().is_ok());
    }
}
