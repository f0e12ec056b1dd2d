//! Tuple literal scanner
//!
//! Parses `("x", 42, 3.5, ?)` into a [`Tuple`]. A character-level
//! scanner rather than a split-on-comma pass: quoted strings may
//! contain commas, spaces and parentheses, and there is no escape
//! processing beyond the wrapping quotes (so a string cannot contain a
//! double quote).

use linda_core::{Tuple, Value};

use crate::error::ProtocolError;

/// Parse one parenthesized tuple literal.
///
/// The literal must be fully enclosed in one matching pair of
/// parentheses with nothing but whitespace outside them; `()` is the
/// zero-length tuple. Items are comma-separated: a double-quoted
/// string, a signed integer, a signed float (recognized by containing
/// `.`, `e` or `E`), or `?` for a wildcard.
pub fn parse_tuple(literal: &str) -> Result<Tuple, ProtocolError> {
    let mut scanner = Scanner::new(literal);

    scanner.skip_whitespace();
    if !scanner.eat('(') {
        return Err(ProtocolError::Unparenthesized);
    }
    scanner.skip_whitespace();

    let mut values = Vec::new();
    if !scanner.eat(')') {
        loop {
            values.push(scanner.item()?);
            scanner.skip_whitespace();
            if scanner.eat(',') {
                scanner.skip_whitespace();
                continue;
            }
            if scanner.eat(')') {
                break;
            }
            return Err(match scanner.peek() {
                Some(c) => ProtocolError::InvalidLiteral(c.to_string()),
                None => ProtocolError::Unparenthesized,
            });
        }
    }

    scanner.skip_whitespace();
    if scanner.peek().is_some() {
        return Err(ProtocolError::TrailingInput);
    }
    Ok(Tuple::new(values))
}

struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Scanner {
            chars: src.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn item(&mut self) -> Result<Value, ProtocolError> {
        match self.peek() {
            Some('"') => {
                self.bump();
                self.string()
            }
            Some('?') => {
                self.bump();
                Ok(Value::Wildcard)
            }
            Some(_) => self.number(),
            None => Err(ProtocolError::Unparenthesized),
        }
    }

    fn string(&mut self) -> Result<Value, ProtocolError> {
        let mut text = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(Value::String(text)),
                Some(c) => text.push(c),
                None => return Err(ProtocolError::UnterminatedString),
            }
        }
    }

    fn number(&mut self) -> Result<Value, ProtocolError> {
        let mut token = String::new();
        while let Some(c) = self.peek() {
            if c == ',' || c == ')' || c.is_whitespace() {
                break;
            }
            token.push(c);
            self.bump();
        }
        if token.is_empty() {
            // a delimiter sat where an item was expected, e.g. "(,1)"
            let found = self.bump().map(String::from).unwrap_or_default();
            return Err(ProtocolError::InvalidLiteral(found));
        }
        if token.contains(&['.', 'e', 'E'][..]) {
            token
                .parse::<f64>()
                .map(Value::Double)
                .map_err(|_| ProtocolError::InvalidLiteral(token))
        } else {
            token
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ProtocolError::InvalidLiteral(token))
        }
    }
}
