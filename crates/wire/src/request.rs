//! Request decoding and validation

use std::fmt;

use linda_core::Tuple;

use crate::error::ProtocolError;
use crate::literal::parse_tuple;

/// The three tuple-space operations as wire keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `-out`: insert a tuple
    Out,
    /// `-rd`: blocking non-destructive read
    Rd,
    /// `-in`: blocking destructive read
    In,
}

impl Command {
    /// Parse a wire keyword
    pub fn from_keyword(keyword: &str) -> Result<Self, ProtocolError> {
        match keyword {
            "-out" => Ok(Command::Out),
            "-rd" => Ok(Command::Rd),
            "-in" => Ok(Command::In),
            other => Err(ProtocolError::UnknownCommand(other.to_string())),
        }
    }

    /// The wire keyword for this command
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Out => "-out",
            Command::Rd => "-rd",
            Command::In => "-in",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One decoded request line: a command plus the tuple (or pattern) it
/// applies to
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The requested operation
    pub command: Command,
    /// The tuple to store, or the pattern to match
    pub tuple: Tuple,
}

impl Request {
    /// Protocol-level validation beyond the grammar: a wildcard may not
    /// appear in an `-out` tuple. Called by the server handler before
    /// the engine is invoked, and by the client before connecting. Not
    /// an engine invariant.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        if self.command == Command::Out && self.tuple.has_wildcard() {
            return Err(ProtocolError::WildcardInOut);
        }
        Ok(())
    }
}

/// Decode one request line into a [`Request`].
///
/// The line is a command keyword, whitespace, then one parenthesized
/// tuple literal. Surrounding whitespace is ignored.
pub fn parse_request(line: &str) -> Result<Request, ProtocolError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ProtocolError::MissingCommand);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    };

    let command = Command::from_keyword(keyword)?;
    if rest.is_empty() {
        return Err(ProtocolError::MissingTuple);
    }
    let tuple = parse_tuple(rest)?;

    Ok(Request { command, tuple })
}
