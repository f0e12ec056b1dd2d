//! Protocol-level errors
//!
//! All of these are detected at the handler boundary before the engine
//! is invoked, reported to the client as a single reply line, and leave
//! the connection open for further requests.

use thiserror::Error;

/// Errors produced while decoding or validating a request line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The request line was blank
    #[error("empty request")]
    MissingCommand,

    /// The command keyword is not one of -out, -rd, -in
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command was not followed by a tuple literal
    #[error("missing tuple literal")]
    MissingTuple,

    /// The tuple literal is not enclosed in one matching pair of parentheses
    #[error("tuple literal must be enclosed in parentheses")]
    Unparenthesized,

    /// Input continued after the closing parenthesis
    #[error("unexpected input after closing parenthesis")]
    TrailingInput,

    /// A string literal was opened but never closed
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A bare token is neither an integer, a float, nor a wildcard
    #[error("invalid literal: {0}")]
    InvalidLiteral(String),

    /// A wildcard appeared in an -out tuple
    #[error("wildcard ? is not allowed in -out")]
    WildcardInOut,
}
