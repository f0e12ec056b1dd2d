//! Text protocol for the tuple space
//!
//! One request/reply pair per round trip, newline-terminated, over a
//! persistent connection. This crate is the single codec shared by the
//! server's request handler and the command-line client, so both sides
//! agree on the grammar and on which requests are rejected.
//!
//! Request line:
//!
//! ```text
//! <command> (<literal>[, <literal>...])
//! ```
//!
//! - `<command>` is `-out`, `-rd` or `-in`
//! - `<literal>` is a double-quoted string (no escape processing), a
//!   signed integer, a signed float (containing `.`, `e` or `E`), or
//!   `?` for a wildcard
//! - the tuple is fully enclosed in one matching pair of parentheses;
//!   `()` is the zero-length tuple
//! - a wildcard in an `-out` request is rejected
//!
//! Replies are single human-readable lines; see [`Reply`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod literal;
mod reply;
mod request;

pub use error::ProtocolError;
pub use literal::parse_tuple;
pub use reply::Reply;
pub use request::{parse_request, Command, Request};
