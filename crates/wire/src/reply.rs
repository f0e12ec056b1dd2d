//! Reply encoding
//!
//! One human-readable line per request. Successful replies carry the
//! affected tuple with every value tagged by its variant; error replies
//! start with the `ERROR` marker and name the cause.

use std::fmt;

use linda_core::Tuple;

/// The reply to one request, rendered as a single line via `Display`
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// `-out` succeeded; carries the stored tuple
    Stored(Tuple),
    /// `-rd` matched; carries a copy of the matched tuple
    Matched(Tuple),
    /// `-in` matched; carries the removed tuple
    Taken(Tuple),
    /// The request was rejected before reaching the engine
    Error(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Stored(tuple) => write!(f, "Tuple {tuple} stored in tuple space."),
            Reply::Matched(tuple) => write!(f, "Matched tuple: {tuple}"),
            Reply::Taken(tuple) => write!(f, "Removed tuple: {tuple}"),
            Reply::Error(cause) => write!(f, "ERROR {cause}"),
        }
    }
}
