//! Value types for the tuple space
//!
//! This module defines:
//! - Value: tagged scalar held at a single tuple position
//!
//! ## Value Model
//!
//! The Value enum has exactly 4 variants, matching the wire protocol:
//! - Int, Double, String, Wildcard
//!
//! ### Type Rules
//!
//! - No implicit type coercions
//! - `Int(1) != Double(1.0)` - different variants are NEVER equal
//! - Double uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - Wildcard carries no data; it only occurs in patterns. A stored
//!   tuple is normally wildcard-free (enforced at the protocol
//!   boundary, not here).

use std::fmt;

/// A single scalar stored in (or matched against) a tuple position.
///
/// ## Variant Equality
///
/// Different variants are NEVER equal, even for the same "number":
/// - `Int(1) != Double(1.0)`
///
/// Double equality follows IEEE-754 semantics:
/// - `NaN != NaN`
/// - `-0.0 == 0.0`
///
/// `Wildcard` equals only itself under `PartialEq`; its special
/// match-anything behavior lives in [`Value::admits`], not in equality.
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer (wire tag `int64`)
    Int(i64),
    /// 64-bit IEEE-754 float (wire tag `double`)
    Double(f64),
    /// UTF-8 string (wire tag `string`)
    String(String),
    /// Pattern-only marker matching any value, carrying no data (wire form `?`)
    Wildcard,
}

// Custom PartialEq implementation for IEEE-754 double semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Wildcard, Value::Wildcard) => true,
            // Different variants are NEVER equal
            _ => false,
        }
    }
}

impl Value {
    /// Get the wire tag for this variant
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int64",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Wildcard => "?",
        }
    }

    /// Check if this is the wildcard marker
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Value::Wildcard)
    }

    /// Per-position matching rule, with `self` on the pattern side.
    ///
    /// A `Wildcard` pattern position admits any candidate. A
    /// non-wildcard pattern position never admits a `Wildcard`
    /// candidate. Otherwise both sides must hold the same variant and
    /// equal payloads. Variant mismatch is a non-match, not an error.
    pub fn admits(&self, candidate: &Value) -> bool {
        match (self, candidate) {
            (Value::Wildcard, _) => true,
            (_, Value::Wildcard) => false,
            _ => self == candidate,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Double value
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the tagged wire form: `int64 42`, `double 3.5`,
    /// `string "x"`, `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "int64 {i}"),
            // {:?} keeps the decimal point on round doubles (3.0, not 3)
            Value::Double(d) => write!(f, "double {d:?}"),
            Value::String(s) => write!(f, "string \"{s}\""),
            Value::Wildcard => f.write_str("?"),
        }
    }
}

// ============================================================================
// From implementations for ergonomic construction
// ============================================================================

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
