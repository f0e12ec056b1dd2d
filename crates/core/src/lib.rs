//! Core types for the lindaspace tuple space
//!
//! This crate defines the data model shared by every other layer:
//! - Value: tagged scalar held at one tuple position
//! - Tuple: ordered, fixed-length sequence of Values
//! - The matching rule between a pattern tuple and a candidate tuple
//!
//! It has no knowledge of the engine's locking, the wire format, or
//! sockets. Matching is pure: no side effects, no failures.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod tuple;
pub mod value;

pub use tuple::Tuple;
pub use value::Value;
