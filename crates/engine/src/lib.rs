//! The tuple-space engine
//!
//! A shared, in-memory, thread-safe multiset of tuples with the three
//! Linda operations:
//!
//! - [`TupleSpace::out`] - insert a tuple, waking every blocked reader
//! - [`TupleSpace::rd`] - block until a tuple matches a pattern, return
//!   a copy, leave the space unchanged
//! - [`TupleSpace::take`] - block until a tuple matches, remove it and
//!   return it (the Linda `in` operation; renamed because `in` is a
//!   Rust keyword)
//!
//! The engine knows nothing about text formats or sockets. It is
//! constructed explicitly and shared via `Arc`; there is no global
//! instance.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod space;

pub use space::TupleSpace;
