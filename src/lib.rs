//! Lindaspace - a Linda-style tuple space
//!
//! A shared, in-memory, thread-safe associative store of variable-length
//! heterogeneous tuples, accessed through three operations: `out`
//! (insert), `rd` (blocking non-destructive read) and `take` (blocking
//! destructive read, the Linda `in`), with wildcard pattern matching
//! and uniformly-random selection among multiple matches.
//!
//! # Quick Start
//!
//! ```
//! use lindaspace::{Tuple, TupleSpace, Value};
//!
//! let space = TupleSpace::new();
//! space.out(Tuple::new(vec![Value::from("job"), Value::Int(42)]));
//!
//! // Wildcards match any value at their position.
//! let pattern = Tuple::new(vec![Value::from("job"), Value::Wildcard]);
//! let found = space.rd(&pattern);
//! assert_eq!(found.values()[1], Value::Int(42));
//! ```
//!
//! # Architecture
//!
//! Strictly layered: [`TupleSpace`] is the leaf engine with no
//! knowledge of text formats or sockets; the wire codec
//! ([`parse_request`], [`Reply`]) and the TCP front end ([`serve`])
//! sit on top. Embedders that only need coordination inside one
//! process can use the engine directly and skip the network layer.

pub use linda_core::{Tuple, Value};
pub use linda_engine::TupleSpace;
pub use linda_server::{handle_connection, serve};
pub use linda_wire::{parse_request, parse_tuple, Command, ProtocolError, Reply, Request};
