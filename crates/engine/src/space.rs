//! TupleSpace: the monitor guarding the stored tuples
//!
//! ## Design
//!
//! One `Mutex<Vec<Tuple>>` holds the whole multiset; one `Condvar` is
//! signalled on every insertion. `rd` and `take` run the classic
//! monitor loop: under the lock, collect every matching index; if none
//! match, wait on the condvar (which releases the lock while suspended)
//! and re-evaluate from scratch on wake; if some match, pick one
//! uniformly at random.
//!
//! ## Invariants
//!
//! - The space is only ever observed under the lock: no tuple is seen
//!   mid-mutation and none is counted twice or missed.
//! - `take` does not release the lock between selecting a match and
//!   removing it, so no two `take`s can evict the same tuple.
//! - Every `out` wakes all waiters. Removal never increases the match
//!   set, so `take` does not notify.
//! - Waiters re-check their own pattern after every wake: a woken
//!   `take` may find its candidate already consumed by a competitor and
//!   goes back to waiting. The loop is also safe against spurious
//!   wakeups.
//!
//! ## Selection policy
//!
//! When several stored tuples match a pattern at the moment of
//! selection, the choice among them is uniformly random. This is a
//! fairness guarantee, not an accident: no systematic bias toward
//! insertion order. There is no ordering guarantee among *waiters*;
//! fairness stops at the choice among currently-matching tuples.

use linda_core::Tuple;
use parking_lot::{Condvar, Mutex};
use rand::seq::SliceRandom;
use tracing::{debug, trace};

/// A shared, in-memory, thread-safe multiset of [`Tuple`]s.
///
/// Duplicate tuples may coexist and are distinct entries. Tuples are
/// added by [`out`](TupleSpace::out) and removed only by a successful
/// [`take`](TupleSpace::take). The space lives as long as its owner;
/// share it across connection handlers with `Arc`.
///
/// The engine assumes callers pass well-formed tuples. It does not
/// reject a wildcard-bearing tuple handed to `out` (that rule belongs
/// to the protocol boundary); such a tuple is stored as-is and is only
/// reachable by a pattern with a wildcard in the same position.
#[derive(Default)]
pub struct TupleSpace {
    tuples: Mutex<Vec<Tuple>>,
    tuple_added: Condvar,
}

impl TupleSpace {
    /// Create an empty tuple space
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tuple into the space and wake every blocked `rd`/`take`
    /// so they can re-check their patterns. Never blocks beyond the
    /// lock, never fails. The tuple is immediately visible to every
    /// concurrently-waking waiter.
    pub fn out(&self, tuple: Tuple) {
        let mut tuples = self.tuples.lock();
        debug!(tuple = %tuple, size = tuples.len() + 1, "out");
        tuples.push(tuple);
        self.tuple_added.notify_all();
    }

    /// Block until some stored tuple matches `pattern`, then return a
    /// copy of one uniformly-randomly chosen match, leaving the space
    /// unchanged. Blocks indefinitely if no match ever appears.
    pub fn rd(&self, pattern: &Tuple) -> Tuple {
        let mut tuples = self.tuples.lock();
        loop {
            if let Some(index) = pick_match(&tuples, pattern) {
                let found = tuples[index].clone();
                debug!(pattern = %pattern, tuple = %found, "rd");
                return found;
            }
            trace!(pattern = %pattern, "rd waiting for a match");
            self.tuple_added.wait(&mut tuples);
        }
    }

    /// Block until some stored tuple matches `pattern`, then remove one
    /// uniformly-randomly chosen match from the space and return it.
    ///
    /// This is the Linda `in` operation. Selection and removal happen
    /// under one lock hold: no competing `take` can evict the same
    /// tuple, and no `out`/`rd` observes an intermediate state.
    pub fn take(&self, pattern: &Tuple) -> Tuple {
        let mut tuples = self.tuples.lock();
        loop {
            if let Some(index) = pick_match(&tuples, pattern) {
                let taken = tuples.swap_remove(index);
                debug!(pattern = %pattern, tuple = %taken, size = tuples.len(), "take");
                return taken;
            }
            trace!(pattern = %pattern, "take waiting for a match");
            self.tuple_added.wait(&mut tuples);
        }
    }

    /// Number of tuples currently stored
    pub fn len(&self) -> usize {
        self.tuples.lock().len()
    }

    /// True when no tuples are stored
    pub fn is_empty(&self) -> bool {
        self.tuples.lock().is_empty()
    }
}

/// Scan the whole space for tuples matching `pattern` and pick one of
/// the matching indices uniformly at random. Returns `None` when
/// nothing matches. Callers hold the lock.
fn pick_match(tuples: &[Tuple], pattern: &Tuple) -> Option<usize> {
    let matching: Vec<usize> = tuples
        .iter()
        .enumerate()
        .filter(|(_, tuple)| pattern.matches(tuple))
        .map(|(index, _)| index)
        .collect();
    matching.choose(&mut rand::thread_rng()).copied()
}
