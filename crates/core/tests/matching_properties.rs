//! Property tests for the matching rule
//!
//! These pin the algebra of `Tuple::matches` over arbitrary concrete
//! tuples (doubles restricted to normal values; NaN never matches
//! anything by IEEE-754 equality and is covered by unit tests).

use linda_core::{Tuple, Value};
use proptest::prelude::*;

fn concrete_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        prop::num::f64::NORMAL.prop_map(Value::Double),
        "[a-zA-Z0-9 ,()?]{0,12}".prop_map(Value::String),
    ]
}

fn concrete_tuple() -> impl Strategy<Value = Tuple> {
    prop::collection::vec(concrete_value(), 0..6).prop_map(Tuple::new)
}

proptest! {
    #[test]
    fn concrete_tuple_matches_itself(t in concrete_tuple()) {
        prop_assert!(t.matches(&t));
    }

    #[test]
    fn all_wildcard_pattern_matches_any_same_length_tuple(t in concrete_tuple()) {
        let pattern = Tuple::new(vec![Value::Wildcard; t.len()]);
        prop_assert!(pattern.matches(&t));
    }

    #[test]
    fn length_mismatch_never_matches(t in concrete_tuple()) {
        let mut longer = t.values().to_vec();
        longer.push(Value::Wildcard);
        prop_assert!(!Tuple::new(longer).matches(&t));
    }

    #[test]
    fn matching_is_position_sensitive(a in concrete_value(), b in concrete_value()) {
        prop_assume!(a != b);
        let stored = Tuple::new(vec![a.clone(), b.clone()]);
        let swapped = Tuple::new(vec![b, a]);
        prop_assert!(!swapped.matches(&stored));
    }

    #[test]
    fn single_changed_position_breaks_the_match(t in concrete_tuple(), extra in any::<i64>()) {
        prop_assume!(!t.is_empty());
        for i in 0..t.len() {
            let mut values = t.values().to_vec();
            let replacement = Value::Int(extra);
            prop_assume!(values[i] != replacement);
            values[i] = replacement;
            prop_assert!(!Tuple::new(values).matches(&t));
        }
    }
}
