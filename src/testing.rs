//! Testing utilities for validators
//!
//! Assertion macros that report the validator's name and the described value
//! on failure, plus `proptest` strategies for [`Value`](crate::Value) behind
//! the `proptest` feature.
//!
//! # Example
//!
//! ```rust
//! use runtype::{assert_accepts, assert_rejects, predicate::*, Value};
//!
//! assert_accepts!(number(), Value::from(1));
//! assert_rejects!(number(), Value::from(f64::NAN));
//! ```

/// Assert that a validator accepts a value.
///
/// Panics with the validator's name and the described value otherwise.
///
/// # Example
///
/// ```rust
/// use runtype::{assert_accepts, predicate::*, Value};
///
/// assert_accepts!(array_of(string()), Value::array(["a", "b"]));
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($validator:expr, $value:expr) => {{
        let validator = &$validator;
        let value = &$value;
        if !validator.check(value) {
            panic!(
                "Expected {} to accept {}, but it was rejected",
                validator.name(),
                $crate::describe(value)
            );
        }
    }};
}

/// Assert that a validator rejects a value.
///
/// # Example
///
/// ```rust
/// use runtype::{assert_rejects, predicate::*, Value};
///
/// assert_rejects!(tuple(&[number()]), Value::array([1, 2]));
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($validator:expr, $value:expr) => {{
        let validator = &$validator;
        let value = &$value;
        if validator.check(value) {
            panic!(
                "Expected {} to reject {}, but it was accepted",
                validator.name(),
                $crate::describe(value)
            );
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::Value;

/// Leaf values: every primitive kind, the IEEE specials included.
#[cfg(feature = "proptest")]
pub fn arb_primitive() -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            Just(-0.0)
        ]
        .prop_map(Value::Number),
        (-1_000_000i32..1_000_000).prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::BigInt(i128::from(n))),
        "[a-z]{0,8}".prop_map(Value::String),
        proptest::option::of("[a-z]{1,4}").prop_map(|d| Value::symbol(d.as_deref())),
        "[a-z]{0,4}".prop_map(|name| Value::function(name)),
    ]
    .boxed()
}

/// Arbitrary acyclic values: primitives nested in arrays, plain objects,
/// maps and sets.
#[cfg(feature = "proptest")]
pub fn arb_value() -> BoxedStrategy<Value> {
    arb_primitive()
        .prop_recursive(3, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(|items| Value::array(items)),
                prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..4)
                    .prop_map(|entries| Value::object(entries)),
                prop::collection::vec((inner.clone(), inner.clone()), 0..3)
                    .prop_map(|entries| Value::map(entries)),
                prop::collection::vec(inner, 0..4).prop_map(|members| Value::set(members)),
            ]
        })
        .boxed()
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        arb_value()
    }
}

#[cfg(test)]
mod tests {
    use crate::predicate::{number, string};
    use crate::Value;

    #[test]
    fn assert_accepts_macro() {
        assert_accepts!(number(), Value::from(3));
    }

    #[test]
    fn assert_rejects_macro() {
        assert_rejects!(string(), Value::from(3));
    }

    #[test]
    #[should_panic(expected = "Expected number to accept \"3\", but it was rejected")]
    fn assert_accepts_panics_on_rejection() {
        assert_accepts!(number(), Value::from("3"));
    }

    #[test]
    #[should_panic(expected = "Expected string to reject \"3\", but it was accepted")]
    fn assert_rejects_panics_on_acceptance() {
        assert_rejects!(string(), Value::from("3"));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::predicate;
        use crate::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_values_are_described(value in any::<Value>()) {
                prop_assert!(!crate::describe(&value).is_empty());
            }

            #[test]
            fn any_and_never_are_total(value in super::super::arb_value()) {
                prop_assert!(predicate::any().check(&value));
                prop_assert!(!predicate::never().check(&value));
            }
        }
    }
}
