//! Property-based tests for validators and describe, run with `--features proptest`

use proptest::prelude::*;
use runtype::predicate as t;
use runtype::testing::{arb_primitive, arb_value};
use runtype::{assert_type, describe, Value};

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        Just(-0.0),
        (-1000i32..1000).prop_map(f64::from),
    ]
}

proptest! {
    #[test]
    fn prop_number_excludes_exactly_the_specials(n in arb_number()) {
        let v = Value::from(n);
        let expected = t::number_including_nan_and_infinities().check(&v)
            && !t::nan().check(&v)
            && !t::infinity().check(&v)
            && !t::negative_infinity().check(&v);
        prop_assert_eq!(t::number().check(&v), expected);
    }

    #[test]
    fn prop_integer_implies_number(n in arb_number()) {
        let v = Value::from(n);
        if t::integer().check(&v) {
            prop_assert!(t::number().check(&v));
            prop_assert_eq!(n.fract(), 0.0);
        }
    }

    #[test]
    fn prop_primitives_are_deterministic(value in arb_value()) {
        let catalog = [
            t::any(),
            t::boolean(),
            t::string(),
            t::null(),
            t::undefined(),
            t::nullish(),
            t::number(),
            t::integer(),
            t::nan(),
            t::falsy(),
            t::truthy(),
            t::non_null_or_undefined(),
            t::any_object(),
            t::array(),
            t::map(),
            t::set(),
            t::error(),
            t::date(),
            t::regexp(),
        ];
        for ty in &catalog {
            prop_assert_eq!(ty.check(&value), ty.check(&value));
        }
    }

    #[test]
    fn prop_primitives_are_never_objects(value in arb_primitive()) {
        prop_assert!(!t::any_object().check(&value));
        prop_assert!(!t::array().check(&value));
    }

    #[test]
    fn prop_falsy_and_truthy_partition(value in any::<Value>()) {
        prop_assert_ne!(t::falsy().check(&value), t::truthy().check(&value));
    }

    #[test]
    fn prop_nullish_is_null_or_undefined(value in arb_value()) {
        prop_assert_eq!(
            t::nullish().check(&value),
            t::null().check(&value) || t::undefined().check(&value)
        );
        prop_assert_eq!(t::non_null_or_undefined().check(&value), !t::nullish().check(&value));
    }

    #[test]
    fn prop_union_and_intersection_agree_with_members(value in arb_value()) {
        let members = [t::number(), t::string(), t::null()];
        let any_member = members.iter().any(|ty| ty.check(&value));
        let all_members = members.iter().all(|ty| ty.check(&value));
        prop_assert_eq!(t::union(&members).check(&value), any_member);
        prop_assert_eq!(t::intersection(&members).check(&value), all_members);
    }

    #[test]
    fn prop_maybe_is_a_union_with_nullish(value in arb_value()) {
        prop_assert_eq!(
            t::maybe(t::string()).check(&value),
            t::union(&[t::string(), t::undefined(), t::null()]).check(&value)
        );
    }

    #[test]
    fn prop_array_of_checks_every_element(items in prop::collection::vec(arb_number(), 0..8)) {
        let value = Value::array(items.iter().copied());
        let expected = items.iter().all(|n| n.is_finite());
        prop_assert_eq!(t::array_of(t::number()).check(&value), expected);
    }

    #[test]
    fn prop_tuple_requires_exact_length(len in 0usize..6) {
        let value = Value::array(vec![Value::from(1); len]);
        let ty = t::tuple(&[t::number(), t::number(), t::number()]);
        prop_assert_eq!(ty.check(&value), len == 3);
    }

    #[test]
    fn prop_exact_string_accepts_only_itself(a in "[a-z]{0,5}", b in "[a-z]{0,5}") {
        let ty = t::exact_string(a.clone());
        prop_assert!(ty.check(&Value::from(a.as_str())));
        prop_assert_eq!(ty.check(&Value::from(b.as_str())), a == b);
    }

    #[test]
    fn prop_string_matching_is_stateless(s in "[a-z]{0,10}") {
        let ty = t::string_matching(&Value::regexp("a", "g")).unwrap();
        let v = Value::from(s.as_str());
        let first = ty.check(&v);
        prop_assert_eq!(ty.check(&v), first);
        prop_assert_eq!(first, s.contains('a'));
    }

    #[test]
    fn prop_describe_never_panics_and_is_stable(value in arb_value()) {
        let rendered = describe(&value);
        prop_assert!(!rendered.is_empty());
        prop_assert_eq!(describe(&value), rendered);
    }

    #[test]
    fn prop_assert_type_message_names_the_validator(value in arb_value()) {
        if let Err(err) = assert_type(&value, &t::never()) {
            prop_assert_eq!(
                err.to_string(),
                format!("Expected value of type never, but received {}", describe(&value))
            );
        } else {
            prop_assert!(false, "never accepted {:?}", value);
        }
    }
}
