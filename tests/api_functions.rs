//! Integration tests for the query and assertion entry points

use runtype::predicate::*;
use runtype::{
    as_type, assert_type, assert_type_value, assert_type_with, default_message, is_of_type,
    is_of_type_value, AssertTypeError, Class, Function, TypeError, UsageError, Value,
};

#[test]
fn basic_queries_and_assertions() {
    assert!(is_of_type(&Value::from("hi"), &string()));
    assert!(assert_type(&Value::from("hi"), &string()).is_ok());

    assert!(!is_of_type(&Value::from(43), &string()));
    let err = assert_type(&Value::from(43), &string()).unwrap_err();
    assert_eq!(err.to_string(), "Expected value of type string, but received 43");

    let potato = object_with_properties([("potato", true_())]);
    assert!(!is_of_type(&Value::from(43), &potato));
    let err = assert_type(&Value::from(43), &potato).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected value of type objectWithProperties({ potato: true }), but received 43"
    );
}

#[test]
fn as_type_returns_its_input() {
    let some_object = Value::object::<&str, Value>([]);
    assert_eq!(as_type(some_object.clone()), some_object);
}

#[test]
fn assertion_messages_describe_the_value() {
    let cases = [
        (
            Value::object([("potato", false)]),
            r#"Expected value of type string, but received {"potato":false}"#,
        ),
        (
            Value::object([
                ("potato", Value::function("greenThumb")),
                ("eggplant", Value::function("eggplant")),
            ]),
            r#"Expected value of type string, but received {"potato":"<Function greenThumb>","eggplant":"<Function eggplant>"}"#,
        ),
        (
            Value::instance(&Class::new("Something"), [("num", 42)]),
            r#"Expected value of type string, but received "<Something>""#,
        ),
        (
            Value::map([(1, 2), (3, 4)]),
            r#"Expected value of type string, but received {"<Map of size 2>":[[1,2],[3,4]]}"#,
        ),
        (
            Value::set([1, 2, 3, 4, 5, 6]),
            r#"Expected value of type string, but received {"<Set of size 6>":[1,2,3,4,5,6]}"#,
        ),
        (
            Value::Undefined,
            r#"Expected value of type string, but received "<undefined>""#,
        ),
        (
            Value::BigInt(34895084309843905843905840935890438509),
            r#"Expected value of type string, but received "<BigInt 34895084309843905843905840935890438509>""#,
        ),
        (
            Value::symbol(Some("hi")),
            r#"Expected value of type string, but received "<Symbol hi>""#,
        ),
        (
            Value::symbol(None),
            r#"Expected value of type string, but received "<Symbol>""#,
        ),
        (
            Value::function("isArray"),
            r#"Expected value of type string, but received "<Function isArray>""#,
        ),
        (
            Value::Function(Function::anonymous()),
            r#"Expected value of type string, but received "<Function>""#,
        ),
    ];

    for (value, expected) in cases {
        let err = assert_type(&value, &string()).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn cyclic_values_use_the_fallback_rendering() {
    let cyclic = runtype::Object::plain();
    cyclic.set("me", cyclic.clone());
    let err = assert_type(&Value::Object(cyclic), &string()).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Expected value of type string, but received {"[object Object] that failed to serialize due to error":"Converting circular structure to JSON"}"#
    );
}

#[test]
fn custom_message_and_error_kind() {
    #[derive(Debug, PartialEq)]
    struct RangeError(String);

    let result = assert_type_with(
        &Value::from(7),
        &exact_number(5.0),
        |value, ty| format!("{} is not {}", runtype::describe(value), ty.name()),
        RangeError,
    );
    assert_eq!(result, Err(RangeError("7 is not exactNumber(5)".into())));

    let result = assert_type_with(&Value::from(5), &exact_number(5.0), default_message, RangeError);
    assert!(result.is_ok());
}

#[test]
fn dynamic_type_arguments() {
    let ty = Value::from(&array_of(number()));
    assert_eq!(is_of_type_value(&Value::array([1, 2]), &ty), Ok(true));
    assert_eq!(
        assert_type_value(&Value::array(["x"]), &ty),
        Err(AssertTypeError::Mismatch(TypeError::new(
            r#"Expected value of type arrayOf(number), but received ["x"]"#
        )))
    );

    for not_a_function in [Value::Null, Value::from("string"), Value::object([("a", 1)])] {
        assert!(matches!(
            is_of_type_value(&Value::from(1), &not_a_function),
            Err(UsageError::NotAFunction { api: "isOfType", .. })
        ));
        assert!(matches!(
            assert_type_value(&Value::from(1), &not_a_function),
            Err(AssertTypeError::Usage(UsageError::NotAFunction { api: "assertType", .. }))
        ));
    }
}

#[test]
fn opaque_functions_reject_everything() {
    let opaque = Value::function("whatever");
    assert_eq!(is_of_type_value(&Value::from(1), &opaque), Ok(false));
    let err = assert_type_value(&Value::from(1), &opaque).unwrap_err();
    assert_eq!(err.to_string(), "Expected value of type whatever, but received 1");
}

mod through_the_prelude {
    use runtype::prelude::*;

    #[test]
    fn prelude_carries_the_whole_surface() {
        let pair = tuple(&[string(), integer()]);
        let value = Value::array([Value::from("a"), Value::from(1)]);
        assert!(is_of_type(&value, &pair));
        assert_eq!(is_of_type_value(&value, &Value::from(&pair)), Ok(true));
        assert!(assert_type_value(&value, &Value::from(&pair)).is_ok());
        assert_eq!(describe(&value), r#"["a",1]"#);
        assert_eq!(
            describe_with(&value, &DescribeOptions { max_depth: 0 }),
            r#"{"a,1 that failed to serialize due to error":"Maximum nesting depth of 0 exceeded"}"#
        );
    }
}
