//! Query and assertion entry points
//!
//! The typed forms take a [`Validator`] and cannot be misused. The `_value`
//! forms accept the validator as a dynamic [`Value`], as a host would pass
//! it, and report a [`UsageError`] when it is not callable.
//!
//! # Example
//!
//! ```rust
//! use runtype::{assert_type, is_of_type, predicate::*, Value};
//!
//! assert!(is_of_type(&Value::from(2), &number()));
//!
//! let err = assert_type(&Value::from(43), &string()).unwrap_err();
//! assert_eq!(err.to_string(), "Expected value of type string, but received 43");
//! ```

use crate::describe::describe;
use crate::predicate::Validator;
use crate::{AssertTypeError, TypeError, UsageError, Value};

/// Check an argument passed to a library entry point.
pub(crate) fn expect_argument(value: &Value, expected: &Validator) -> Result<(), UsageError> {
    if expected.check(value) {
        return Ok(());
    }
    let err = UsageError::WrongType {
        expected: expected.name().to_owned(),
        received: describe(value),
    };
    #[cfg(feature = "tracing")]
    tracing::warn!("invalid argument: {}", err);
    Err(err)
}

fn not_a_function(api: &'static str, received: &Value) -> UsageError {
    let err = UsageError::NotAFunction {
        api,
        received: describe(received),
    };
    #[cfg(feature = "tracing")]
    tracing::warn!("invalid argument: {}", err);
    err
}

/// Run a dynamic validator, which may be any function value.
fn call_validator(value: &Value, ty: &crate::Function) -> bool {
    ty.call(&Value::Undefined, std::slice::from_ref(value))
        .is_truthy()
}

/// Whether `value` satisfies `ty`.
pub fn is_of_type(value: &Value, ty: &Validator) -> bool {
    ty.check(value)
}

/// Whether `value` satisfies the function `ty`, judged by the truthiness of
/// its result.
///
/// # Errors
///
/// [`UsageError::NotAFunction`] when `ty` is not a function.
///
/// # Example
///
/// ```rust
/// use runtype::{is_of_type_value, predicate::number, Value};
///
/// let ty = Value::from(&number());
/// assert_eq!(is_of_type_value(&Value::from(1), &ty), Ok(true));
/// assert_eq!(is_of_type_value(&Value::from("1"), &ty), Ok(false));
/// assert!(is_of_type_value(&Value::from(1), &Value::Null).is_err());
/// ```
pub fn is_of_type_value(value: &Value, ty: &Value) -> Result<bool, UsageError> {
    match ty {
        Value::Function(f) => Ok(call_validator(value, f)),
        other => Err(not_a_function("isOfType", other)),
    }
}

/// `Expected value of type <name>, but received <described value>`.
pub fn default_message(value: &Value, ty: &Validator) -> String {
    format!(
        "Expected value of type {}, but received {}",
        ty.name(),
        describe(value)
    )
}

/// [`default_message`] for a validator given as a dynamic value.
///
/// A function without a name shows as `<unknown>`; anything that is not a
/// function shows as `<invalid type validator: ...>`.
pub fn default_message_for(value: &Value, ty: &Value) -> String {
    let name = match ty {
        Value::Function(f) if f.name().is_empty() => "<unknown>".to_owned(),
        Value::Function(f) => f.name().to_owned(),
        other => format!("<invalid type validator: {}>", describe(other)),
    };
    format!(
        "Expected value of type {}, but received {}",
        name,
        describe(value)
    )
}

/// Fail with a [`TypeError`] carrying [`default_message`] unless `value`
/// satisfies `ty`.
///
/// # Errors
///
/// [`TypeError`] when the check fails.
pub fn assert_type(value: &Value, ty: &Validator) -> Result<(), TypeError> {
    assert_type_with(value, ty, default_message, TypeError::new)
}

/// Like [`assert_type`], with a custom message and error constructor.
///
/// # Example
///
/// ```rust
/// use runtype::{assert_type_with, predicate::string, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct ConfigError(String);
///
/// let result = assert_type_with(
///     &Value::from(8080),
///     &string(),
///     |_, ty| format!("host must be a {}", ty),
///     ConfigError,
/// );
/// assert_eq!(result, Err(ConfigError("host must be a string".into())));
/// ```
pub fn assert_type_with<E, M, C>(value: &Value, ty: &Validator, message: M, error: C) -> Result<(), E>
where
    M: FnOnce(&Value, &Validator) -> String,
    C: FnOnce(String) -> E,
{
    if ty.check(value) {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!("value failed assertion against {}", ty.name());
    Err(error(message(value, ty)))
}

/// [`assert_type`] for a validator given as a dynamic value.
///
/// # Errors
///
/// [`AssertTypeError::Usage`] when `ty` is not a function and
/// [`AssertTypeError::Mismatch`] when the check fails.
pub fn assert_type_value(value: &Value, ty: &Value) -> Result<(), AssertTypeError> {
    let Value::Function(f) = ty else {
        return Err(not_a_function("assertType", ty).into());
    };
    if call_validator(value, f) {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!("value failed assertion against {}", f.name());
    Err(TypeError::new(default_message_for(value, ty)).into())
}

/// Pass `value` through unchanged. Performs no check.
pub fn as_type<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{number, string};
    use crate::Function;

    #[test]
    fn typed_assertions() {
        assert!(assert_type(&Value::from("x"), &string()).is_ok());
        let err = assert_type(&Value::from(43), &string()).unwrap_err();
        assert_eq!(err.message(), "Expected value of type string, but received 43");
    }

    #[test]
    fn custom_error_kind() {
        let result: Result<(), String> =
            assert_type_with(&Value::Null, &number(), default_message, |m| m);
        assert_eq!(result.unwrap_err(), "Expected value of type number, but received null");
    }

    #[test]
    fn dynamic_validators() {
        let ty = Value::from(&number());
        assert_eq!(is_of_type_value(&Value::from(3), &ty), Ok(true));
        assert!(assert_type_value(&Value::from(3), &ty).is_ok());

        let err = assert_type_value(&Value::from("3"), &ty).unwrap_err();
        assert_eq!(
            err,
            AssertTypeError::Mismatch(TypeError::new(
                "Expected value of type number, but received \"3\""
            ))
        );
    }

    #[test]
    fn native_functions_answer_by_truthiness() {
        let non_empty = Value::Function(Function::native("nonEmpty", |_this, args| {
            args.first().map_or(Value::from(0), |v| v.get("length"))
        }));
        assert_eq!(is_of_type_value(&Value::array([1]), &non_empty), Ok(true));
        assert_eq!(is_of_type_value(&Value::array::<[i32; 0]>([]), &non_empty), Ok(false));
    }

    #[test]
    fn non_function_type_arguments() {
        let err = is_of_type_value(&Value::from(1), &Value::object([("a", 1)])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'type' argument passed into 'isOfType' was the wrong type. It should be a function, but it was: {\"a\":1}"
        );
        let err = assert_type_value(&Value::from(1), &Value::Undefined).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'type' argument passed into 'assertType' was the wrong type. It should be a function, but it was: \"<undefined>\""
        );
    }

    #[test]
    fn messages_for_dynamic_validators() {
        assert_eq!(
            default_message_for(&Value::from(1), &Value::Function(Function::anonymous())),
            "Expected value of type <unknown>, but received 1"
        );
        assert_eq!(
            default_message_for(&Value::from(1), &Value::from(5)),
            "Expected value of type <invalid type validator: 5>, but received 1"
        );
    }

    #[test]
    fn expect_argument_reports_wrong_type() {
        assert!(expect_argument(&Value::from(1), &number()).is_ok());
        assert_eq!(
            expect_argument(&Value::from("1"), &number()),
            Err(UsageError::WrongType {
                expected: "number".into(),
                received: "\"1\"".into(),
            })
        );
    }

    #[test]
    fn as_type_is_identity() {
        let v = Value::from(1);
        assert_eq!(as_type(v.clone()), v);
    }
}
