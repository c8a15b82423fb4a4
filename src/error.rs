//! Error types
//!
//! Two families: [`UsageError`] when the library itself is called with
//! malformed arguments, and [`TypeError`] when a value fails an assertion.
//! [`AssertTypeError`] joins them for the dynamic assertion entry point.
//! Predicates themselves never fail; they answer `false`.

use std::error::Error as StdError;
use std::fmt;

/// A library entry point was called with an argument of the wrong shape.
///
/// # Example
///
/// ```
/// use runtype::{is_of_type_value, UsageError, Value};
///
/// let err = is_of_type_value(&Value::from(1), &Value::from("number")).unwrap_err();
/// assert!(matches!(err, UsageError::NotAFunction { .. }));
/// assert_eq!(
///     err.to_string(),
///     "'type' argument passed into 'isOfType' was the wrong type. It should be a function, but it was: \"number\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// An argument failed the validator describing what the entry point
    /// expects.
    WrongType {
        /// Name of the expected validator.
        expected: String,
        /// Rendering of the argument that was passed.
        received: String,
    },
    /// The `type` argument of a dynamic entry point was not a function.
    NotAFunction {
        /// The entry point, `isOfType` or `assertType`.
        api: &'static str,
        /// Rendering of the argument that was passed.
        received: String,
    },
    /// A regular expression could not be compiled.
    InvalidPattern {
        /// The pattern as `/source/flags`.
        pattern: String,
        /// Why compilation failed.
        reason: String,
    },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::WrongType { expected, received } => write!(
                f,
                "Expected value of type {}, but received {}",
                expected, received
            ),
            UsageError::NotAFunction { api, received } => write!(
                f,
                "'type' argument passed into '{}' was the wrong type. It should be a function, but it was: {}",
                api, received
            ),
            UsageError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid regular expression {}: {}", pattern, reason)
            }
        }
    }
}

impl StdError for UsageError {}

/// A value did not satisfy the validator it was asserted against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeError {
    message: String,
}

impl TypeError {
    /// Create an error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        TypeError {
            message: message.into(),
        }
    }

    /// The message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for TypeError {
    fn from(message: String) -> Self {
        TypeError::new(message)
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for TypeError {}

/// Failure of [`assert_type_value`](crate::assert_type_value): either the
/// `type` argument was unusable or the value did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertTypeError {
    /// The `type` argument was not a function.
    Usage(UsageError),
    /// The value failed the check.
    Mismatch(TypeError),
}

impl fmt::Display for AssertTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertTypeError::Usage(e) => write!(f, "{}", e),
            AssertTypeError::Mismatch(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for AssertTypeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AssertTypeError::Usage(e) => Some(e),
            AssertTypeError::Mismatch(e) => Some(e),
        }
    }
}

impl From<UsageError> for AssertTypeError {
    fn from(e: UsageError) -> Self {
        AssertTypeError::Usage(e)
    }
}

impl From<TypeError> for AssertTypeError {
    fn from(e: TypeError) -> Self {
        AssertTypeError::Mismatch(e)
    }
}
