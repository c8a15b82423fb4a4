//! # runtype
//!
//! Runtime type validators for dynamic values.
//!
//! A *type* here is a named predicate: a total function from a [`Value`] to
//! `bool`, paired with a display name that reads like the expression that
//! built it. Primitive validators cover the built-in kinds, combinators build
//! compound ones, and the assertion API turns a failed check into a readable
//! error message.
//!
//! ## Quick Example
//!
//! ```rust
//! use runtype::prelude::*;
//!
//! let config = object_with_only_these_properties([
//!     ("host", string()),
//!     ("port", integer()),
//!     ("tls", optional(boolean())),
//! ]);
//!
//! let good = Value::object([("host", Value::from("localhost")), ("port", Value::from(8080))]);
//! assert!(is_of_type(&good, &config));
//!
//! let bad = Value::object([("host", Value::from("localhost")), ("port", Value::from("80"))]);
//! let err = assert_type(&bad, &config).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Expected value of type objectWithOnlyTheseProperties({ host: string, port: integer, tls: optional(boolean) }), \
//!      but received {\"host\":\"localhost\",\"port\":\"80\"}"
//! );
//! ```
//!
//! ## Values
//!
//! [`Value`] models what a dynamically typed host distinguishes at runtime,
//! including `undefined` versus `null`, `NaN`, big integers, symbols, class
//! instances and cyclic objects. JSON converts directly:
//!
//! ```rust
//! use runtype::{predicate::*, Value};
//!
//! let value = Value::from(serde_json::json!({ "ids": [1, 2, 3] }));
//! assert!(object_with_properties([("ids", array_of(integer()))]).check(&value));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for failed assertions, usage errors and
//!   describe fallbacks.
//! - `proptest`: expose value strategies in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod api;
pub mod describe;
pub mod error;
pub mod predicate;
pub mod testing;
pub mod value;

// Re-exports
pub use api::{
    as_type, assert_type, assert_type_value, assert_type_with, default_message,
    default_message_for, is_of_type, is_of_type_value,
};
pub use describe::{describe, describe_with, DescribeError, DescribeOptions};
pub use error::{AssertTypeError, TypeError, UsageError};
pub use predicate::{Predicate, Validator};
pub use value::{
    BufferKind, Class, ClassBuilder, Function, Intrinsic, Object, ObjectKind, PropertyKey,
    Symbol, Value,
};

/// Prelude module for convenient imports
///
/// Every validator and combinator, the query/assertion API, and the value
/// types needed to build inputs.
///
/// # Example
///
/// ```rust
/// use runtype::prelude::*;
///
/// let point = tuple(&[number(), number()]);
/// assert!(is_of_type(&Value::array([1, 2]), &point));
/// assert!(assert_type(&Value::array([1]), &point).is_err());
/// ```
pub mod prelude {
    pub use crate::api::{
        as_type, assert_type, assert_type_value, assert_type_with, is_of_type, is_of_type_value,
    };
    pub use crate::describe::{describe, describe_with, DescribeOptions};
    pub use crate::error::{AssertTypeError, TypeError, UsageError};
    pub use crate::predicate::*;
    pub use crate::value::{Class, Function, Object, PropertyKey, Symbol, Value};
}
