//! Named, composable validators over dynamic values
//!
//! A [`Validator`] is a total predicate on [`Value`](crate::Value) together
//! with a display name. The primitive catalog covers the built-in kinds
//! (`number`, `string`, `Date`, `map`, ...); the combinators build compound
//! validators whose names are derived from their inputs, so the name of any
//! validator reads like the expression that built it.
//!
//! # Example
//!
//! ```rust
//! use runtype::{predicate::*, Value};
//!
//! let user = object_with_properties([
//!     ("name", string()),
//!     ("tags", array_of(string())),
//!     ("age", maybe(integer())),
//! ]);
//!
//! assert_eq!(
//!     user.name(),
//!     "objectWithProperties({ name: string, tags: arrayOf(string), age: maybe(integer) })"
//! );
//!
//! let ada = Value::object([
//!     ("name", Value::from("Ada")),
//!     ("tags", Value::array(["math"])),
//! ]);
//! assert!(user.check(&ada));
//! assert!(!user.check(&Value::object([("name", 1)])));
//! ```
//!
//! # Fallback checks
//!
//! Kind checks for dates, regexps, buffers, maps and sets also accept values
//! that merely look like the built-in: a matching internal class tag, or for
//! maps and sets a constructor of the right name with `entries` and `size`.

mod combinators;
mod constructors;
pub(crate) mod naming;
mod primitives;
mod shape;

pub use combinators::{Predicate, Validator};

pub use constructors::{
    and, array_of, exact_bigint, exact_number, exact_string, exact_symbol, has_class_name,
    has_to_string_tag, instance_of, intersection, map_of, maybe, optional, or, set_of,
    string_matching, symbol_for, tuple, union,
};

pub use shape::{
    mapping_object_of, object_with_only_these_properties, object_with_properties,
    partial_object_with_properties, record,
};

pub use primitives::{
    any, any_array, any_function, any_map, any_object, any_set, any_type_validator, array,
    array_buffer, array_of_any, array_of_unknown, bigint, boolean, data_view, date, error,
    false_, falsy, float32_array, float64_array, infinity, int16_array, int32_array, int8_array,
    integer, map, nan, negative_infinity, never, non_null_or_undefined, null, nullish, number,
    number_including_nan_and_infinities, object, regexp, set, shared_array_buffer, string, symbol,
    true_, truthy, uint16_array, uint32_array, uint8_array, uint8_clamped_array, undefined,
    unknown, unknown_function, unknown_map, unknown_object, unknown_set,
};
