//! The primitive catalog
//!
//! Each function returns a clone of a lazily built static validator. Aliases
//! such as [`any`] and [`unknown`] are separate statics, so each carries its
//! own name.
//!
//! Kind checks for built-in classes combine a direct check (the value is an
//! instance of the intrinsic class) with a fallback: the internal class tag
//! for dates, regexps and buffers, a structural duck check for maps and sets.
//! The fallback accepts instances from another realm or a polyfill.

use std::sync::LazyLock;

use super::Validator;
use crate::{Class, Intrinsic, ObjectKind, Value};

macro_rules! primitive {
    ($(#[$meta:meta])* $fn_name:ident => $display:literal, $check:expr) => {
        $(#[$meta])*
        pub fn $fn_name() -> Validator {
            static VALIDATOR: LazyLock<Validator> = LazyLock::new(|| Validator::new($display, $check));
            VALIDATOR.clone()
        }
    };
}

/// True if `value` is an object whose class chain contains `class`.
pub(crate) fn is_instance_of_class(value: &Value, class: &Class) -> bool {
    match value {
        Value::Object(o) => o.class().is_some_and(|c| c.is_subclass_of(class)),
        _ => false,
    }
}

pub(crate) fn is_intrinsic_instance(value: &Value, intrinsic: Intrinsic) -> bool {
    is_instance_of_class(value, &Class::intrinsic(intrinsic))
}

pub(crate) fn has_tag(value: &Value, tag: &str) -> bool {
    matches!(value, Value::Object(_)) && value.to_string_tag() == tag
}

fn is_finite_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

/// The structural fallback for maps and sets: an object whose constructor
/// is named `class_name`, with a callable `entries` and a numeric `size`.
pub(crate) fn is_collection_like(value: &Value, class_name: &str) -> bool {
    let Value::Object(o) = value else {
        return false;
    };
    value.constructor().is_some_and(|c| c.name() == class_name)
        && matches!(o.get(&"entries".into()), Value::Function(_))
        && is_finite_number(&o.get(&"size".into()))
}

pub(crate) fn is_map(value: &Value) -> bool {
    is_intrinsic_instance(value, Intrinsic::Map) || is_collection_like(value, "Map")
}

pub(crate) fn is_set(value: &Value) -> bool {
    is_intrinsic_instance(value, Intrinsic::Set) || is_collection_like(value, "Set")
}

fn is_tagged_intrinsic(value: &Value, intrinsic: Intrinsic) -> bool {
    is_intrinsic_instance(value, intrinsic) || has_tag(value, intrinsic.name())
}

fn is_array(value: &Value) -> bool {
    matches!(value, Value::Object(o) if o.kind() == ObjectKind::Array)
}

fn is_any_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

fn is_number(value: &Value) -> bool {
    is_finite_number(value)
}

primitive!(
    /// Accepts everything.
    any => "any", |_: &Value| true
);

primitive!(
    /// Accepts everything. Independent of [`any`] apart from the name.
    unknown => "unknown", |_: &Value| true
);

primitive!(
    /// Any non-null object, including arrays, maps, sets and dates.
    ///
    /// ```rust
    /// use runtype::{predicate::any_object, Value};
    ///
    /// assert!(any_object().check(&Value::array([1, 2])));
    /// assert!(!any_object().check(&Value::Null));
    /// assert!(!any_object().check(&Value::function("f")));
    /// ```
    any_object => "anyObject", is_any_object
);

primitive!(
    /// Alias of [`any_object`].
    unknown_object => "unknownObject", is_any_object
);

primitive!(
    /// Alias of [`any_object`].
    object => "object", is_any_object
);

primitive!(
    /// Any array.
    any_array => "anyArray", is_array
);

primitive!(
    /// Alias of [`any_array`].
    array_of_any => "arrayOfAny", is_array
);

primitive!(
    /// Alias of [`any_array`].
    array_of_unknown => "arrayOfUnknown", is_array
);

primitive!(
    /// Alias of [`any_array`].
    array => "array", is_array
);

primitive!(
    /// `true` or `false`.
    boolean => "boolean", |v: &Value| matches!(v, Value::Bool(_))
);

primitive!(
    /// Any string.
    string => "string", |v: &Value| matches!(v, Value::String(_))
);

primitive!(
    /// Exactly `null`.
    null => "null", |v: &Value| matches!(v, Value::Null)
);

primitive!(
    /// Exactly `undefined`.
    undefined => "undefined", |v: &Value| matches!(v, Value::Undefined)
);

primitive!(
    /// `null` or `undefined`.
    nullish => "nullish", Value::is_nullish
);

primitive!(
    /// Any number, including `NaN` and both infinities.
    number_including_nan_and_infinities => "numberIncludingNanAndInfinities",
    |v: &Value| matches!(v, Value::Number(_))
);

primitive!(
    /// A number that is not `NaN`, `Infinity` or `-Infinity`.
    ///
    /// ```rust
    /// use runtype::{predicate::number, Value};
    ///
    /// assert!(number().check(&Value::from(1.5)));
    /// assert!(!number().check(&Value::from(f64::NAN)));
    /// assert!(!number().check(&Value::from(f64::INFINITY)));
    /// ```
    number => "number", is_number
);

primitive!(
    /// Exactly `NaN`.
    nan => "NaN", |v: &Value| matches!(v, Value::Number(n) if n.is_nan())
);

primitive!(
    /// Exactly positive infinity.
    infinity => "Infinity", |v: &Value| matches!(v, Value::Number(n) if *n == f64::INFINITY)
);

primitive!(
    /// Exactly negative infinity.
    negative_infinity => "NegativeInfinity",
    |v: &Value| matches!(v, Value::Number(n) if *n == f64::NEG_INFINITY)
);

primitive!(
    /// A [`number`] with no fractional part.
    integer => "integer", |v: &Value| matches!(v, Value::Number(n) if n.is_finite() && n.fract() == 0.0)
);

primitive!(
    /// Any big integer.
    bigint => "bigint", |v: &Value| matches!(v, Value::BigInt(_))
);

primitive!(
    /// Rejects everything.
    never => "never", |_: &Value| false
);

primitive!(
    /// Any function.
    any_function => "anyFunction", |v: &Value| matches!(v, Value::Function(_))
);

primitive!(
    /// Alias of [`any_function`].
    unknown_function => "unknownFunction", |v: &Value| matches!(v, Value::Function(_))
);

primitive!(
    /// Exactly `false`.
    false_ => "false", |v: &Value| matches!(v, Value::Bool(false))
);

primitive!(
    /// Exactly `true`.
    true_ => "true", |v: &Value| matches!(v, Value::Bool(true))
);

primitive!(
    /// Values that are falsy under host truthiness.
    falsy => "falsy", |v: &Value| !v.is_truthy()
);

primitive!(
    /// Values that are truthy under host truthiness.
    truthy => "truthy", Value::is_truthy
);

primitive!(
    /// Anything but `null` and `undefined`.
    non_null_or_undefined => "nonNullOrUndefined", |v: &Value| !v.is_nullish()
);

primitive!(
    /// An object with string `name`, `message` and `stack` properties.
    error => "Error",
    |v: &Value| {
        let Value::Object(o) = v else { return false };
        ["name", "message", "stack"]
            .iter()
            .all(|field| matches!(o.get(&(*field).into()), Value::String(_)))
    }
);

primitive!(
    /// Any symbol.
    symbol => "Symbol", |v: &Value| matches!(v, Value::Symbol(_))
);

primitive!(
    /// A regular expression, by class or by class tag.
    regexp => "RegExp", |v: &Value| is_tagged_intrinsic(v, Intrinsic::RegExp)
);

primitive!(
    /// A date, by class or by class tag.
    date => "Date", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Date)
);

primitive!(
    /// A map, by class or by shape.
    ///
    /// ```rust
    /// use runtype::{predicate::any_map, Class, Function, Object, Value};
    ///
    /// assert!(any_map().check(&Value::map([(1, 2)])));
    ///
    /// // A map from elsewhere: not our Map class, but it quacks like one.
    /// let foreign = Object::ordinary(Some(&Class::new("Map")));
    /// foreign.set("size", 0);
    /// foreign.set("entries", Function::named("entries"));
    /// assert!(any_map().check(&Value::Object(foreign)));
    /// ```
    any_map => "anyMap", is_map
);

primitive!(
    /// Alias of [`any_map`].
    unknown_map => "unknownMap", is_map
);

primitive!(
    /// Alias of [`any_map`].
    map => "map", is_map
);

primitive!(
    /// A set, by class or by shape.
    any_set => "anySet", is_set
);

primitive!(
    /// Alias of [`any_set`].
    unknown_set => "unknownSet", is_set
);

primitive!(
    /// Alias of [`any_set`].
    set => "set", is_set
);

primitive!(
    /// An `ArrayBuffer`.
    array_buffer => "ArrayBuffer", |v: &Value| is_tagged_intrinsic(v, Intrinsic::ArrayBuffer)
);

primitive!(
    /// A `SharedArrayBuffer`.
    shared_array_buffer => "SharedArrayBuffer",
    |v: &Value| is_tagged_intrinsic(v, Intrinsic::SharedArrayBuffer)
);

primitive!(
    /// A `DataView`.
    data_view => "DataView", |v: &Value| is_tagged_intrinsic(v, Intrinsic::DataView)
);

primitive!(
    /// An `Int8Array`.
    int8_array => "Int8Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Int8Array)
);

primitive!(
    /// A `Uint8Array`.
    uint8_array => "Uint8Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Uint8Array)
);

primitive!(
    /// A `Uint8ClampedArray`.
    uint8_clamped_array => "Uint8ClampedArray",
    |v: &Value| is_tagged_intrinsic(v, Intrinsic::Uint8ClampedArray)
);

primitive!(
    /// An `Int16Array`.
    int16_array => "Int16Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Int16Array)
);

primitive!(
    /// A `Uint16Array`.
    uint16_array => "Uint16Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Uint16Array)
);

primitive!(
    /// An `Int32Array`.
    int32_array => "Int32Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Int32Array)
);

primitive!(
    /// A `Uint32Array`.
    uint32_array => "Uint32Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Uint32Array)
);

primitive!(
    /// A `Float32Array`.
    float32_array => "Float32Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Float32Array)
);

primitive!(
    /// A `Float64Array`.
    float64_array => "Float64Array", |v: &Value| is_tagged_intrinsic(v, Intrinsic::Float64Array)
);

primitive!(
    /// Any function; used to check that an argument can act as a validator.
    any_type_validator => "anyTypeValidator", |v: &Value| matches!(v, Value::Function(_))
);
