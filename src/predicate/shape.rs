//! Object-shape validators
//!
//! A shape is a list of `(key, validator)` pairs. Keys may be strings or
//! symbols; a key given twice keeps its first position and its last
//! validator. Each property is read with [`Object::get`](crate::Object::get),
//! so inherited and intrinsic properties (such as an array's `length`) are
//! seen the way a host property read sees them.

use super::naming::{call, shape as render_shape};
use super::primitives::{null, undefined};
use super::{union, Validator};
use crate::{PropertyKey, Value};

fn collect<K>(properties: impl IntoIterator<Item = (K, Validator)>) -> Vec<(PropertyKey, Validator)>
where
    K: Into<PropertyKey>,
{
    let mut shape: Vec<(PropertyKey, Validator)> = Vec::new();
    for (key, validator) in properties {
        let key = key.into();
        match shape.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = validator,
            None => shape.push((key, validator)),
        }
    }
    shape
}

fn properties_pass(value: &Value, shape: &[(PropertyKey, Validator)]) -> bool {
    match value {
        Value::Object(o) => shape.iter().all(|(key, validator)| validator.check(&o.get(key))),
        _ => false,
    }
}

/// An object whose listed properties pass their validators. Other properties
/// are allowed.
///
/// # Example
///
/// ```rust
/// use runtype::{predicate::*, Value};
///
/// let ty = object_with_properties([("one", number()), ("two", string())]);
/// assert_eq!(ty.name(), "objectWithProperties({ one: number, two: string })");
///
/// assert!(ty.check(&Value::object([("one", Value::from(1)), ("two", Value::from("2"))])));
/// assert!(ty.check(&Value::object([
///     ("one", Value::from(1)),
///     ("two", Value::from("2")),
///     ("three", Value::from(3)),
/// ])));
/// assert!(!ty.check(&Value::object([("one", 1)])));
/// ```
pub fn object_with_properties<K>(properties: impl IntoIterator<Item = (K, Validator)>) -> Validator
where
    K: Into<PropertyKey>,
{
    let shape = collect(properties);
    let name = call("objectWithProperties", &[render_shape(&shape)]);
    Validator::new(name, move |v: &Value| properties_pass(v, &shape))
}

/// Like [`object_with_properties`], but the object's own keys must be
/// exactly the listed ones.
///
/// All own keys count, strings and symbols alike, enumerable or not, so
/// arrays (which own `length`) never match a shape that does not list it.
pub fn object_with_only_these_properties<K>(
    properties: impl IntoIterator<Item = (K, Validator)>,
) -> Validator
where
    K: Into<PropertyKey>,
{
    let shape = collect(properties);
    let name = call("objectWithOnlyTheseProperties", &[render_shape(&shape)]);
    Validator::new(name, move |v: &Value| {
        let Value::Object(o) = v else {
            return false;
        };
        let keys = o.own_keys();
        keys.len() == shape.len()
            && keys.iter().all(|key| shape.iter().any(|(k, _)| k == key))
            && properties_pass(v, &shape)
    })
}

/// Like [`object_with_properties`], but every listed property may also be
/// `null` or `undefined`.
///
/// ```rust
/// use runtype::{predicate::*, Value};
///
/// let ty = partial_object_with_properties([("one", string()), ("two", boolean())]);
/// assert_eq!(
///     ty.name(),
///     "partialObjectWithProperties({ one: union(string, null, undefined), two: union(boolean, null, undefined) })"
/// );
/// assert!(ty.check(&Value::object::<&str, Value>([])));
/// assert!(ty.check(&Value::object([("two", Value::Null)])));
/// assert!(!ty.check(&Value::object([("one", 1)])));
/// ```
pub fn partial_object_with_properties<K>(
    properties: impl IntoIterator<Item = (K, Validator)>,
) -> Validator
where
    K: Into<PropertyKey>,
{
    let shape: Vec<(PropertyKey, Validator)> = collect(properties)
        .into_iter()
        .map(|(key, validator)| (key, union(&[validator, null(), undefined()])))
        .collect();
    let name = call("partialObjectWithProperties", &[render_shape(&shape)]);
    Validator::new(name, move |v: &Value| properties_pass(v, &shape))
}

/// An object whose own enumerable string-keyed entries all have a key that
/// passes `key` and a value that passes `value`.
///
/// Keys are checked as strings, even array indices.
///
/// ```rust
/// use runtype::{predicate::*, Value};
///
/// let ty = mapping_object_of(string(), number());
/// assert_eq!(ty.name(), "mappingObjectOf(string, number)");
/// assert!(ty.check(&Value::object([("a", 1), ("b", 2)])));
/// assert!(!ty.check(&Value::object([("a", "1")])));
/// ```
pub fn mapping_object_of(key: Validator, value: Validator) -> Validator {
    let name = call("mappingObjectOf", &[key.name(), value.name()]);
    Validator::new(name, move |v: &Value| match v {
        Value::Object(o) => o
            .entries()
            .into_iter()
            .all(|(k, val)| key.check(&Value::String(k)) && value.check(&val)),
        _ => false,
    })
}

/// Alias of [`mapping_object_of`], carrying the same name.
pub fn record(key: Validator, value: Validator) -> Validator {
    mapping_object_of(key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{exact_string, number, string};
    use crate::{Class, Object, Symbol};

    #[test]
    fn open_shape_reads_missing_as_undefined() {
        let ty = object_with_properties([("one", number()), ("maybe", undefined())]);
        assert!(ty.check(&Value::object([("one", 1)])));
        assert!(!ty.check(&Value::from(1)));
        assert!(!ty.check(&Value::Null));
    }

    #[test]
    fn empty_shape() {
        let ty = object_with_properties::<&str>([]);
        assert_eq!(ty.name(), "objectWithProperties({})");
        assert!(ty.check(&Value::array([1])));
        assert!(!ty.check(&Value::from("str")));
    }

    #[test]
    fn inherited_properties_are_read() {
        let class = Class::builder("Point").prototype_property("kind", "point").build();
        let ty = object_with_properties([("kind", exact_string("point"))]);
        assert!(ty.check(&Value::instance::<&str, Value>(&class, [])));
    }

    #[test]
    fn intrinsic_properties_are_read() {
        let ty = object_with_properties([("length", number())]);
        assert!(ty.check(&Value::array([1, 2])));
        assert!(!ty.check(&Value::object([("size", 2)])));
    }

    #[test]
    fn symbol_keys() {
        let sym = Symbol::new(Some("id"));
        let ty = object_with_properties([(sym.clone(), number())]);
        assert_eq!(ty.name(), "objectWithProperties({ [Symbol(id)]: number })");
        let o = Object::plain();
        o.set(sym, 7);
        assert!(ty.check(&Value::Object(o)));
    }

    #[test]
    fn duplicate_keys_keep_last_validator() {
        let ty = object_with_properties([("a", number()), ("a", string())]);
        assert_eq!(ty.name(), "objectWithProperties({ a: string })");
        assert!(ty.check(&Value::object([("a", "x")])));
    }

    #[test]
    fn closed_shape() {
        let ty = object_with_only_these_properties([("one", number()), ("two", string())]);
        assert_eq!(ty.name(), "objectWithOnlyTheseProperties({ one: number, two: string })");
        assert!(ty.check(&Value::object([("one", Value::from(1)), ("two", Value::from("2"))])));
        assert!(!ty.check(&Value::object([
            ("one", Value::from(1)),
            ("two", Value::from("2")),
            ("three", Value::from(3)),
        ])));
        assert!(!ty.check(&Value::object([("one", 1)])));
    }

    #[test]
    fn closed_shape_counts_hidden_and_symbol_keys() {
        let ty = object_with_only_these_properties([("one", number())]);

        let hidden = Object::plain();
        hidden.set("one", 1);
        hidden.define("secret", 2, false);
        assert!(!ty.check(&Value::Object(hidden)));

        let symbolic = Object::plain();
        symbolic.set("one", 1);
        symbolic.set(Symbol::new(None), 2);
        assert!(!ty.check(&Value::Object(symbolic)));
    }

    #[test]
    fn closed_shape_rejects_arrays() {
        let ty = object_with_only_these_properties([("0", number())]);
        assert!(!ty.check(&Value::array([1])));
    }

    #[test]
    fn partial_shape_rejects_non_objects() {
        let ty = partial_object_with_properties([("one", number())]);
        assert!(!ty.check(&Value::Null));
        assert!(ty.check(&Value::object([("one", Value::Undefined)])));
    }

    #[test]
    fn mapping_objects() {
        let ty = record(string(), number());
        assert_eq!(ty.name(), "mappingObjectOf(string, number)");
        assert!(ty.check(&Value::object::<&str, Value>([])));
        assert!(!ty.check(&Value::from(1)));

        // indices are string keys
        assert!(mapping_object_of(string(), number()).check(&Value::array([1, 2])));
        assert!(!mapping_object_of(number(), number()).check(&Value::array([1, 2])));

        let hidden = Object::plain();
        hidden.define("x", "not a number", false);
        assert!(ty.check(&Value::Object(hidden)));
    }
}
