//! Combinators that build validators from validators and literals
//!
//! Every constructor captures its arguments at construction time and derives
//! the new validator's name from theirs, so the same inputs always produce
//! the same name.

use regex::Regex;

use super::naming::{call, call_with, quote};
use super::primitives::{self, is_instance_of_class, is_map, is_set};
use super::shape::object_with_properties;
use super::Validator;
use crate::api::expect_argument;
use crate::describe::describe;
use crate::value::{format_number, map_entries, set_members};
use crate::{Symbol, UsageError, Value};

/// An array whose every element passes `item`.
///
/// # Example
///
/// ```rust
/// use runtype::{predicate::*, Value};
///
/// let numbers = array_of(number());
/// assert_eq!(numbers.name(), "arrayOf(number)");
/// assert!(numbers.check(&Value::array([1, 2, 3])));
/// assert!(numbers.check(&Value::array::<[i32; 0]>([])));
/// assert!(!numbers.check(&Value::array(["hi"])));
/// ```
pub fn array_of(item: Validator) -> Validator {
    let name = call_with("arrayOf", std::slice::from_ref(&item));
    Validator::new(name, move |v: &Value| {
        v.as_object()
            .and_then(|o| o.elements())
            .is_some_and(|items| items.iter().all(|i| item.check(i)))
    })
}

/// Exactly the string `expected`.
pub fn exact_string(expected: impl Into<String>) -> Validator {
    let expected: String = expected.into();
    let name = call("exactString", &[quote(&expected)]);
    Validator::new(name, move |v: &Value| matches!(v, Value::String(s) if *s == expected))
}

/// Exactly the number `expected`, by strict equality.
///
/// Any `f64` is accepted, including `NaN` and the infinities, though under
/// strict equality `exact_number(f64::NAN)` accepts nothing and
/// `exact_number(0.0)` also accepts `-0.0`.
pub fn exact_number(expected: f64) -> Validator {
    let name = call("exactNumber", &[format_number(expected)]);
    Validator::new(name, move |v: &Value| matches!(v, Value::Number(n) if *n == expected))
}

/// Exactly the big integer `expected`.
pub fn exact_bigint(expected: i128) -> Validator {
    let name = call("exactBigInt", &[format!("{}n", expected)]);
    Validator::new(name, move |v: &Value| matches!(v, Value::BigInt(n) if *n == expected))
}

/// Exactly the symbol `expected`.
pub fn exact_symbol(expected: &Symbol) -> Validator {
    let expected = expected.clone();
    let name = call("exactSymbol", &[expected.to_string()]);
    Validator::new(name, move |v: &Value| matches!(v, Value::Symbol(s) if *s == expected))
}

/// A non-nullish value whose constructor is named `class_name`.
///
/// Primitives report their wrapper constructors, so
/// `has_class_name("Number")` accepts `42`.
pub fn has_class_name(class_name: impl Into<String>) -> Validator {
    let class_name: String = class_name.into();
    let name = call("hasClassName", &[quote(&class_name)]);
    Validator::new(name, move |v: &Value| {
        !v.is_nullish() && v.constructor().is_some_and(|c| c.name() == class_name)
    })
}

/// A value whose internal class tag is `tag`, i.e. it prints as `[object tag]`.
pub fn has_to_string_tag(tag: impl Into<String>) -> Validator {
    let tag: String = tag.into();
    let name = call("hasToStringTag", &[quote(&tag)]);
    Validator::new(name, move |v: &Value| v.to_string_tag() == tag)
}

/// Instances of `constructor`.
///
/// `constructor` must be a function or an object with a callable
/// [`Symbol::has_instance`] property. A trap decides membership by the
/// truthiness of its result; otherwise the value must be an object whose
/// class chain contains the constructor's class.
///
/// # Errors
///
/// [`UsageError::WrongType`] when `constructor` is neither.
///
/// # Example
///
/// ```rust
/// use runtype::{predicate::instance_of, Class, Value};
///
/// let something = Class::new("Something");
/// let ty = instance_of(&Value::from(&something)).unwrap();
///
/// assert_eq!(ty.name(), "instanceOf(\"Something\")");
/// assert!(ty.check(&Value::instance::<&str, Value>(&something, [])));
/// assert!(!ty.check(&Value::from("hi")));
/// ```
pub fn instance_of(constructor: &Value) -> Result<Validator, UsageError> {
    let trap_holder = object_with_properties([(Symbol::has_instance(), primitives::any_function())]);
    expect_argument(
        constructor,
        &union(&[primitives::any_function(), trap_holder]),
    )?;

    let label = match constructor {
        Value::Function(f) => quote(f.name()),
        other => match other.get("name") {
            Value::String(s) => quote(&s),
            _ => describe(other),
        },
    };
    let constructor = constructor.clone();
    Ok(Validator::new(call("instanceOf", &[label]), move |v: &Value| {
        match constructor.get(Symbol::has_instance()) {
            Value::Function(trap) => trap.call(&constructor, std::slice::from_ref(v)).is_truthy(),
            _ => constructor
                .as_function()
                .and_then(|f| f.as_class())
                .is_some_and(|class| is_instance_of_class(v, class)),
        }
    }))
}

/// Every validator must accept. Named `intersection(a, b, ...)`.
///
/// Any number of validators is allowed; with none, everything is accepted.
pub fn intersection(validators: &[Validator]) -> Validator {
    let validators = validators.to_vec();
    Validator::new(call_with("intersection", &validators), move |v: &Value| {
        validators.iter().all(|t| t.check(v))
    })
}

/// Alias of [`intersection`].
pub fn and(validators: &[Validator]) -> Validator {
    intersection(validators)
}

/// At least one validator must accept. Named `union(a, b, ...)`.
///
/// Any number of validators is allowed; with none, nothing is accepted.
///
/// ```rust
/// use runtype::{predicate::*, Value};
///
/// let id = union(&[number(), string()]);
/// assert_eq!(id.name(), "union(number, string)");
/// assert!(id.check(&Value::from(45)));
/// assert!(id.check(&Value::from("bees")));
/// assert!(!id.check(&Value::Null));
/// ```
pub fn union(validators: &[Validator]) -> Validator {
    let validators = validators.to_vec();
    Validator::new(call_with("union", &validators), move |v: &Value| {
        validators.iter().any(|t| t.check(v))
    })
}

/// Alias of [`union`].
pub fn or(validators: &[Validator]) -> Validator {
    union(validators)
}

/// A map whose keys pass `key` and whose values pass `value`.
pub fn map_of(key: Validator, value: Validator) -> Validator {
    let name = call_with("mapOf", &[key.clone(), value.clone()]);
    Validator::new(name, move |v: &Value| {
        is_map(v)
            && map_entries(v).is_some_and(|entries| {
                entries.iter().all(|(k, val)| key.check(k) && value.check(val))
            })
    })
}

/// A set whose members pass `item`.
pub fn set_of(item: Validator) -> Validator {
    let name = call_with("setOf", std::slice::from_ref(&item));
    Validator::new(name, move |v: &Value| {
        is_set(v) && set_members(v).is_some_and(|members| members.iter().all(|m| item.check(m)))
    })
}

/// `item`, `undefined` or `null`.
pub fn maybe(item: Validator) -> Validator {
    let name = call_with("maybe", std::slice::from_ref(&item));
    union(&[item, primitives::undefined(), primitives::null()]).with_name(name)
}

/// `item` or `undefined`. Unlike [`maybe`], `null` is rejected.
pub fn optional(item: Validator) -> Validator {
    let name = call_with("optional", std::slice::from_ref(&item));
    union(&[item, primitives::undefined()]).with_name(name)
}

fn regexp_source(regexp: &Value) -> Option<(String, String)> {
    let object = regexp.as_object()?;
    if let Some((source, flags)) = object.regexp_parts() {
        return Some((source.to_owned(), flags.to_owned()));
    }
    match (object.get(&"source".into()), object.get(&"flags".into())) {
        (Value::String(source), Value::String(flags)) => Some((source, flags)),
        _ => None,
    }
}

fn compile(source: &str, flags: &str) -> Result<Regex, String> {
    let mut inline = String::new();
    let mut sticky = false;
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' => inline.push(flag),
            'y' => sticky = true,
            'g' | 'u' | 'd' | 'v' => {}
            other => return Err(format!("unsupported flag '{}'", other)),
        }
    }
    let mut pattern = String::new();
    if !inline.is_empty() {
        pattern.push_str(&format!("(?{})", inline));
    }
    if sticky {
        pattern.push_str(&format!(r"\A(?:{})", source));
    } else {
        pattern.push_str(source);
    }
    Regex::new(&pattern).map_err(|e| e.to_string())
}

/// A string that `regexp` matches somewhere.
///
/// Each check searches from the start of the string, whatever the flags,
/// so a global pattern gives the same answer on every call.
///
/// # Errors
///
/// [`UsageError::WrongType`] when `regexp` is not a regular expression and
/// [`UsageError::InvalidPattern`] when it does not compile.
///
/// # Example
///
/// ```rust
/// use runtype::{predicate::string_matching, Value};
///
/// let ty = string_matching(&Value::regexp("hi", "g")).unwrap();
/// assert_eq!(ty.name(), "stringMatching(/hi/g)");
/// assert!(ty.check(&Value::from("hiiiii")));
/// assert!(ty.check(&Value::from("uhhhhhiiiii")));
/// assert!(!ty.check(&Value::from("hey")));
/// ```
pub fn string_matching(regexp: &Value) -> Result<Validator, UsageError> {
    expect_argument(regexp, &primitives::regexp())?;
    let (source, flags) = regexp_source(regexp).ok_or_else(|| UsageError::InvalidPattern {
        pattern: describe(regexp),
        reason: "source and flags are not strings".to_owned(),
    })?;
    let literal = format!("/{}/{}", source, flags);
    let re = compile(&source, &flags).map_err(|reason| UsageError::InvalidPattern {
        pattern: literal.clone(),
        reason,
    })?;
    Ok(Validator::new(call("stringMatching", &[literal]), move |v: &Value| {
        matches!(v, Value::String(s) if re.is_match(s))
    }))
}

/// The registered symbol for `key`.
pub fn symbol_for(key: &str) -> Validator {
    let expected = Symbol::for_key(key);
    Validator::new(call("symbolFor", &[quote(key)]), move |v: &Value| {
        matches!(v, Value::Symbol(s) if *s == expected)
    })
}

/// An array of exactly `validators.len()` elements, element `i` passing
/// validator `i`.
///
/// ```rust
/// use runtype::{predicate::*, Value};
///
/// let pair = tuple(&[number(), string()]);
/// assert_eq!(pair.name(), "tuple(number, string)");
/// assert!(pair.check(&Value::array([Value::from(45), Value::from("hi")])));
/// assert!(!pair.check(&Value::array([Value::from("hi"), Value::from(33)])));
/// assert!(!pair.check(&Value::array([45])));
/// ```
pub fn tuple(validators: &[Validator]) -> Validator {
    let validators = validators.to_vec();
    Validator::new(call_with("tuple", &validators), move |v: &Value| {
        v.as_object().and_then(|o| o.elements()).is_some_and(|items| {
            items.len() == validators.len()
                && items.iter().zip(&validators).all(|(item, t)| t.check(item))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{boolean, number, string};
    use crate::{Class, Function, Object};

    #[test]
    fn exact_literals() {
        let hello = exact_string("hello");
        assert_eq!(hello.name(), "exactString(\"hello\")");
        assert!(hello.check(&Value::from("hello")));
        assert!(!hello.check(&Value::from("hi")));

        let answer = exact_number(42.0);
        assert_eq!(answer.name(), "exactNumber(42)");
        assert!(answer.check(&Value::from(42)));
        assert!(!answer.check(&Value::from("42")));

        assert_eq!(exact_number(f64::NAN).name(), "exactNumber(NaN)");
        assert!(!exact_number(f64::NAN).check(&Value::from(f64::NAN)));
        assert!(exact_number(f64::NEG_INFINITY).check(&Value::from(f64::NEG_INFINITY)));

        let big = exact_bigint(34895084309843905843905840935890438509);
        assert_eq!(big.name(), "exactBigInt(34895084309843905843905840935890438509n)");
        assert!(big.check(&Value::BigInt(34895084309843905843905840935890438509)));
        assert!(!big.check(&Value::from(1)));
    }

    #[test]
    fn exact_symbol_uses_identity() {
        let sym = Symbol::new(Some("token"));
        let ty = exact_symbol(&sym);
        assert_eq!(ty.name(), "exactSymbol(Symbol(token))");
        assert!(ty.check(&Value::Symbol(sym)));
        assert!(!ty.check(&Value::symbol(Some("token"))));
    }

    #[test]
    fn class_names_include_primitive_wrappers() {
        let num = has_class_name("Number");
        assert_eq!(num.name(), "hasClassName(\"Number\")");
        assert!(num.check(&Value::from(42)));
        assert!(!num.check(&Value::from("hi")));
        assert!(has_class_name("Boolean").check(&Value::from(true)));
        assert!(!has_class_name("Object").check(&Value::Null));
        assert!(!has_class_name("Object").check(&Value::null_prototype_object::<&str, Value>([])));
    }

    #[test]
    fn to_string_tags() {
        let ty = has_to_string_tag("Map");
        assert_eq!(ty.name(), "hasToStringTag(\"Map\")");
        assert!(ty.check(&Value::map([(1, 2)])));
        assert!(!ty.check(&Value::object([("a", 1)])));
        assert!(has_to_string_tag("Number").check(&Value::from(1)));
    }

    #[test]
    fn instance_of_walks_class_chain() {
        let base = Class::new("Base");
        let derived = Class::builder("Derived").extends(&base).build();
        let ty = instance_of(&Value::from(&base)).unwrap();
        assert!(ty.check(&Value::instance::<&str, Value>(&derived, [])));
        assert!(!ty.check(&Value::object([("a", 1)])));
        assert!(!ty.check(&Value::Null));
    }

    #[test]
    fn instance_of_honours_traps() {
        let holder = Object::plain();
        holder.set("name", "Even");
        holder.set(
            Symbol::has_instance(),
            Function::native("[Symbol.hasInstance]", |_this, args| {
                Value::Bool(matches!(args.first(), Some(Value::Number(n)) if n % 2.0 == 0.0))
            }),
        );
        let ty = instance_of(&Value::Object(holder)).unwrap();
        assert_eq!(ty.name(), "instanceOf(\"Even\")");
        assert!(ty.check(&Value::from(4)));
        assert!(!ty.check(&Value::from(3)));
    }

    #[test]
    fn instance_of_rejects_non_constructors() {
        let err = instance_of(&Value::from(5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected value of type union(anyFunction, objectWithProperties({ [Symbol(Symbol.hasInstance)]: anyFunction })), but received 5"
        );
    }

    #[test]
    fn plain_functions_have_no_instances() {
        let ty = instance_of(&Value::function("notAClass")).unwrap();
        assert!(!ty.check(&Value::object([("a", 1)])));
    }

    #[test]
    fn union_and_intersection_arity() {
        assert!(!union(&[]).check(&Value::from(1)));
        assert!(intersection(&[]).check(&Value::from(1)));
        assert_eq!(union(&[]).name(), "union()");
        let many = union(&[number(), string(), boolean()]);
        assert_eq!(many.name(), "union(number, string, boolean)");
        assert_eq!(or(&[number(), string()]).name(), "union(number, string)");
        assert_eq!(and(&[number(), string()]).name(), "intersection(number, string)");
    }

    #[test]
    fn map_and_set_of() {
        let ty = map_of(number(), string());
        assert_eq!(ty.name(), "mapOf(number, string)");
        assert!(ty.check(&Value::map::<i32, i32>([])));
        assert!(ty.check(&Value::map([(1, "one"), (2, "two")])));
        assert!(!ty.check(&Value::map([("one", 1)])));
        assert!(!ty.check(&Value::object::<&str, Value>([])));

        let ty = set_of(number());
        assert_eq!(ty.name(), "setOf(number)");
        assert!(ty.check(&Value::set([1, 2, 3])));
        assert!(!ty.check(&Value::set(["blah"])));
        assert!(!ty.check(&Value::set([Value::from(1), Value::from(false)])));
    }

    #[test]
    fn duck_typed_map_is_iterated_through_entries() {
        let foreign = Object::ordinary(Some(&Class::new("Map")));
        foreign.set("size", 1);
        foreign.set(
            "entries",
            Function::native("entries", |_this, _args| {
                Value::array([Value::array([Value::from(1), Value::from("one")])])
            }),
        );
        let foreign = Value::Object(foreign);
        assert!(map_of(number(), string()).check(&foreign));
        assert!(!map_of(string(), string()).check(&foreign));
    }

    #[test]
    fn maybe_and_optional() {
        let m = maybe(number());
        assert_eq!(m.name(), "maybe(number)");
        for ok in [Value::from(0), Value::from(5), Value::Null, Value::Undefined] {
            assert!(m.check(&ok));
        }
        assert!(!m.check(&Value::from("5")));
        assert!(!m.check(&Value::from(false)));

        let o = optional(number());
        assert_eq!(o.name(), "optional(number)");
        assert!(o.check(&Value::from(5)));
        assert!(o.check(&Value::Undefined));
        assert!(!o.check(&Value::Null));
    }

    #[test]
    fn string_matching_flags() {
        let ci = string_matching(&Value::regexp("hello", "i")).unwrap();
        assert!(ci.check(&Value::from("say HELLO")));
        let sticky = string_matching(&Value::regexp("hi", "y")).unwrap();
        assert!(sticky.check(&Value::from("hi there")));
        assert!(!sticky.check(&Value::from("oh hi")));
        assert!(!ci.check(&Value::from(45)));
    }

    #[test]
    fn string_matching_usage_errors() {
        let err = string_matching(&Value::from("hi")).unwrap_err();
        assert_eq!(err.to_string(), "Expected value of type RegExp, but received \"hi\"");

        let err = string_matching(&Value::regexp("(", "")).unwrap_err();
        assert!(matches!(err, UsageError::InvalidPattern { .. }));

        let err = string_matching(&Value::regexp("a", "q")).unwrap_err();
        assert!(err.to_string().contains("unsupported flag 'q'"));
    }

    #[test]
    fn symbol_for_matches_registered_only() {
        let ty = symbol_for("blah");
        assert_eq!(ty.name(), "symbolFor(\"blah\")");
        assert!(ty.check(&Value::symbol_for("blah")));
        assert!(!ty.check(&Value::symbol(Some("blah"))));
        assert!(!ty.check(&Value::symbol(None)));
        assert!(!ty.check(&Value::from(45)));
    }
}
