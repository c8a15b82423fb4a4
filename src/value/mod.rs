//! Dynamic values
//!
//! [`Value`] is the universe that validators range over. It models the kinds
//! a dynamically typed host distinguishes at runtime: `undefined` and `null`,
//! booleans, IEEE-754 numbers (NaN and the infinities included), big
//! integers, strings, symbols, functions, and objects. Objects come in several
//! intrinsic kinds (ordinary, array, map, set, date, regexp, error, binary
//! buffers), carry an optional [`Class`], and hold their properties behind a
//! lock so that cyclic graphs can be built.
//!
//! # Example
//!
//! ```rust
//! use runtype::Value;
//!
//! let user = Value::object([("name", Value::from("Ada")), ("age", Value::from(36))]);
//! assert_eq!(user.type_of(), "object");
//! assert_eq!(user.get("name"), Value::from("Ada"));
//! assert!(user.get("email").is_undefined());
//! ```

mod class;
mod function;
mod object;
mod symbol;

pub use class::{Class, ClassBuilder, Intrinsic};
pub use function::Function;
pub use object::{BufferKind, Object, ObjectKind, PropertyKey};
pub use symbol::Symbol;

/// A dynamically typed value.
///
/// `PartialEq` is strict equality: `NaN` is not equal to itself, `0.0`
/// equals `-0.0`, and objects, functions and symbols compare by identity.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent-value marker.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An IEEE-754 double.
    Number(f64),
    /// An arbitrary-size integer, bounded here by `i128`.
    BigInt(i128),
    /// A string.
    String(String),
    /// A symbol.
    Symbol(Symbol),
    /// A function.
    Function(Function),
    /// An object.
    Object(Object),
}

impl Value {
    /// A plain object with the given enumerable properties.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        let object = Object::plain();
        for (k, v) in entries {
            object.set(k, v);
        }
        Value::Object(object)
    }

    /// An object without a prototype, holding the given properties.
    pub fn null_prototype_object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        let object = Object::ordinary(None);
        for (k, v) in entries {
            object.set(k, v);
        }
        Value::Object(object)
    }

    /// An instance of `class` with the given properties.
    pub fn instance<K, V>(class: &Class, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        let object = Object::ordinary(Some(class));
        for (k, v) in entries {
            object.set(k, v);
        }
        Value::Object(object)
    }

    /// An array.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Object(Object::array(items.into_iter().map(Into::into)))
    }

    /// A map.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Object(Object::map(
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        ))
    }

    /// A set.
    pub fn set<I>(members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Object(Object::set_of(members.into_iter().map(Into::into)))
    }

    /// A date.
    pub fn date(millis: f64) -> Self {
        Value::Object(Object::date(millis))
    }

    /// A regular expression, e.g. `Value::regexp("hi", "g")` for `/hi/g`.
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::Object(Object::regexp(source, flags))
    }

    /// An `Error` with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Value::Object(Object::error(&Class::intrinsic(Intrinsic::Error), message))
    }

    /// A binary buffer or typed view.
    pub fn buffer(kind: BufferKind, byte_length: usize) -> Self {
        Value::Object(Object::buffer(kind, byte_length))
    }

    /// A fresh symbol.
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// The registered symbol for `key`.
    pub fn symbol_for(key: &str) -> Self {
        Value::Symbol(Symbol::for_key(key))
    }

    /// A named function with no behavior.
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(Function::named(name))
    }

    /// The host `typeof` of this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
        }
    }

    /// True for `undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// True for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Host truthiness: `false`, `0`, `-0`, `NaN`, `""`, `0n`, `null` and
    /// `undefined` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::BigInt(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Function(_) | Value::Object(_) => true,
        }
    }

    /// The object behind this value, if it is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The function behind this value, if it is one.
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// The string behind this value, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read a property. Non-objects and missing properties give `undefined`.
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        match self {
            Value::Object(o) => o.get(&key.into()),
            _ => Value::Undefined,
        }
    }

    /// SameValueZero: strict equality except that `NaN` equals `NaN`.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self == other,
        }
    }

    /// The constructor a host would report for this value.
    ///
    /// Primitives report their wrapper constructors (`Number`, `String`, …).
    /// An object's own `constructor` property takes precedence over its
    /// class; if that property is not a function there is no constructor.
    pub fn constructor(&self) -> Option<Function> {
        let intrinsic = match self {
            Value::Undefined | Value::Null => return None,
            Value::Bool(_) => Intrinsic::Boolean,
            Value::Number(_) => Intrinsic::Number,
            Value::BigInt(_) => Intrinsic::BigInt,
            Value::String(_) => Intrinsic::String,
            Value::Symbol(_) => Intrinsic::Symbol,
            Value::Function(_) => Intrinsic::Function,
            Value::Object(o) => {
                return match o.own_property(&"constructor".into()) {
                    Some(Value::Function(f)) => Some(f),
                    Some(_) => None,
                    None => o.class().map(Function::constructor),
                };
            }
        };
        Some(Function::constructor(&Class::intrinsic(intrinsic)))
    }

    /// The internal class tag, the `X` in `[object X]`.
    ///
    /// Objects may override it with a string-valued
    /// [`Symbol::to_string_tag`] property.
    pub fn to_string_tag(&self) -> String {
        let tag = match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::BigInt(_) => "BigInt",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::Object(o) => {
                if let Value::String(tag) = o.get(&Symbol::to_string_tag().into()) {
                    return tag;
                }
                match o.kind() {
                    ObjectKind::Ordinary => "Object",
                    ObjectKind::Array => "Array",
                    ObjectKind::Map => "Map",
                    ObjectKind::Set => "Set",
                    ObjectKind::Date => "Date",
                    ObjectKind::RegExp => "RegExp",
                    ObjectKind::Error => "Error",
                    ObjectKind::Buffer(kind) => Intrinsic::from(kind).name(),
                }
            }
        };
        tag.to_owned()
    }

    /// Host string conversion, as used when a value is interpolated into text.
    ///
    /// Cycles render as an empty string. Nesting past 128 arrays or errors
    /// is cut off with `...`.
    pub fn to_display_string(&self) -> String {
        let mut seen = Vec::new();
        self.display_into(&mut seen)
    }

    fn display_into(&self, seen: &mut Vec<usize>) -> String {
        match self {
            Value::Undefined => "undefined".to_owned(),
            Value::Null => "null".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::BigInt(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Symbol(s) => s.to_string(),
            Value::Function(f) => format!("function {}() {{ [native code] }}", f.name()),
            Value::Object(o) => match o.kind() {
                ObjectKind::Array => {
                    if seen.contains(&o.addr()) {
                        return String::new();
                    }
                    if seen.len() >= DISPLAY_DEPTH_LIMIT {
                        return "...".to_owned();
                    }
                    seen.push(o.addr());
                    let joined = o
                        .elements()
                        .unwrap_or_default()
                        .iter()
                        .map(|item| match item {
                            Value::Undefined | Value::Null => String::new(),
                            other => other.display_into(seen),
                        })
                        .collect::<Vec<_>>()
                        .join(",");
                    seen.pop();
                    joined
                }
                ObjectKind::Error => {
                    if seen.contains(&o.addr()) {
                        return String::new();
                    }
                    if seen.len() >= DISPLAY_DEPTH_LIMIT {
                        return "...".to_owned();
                    }
                    seen.push(o.addr());
                    let name = o.get(&"name".into()).display_into(seen);
                    seen.pop();
                    match o.get(&"message".into()) {
                        Value::String(m) if !m.is_empty() => format!("{}: {}", name, m),
                        _ => name,
                    }
                }
                ObjectKind::RegExp => {
                    let (source, flags) = o.regexp_parts().unwrap_or(("", ""));
                    format!("/{}/{}", source, flags)
                }
                _ => format!("[object {}]", self.to_string_tag()),
            },
        }
    }
}

const DISPLAY_DEPTH_LIMIT: usize = 128;

/// Host number-to-string conversion: `42`, `1.5`, `NaN`, `-Infinity`,
/// `1e+21`, `1e-7`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", n)
    } else {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        }
    }
}

fn call_method(value: &Value, method: &str) -> Option<Vec<Value>> {
    match value.get(method) {
        Value::Function(f) => f.call(value, &[]).as_object()?.elements(),
        _ => None,
    }
}

/// Entries of a native map, or of a map-like object through its `entries`
/// method. `None` when the iteration does not yield `[key, value]` arrays.
pub(crate) fn map_entries(value: &Value) -> Option<Vec<(Value, Value)>> {
    let object = value.as_object()?;
    if let Some(entries) = object.map_entries() {
        return Some(entries);
    }
    call_method(value, "entries")?
        .into_iter()
        .map(|pair| match pair.as_object()?.elements()?.as_slice() {
            [k, v, ..] => Some((k.clone(), v.clone())),
            _ => None,
        })
        .collect()
}

/// Members of a native set, or of a set-like object through its `values`
/// method, falling back to the first element of each `entries` pair.
pub(crate) fn set_members(value: &Value) -> Option<Vec<Value>> {
    let object = value.as_object()?;
    if let Some(members) = object.set_members() {
        return Some(members);
    }
    if let Some(members) = call_method(value, "values") {
        return Some(members);
    }
    call_method(value, "entries")?
        .into_iter()
        .map(|pair| pair.as_object()?.elements()?.into_iter().next())
        .collect()
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

/// A class converts to its constructor function.
impl From<&Class> for Value {
    fn from(class: &Class) -> Self {
        Value::Function(Function::constructor(class))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

/// JSON objects become plain objects and JSON arrays become arrays.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}
