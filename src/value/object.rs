//! Objects: reference values with own properties and an intrinsic slot.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Class, Intrinsic, Symbol, Value};

/// A property key: a string or a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyKey {
    /// A string key.
    String(String),
    /// A symbol key.
    Symbol(Symbol),
}

impl PropertyKey {
    /// The string form of a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.to_owned())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(s: Symbol) -> Self {
        PropertyKey::Symbol(s)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => f.write_str(s),
            PropertyKey::Symbol(s) => write!(f, "{}", s),
        }
    }
}

/// The binary buffer family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum BufferKind {
    ArrayBuffer,
    SharedArrayBuffer,
    DataView,
    Int8Array,
    Uint8Array,
    Uint8ClampedArray,
    Int16Array,
    Uint16Array,
    Int32Array,
    Uint32Array,
    Float32Array,
    Float64Array,
}

/// What built-in behavior an object has, independent of its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A plain object or class instance.
    Ordinary,
    /// A sequential array.
    Array,
    /// A keyed collection.
    Map,
    /// A unique-value collection.
    Set,
    /// A date.
    Date,
    /// A regular expression.
    RegExp,
    /// An error.
    Error,
    /// A binary buffer or typed view.
    Buffer(BufferKind),
}

#[derive(Debug, Clone)]
struct Property {
    key: PropertyKey,
    value: Value,
    enumerable: bool,
}

enum Slot {
    Ordinary,
    Array(RwLock<Vec<Value>>),
    Map(RwLock<Vec<(Value, Value)>>),
    Set(RwLock<Vec<Value>>),
    Date(f64),
    RegExp { source: String, flags: String },
    Error,
    Buffer { kind: BufferKind, byte_length: usize },
}

struct ObjectData {
    class: Option<Class>,
    slot: Slot,
    properties: RwLock<Vec<Property>>,
}

/// A reference to a mutable object.
///
/// Cloning an `Object` clones the reference, not the contents, so objects
/// can contain themselves:
///
/// ```rust
/// use runtype::{Object, Value};
///
/// let node = Object::plain();
/// node.set("next", Value::Object(node.clone()));
/// assert!(matches!(node.get(&"next".into()), Value::Object(ref o) if o.ptr_eq(&node)));
/// ```
#[derive(Clone)]
pub struct Object(Arc<ObjectData>);

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn array_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

impl Object {
    fn from_parts(class: Option<Class>, slot: Slot) -> Self {
        Object(Arc::new(ObjectData {
            class,
            slot,
            properties: RwLock::new(Vec::new()),
        }))
    }

    /// An ordinary object whose class is `Object`.
    pub fn plain() -> Self {
        Object::ordinary(Some(&Class::intrinsic(Intrinsic::Object)))
    }

    /// An ordinary object with the given class; `None` means no prototype.
    pub fn ordinary(class: Option<&Class>) -> Self {
        Object::from_parts(class.cloned(), Slot::Ordinary)
    }

    /// An array holding `items`.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Object::from_parts(
            Some(Class::intrinsic(Intrinsic::Array)),
            Slot::Array(RwLock::new(items.into_iter().collect())),
        )
    }

    /// A map holding `entries`; later duplicates of a key replace earlier ones.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let object = Object::map_with_class(&Class::intrinsic(Intrinsic::Map));
        for (k, v) in entries {
            object.map_insert(k, v);
        }
        object
    }

    /// An empty map whose class is `class`, e.g. a subclass of `Map`.
    pub fn map_with_class(class: &Class) -> Self {
        Object::from_parts(Some(class.clone()), Slot::Map(RwLock::new(Vec::new())))
    }

    /// A set holding `members`; duplicates are dropped.
    pub fn set_of(members: impl IntoIterator<Item = Value>) -> Self {
        let object = Object::set_with_class(&Class::intrinsic(Intrinsic::Set));
        for m in members {
            object.set_add(m);
        }
        object
    }

    /// An empty set whose class is `class`.
    pub fn set_with_class(class: &Class) -> Self {
        Object::from_parts(Some(class.clone()), Slot::Set(RwLock::new(Vec::new())))
    }

    /// A date at `millis` since the epoch.
    pub fn date(millis: f64) -> Self {
        Object::from_parts(Some(Class::intrinsic(Intrinsic::Date)), Slot::Date(millis))
    }

    /// A regular expression. The pattern is not compiled here.
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Object::from_parts(
            Some(Class::intrinsic(Intrinsic::RegExp)),
            Slot::RegExp {
                source: source.into(),
                flags: flags.into(),
            },
        )
    }

    /// An error of `class` with own `message` and `stack` properties.
    ///
    /// `name` is inherited from the class prototype when the class defines it.
    pub fn error(class: &Class, message: impl Into<String>) -> Self {
        let message = message.into();
        let object = Object::from_parts(Some(class.clone()), Slot::Error);
        let name = match class.prototype_property(&"name".into()) {
            Some(Value::String(name)) => name,
            _ => class.name().to_owned(),
        };
        let stack = if message.is_empty() {
            format!("{}\n    at <anonymous>", name)
        } else {
            format!("{}: {}\n    at <anonymous>", name, message)
        };
        object.define("stack", Value::String(stack), false);
        object.define("message", Value::String(message), false);
        object
    }

    /// A binary buffer or typed view of `byte_length` bytes.
    pub fn buffer(kind: BufferKind, byte_length: usize) -> Self {
        Object::from_parts(
            Some(Class::intrinsic(Intrinsic::from(kind))),
            Slot::Buffer { kind, byte_length },
        )
    }

    /// The object's class; `None` for null-prototype objects.
    pub fn class(&self) -> Option<&Class> {
        self.0.class.as_ref()
    }

    /// The intrinsic kind.
    pub fn kind(&self) -> ObjectKind {
        match &self.0.slot {
            Slot::Ordinary => ObjectKind::Ordinary,
            Slot::Array(_) => ObjectKind::Array,
            Slot::Map(_) => ObjectKind::Map,
            Slot::Set(_) => ObjectKind::Set,
            Slot::Date(_) => ObjectKind::Date,
            Slot::RegExp { .. } => ObjectKind::RegExp,
            Slot::Error => ObjectKind::Error,
            Slot::Buffer { kind, .. } => ObjectKind::Buffer(*kind),
        }
    }

    /// Set an enumerable own property, replacing any existing value.
    pub fn set(&self, key: impl Into<PropertyKey>, value: impl Into<Value>) {
        self.define(key, value, true);
    }

    /// Define an own property with explicit enumerability.
    pub fn define(&self, key: impl Into<PropertyKey>, value: impl Into<Value>, enumerable: bool) {
        let key = key.into();
        let value = value.into();
        let mut properties = write(&self.0.properties);
        match properties.iter_mut().find(|p| p.key == key) {
            Some(existing) => {
                existing.value = value;
                existing.enumerable = enumerable;
            }
            None => properties.push(Property {
                key,
                value,
                enumerable,
            }),
        }
    }

    /// Remove an own property. Returns whether it existed.
    pub fn remove(&self, key: &PropertyKey) -> bool {
        let mut properties = write(&self.0.properties);
        let before = properties.len();
        properties.retain(|p| &p.key != key);
        properties.len() != before
    }

    /// The value of an own property defined with [`Object::set`] or [`Object::define`].
    pub fn own_property(&self, key: &PropertyKey) -> Option<Value> {
        read(&self.0.properties)
            .iter()
            .find(|p| &p.key == key)
            .map(|p| p.value.clone())
    }

    fn intrinsic_property(&self, key: &PropertyKey) -> Option<Value> {
        let key = key.as_str()?;
        match &self.0.slot {
            Slot::Array(items) => {
                let items = read(items);
                if key == "length" {
                    return Some(Value::from(items.len()));
                }
                array_index(key).and_then(|i| items.get(i).cloned())
            }
            Slot::Map(entries) if key == "size" => Some(Value::from(read(entries).len())),
            Slot::Set(members) if key == "size" => Some(Value::from(read(members).len())),
            Slot::RegExp { source, flags } => match key {
                "source" => Some(Value::from(source.as_str())),
                "flags" => Some(Value::from(flags.as_str())),
                _ => None,
            },
            Slot::Buffer { byte_length, .. } if key == "byteLength" => {
                Some(Value::from(*byte_length))
            }
            _ => None,
        }
    }

    /// Read a property: own properties, then intrinsic slots such as
    /// `length` and `size`, then the class prototype chain.
    /// Missing properties read as `undefined`.
    pub fn get(&self, key: &PropertyKey) -> Value {
        self.own_property(key)
            .or_else(|| self.intrinsic_property(key))
            .or_else(|| self.class().and_then(|c| c.prototype_property(key)))
            .unwrap_or(Value::Undefined)
    }

    /// Every own key: array indices and `length` first, then properties in
    /// definition order. Includes symbol keys and non-enumerable keys.
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        let mut keys = Vec::new();
        if let Slot::Array(items) = &self.0.slot {
            let len = read(items).len();
            keys.extend((0..len).map(|i| PropertyKey::String(i.to_string())));
            keys.push(PropertyKey::from("length"));
        }
        keys.extend(read(&self.0.properties).iter().map(|p| p.key.clone()));
        keys
    }

    /// Enumerable string-keyed own entries, array elements included.
    pub fn entries(&self) -> Vec<(String, Value)> {
        let mut entries = Vec::new();
        if let Slot::Array(items) = &self.0.slot {
            entries.extend(
                read(items)
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v.clone())),
            );
        }
        entries.extend(read(&self.0.properties).iter().filter_map(|p| match &p.key {
            PropertyKey::String(k) if p.enumerable => Some((k.clone(), p.value.clone())),
            _ => None,
        }));
        entries
    }

    /// A snapshot of the elements of an array.
    pub fn elements(&self) -> Option<Vec<Value>> {
        match &self.0.slot {
            Slot::Array(items) => Some(read(items).clone()),
            _ => None,
        }
    }

    /// Append to an array. Returns `false` for non-arrays.
    pub fn push(&self, value: impl Into<Value>) -> bool {
        match &self.0.slot {
            Slot::Array(items) => {
                write(items).push(value.into());
                true
            }
            _ => false,
        }
    }

    /// A snapshot of the entries of a native map.
    pub fn map_entries(&self) -> Option<Vec<(Value, Value)>> {
        match &self.0.slot {
            Slot::Map(entries) => Some(read(entries).clone()),
            _ => None,
        }
    }

    /// Insert into a native map. Returns `false` for non-maps.
    pub fn map_insert(&self, key: impl Into<Value>, value: impl Into<Value>) -> bool {
        let Slot::Map(entries) = &self.0.slot else {
            return false;
        };
        let key = key.into();
        let value = value.into();
        let mut entries = write(entries);
        match entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
        true
    }

    /// A snapshot of the members of a native set.
    pub fn set_members(&self) -> Option<Vec<Value>> {
        match &self.0.slot {
            Slot::Set(members) => Some(read(members).clone()),
            _ => None,
        }
    }

    /// Add to a native set. Returns `false` for non-sets.
    pub fn set_add(&self, value: impl Into<Value>) -> bool {
        let Slot::Set(members) = &self.0.slot else {
            return false;
        };
        let value = value.into();
        let mut members = write(members);
        if !members.iter().any(|m| m.same_value_zero(&value)) {
            members.push(value);
        }
        true
    }

    /// Source and flags of a regular expression.
    pub fn regexp_parts(&self) -> Option<(&str, &str)> {
        match &self.0.slot {
            Slot::RegExp { source, flags } => Some((source, flags)),
            _ => None,
        }
    }

    /// Milliseconds since the epoch of a date.
    pub fn date_value(&self) -> Option<f64> {
        match &self.0.slot {
            Slot::Date(ms) => Some(*ms),
            _ => None,
        }
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// A stable address for cycle detection.
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

// Shallow on purpose: objects may be cyclic.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.class().map(Class::name).unwrap_or("null");
        write!(f, "Object({:?}, {}, {:#x})", self.kind(), class, self.addr())
    }
}
