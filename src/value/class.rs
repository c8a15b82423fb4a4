//! Classes: named constructors with a prototype chain.

use std::fmt;
use std::sync::{Arc, LazyLock};

use super::{BufferKind, PropertyKey, Value};

struct ClassData {
    name: String,
    parent: Option<Class>,
    prototype: Vec<(PropertyKey, Value)>,
}

/// A class that objects can be instances of.
///
/// Classes compare by identity: two classes with the same name are still
/// different classes, the way two realms each have their own `Map`.
/// Prototype properties are inherited by instances on property lookup.
///
/// # Example
///
/// ```rust
/// use runtype::{Class, Value};
///
/// let animal = Class::new("Animal");
/// let dog = Class::builder("Dog").extends(&animal).build();
///
/// assert!(dog.is_subclass_of(&animal));
/// assert!(!animal.is_subclass_of(&dog));
/// ```
#[derive(Clone)]
pub struct Class(Arc<ClassData>);

/// Builder for [`Class`].
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    parent: Option<Class>,
    prototype: Vec<(PropertyKey, Value)>,
}

impl ClassBuilder {
    /// Set the parent class.
    pub fn extends(mut self, parent: &Class) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Add a property shared by all instances.
    pub fn prototype_property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.prototype.push((key.into(), value.into()));
        self
    }

    /// Finish the class.
    pub fn build(self) -> Class {
        Class(Arc::new(ClassData {
            name: self.name,
            parent: self.parent,
            prototype: self.prototype,
        }))
    }
}

impl Class {
    /// A root class with no prototype properties.
    pub fn new(name: impl Into<String>) -> Self {
        Class::builder(name).build()
    }

    /// Start building a class.
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            parent: None,
            prototype: Vec::new(),
        }
    }

    /// The built-in class for `intrinsic`. Always the same class.
    pub fn intrinsic(intrinsic: Intrinsic) -> Self {
        INTRINSICS[intrinsic as usize].clone()
    }

    /// The class name; empty for anonymous classes.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The direct parent class.
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// True if `self` is `ancestor` or inherits from it.
    pub fn is_subclass_of(&self, ancestor: &Class) -> bool {
        self.ancestors().any(|c| c.ptr_eq(ancestor))
    }

    /// The class itself followed by its parents, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |c| c.parent())
    }

    /// Look a property up along the prototype chain.
    pub fn prototype_property(&self, key: &PropertyKey) -> Option<Value> {
        self.ancestors().find_map(|class| {
            class
                .0
                .prototype
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Class) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({:?})", self.0.name)
    }
}

/// Built-in classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Intrinsic {
    Object,
    Function,
    Array,
    Map,
    Set,
    Date,
    RegExp,
    Error,
    TypeError,
    RangeError,
    Number,
    String,
    Boolean,
    BigInt,
    Symbol,
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

impl Intrinsic {
    const ALL: [Intrinsic; 27] = [
        Intrinsic::Object,
        Intrinsic::Function,
        Intrinsic::Array,
        Intrinsic::Map,
        Intrinsic::Set,
        Intrinsic::Date,
        Intrinsic::RegExp,
        Intrinsic::Error,
        Intrinsic::TypeError,
        Intrinsic::RangeError,
        Intrinsic::Number,
        Intrinsic::String,
        Intrinsic::Boolean,
        Intrinsic::BigInt,
        Intrinsic::Symbol,
        Intrinsic::ArrayBuffer,
        Intrinsic::SharedArrayBuffer,
        Intrinsic::DataView,
        Intrinsic::Int8Array,
        Intrinsic::Uint8Array,
        Intrinsic::Uint8ClampedArray,
        Intrinsic::Int16Array,
        Intrinsic::Uint16Array,
        Intrinsic::Int32Array,
        Intrinsic::Uint32Array,
        Intrinsic::Float32Array,
        Intrinsic::Float64Array,
    ];

    /// The constructor name, e.g. `"Uint8Array"`.
    pub fn name(self) -> &'static str {
        match self {
            Intrinsic::Object => "Object",
            Intrinsic::Function => "Function",
            Intrinsic::Array => "Array",
            Intrinsic::Map => "Map",
            Intrinsic::Set => "Set",
            Intrinsic::Date => "Date",
            Intrinsic::RegExp => "RegExp",
            Intrinsic::Error => "Error",
            Intrinsic::TypeError => "TypeError",
            Intrinsic::RangeError => "RangeError",
            Intrinsic::Number => "Number",
            Intrinsic::String => "String",
            Intrinsic::Boolean => "Boolean",
            Intrinsic::BigInt => "BigInt",
            Intrinsic::Symbol => "Symbol",
            Intrinsic::ArrayBuffer => "ArrayBuffer",
            Intrinsic::SharedArrayBuffer => "SharedArrayBuffer",
            Intrinsic::DataView => "DataView",
            Intrinsic::Int8Array => "Int8Array",
            Intrinsic::Uint8Array => "Uint8Array",
            Intrinsic::Uint8ClampedArray => "Uint8ClampedArray",
            Intrinsic::Int16Array => "Int16Array",
            Intrinsic::Uint16Array => "Uint16Array",
            Intrinsic::Int32Array => "Int32Array",
            Intrinsic::Uint32Array => "Uint32Array",
            Intrinsic::Float32Array => "Float32Array",
            Intrinsic::Float64Array => "Float64Array",
        }
    }
}

impl From<BufferKind> for Intrinsic {
    fn from(kind: BufferKind) -> Self {
        match kind {
            BufferKind::ArrayBuffer => Intrinsic::ArrayBuffer,
            BufferKind::SharedArrayBuffer => Intrinsic::SharedArrayBuffer,
            BufferKind::DataView => Intrinsic::DataView,
            BufferKind::Int8Array => Intrinsic::Int8Array,
            BufferKind::Uint8Array => Intrinsic::Uint8Array,
            BufferKind::Uint8ClampedArray => Intrinsic::Uint8ClampedArray,
            BufferKind::Int16Array => Intrinsic::Int16Array,
            BufferKind::Uint16Array => Intrinsic::Uint16Array,
            BufferKind::Int32Array => Intrinsic::Int32Array,
            BufferKind::Uint32Array => Intrinsic::Uint32Array,
            BufferKind::Float32Array => Intrinsic::Float32Array,
            BufferKind::Float64Array => Intrinsic::Float64Array,
        }
    }
}

// Indexed by `Intrinsic as usize`; error subclasses link to `Error`.
static INTRINSICS: LazyLock<Vec<Class>> = LazyLock::new(|| {
    let mut classes: Vec<Class> = Vec::with_capacity(Intrinsic::ALL.len());
    for intrinsic in Intrinsic::ALL {
        let name = intrinsic.name();
        let class = match intrinsic {
            Intrinsic::Error => Class::builder(name).prototype_property("name", name).build(),
            Intrinsic::TypeError | Intrinsic::RangeError => {
                let parent = classes[Intrinsic::Error as usize].clone();
                Class::builder(name)
                    .extends(&parent)
                    .prototype_property("name", name)
                    .build()
            }
            _ => Class::new(name),
        };
        classes.push(class);
    }
    classes
});
