//! Callable values.

use std::fmt;
use std::sync::Arc;

use super::{Class, Value};
use crate::predicate::Validator;

type NativeFn = dyn Fn(&Value, &[Value]) -> Value + Send + Sync;

enum Body {
    Opaque,
    Native(Arc<NativeFn>),
    Constructor(Class),
    Validator(Validator),
}

struct FunctionData {
    name: String,
    body: Body,
}

/// A function value.
///
/// A function has a (possibly empty) name and one of several bodies: an
/// opaque body that returns `undefined`, a native Rust closure, a class
/// constructor, or a wrapped [`Validator`]. Function values compare by
/// identity.
///
/// # Example
///
/// ```rust
/// use runtype::{Function, Value};
///
/// let double = Function::native("double", |_this, args| match args.first() {
///     Some(Value::Number(n)) => Value::Number(n * 2.0),
///     _ => Value::Undefined,
/// });
/// assert_eq!(double.name(), "double");
/// assert_eq!(double.call(&Value::Undefined, &[Value::from(2)]), Value::from(4));
/// ```
#[derive(Clone)]
pub struct Function(Arc<FunctionData>);

impl Function {
    /// A function with no observable behavior beyond its name.
    pub fn named(name: impl Into<String>) -> Self {
        Function::with_body(name.into(), Body::Opaque)
    }

    /// An unnamed function with no observable behavior.
    pub fn anonymous() -> Self {
        Function::with_body(String::new(), Body::Opaque)
    }

    /// A function backed by a Rust closure receiving `this` and the arguments.
    pub fn native<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        Function::with_body(name.into(), Body::Native(Arc::new(f)))
    }

    /// The constructor function of a class.
    pub fn constructor(class: &Class) -> Self {
        Function::with_body(class.name().to_owned(), Body::Constructor(class.clone()))
    }

    /// Wrap a validator so that it can travel as a value.
    ///
    /// Calling the function checks its first argument and returns a boolean.
    pub fn validator(validator: &Validator) -> Self {
        Function::with_body(
            validator.name().to_owned(),
            Body::Validator(validator.clone()),
        )
    }

    fn with_body(name: String, body: Body) -> Self {
        Function(Arc::new(FunctionData { name, body }))
    }

    /// The function's name; empty for anonymous functions.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The class this function constructs, if it is a class constructor.
    pub fn as_class(&self) -> Option<&Class> {
        match &self.0.body {
            Body::Constructor(class) => Some(class),
            _ => None,
        }
    }

    /// The wrapped validator, if this function was made by [`Function::validator`].
    pub fn as_validator(&self) -> Option<&Validator> {
        match &self.0.body {
            Body::Validator(v) => Some(v),
            _ => None,
        }
    }

    /// Invoke the function.
    ///
    /// Opaque bodies and class constructors return `undefined`.
    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        match &self.0.body {
            Body::Opaque | Body::Constructor(_) => Value::Undefined,
            Body::Native(f) => f(this, args),
            Body::Validator(v) => Value::Bool(v.check(args.first().unwrap_or(&Value::Undefined))),
        }
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.0.body {
            Body::Opaque => "opaque",
            Body::Native(_) => "native",
            Body::Constructor(_) => "class",
            Body::Validator(_) => "validator",
        };
        write!(f, "Function({:?}, {})", self.0.name, kind)
    }
}
