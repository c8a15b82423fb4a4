//! Core predicate trait and the named [`Validator`]
//!
//! A `Predicate` is any total `Fn(&Value) -> bool`. A `Validator` pairs a
//! shared predicate with an immutable display name, which is what every
//! constructor in this crate returns.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// A total check over dynamic values.
///
/// Implementations must not panic: a value of the wrong shape is answered
/// with `false`.
///
/// # Example
///
/// ```rust
/// use runtype::{predicate::Predicate, Value};
///
/// let is_answer = |v: &Value| *v == Value::from(42);
/// assert!(is_answer.check(&Value::from(42)));
/// assert!(!is_answer.check(&Value::from("42")));
/// ```
pub trait Predicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &Value) -> bool;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// A named predicate.
///
/// Cloning is cheap: the name and the check are reference counted. The name
/// is fixed at construction; [`Validator::with_name`] returns a new
/// validator rather than renaming this one.
///
/// # Example
///
/// ```rust
/// use runtype::{predicate::*, Value};
///
/// let even = Validator::new("even", |v: &Value| matches!(v, Value::Number(n) if n % 2.0 == 0.0));
/// let evens = array_of(even.clone());
///
/// assert_eq!(evens.name(), "arrayOf(even)");
/// assert!(evens.check(&Value::array([2, 4])));
/// assert!(!evens.check(&Value::array([2, 3])));
/// ```
#[derive(Clone)]
pub struct Validator {
    name: Arc<str>,
    predicate: Arc<dyn Predicate>,
}

impl Validator {
    /// Create a validator from a name and a predicate.
    pub fn new<P>(name: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        Validator {
            name: Arc::from(name.into()),
            predicate: Arc::new(predicate),
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the check.
    #[inline]
    pub fn check(&self, value: &Value) -> bool {
        self.predicate.check(value)
    }

    /// The same check under a different name. `self` keeps its name.
    ///
    /// ```rust
    /// use runtype::predicate::*;
    ///
    /// let port = integer().with_name("port");
    /// assert_eq!(port.name(), "port");
    /// assert_eq!(integer().name(), "integer");
    /// ```
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Validator {
            name: Arc::from(name.into()),
            predicate: Arc::clone(&self.predicate),
        }
    }

    /// Both must accept. Named `intersection(a, b)`.
    pub fn and(&self, other: &Validator) -> Validator {
        super::intersection(&[self.clone(), other.clone()])
    }

    /// Either may accept. Named `union(a, b)`.
    pub fn or(&self, other: &Validator) -> Validator {
        super::union(&[self.clone(), other.clone()])
    }
}

impl Predicate for Validator {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.predicate.check(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.name()).finish()
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&Validator> for Value {
    fn from(validator: &Validator) -> Self {
        Value::Function(crate::Function::validator(validator))
    }
}
