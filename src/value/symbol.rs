//! Symbols with reference identity and a process-wide registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

#[derive(Debug)]
struct SymbolData {
    description: Option<String>,
    registry_key: Option<String>,
}

/// A unique symbol value.
///
/// Two symbols are equal only if they are the same symbol. Symbols created
/// with [`Symbol::new`] are always fresh; [`Symbol::for_key`] returns the
/// interned symbol for a key, so repeated calls yield the same symbol.
///
/// # Example
///
/// ```rust
/// use runtype::Symbol;
///
/// assert_ne!(Symbol::new(Some("a")), Symbol::new(Some("a")));
/// assert_eq!(Symbol::for_key("a"), Symbol::for_key("a"));
/// ```
#[derive(Clone)]
pub struct Symbol(Arc<SymbolData>);

static REGISTRY: LazyLock<Mutex<HashMap<String, Symbol>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static HAS_INSTANCE: LazyLock<Symbol> =
    LazyLock::new(|| Symbol::new(Some("Symbol.hasInstance")));

static TO_STRING_TAG: LazyLock<Symbol> =
    LazyLock::new(|| Symbol::new(Some("Symbol.toStringTag")));

impl Symbol {
    /// Create a fresh symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        Symbol(Arc::new(SymbolData {
            description: description.map(str::to_owned),
            registry_key: None,
        }))
    }

    /// Return the registered symbol for `key`, creating it on first use.
    pub fn for_key(key: &str) -> Self {
        let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        registry
            .entry(key.to_owned())
            .or_insert_with(|| {
                Symbol(Arc::new(SymbolData {
                    description: Some(key.to_owned()),
                    registry_key: Some(key.to_owned()),
                }))
            })
            .clone()
    }

    /// The well-known symbol consulted by `instance_of` for custom traps.
    pub fn has_instance() -> Self {
        HAS_INSTANCE.clone()
    }

    /// The well-known symbol that overrides an object's class tag.
    pub fn to_string_tag() -> Self {
        TO_STRING_TAG.clone()
    }

    /// The description given at creation, if any.
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// The registry key if this symbol came from [`Symbol::for_key`].
    pub fn registry_key(&self) -> Option<&str> {
        self.0.registry_key.as_deref()
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Symbol {}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Renders as `Symbol(description)`.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_symbols_are_distinct() {
        let a = Symbol::new(Some("x"));
        let b = Symbol::new(Some("x"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn registered_symbols_are_interned() {
        let a = Symbol::for_key("registry-test");
        let b = Symbol::for_key("registry-test");
        assert_eq!(a, b);
        assert_eq!(a.registry_key(), Some("registry-test"));
        assert_ne!(a, Symbol::new(Some("registry-test")));
    }

    #[test]
    fn display_uses_description() {
        assert_eq!(Symbol::new(Some("hi")).to_string(), "Symbol(hi)");
        assert_eq!(Symbol::new(None).to_string(), "Symbol()");
    }

    #[test]
    fn well_known_symbols_are_stable() {
        assert_eq!(Symbol::has_instance(), Symbol::has_instance());
        assert_ne!(Symbol::has_instance(), Symbol::for_key("Symbol.hasInstance"));
    }
}
