//! Display-name rendering shared by the combinators.

use super::Validator;
use crate::PropertyKey;

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A JSON string literal: `hello` becomes `"hello"`.
pub(crate) fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// `name(arg1, arg2, ...)`.
pub(crate) fn call<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    format!("{}({})", name, args.join(", "))
}

/// `name(v1.name, v2.name, ...)`.
pub(crate) fn call_with(name: &str, validators: &[Validator]) -> String {
    let names: Vec<&str> = validators.iter().map(Validator::name).collect();
    call(name, &names)
}

/// How a key appears inside a shape literal.
pub(crate) fn property_key(key: &PropertyKey) -> String {
    match key {
        PropertyKey::Symbol(symbol) => format!("[{}]", symbol),
        PropertyKey::String(s) => {
            let bare =
                is_identifier(s) || s.parse::<u64>().is_ok_and(|n| n.to_string() == *s);
            if bare {
                s.clone()
            } else {
                quote(s)
            }
        }
    }
}

/// `{ a: number, "b-c": string }`, or `{}` when empty.
pub(crate) fn shape(properties: &[(PropertyKey, Validator)]) -> String {
    if properties.is_empty() {
        return "{}".to_owned();
    }
    let fields: Vec<String> = properties
        .iter()
        .map(|(key, validator)| format!("{}: {}", property_key(key), validator.name()))
        .collect();
    format!("{{ {} }}", fields.join(", "))
}
