//! Diagnostic rendering of values
//!
//! [`describe`] turns any [`Value`] into a short JSON-like string for error
//! messages. Values JSON cannot carry are spelled out in angle brackets
//! (`"<undefined>"`, `"<NaN>"`, `"<Function f>"`, `"<Date>"`), and maps and
//! sets show their size and contents.
//!
//! Rendering never fails. Cyclic or overly deep input is reported through a
//! fallback object naming the problem:
//!
//! ```rust
//! use runtype::{describe, Object, Value};
//!
//! assert_eq!(describe(&Value::map([(1, 2), (3, 4)])), r#"{"<Map of size 2>":[[1,2],[3,4]]}"#);
//!
//! let cyclic = Object::plain();
//! cyclic.set("self", cyclic.clone());
//! assert_eq!(
//!     describe(&Value::Object(cyclic)),
//!     r#"{"[object Object] that failed to serialize due to error":"Converting circular structure to JSON"}"#
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use serde_json::{Map, Number, Value as Json};

use crate::value::{map_entries, set_members};
use crate::{Object, ObjectKind, Value};

/// Largest integer an IEEE double holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Options for [`describe_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// How many containers deep rendering may go before giving up.
    pub max_depth: usize,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        DescribeOptions { max_depth: 128 }
    }
}

/// Why a value could not be rendered directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    /// The value contains itself.
    Circular,
    /// Nesting exceeded [`DescribeOptions::max_depth`].
    TooDeep {
        /// The configured limit.
        limit: usize,
    },
    /// A map or set tag on something that could not be iterated.
    NotIterable {
        /// The constructor name that promised iteration.
        tag: String,
    },
}

impl fmt::Display for DescribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescribeError::Circular => f.write_str("Converting circular structure to JSON"),
            DescribeError::TooDeep { limit } => {
                write!(f, "Maximum nesting depth of {} exceeded", limit)
            }
            DescribeError::NotIterable { tag } => write!(f, "{} is not iterable", tag),
        }
    }
}

impl StdError for DescribeError {}

/// Render `value` with default options.
pub fn describe(value: &Value) -> String {
    describe_with(value, &DescribeOptions::default())
}

/// Render `value`.
///
/// # Example
///
/// ```rust
/// use runtype::{describe_with, DescribeOptions, Value};
///
/// let nested = Value::array([Value::array([Value::array([1])])]);
/// let shallow = DescribeOptions { max_depth: 2 };
///
/// assert_eq!(describe_with(&nested, &DescribeOptions::default()), "[[[1]]]");
/// assert_eq!(
///     describe_with(&nested, &shallow),
///     r#"{"1 that failed to serialize due to error":"Maximum nesting depth of 2 exceeded"}"#
/// );
/// ```
pub fn describe_with(value: &Value, options: &DescribeOptions) -> String {
    let mut renderer = Renderer {
        options,
        path: Vec::new(),
    };
    match renderer.render(value) {
        Ok(json) => json.to_string(),
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("describe fell back after error: {}", err);
            fallback(value, &err)
        }
    }
}

fn fallback(value: &Value, err: &DescribeError) -> String {
    let mut map = Map::new();
    map.insert(
        format!("{} that failed to serialize due to error", value.to_display_string()),
        Json::String(err.to_string()),
    );
    Json::Object(map).to_string()
}

fn number(n: f64) -> Json {
    if n.is_nan() {
        return Json::String("<NaN>".to_owned());
    }
    if n.is_infinite() {
        let label = if n > 0.0 { "<Infinity>" } else { "<-Infinity>" };
        return Json::String(label.to_owned());
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Json::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

/// The constructor name used to pick a rendering.
fn tag_of(value: &Value) -> String {
    match value.constructor() {
        Some(f) if f.name().is_empty() => "anonymous constructor".to_owned(),
        Some(f) => f.name().to_owned(),
        None => "Object".to_owned(),
    }
}

struct Renderer<'a> {
    options: &'a DescribeOptions,
    path: Vec<usize>,
}

impl Renderer<'_> {
    fn render(&mut self, value: &Value) -> Result<Json, DescribeError> {
        Ok(match value {
            Value::Null => Json::Null,
            Value::Undefined => Json::String("<undefined>".to_owned()),
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::BigInt(n) => Json::String(format!("<BigInt {}>", n)),
            Value::Symbol(s) => Json::String(match s.description() {
                Some(d) if !d.is_empty() => format!("<Symbol {}>", d),
                _ => "<Symbol>".to_owned(),
            }),
            Value::Function(f) if f.name().is_empty() => Json::String("<Function>".to_owned()),
            Value::Function(f) => Json::String(format!("<Function {}>", f.name())),
            Value::Object(o) => self.enter(o, |r| r.render_object(value, o))?,
        })
    }

    /// Run `body` with `object` on the current path.
    fn enter<F>(&mut self, object: &Object, body: F) -> Result<Json, DescribeError>
    where
        F: FnOnce(&mut Self) -> Result<Json, DescribeError>,
    {
        if self.path.contains(&object.addr()) {
            return Err(DescribeError::Circular);
        }
        if self.path.len() >= self.options.max_depth {
            return Err(DescribeError::TooDeep {
                limit: self.options.max_depth,
            });
        }
        self.path.push(object.addr());
        let result = body(self);
        self.path.pop();
        result
    }

    fn render_all(&mut self, items: &[Value]) -> Result<Json, DescribeError> {
        items
            .iter()
            .map(|item| self.render(item))
            .collect::<Result<Vec<_>, _>>()
            .map(Json::Array)
    }

    fn render_object(&mut self, value: &Value, object: &Object) -> Result<Json, DescribeError> {
        if object.kind() == ObjectKind::Array {
            return self.render_all(&object.elements().unwrap_or_default());
        }

        let tag = tag_of(value);
        match tag.as_str() {
            "Object" => {
                let mut map = Map::new();
                for (key, item) in object.entries() {
                    let rendered = self.render(&item)?;
                    map.insert(key, rendered);
                }
                Ok(Json::Object(map))
            }
            "Map" => {
                let entries =
                    map_entries(value).ok_or(DescribeError::NotIterable { tag: tag.clone() })?;
                let mut pairs = Vec::with_capacity(entries.len());
                for (k, v) in entries {
                    pairs.push(Json::Array(vec![self.render(&k)?, self.render(&v)?]));
                }
                Ok(self.sized(&tag, value, Json::Array(pairs)))
            }
            "Set" => {
                let members =
                    set_members(value).ok_or(DescribeError::NotIterable { tag: tag.clone() })?;
                let rendered = self.render_all(&members)?;
                Ok(self.sized(&tag, value, rendered))
            }
            _ => Ok(Json::String(format!("<{}>", tag))),
        }
    }

    fn sized(&self, tag: &str, value: &Value, contents: Json) -> Json {
        let size = value.get("size").to_display_string();
        let mut map = Map::new();
        map.insert(format!("<{} of size {}>", tag, size), contents);
        Json::Object(map)
    }
}
