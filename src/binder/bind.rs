use crate::config::UnboundPolicy;
use crate::errors::RouteError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Matches one `:name` placeholder token.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\w+").expect("failed to compile token regex"));

/// One element of a bind argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum BindArg {
    /// A positional value: substituted into the first remaining placeholder,
    /// whatever its name.
    Scalar(Value),
    /// A key-value object: matched against placeholders by name; leftovers
    /// become query parameters.
    Object(Map<String, Value>),
}

/// The normalized argument list for a bind: zero or more scalars and
/// key-value objects, applied in order.
///
/// A single scalar or object converts into a one-element list, so callers
/// can pass `"foo"`, `5`, `json!({...})`, or `json!([...])` directly:
///
/// ```rust
/// use waymark::binder::bind_url;
/// use waymark::UnboundPolicy;
/// use serde_json::json;
///
/// let url = bind_url("/demos/:test", "foo", UnboundPolicy::Drop).unwrap();
/// assert_eq!(url, "/demos/foo");
///
/// let url = bind_url("/demos/:id", json!({ "id": 7, "page": 2 }), UnboundPolicy::Drop).unwrap();
/// assert_eq!(url, "/demos/7?page=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindArgs(Vec<BindArg>);

impl BindArgs {
    /// An empty argument list.
    #[must_use]
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &BindArg> {
        self.0.iter()
    }
}

impl From<BindArg> for BindArgs {
    fn from(arg: BindArg) -> Self {
        Self(vec![arg])
    }
}

impl From<Vec<BindArg>> for BindArgs {
    fn from(args: Vec<BindArg>) -> Self {
        Self(args)
    }
}

impl From<Value> for BindArgs {
    /// A JSON array is the argument sequence itself; an object is a single
    /// object argument; anything else is a single positional scalar.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Self(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(map) => BindArg::Object(map),
                        other => BindArg::Scalar(other),
                    })
                    .collect(),
            ),
            Value::Object(map) => BindArg::Object(map).into(),
            other => BindArg::Scalar(other).into(),
        }
    }
}

impl From<Map<String, Value>> for BindArgs {
    fn from(map: Map<String, Value>) -> Self {
        BindArg::Object(map).into()
    }
}

impl From<()> for BindArgs {
    fn from(_: ()) -> Self {
        Self::none()
    }
}

impl From<&str> for BindArgs {
    fn from(value: &str) -> Self {
        BindArg::Scalar(Value::from(value)).into()
    }
}

impl From<String> for BindArgs {
    fn from(value: String) -> Self {
        BindArg::Scalar(Value::from(value)).into()
    }
}

impl From<i64> for BindArgs {
    fn from(value: i64) -> Self {
        BindArg::Scalar(Value::from(value)).into()
    }
}

impl From<bool> for BindArgs {
    fn from(value: bool) -> Self {
        BindArg::Scalar(Value::from(value)).into()
    }
}

impl From<Vec<&str>> for BindArgs {
    fn from(items: Vec<&str>) -> Self {
        Self(
            items
                .into_iter()
                .map(|item| BindArg::Scalar(Value::from(item)))
                .collect(),
        )
    }
}

/// String form of a scalar value, or `None` for objects, arrays, and null.
fn serialize_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

/// Bind an argument list into a URL pattern.
///
/// Arguments are consumed in order. A scalar replaces the first remaining
/// `:name` token regardless of its name; an object binds by name and
/// appends its leftovers as query parameters (see [`bind_object`]). Extra
/// scalars with no placeholder left are ignored. After all arguments are
/// consumed, any remaining placeholder fails the bind with
/// [`RouteError::InsufficientParameters`] naming the first such token.
///
/// Substituted values are not URL-encoded.
pub fn bind_url(
    pattern: &str,
    args: impl Into<BindArgs>,
    policy: UnboundPolicy,
) -> Result<String, RouteError> {
    let args = args.into();
    let mut url = pattern.to_string();

    for arg in args.iter() {
        match arg {
            BindArg::Object(map) => {
                url = bind_object(&url, map, policy)?;
            }
            BindArg::Scalar(value) => {
                let Some((range, slot)) = TOKEN_RE
                    .find(&url)
                    .map(|m| (m.range(), m.as_str().trim_start_matches(':').to_string()))
                else {
                    continue;
                };
                match serialize_scalar(value) {
                    Some(text) => url.replace_range(range, &text),
                    None => {
                        if policy == UnboundPolicy::Reject {
                            // Name the slot the value was aimed at.
                            return Err(RouteError::UnserializableValue { key: slot });
                        }
                    }
                }
            }
        }
    }

    if let Some(m) = TOKEN_RE.find(&url) {
        return Err(RouteError::InsufficientParameters {
            token: m.as_str().to_string(),
        });
    }

    Ok(url)
}

/// Bind the fields of an object into a URL pattern.
///
/// Works on a shallow copy, so the caller's map is never mutated. Every
/// remaining `:name` token is matched against the copy by exact key; a
/// matching key is removed whether or not its value was a scalar, so an
/// unserializable value silently consumes the slot and leaves the
/// placeholder unresolved. Leftover keys are appended as query parameters in
/// the map's own key order, `&`-joined if the URL already contains `?`.
pub(crate) fn bind_object(
    pattern: &str,
    object: &Map<String, Value>,
    policy: UnboundPolicy,
) -> Result<String, RouteError> {
    let mut remaining = object.clone();
    let mut url = pattern.to_string();

    let names: Vec<String> = TOKEN_RE
        .find_iter(&url)
        .map(|m| m.as_str().trim_start_matches(':').to_string())
        .collect();

    for name in names {
        let Some(value) = remaining.shift_remove(&name) else {
            continue;
        };
        match serialize_scalar(&value) {
            Some(text) => url = replace_named_token(&url, &name, &text),
            None => {
                if policy == UnboundPolicy::Reject {
                    return Err(RouteError::UnserializableValue { key: name });
                }
            }
        }
    }

    for (key, value) in &remaining {
        let Some(text) = serialize_scalar(value) else {
            if policy == UnboundPolicy::Reject {
                return Err(RouteError::UnserializableValue { key: key.clone() });
            }
            continue;
        };
        let joiner = if url.contains('?') { '&' } else { '?' };
        url.push(joiner);
        url.push_str(key);
        url.push('=');
        url.push_str(&text);
    }

    Ok(url)
}

/// Replace the first occurrence of the exact token `:name` with `value`.
///
/// Matching is by whole token: binding `foo` must not touch a `:foobar`
/// placeholder that happens to share the prefix.
fn replace_named_token(url: &str, name: &str, value: &str) -> String {
    for m in TOKEN_RE.find_iter(url) {
        if &url[m.start() + 1..m.end()] == name {
            let mut out = String::with_capacity(url.len() + value.len());
            out.push_str(&url[..m.start()]);
            out.push_str(value);
            out.push_str(&url[m.end()..]);
            return out;
        }
    }
    url.to_string()
}
