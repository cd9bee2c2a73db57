use serde_json::{Map, Value};

use crate::error::{HelperError, HelperResult};

/// Reserved key overriding the default extension
pub const FORMAT_KEY: &str = "format";

/// Reserved key whose value becomes the query string
pub const PARAMS_KEY: &str = "params";

/// Canonical form of an option key
///
/// Keys may arrive in symbolic form (`:id`) or as plain strings (`id`); both
/// name the same option.
#[must_use]
pub fn normalize_key(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

/// Per-call input of a path helper
///
/// Holds values for dynamic segments plus the two reserved options `format`
/// and `params`. Keys are normalized on insert so lookups never deal with
/// more than one key spelling. Unrecognized keys are kept and ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    values: Map<String, Value>,
    format: Option<Value>,
    params: Option<Value>,
}

impl CallOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, routing `format` and `params` to their reserved slots
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<Value>) {
        let key = normalize_key(key.as_ref());
        let value = value.into();
        match key {
            FORMAT_KEY => self.format = Some(value),
            PARAMS_KEY => self.params = Some(value),
            _ => {
                self.values.insert(key.to_string(), value);
            }
        }
    }

    /// Builder form of [`CallOptions::insert`]
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(Value::String(format.into()));
        self
    }

    #[must_use]
    pub fn params(mut self, params: impl Into<Value>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Value supplied for a dynamic segment, in either key spelling
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(normalize_key(name))
    }

    #[must_use]
    pub fn format_value(&self) -> Option<&Value> {
        self.format.as_ref()
    }

    #[must_use]
    pub fn params_value(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.format.is_none() && self.params.is_none()
    }

    /// Build from a JSON object; `null` is the empty option set
    ///
    /// # Errors
    ///
    /// `InvalidOption` when `value` is neither an object nor `null`.
    pub fn from_value(value: Value) -> HelperResult<Self> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(HelperError::InvalidOption {
                key: "<options>".to_string(),
                reason: format!("expected an object, got {}", other),
            }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CallOptions
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = CallOptions::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl TryFrom<Value> for CallOptions {
    type Error = HelperError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        CallOptions::from_value(value)
    }
}

/// String form of a segment value; `None` when the value counts as absent
///
/// `null` and empty strings are absent. Containers cannot stand in for a
/// single path component.
///
/// # Errors
///
/// `InvalidOption` for arrays and objects.
pub fn segment_value(key: &str, value: &Value) -> HelperResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(HelperError::InvalidOption {
            key: key.to_string(),
            reason: "a path segment needs a scalar value".to_string(),
        }),
    }
}
