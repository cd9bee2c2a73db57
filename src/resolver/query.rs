//! Query string serialization for the `params` option.

use serde_json::Value;
use urlencoding::encode;

fn scalar_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(scalar_string).collect::<Vec<_>>().join("/"),
        Value::Object(_) => value.to_string(),
    }
}

fn push_pairs(key: &str, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (child, v) in map {
                push_pairs(&format!("{}[{}]", key, child), v, pairs);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            let item_key = format!("{}[]", key);
            for item in items {
                push_pairs(&item_key, item, pairs);
            }
        }
        Value::Array(_) => pairs.push(format!("{}=", encode(&format!("{}[]", key)))),
        Value::Object(_) => pairs.push(format!("{}=", encode(key))),
        scalar => pairs.push(format!("{}={}", encode(key), encode(&scalar_string(scalar)))),
    }
}

/// Serialize `params` into a query string (without the leading `?`)
///
/// Mappings become `key=value` pairs in insertion order, with nested mappings
/// as `parent[child]` and arrays as `key[]`; keys and values are
/// percent-encoded. Any other value is appended as its plain string form.
/// Returns `None` when there is nothing to append.
#[must_use]
pub fn query_string(params: &Value) -> Option<String> {
    let query = match params {
        Value::Null => return None,
        Value::Object(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (key, value) in map {
                push_pairs(key, value, &mut pairs);
            }
            pairs.join("&")
        }
        other => scalar_string(other),
    };

    (!query.is_empty()).then_some(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let q = query_string(&json!({"foo": "bar", "baz": "zot"}));
        assert_eq!(q.as_deref(), Some("foo=bar&baz=zot"));
    }

    #[test]
    fn test_scalar_is_appended_verbatim() {
        assert_eq!(query_string(&json!(1)).as_deref(), Some("1"));
        assert_eq!(query_string(&json!("page=2")).as_deref(), Some("page=2"));
        assert_eq!(query_string(&json!(["a", 1])).as_deref(), Some("a/1"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let q = query_string(&json!({"q": "black cats & dogs"}));
        assert_eq!(q.as_deref(), Some("q=black%20cats%20%26%20dogs"));
    }

    #[test]
    fn test_nested_mapping_and_arrays() {
        let q = query_string(&json!({"filter": {"color": "black"}, "ids": [1, 2]}));
        assert_eq!(
            q.as_deref(),
            Some("filter%5Bcolor%5D=black&ids%5B%5D=1&ids%5B%5D=2")
        );
    }

    #[test]
    fn test_null_and_empty_containers() {
        assert_eq!(query_string(&json!({"a": null})).as_deref(), Some("a="));
        assert_eq!(query_string(&json!({"a": []})).as_deref(), Some("a%5B%5D="));
        assert_eq!(query_string(&json!({})), None);
        assert_eq!(query_string(&Value::Null), None);
        assert_eq!(query_string(&json!("")), None);
    }
}
