//! [`Any`]: the self-describing leaf value of the lib0 encoding.

use indexmap::IndexMap;

/// A dynamically typed value as carried by `ContentAny`, `ContentEmbed`,
/// `ContentFormat` and `ContentJSON` payloads.
///
/// Map entries keep the order in which they were decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Any {
    Undefined,
    Null,
    Bool(bool),
    /// Integer decoded from a varint.
    Integer(i64),
    /// Floating-point number (decoded from either f32 or f64).
    Float(f64),
    /// 64-bit bigint.
    BigInt(i64),
    String(String),
    Buffer(Vec<u8>),
    Array(Vec<Any>),
    Map(IndexMap<String, Any>),
}

impl Any {
    /// Looks up a key of a map value.
    pub fn get(&self, key: &str) -> Option<&Any> {
        match self {
            Any::Map(map) => map.get(key),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Any::Undefined)
    }
}

impl From<bool> for Any {
    fn from(v: bool) -> Self {
        Any::Bool(v)
    }
}

impl From<i64> for Any {
    fn from(v: i64) -> Self {
        Any::Integer(v)
    }
}

impl From<f64> for Any {
    fn from(v: f64) -> Self {
        Any::Float(v)
    }
}

impl From<&str> for Any {
    fn from(v: &str) -> Self {
        Any::String(v.to_string())
    }
}

impl From<String> for Any {
    fn from(v: String) -> Self {
        Any::String(v)
    }
}

impl From<Vec<u8>> for Any {
    fn from(v: Vec<u8>) -> Self {
        Any::Buffer(v)
    }
}

impl From<serde_json::Value> for Any {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Any::Null,
            serde_json::Value::Bool(b) => Any::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Any::Integer(i)
                } else {
                    // u64 above i64::MAX lands here too and loses precision,
                    // like every JS number would.
                    Any::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Any::String(s),
            serde_json::Value::Array(arr) => Any::Array(arr.into_iter().map(Any::from).collect()),
            serde_json::Value::Object(obj) => {
                Any::Map(obj.into_iter().map(|(k, v)| (k, Any::from(v))).collect())
            }
        }
    }
}

impl From<Any> for serde_json::Value {
    fn from(v: Any) -> Self {
        match v {
            Any::Undefined | Any::Null => serde_json::Value::Null,
            Any::Bool(b) => serde_json::Value::Bool(b),
            Any::Integer(i) | Any::BigInt(i) => serde_json::Value::from(i),
            Any::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Any::String(s) => serde_json::Value::String(s),
            Any::Buffer(bytes) => {
                serde_json::Value::Array(bytes.into_iter().map(serde_json::Value::from).collect())
            }
            Any::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            Any::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_keeps_key_order() {
        let any = Any::from(json!({"z": 1, "a": [true, null, "x"], "m": 1.5}));
        let Any::Map(map) = &any else {
            panic!("expected map, got {any:?}");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
        assert_eq!(any.get("z"), Some(&Any::Integer(1)));
        assert_eq!(any.get("m"), Some(&Any::Float(1.5)));
        assert_eq!(
            any.get("a"),
            Some(&Any::Array(vec![Any::Bool(true), Any::Null, Any::from("x")]))
        );
    }

    #[test]
    fn to_json_lossy_variants() {
        assert_eq!(serde_json::Value::from(Any::Undefined), json!(null));
        assert_eq!(serde_json::Value::from(Any::Float(f64::NAN)), json!(null));
        assert_eq!(serde_json::Value::from(Any::Buffer(vec![1, 2])), json!([1, 2]));
        assert_eq!(serde_json::Value::from(Any::BigInt(7)), json!(7));
    }

    #[test]
    fn get_on_non_map_is_none() {
        assert_eq!(Any::from("a").get("a"), None);
        assert!(Any::Undefined.is_undefined());
    }
}
