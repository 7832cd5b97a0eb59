//! Count summary returned by `GET /count[/<mobile>]`

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Submission counters reported by the API.
///
/// The response is an open JSON object; a bare scalar is stored under
/// `"count"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CountSummary {
    pub fields: Map<String, Value>,
}

impl CountSummary {
    /// Read a counter, accepting numeric strings
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'de> Deserialize<'de> for CountSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = match Value::deserialize(deserializer)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            scalar => Map::from_iter([("count".to_string(), scalar)]),
        };
        Ok(Self { fields })
    }
}
