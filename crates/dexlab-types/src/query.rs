//! Request parameters
//!
//! The same mapping is encoded into the query string for GET requests and
//! sent as the JSON body for every other verb.

use serde::Serialize;
use serde_json::{Map, Value};

/// Error converting a request struct into parameters
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    #[error("Request parameters must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Failed to serialize request parameters: {0}")]
    Serialize(String),
}

/// Parameter mapping of string keys to scalar or array values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Query(Map<String, Value>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Build parameters from any struct that serializes to a JSON object
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, QueryError> {
        match serde_json::to_value(value).map_err(|e| QueryError::Serialize(e.to_string()))? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(QueryError::NotAnObject("null")),
            Value::Bool(_) => Err(QueryError::NotAnObject("bool")),
            Value::Number(_) => Err(QueryError::NotAnObject("number")),
            Value::String(_) => Err(QueryError::NotAnObject("string")),
            Value::Array(_) => Err(QueryError::NotAnObject("array")),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Query {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Pair {
        coin: String,
        price_currency: String,
    }

    #[test]
    fn test_builder() {
        let query = Query::new().with("coin", "SOL").with("ids", vec![1, 2]);
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("ids"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_from_serialize() {
        let query = Query::from_serialize(&Pair {
            coin: "SRM".to_string(),
            price_currency: "USDC".to_string(),
        })
        .unwrap();

        assert_eq!(query.get("coin"), Some(&json!("SRM")));
        assert_eq!(query.get("priceCurrency"), Some(&json!("USDC")));
    }

    #[test]
    fn test_from_serialize_rejects_non_object() {
        assert!(matches!(
            Query::from_serialize(&vec![1, 2, 3]),
            Err(QueryError::NotAnObject("array"))
        ));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let query = Query::new().with("side", "buy");
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"side": "buy"}));
        assert_eq!(serde_json::to_string(&Query::new()).unwrap(), "{}");
    }
}
