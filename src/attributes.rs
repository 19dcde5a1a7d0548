use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute values exported for a resource in Terraform state.
///
/// Lookups never fail: a missing attribute reads as an empty string, an empty
/// list, or `None`. Computed identifiers for resources written by older
/// provider versions may therefore be incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_str(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(value) => stringify(value),
            None => {
                tracing::debug!(attribute = name, "attribute missing, using empty string");
                String::new()
            }
        }
    }

    pub fn get_list(&self, name: &str) -> &[Value] {
        self.0
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Block attributes are stored as single-element lists; the map itself is
    /// accepted too.
    pub fn get_nested(&self, name: &str) -> Option<&Map<String, Value>> {
        match self.0.get(name)? {
            Value::Array(items) => items.first().and_then(Value::as_object),
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_present(&self, name: &str) -> bool {
        match self.0.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
            Some(_) => true,
        }
    }
}

impl From<Map<String, Value>> for Attributes {
    fn from(values: Map<String, Value>) -> Self {
        Self(values)
    }
}

pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
