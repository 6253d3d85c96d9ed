//! Closed metadata values.
//!
//! Model configurations, conversation context, and message metadata are
//! free-form JSON objects on the wire. Rather than passing raw JSON values
//! around, these maps hold a closed set of shapes and keep their keys
//! ordered, so merges are deterministic and unknown keys survive a round
//! trip untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A key-ordered map of metadata values.
pub type MetaMap = BTreeMap<String, MetaValue>;

/// A single metadata value.
///
/// Untagged: the JSON representation is the value itself, exactly as the
/// platform emits it. Numbers are f64 because the platform never
/// distinguishes integer from float in these maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<MetaValue>),
    Map(MetaMap),
}

impl MetaValue {
    /// The string payload, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this value is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetaValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this value is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::String(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::String(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

/// Overwrite `base` with the keys of `overlay`, top level only.
///
/// Keys present only in `base` are preserved; keys present in `overlay`
/// replace the base value wholesale, nested maps included. This is the
/// merge the platform applies to partial map updates.
pub fn shallow_merge(base: &mut MetaMap, overlay: MetaMap) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}

/// Decode a field that the server may send as `null` into its default.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_round_trip() {
        let mut map = MetaMap::new();
        map.insert("model".to_string(), MetaValue::from("deepseek-ai/DeepSeek-V3"));
        map.insert("temperature".to_string(), MetaValue::from(0.7));
        map.insert("stream".to_string(), MetaValue::from(true));
        map.insert("stop".to_string(), MetaValue::Null);

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"model\":\"deepseek-ai/DeepSeek-V3\""));
        assert!(json.contains("\"temperature\":0.7"));
        assert!(json.contains("\"stop\":null"));

        let parsed: MetaMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_nested_map_round_trip() {
        let json = r#"{"retrieval":{"top_k":3,"sources":["kb-1","kb-2"]}}"#;
        let parsed: MetaMap = serde_json::from_str(json).unwrap();

        let MetaValue::Map(inner) = &parsed["retrieval"] else {
            panic!("expected nested map");
        };
        assert_eq!(inner["top_k"].as_f64(), Some(3.0));

        let back = serde_json::to_string(&parsed).unwrap();
        let reparsed: MetaMap = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_shallow_merge_preserves_siblings() {
        let mut base = MetaMap::new();
        base.insert("model".to_string(), MetaValue::from("gpt-4"));
        base.insert("temperature".to_string(), MetaValue::from(0.7));
        base.insert("max_tokens".to_string(), MetaValue::from(2000.0));

        let mut overlay = MetaMap::new();
        overlay.insert("model".to_string(), MetaValue::from("claude-3-opus"));

        shallow_merge(&mut base, overlay);

        assert_eq!(base["model"].as_str(), Some("claude-3-opus"));
        assert_eq!(base["temperature"].as_f64(), Some(0.7));
        assert_eq!(base["max_tokens"].as_f64(), Some(2000.0));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn test_shallow_merge_replaces_nested_maps_wholesale() {
        let mut base: MetaMap = serde_json::from_str(r#"{"chunk":{"size":512,"overlap":64}}"#).unwrap();
        let overlay: MetaMap = serde_json::from_str(r#"{"chunk":{"size":1024}}"#).unwrap();

        shallow_merge(&mut base, overlay);

        let MetaValue::Map(chunk) = &base["chunk"] else {
            panic!("expected map");
        };
        assert_eq!(chunk["size"].as_f64(), Some(1024.0));
        assert!(!chunk.contains_key("overlap"));
    }

    #[test]
    fn test_key_order_is_deterministic() {
        let a: MetaMap = serde_json::from_str(r#"{"b":1,"a":2,"c":3}"#).unwrap();
        let b: MetaMap = serde_json::from_str(r#"{"c":3,"a":2,"b":1}"#).unwrap();
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}
