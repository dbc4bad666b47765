use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name of the copy itself. Metadata keys must not reuse it.
pub const CONTENT_KEY: &str = "content";

/// A single piece of stored marketing copy.
///
/// On disk this is a flat JSON object: `content` plus any number of
/// string-valued metadata fields (`topic`, `tone`, `target_audience`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub content: String,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, String>,
}

impl Example {
    pub fn new(content: impl Into<String>, metadata: BTreeMap<String, String>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn topic(&self) -> Option<&str> {
        self.metadata.get("topic").map(String::as_str)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn tone(&self) -> Option<&str> {
        self.metadata.get("tone").map(String::as_str)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn target_audience(&self) -> Option<&str> {
        self.metadata.get("target_audience").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_flattens_next_to_content() {
        let example = Example::new(
            "First bag free!",
            BTreeMap::from([
                ("tone".to_string(), "warm".to_string()),
                ("topic".to_string(), "coffee".to_string()),
            ]),
        );
        let value = serde_json::to_value(&example).unwrap();
        assert_eq!(value["content"], "First bag free!");
        assert_eq!(value["tone"], "warm");
        assert_eq!(value["topic"], "coffee");
    }

    #[test]
    fn test_non_string_metadata_is_rejected() {
        let bad = r#"{"content": "x", "generated": true}"#;
        assert!(serde_json::from_str::<Example>(bad).is_err());
    }

    #[test]
    fn test_missing_content_is_rejected() {
        let bad = r#"{"tone": "warm"}"#;
        assert!(serde_json::from_str::<Example>(bad).is_err());
    }

    #[test]
    fn test_accessors_read_metadata() {
        let example: Example = serde_json::from_str(
            r#"{"content": "x", "tone": "playful", "target_audience": "students"}"#,
        )
        .unwrap();
        assert_eq!(example.tone(), Some("playful"));
        assert_eq!(example.target_audience(), Some("students"));
        assert_eq!(example.topic(), None);
    }
}
