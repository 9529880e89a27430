//! Built-in document catalog shown on the dashboard.

use anyhow::{Context, Result};
use serde::Deserialize;

const CATALOG: &str = include_str!("../../../assets/documents.json");

/// One dashboard card: a titled link to an external document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentLink {
    pub title: String,
    pub description: String,
    pub href: String,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Catalog shipped inside the binary.
pub fn builtin() -> Result<Vec<DocumentLink>> {
    serde_json::from_str(CATALOG).context("built-in document catalog is malformed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let documents = builtin().unwrap();
        assert!(!documents.is_empty());
        for document in &documents {
            assert!(!document.title.is_empty());
            assert!(document.href.starts_with("https://"));
        }
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(serde_json::from_str::<Vec<DocumentLink>>("{not json").is_err());
    }

    #[test]
    fn tag_is_optional() {
        let parsed: Vec<DocumentLink> = serde_json::from_str(
            r#"[{"title": "t", "description": "d", "href": "https://example.com"}]"#,
        )
        .unwrap();
        assert_eq!(parsed[0].tag, None);
    }
}
