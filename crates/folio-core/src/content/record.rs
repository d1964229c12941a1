//! Content record: one project shown in the detail surface

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of action link attached to a record.
///
/// Ordering is the display order of the rendered links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Source,
    Demo,
    Paper,
    Video,
}

impl LinkKind {
    /// Button label for this link kind
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Source => "View Source",
            LinkKind::Demo => "Live Demo",
            LinkKind::Paper => "Read Paper",
            LinkKind::Video => "Watch Video",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Source => "source",
            LinkKind::Demo => "demo",
            LinkKind::Paper => "paper",
            LinkKind::Video => "video",
        }
    }
}

/// A project record from the content file.
///
/// Immutable once the registry has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Lookup key, unique within the registry
    pub key: String,
    /// Detail heading
    pub title: String,
    /// One-paragraph summary
    pub description: String,
    /// Feature bullets, rendered in this order
    #[serde(default)]
    pub features: Vec<String>,
    /// Technology tags, rendered as chips in this order
    #[serde(default, alias = "technologies")]
    pub tags: Vec<String>,
    /// Optional action links
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<LinkKind, String>,
}

impl ContentRecord {
    /// Presence checks applied when the registry is built
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("record key must not be empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Err(format!("record '{}' has an empty title", self.key));
        }
        if self.description.trim().is_empty() {
            return Err(format!("record '{}' has an empty description", self.key));
        }
        if let Some((kind, _)) = self.links.iter().find(|(_, url)| url.trim().is_empty()) {
            return Err(format!("record '{}' has an empty {} link", self.key, kind.as_str()));
        }
        Ok(())
    }
}
