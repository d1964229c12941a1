//! Page content loaded from a TOML content file.
//!
//! ```toml
//! [profile]
//! name = "Jane Doe"
//! tagline = "..."
//! about = "..."
//!
//! [[skills]]
//! category = "Languages"
//! items = ["Python", "Rust"]
//!
//! [[plots]]
//! title = "Sine Wave"
//!
//! [[projects]]
//! key = "pagerank"
//! title = "PageRank Algorithm Implementation"
//! description = "..."
//! features = ["..."]
//! tags = ["Python"]
//! links = { source = "https://..." }
//! ```

mod record;
mod registry;

use std::path::Path;

use serde::Deserialize;

pub use record::{ContentRecord, LinkKind};
pub use registry::ContentRegistry;

use crate::error::{FolioError, FolioResult};

/// Content shipped with the binary
pub const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.toml");

/// Header block of the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Typed out by the typewriter on load
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One group in the skills dialog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// One visualisation slot; position defines the `plot{n}.png` index
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlotEntry {
    pub title: String,
}

/// Resume block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResumeInfo {
    pub path: String,
}

impl Default for ResumeInfo {
    fn default() -> Self {
        Self {
            path: "resume.pdf".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawContent {
    profile: Profile,
    #[serde(default)]
    skills: Vec<SkillGroup>,
    #[serde(default)]
    plots: Vec<PlotEntry>,
    #[serde(default)]
    resume: ResumeInfo,
    #[serde(default)]
    projects: Vec<ContentRecord>,
}

/// Everything the page renders, validated at load time
#[derive(Debug, Clone)]
pub struct PageContent {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub plots: Vec<PlotEntry>,
    pub resume: ResumeInfo,
    pub registry: ContentRegistry,
}

impl PageContent {
    /// Parse and validate a content document
    pub fn from_toml(source: &str) -> FolioResult<Self> {
        let raw: RawContent = toml::from_str(source)?;

        if raw.profile.name.trim().is_empty() {
            return Err(FolioError::InvalidContent("profile name must not be empty".to_string()));
        }
        if let Some(group) = raw.skills.iter().find(|g| g.category.trim().is_empty()) {
            return Err(FolioError::InvalidContent(format!(
                "skill group with items {:?} has no category",
                group.items
            )));
        }

        let registry = ContentRegistry::from_records(raw.projects)?;
        tracing::debug!(
            records = registry.len(),
            skills = raw.skills.len(),
            plots = raw.plots.len(),
            "Loaded page content"
        );

        Ok(Self {
            profile: raw.profile,
            skills: raw.skills,
            plots: raw.plots,
            resume: raw.resume,
            registry,
        })
    }

    /// Content compiled into the binary
    pub fn embedded() -> FolioResult<Self> {
        Self::from_toml(EMBEDDED_CONTENT)
    }

    /// Load from a file on disk
    pub fn load(path: &Path) -> FolioResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Load from `path` if given, otherwise the embedded content
    pub fn load_or_embedded(path: Option<&Path>) -> FolioResult<Self> {
        match path {
            Some(p) => {
                tracing::info!("Loading content from {:?}", p);
                Self::load(p)
            }
            None => Self::embedded(),
        }
    }

    /// Number of plot images refreshed after generation
    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }
}
