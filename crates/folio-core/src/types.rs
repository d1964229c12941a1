//! Core types for Folio

use serde::{Deserialize, Serialize};

/// Unique key of an overlay surface (the surface element's id)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceKey(pub String);

impl SurfaceKey {
    /// Skills dialog
    pub const SKILLS: &'static str = "skills-modal";
    /// Project detail surface
    pub const DETAIL: &'static str = "project-modal";
    /// Visualisation preview
    pub const IMAGE: &'static str = "image-modal";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn skills() -> Self {
        Self::new(Self::SKILLS)
    }

    pub fn detail() -> Self {
        Self::new(Self::DETAIL)
    }

    pub fn image() -> Self {
        Self::new(Self::IMAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SurfaceKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique id of an element in the page document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Visualizations,
    Resume,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Visualizations,
        SectionId::Resume,
        SectionId::Contact,
    ];

    /// Element id of the section (and anchor fragment)
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Visualizations => "visualizations",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }

    /// Label used in the navigation bar
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Visualizations => "Visualizations",
            SectionId::Resume => "Resume",
            SectionId::Contact => "Contact",
        }
    }

    /// `#about` style anchor for this section
    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_href() {
        assert_eq!(SectionId::About.href(), "#about");
        assert_eq!(SectionId::Visualizations.href(), "#visualizations");
    }

    #[test]
    fn test_section_ids_unique() {
        let ids: std::collections::BTreeSet<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_surface_key_constants() {
        assert_eq!(SurfaceKey::detail().as_str(), "project-modal");
        assert_eq!(SurfaceKey::from("skills-modal"), SurfaceKey::skills());
        assert_eq!(format!("{}", SurfaceKey::image()), "image-modal");
    }
}
