//! Folio Core Library
//!
//! Framework-neutral state for an interactive portfolio page.
//!
//! ## Overview
//!
//! The page is a handful of overlay surfaces (skills, project details,
//! image preview) and some scroll-driven decoration. This crate keeps all
//! of that as plain data so it can be driven by the Dioxus app, the CLI or
//! a test:
//!
//! - **Overlay Manager**: opens and closes named surfaces and owns the
//!   body scroll lock (reference-counted over visible surfaces)
//! - **Content Registry**: project records loaded from a TOML content file
//! - **Detail Renderer**: turns a record into a small [`Node`] tree
//! - **Page State**: one delegated click handler and one scroll handler
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{FolioConfig, PageContent, PageState, PointerEvent};
//!
//! let content = PageContent::embedded()?;
//! let mut page = PageState::portfolio(content, &FolioConfig::default());
//!
//! page.on_click(&PointerEvent::on("project-card-pagerank"));
//! assert!(page.overlays().scroll_locked());
//! ```

pub mod config;
pub mod content;
pub mod detail;
pub mod document;
pub mod error;
pub mod generation;
pub mod logging;
pub mod overlay;
pub mod page;
pub mod render;
pub mod types;

// Re-exports
pub use config::{ContentConfig, FolioConfig, GenerationConfig, PageConfig, ProviderKind};
pub use content::{ContentRecord, ContentRegistry, LinkKind, PageContent, PlotEntry, Profile, SkillGroup};
pub use detail::show_detail;
pub use document::{Document, Element, PointerEvent, Role};
pub use error::{FolioError, FolioResult};
pub use generation::{
    plot_urls, provider_from_config, run_generation, GenerateControl, GenerationOutcome,
    GenerationProvider, HttpProvider, LocalDelayProvider,
};
pub use overlay::{OverlayManager, SurfaceKind, Transition, Visibility};
pub use page::{
    ClickOutcome, HeaderState, PageState, ResumeToggle, RevealTracker, ScrollSample, Typewriter,
};
pub use render::{render, Node};
pub use types::*;
