//! Portfolio page sections and overlays
//!
//! Every section reads the shared page signal and reports clicks to the
//! page dispatcher; none of them keeps interactive state of its own.

mod about;
mod hero;
mod nav_header;
mod page_section;
mod projects;
mod resume;
mod skills;
mod visualizations;

pub use about::{About, Contact};
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use page_section::PageSection;
pub use projects::{DetailOverlay, Projects};
pub use resume::Resume;
pub use skills::{Skills, SkillsOverlay};
pub use visualizations::{ImageOverlay, Visualizations};
