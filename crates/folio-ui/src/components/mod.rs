//! Reusable UI components.

mod button;
mod node_view;
mod overlay;
mod tag_chips;
mod trigger;

pub use button::*;
pub use node_view::NodeView;
pub use overlay::{OverlaySurface, OverlaySurfaceProps};
pub use tag_chips::TagChips;
pub use trigger::Trigger;
