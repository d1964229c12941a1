//! Folio UI Components
//!
//! Dioxus components for the portfolio page. They hold no state of their
//! own: every interactive element reports its element id to a single
//! `on_dispatch` handler, which feeds `folio_core::PageState::on_click`.
//!
//! ## Components
//!
//! - [`OverlaySurface`]: backdrop, content region and close control
//! - [`NodeView`]: renders a `folio_core::Node` tree
//! - [`Trigger`], [`Button`], [`CloseButton`]: click targets
//! - [`TagChips`]: inline tag row for project cards

pub mod components;

pub use components::*;
