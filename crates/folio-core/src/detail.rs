//! Showing a content record in the detail surface

use crate::content::ContentRegistry;
use crate::error::{FolioError, FolioResult};
use crate::overlay::{OverlayManager, Transition};
use crate::render::render;
use crate::types::SurfaceKey;

/// Resolve `key`, render it, inject the tree into the detail surface and
/// open it.
///
/// A missing record or missing detail surface returns early: no content is
/// injected and no surface changes state.
pub fn show_detail(
    overlays: &mut OverlayManager,
    registry: &ContentRegistry,
    key: &str,
) -> FolioResult<Transition> {
    let surface = SurfaceKey::detail();
    if !overlays.contains(&surface) {
        return Err(FolioError::SurfaceNotFound(surface.to_string()));
    }

    let record = registry.resolve(key)?;
    tracing::debug!(key, title = %record.title, "Showing detail");
    overlays.open_with(&surface, render(record))
}
