//! Overlay Manager.
//!
//! Controls visibility of named overlay surfaces and the shared body scroll
//! lock. The lock is reference-counted: it stays engaged while at least one
//! surface is visible, so closing one of two stacked surfaces keeps the page
//! locked.
//!
//! ## State machine
//!
//! ```text
//!            open / open_with
//!   Hidden ───────────────────▶ Visible
//!      ▲                           │
//!      └───────────────────────────┘
//!     close / backdrop click / close control
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::document::{Document, PointerEvent, Role};
use crate::error::{FolioError, FolioResult};
use crate::render::Node;
use crate::types::{ElementId, SurfaceKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Whether a surface accepts injected content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Content is part of the page (skills dialog)
    Static,
    /// Content is injected on every open (detail, image preview)
    Injectable,
}

/// Visibility change produced by an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub surface: SurfaceKey,
    pub from: Visibility,
    pub to: Visibility,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone)]
struct SurfaceState {
    kind: SurfaceKind,
    backdrop: ElementId,
    visibility: Visibility,
    content: Option<Node>,
}

/// Visibility and scroll-lock state of all surfaces
#[derive(Debug, Clone, Default)]
pub(crate) struct OverlayState {
    surfaces: BTreeMap<SurfaceKey, SurfaceState>,
    visible: usize,
}

impl OverlayState {
    pub fn scroll_locked(&self) -> bool {
        self.visible > 0
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }
}

/// Opens and closes surfaces; owns their visibility and scroll-lock state
#[derive(Debug, Clone, Default)]
pub struct OverlayManager {
    state: OverlayState,
    close_bindings: HashMap<ElementId, SurfaceKey>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every surface declared in the document, all hidden
    pub fn from_document(document: &Document) -> Self {
        let mut manager = Self::new();
        for key in document.surfaces() {
            let kind = if document.content_container(key).is_some() {
                SurfaceKind::Injectable
            } else {
                SurfaceKind::Static
            };
            let backdrop = document
                .surface_element(key)
                .map(|e| e.id.clone())
                .unwrap_or_else(|| ElementId::new(key.as_str()));
            manager.register(key.clone(), kind, backdrop);
        }
        manager
    }

    /// Add a surface. Re-registering an existing key keeps its visibility.
    pub fn register(&mut self, key: SurfaceKey, kind: SurfaceKind, backdrop: ElementId) {
        self.state
            .surfaces
            .entry(key)
            .and_modify(|s| {
                s.kind = kind;
                s.backdrop = backdrop.clone();
            })
            .or_insert(SurfaceState {
                kind,
                backdrop,
                visibility: Visibility::Hidden,
                content: None,
            });
    }

    /// Bind each close control to its nearest enclosing surface.
    ///
    /// Returns the number of bound controls.
    pub fn register_close_controls(&mut self, document: &Document) -> usize {
        self.close_bindings.clear();
        for element in document.elements().iter().filter(|e| e.role == Role::CloseControl) {
            match document.nearest_surface(&element.id) {
                Some(key) if self.state.surfaces.contains_key(key) => {
                    self.close_bindings.insert(element.id.clone(), key.clone());
                }
                _ => {
                    tracing::warn!(control = %element.id, "Close control is not inside a registered surface");
                }
            }
        }
        tracing::debug!(bound = self.close_bindings.len(), "Registered close controls");
        self.close_bindings.len()
    }

    /// Show a surface and engage the scroll lock
    pub fn open(&mut self, key: &SurfaceKey) -> FolioResult<Transition> {
        let surface = self
            .state
            .surfaces
            .get_mut(key)
            .ok_or_else(|| FolioError::SurfaceNotFound(key.to_string()))?;

        let from = surface.visibility;
        if from == Visibility::Hidden {
            surface.visibility = Visibility::Visible;
            self.state.visible += 1;
            tracing::debug!(surface = %key, visible = self.state.visible, "Opened surface");
        }

        Ok(Transition {
            surface: key.clone(),
            from,
            to: Visibility::Visible,
        })
    }

    /// Replace the surface's injected content, then open it.
    ///
    /// Nothing changes if the surface is missing or takes no content.
    pub fn open_with(&mut self, key: &SurfaceKey, content: Node) -> FolioResult<Transition> {
        let surface = self
            .state
            .surfaces
            .get_mut(key)
            .ok_or_else(|| FolioError::SurfaceNotFound(key.to_string()))?;
        if surface.kind != SurfaceKind::Injectable {
            return Err(FolioError::InvalidContent(format!(
                "surface '{}' has no content container",
                key
            )));
        }
        surface.content = Some(content);
        self.open(key)
    }

    /// Hide a surface and discard its injected content.
    ///
    /// The scroll lock is released only when no surface remains visible.
    pub fn close(&mut self, key: &SurfaceKey) -> FolioResult<Transition> {
        let surface = self
            .state
            .surfaces
            .get_mut(key)
            .ok_or_else(|| FolioError::SurfaceNotFound(key.to_string()))?;

        let from = surface.visibility;
        surface.content = None;
        if from == Visibility::Visible {
            surface.visibility = Visibility::Hidden;
            self.state.visible -= 1;
            tracing::debug!(surface = %key, visible = self.state.visible, "Closed surface");
        }

        Ok(Transition {
            surface: key.clone(),
            from,
            to: Visibility::Hidden,
        })
    }

    /// Close every surface whose backdrop is exactly the click target.
    ///
    /// Clicks on descendants of a surface never match. Returns the surfaces
    /// that actually went from visible to hidden.
    pub fn close_all_on_backdrop_click(&mut self, event: &PointerEvent) -> Vec<Transition> {
        let hits: Vec<SurfaceKey> = self
            .state
            .surfaces
            .iter()
            .filter(|(_, s)| s.backdrop == event.target)
            .map(|(k, _)| k.clone())
            .collect();

        hits.iter()
            .filter_map(|key| self.close(key).ok())
            .filter(Transition::changed)
            .collect()
    }

    /// Close the surface bound to a close control, if the target is one
    pub fn close_from_control(&mut self, event: &PointerEvent) -> FolioResult<Option<Transition>> {
        match self.close_bindings.get(&event.target).cloned() {
            Some(key) => self.close(&key).map(Some),
            None => Ok(None),
        }
    }

    pub fn contains(&self, key: &SurfaceKey) -> bool {
        self.state.surfaces.contains_key(key)
    }

    pub fn visibility(&self, key: &SurfaceKey) -> Option<Visibility> {
        self.state.surfaces.get(key).map(|s| s.visibility)
    }

    pub fn is_visible(&self, key: &SurfaceKey) -> bool {
        self.visibility(key) == Some(Visibility::Visible)
    }

    /// Injected content of a surface while it is open
    pub fn content(&self, key: &SurfaceKey) -> Option<&Node> {
        self.state.surfaces.get(key).and_then(|s| s.content.as_ref())
    }

    pub fn scroll_locked(&self) -> bool {
        self.state.scroll_locked()
    }

    pub fn visible_count(&self) -> usize {
        self.state.visible_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PageContent;
    use crate::document::{close_control_id, surface_content_id, Element, PROJECT_DETAILS_ID};

    fn manager() -> (OverlayManager, Document) {
        let doc = Document::portfolio(&PageContent::embedded().unwrap());
        let mut m = OverlayManager::from_document(&doc);
        m.register_close_controls(&doc);
        (m, doc)
    }

    #[test]
    fn test_initially_hidden_and_unlocked() {
        let (m, _) = manager();
        assert!(!m.is_visible(&SurfaceKey::skills()));
        assert!(!m.scroll_locked());
        assert_eq!(m.visible_count(), 0);
    }

    #[test]
    fn test_open_close_roundtrip() {
        let (mut m, _) = manager();
        let key = SurfaceKey::skills();

        let t = m.open(&key).unwrap();
        assert!(t.changed());
        assert!(m.scroll_locked());

        let t = m.close(&key).unwrap();
        assert_eq!(t.to, Visibility::Hidden);
        assert!(!m.is_visible(&key));
        assert!(!m.scroll_locked());
    }

    #[test]
    fn test_missing_surface_reported() {
        let (mut m, _) = manager();
        let key = SurfaceKey::new("nope");
        assert!(matches!(m.open(&key), Err(FolioError::SurfaceNotFound(_))));
        assert!(matches!(m.close(&key), Err(FolioError::SurfaceNotFound(_))));
        assert!(!m.scroll_locked());
    }

    #[test]
    fn test_stacked_surfaces_keep_lock() {
        let (mut m, _) = manager();
        m.open(&SurfaceKey::skills()).unwrap();
        m.open(&SurfaceKey::detail()).unwrap();

        m.close(&SurfaceKey::detail()).unwrap();
        assert!(m.scroll_locked());

        m.close(&SurfaceKey::skills()).unwrap();
        assert!(!m.scroll_locked());
    }

    #[test]
    fn test_double_open_counts_once() {
        let (mut m, _) = manager();
        m.open(&SurfaceKey::skills()).unwrap();
        let t = m.open(&SurfaceKey::skills()).unwrap();
        assert!(!t.changed());
        assert_eq!(m.visible_count(), 1);

        m.close(&SurfaceKey::skills()).unwrap();
        let t = m.close(&SurfaceKey::skills()).unwrap();
        assert!(!t.changed());
        assert_eq!(m.visible_count(), 0);
    }

    #[test]
    fn test_backdrop_click_closes_only_exact_target() {
        let (mut m, _) = manager();
        m.open(&SurfaceKey::detail()).unwrap();

        let inner = m.close_all_on_backdrop_click(&PointerEvent::on(surface_content_id(&SurfaceKey::detail())));
        assert!(inner.is_empty());
        let inner = m.close_all_on_backdrop_click(&PointerEvent::on(PROJECT_DETAILS_ID));
        assert!(inner.is_empty());
        assert!(m.is_visible(&SurfaceKey::detail()));

        let closed = m.close_all_on_backdrop_click(&PointerEvent::on(SurfaceKey::DETAIL));
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].surface, SurfaceKey::detail());
        assert!(!m.scroll_locked());
    }

    #[test]
    fn test_close_control_closes_enclosing_surface() {
        let (mut m, _) = manager();
        m.open(&SurfaceKey::image()).unwrap();

        let t = m
            .close_from_control(&PointerEvent::on(close_control_id(&SurfaceKey::image())))
            .unwrap()
            .unwrap();
        assert_eq!(t.surface, SurfaceKey::image());
        assert!(!m.is_visible(&SurfaceKey::image()));

        let none = m.close_from_control(&PointerEvent::on("header")).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_register_close_controls_counts_bindings() {
        let (mut m, mut doc) = manager();
        assert_eq!(m.register_close_controls(&doc), 3);

        doc.insert(Element::new("stray-close", Role::CloseControl));
        assert_eq!(m.register_close_controls(&doc), 3);
    }

    #[test]
    fn test_injected_content_discarded_on_close() {
        let (mut m, _) = manager();
        let key = SurfaceKey::detail();
        m.open_with(&key, Node::text("hello")).unwrap();
        assert_eq!(m.content(&key), Some(&Node::text("hello")));

        m.close(&key).unwrap();
        assert!(m.content(&key).is_none());
    }

    #[test]
    fn test_static_surface_rejects_content() {
        let (mut m, _) = manager();
        let err = m.open_with(&SurfaceKey::skills(), Node::text("x")).unwrap_err();
        assert!(matches!(err, FolioError::InvalidContent(_)));
        assert!(!m.is_visible(&SurfaceKey::skills()));
    }
}
