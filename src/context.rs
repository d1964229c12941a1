//! Page context for the portfolio app.
//!
//! The whole page state lives in one signal. Components render from it and
//! report clicks through a single dispatcher, which feeds them to
//! [`PageState::on_click`] and carries out the side effects it asks for
//! (smooth scrolling, running the generation provider).
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let page = use_page();
//! let dispatch = use_dispatch();
//!
//! rsx! {
//!     Trigger { id: ElementId::new("skills-trigger"), on_dispatch: dispatch, "View All Skills" }
//! }
//! ```

use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::generation::generate_once;
use folio_core::{
    ClickOutcome, ElementId, FolioConfig, GenerationProvider, PageState, PointerEvent, ScrollSample,
    SectionId,
};

/// Mounted section elements, used for smooth scrolling and reveal
pub type SectionMounts = BTreeMap<SectionId, Rc<MountedData>>;

/// Generation provider shared through context
#[derive(Clone)]
pub struct SharedProvider(pub Arc<dyn GenerationProvider>);

/// Mounted scroll container of the page
#[derive(Clone, Copy)]
pub struct ScrollContainer(pub Signal<Option<Rc<MountedData>>>);

/// Hook to access the page state.
pub fn use_page() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Hook to access the click dispatcher.
pub fn use_dispatch() -> EventHandler<ElementId> {
    use_context::<EventHandler<ElementId>>()
}

/// Hook to access the loaded configuration.
pub fn use_config() -> FolioConfig {
    use_context::<FolioConfig>()
}

/// Hook to access the section mount table.
pub fn use_sections() -> Signal<SectionMounts> {
    use_context::<Signal<SectionMounts>>()
}

/// Hook to access the page scroll container.
pub fn use_scroll_container() -> ScrollContainer {
    use_context::<ScrollContainer>()
}

/// Provide page state, dispatcher and scroll bookkeeping to the tree.
///
/// Call once from the root component.
pub fn provide_page_context(
    init: impl FnOnce() -> PageState,
    config: FolioConfig,
    provider: SharedProvider,
) {
    let page = use_signal(init);
    let sections = use_signal(SectionMounts::new);
    let container = ScrollContainer(use_signal(|| None));
    let label_reset = config.generation.label_reset();

    use_context_provider(|| config);
    use_context_provider(|| provider.clone());
    use_context_provider(|| page);
    use_context_provider(|| sections);
    use_context_provider(|| container);

    let dispatch = use_callback(move |target: ElementId| {
        let mut page = page;
        let outcome = page.write().on_click(&PointerEvent::on(target));
        match outcome {
            ClickOutcome::StartGeneration => start_generation(page, provider.0.clone(), label_reset),
            ClickOutcome::ScrollTo(section) => scroll_to_section(sections, section),
            ClickOutcome::Failed(e) => tracing::debug!("Click failed: {}", e),
            _ => {}
        }
    });
    use_context_provider(|| dispatch);
}

/// Run one generation cycle in the background.
///
/// The label shows the outcome for `label_reset`, then goes back to idle.
fn start_generation(mut page: Signal<PageState>, provider: Arc<dyn GenerationProvider>, label_reset: Duration) {
    if !page.write().begin_generation() {
        return;
    }

    spawn(async move {
        let outcome = generate_once(provider.as_ref()).await;
        page.write().finish_generation(outcome, chrono::Utc::now().timestamp_millis());

        tokio::time::sleep(label_reset).await;
        page.write().reset_generation();
    });
}

fn scroll_to_section(sections: Signal<SectionMounts>, section: SectionId) {
    let Some(mounted) = sections.read().get(&section).cloned() else {
        tracing::debug!(%section, "Section not mounted yet");
        return;
    };
    spawn(async move {
        if let Err(e) = mounted.scroll_to(ScrollBehavior::Smooth).await {
            tracing::warn!(%section, "Smooth scroll failed: {:?}", e);
        }
    });
}

/// Sample the scroll position and section offsets, then feed the page.
pub fn sample_scroll(mut page: Signal<PageState>, container: ScrollContainer, sections: Signal<SectionMounts>) {
    let Some(root) = container.0.read().clone() else {
        return;
    };
    let mounted: Vec<(SectionId, Rc<MountedData>)> =
        sections.read().iter().map(|(s, m)| (*s, m.clone())).collect();

    spawn(async move {
        let offset_y = match root.get_scroll_offset().await {
            Ok(offset) => offset.y,
            Err(e) => {
                tracing::trace!("No scroll offset: {:?}", e);
                return;
            }
        };
        let (viewport_top, viewport_height) = match root.get_client_rect().await {
            Ok(rect) => (rect.origin.y, rect.size.height),
            Err(_) => return,
        };

        let mut section_tops = Vec::with_capacity(mounted.len());
        for (section, element) in mounted {
            if let Ok(rect) = element.get_client_rect().await {
                section_tops.push((section, rect.origin.y - viewport_top));
            }
        }

        let sample = ScrollSample { offset_y, viewport_height, section_tops };
        if page.peek().scroll_changes(&sample) {
            page.write().on_scroll(&sample);
        }
    });
}
