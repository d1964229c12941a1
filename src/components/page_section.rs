use dioxus::prelude::*;
use folio_core::SectionId;

use crate::context::{sample_scroll, use_page, use_scroll_container, use_sections};

/// A page section that fades in once scrolled into view.
///
/// Registers its mounted element so anchor links can scroll to it and
/// the scroll sampler can measure it.
#[component]
pub fn PageSection(section: SectionId, #[props(default)] title: Option<String>, children: Element) -> Element {
    let page = use_page();
    let mut sections = use_sections();
    let container = use_scroll_container();

    let class = if page.read().reveal().is_revealed(section) {
        "section reveal visible"
    } else {
        "section reveal"
    };

    rsx! {
        section {
            id: section.as_str(),
            class: "{class}",
            onmounted: move |e: MountedEvent| {
                sections.write().insert(section, e.data());
                sample_scroll(page, container, sections);
            },
            if let Some(title) = &title {
                h2 { class: "section-title", "{title}" }
            }
            {children}
        }
    }
}
