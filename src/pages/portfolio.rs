//! Portfolio page
//!
//! One scroll container holding the header, every section and the three
//! overlay surfaces. Scrolling is sampled on each scroll event; the page
//! stops scrolling while any overlay is open.

use dioxus::prelude::*;
use folio_core::document::project_card_id;

use crate::components::{
    About, Contact, DetailOverlay, Hero, ImageOverlay, NavHeader, Projects, Resume, Skills,
    SkillsOverlay, Visualizations,
};
use crate::context::{sample_scroll, use_dispatch, use_page, use_scroll_container, use_sections};

/// Portfolio page at `/`
#[component]
pub fn Portfolio() -> Element {
    rsx! {
        PortfolioPage {}
    }
}

/// Portfolio page with one project's details open on load
#[component]
pub fn ProjectLink(key: String) -> Element {
    rsx! {
        PortfolioPage { open_project: key }
    }
}

#[component]
fn PortfolioPage(#[props(default)] open_project: Option<String>) -> Element {
    let page = use_page();
    let dispatch = use_dispatch();
    let sections = use_sections();
    let container = use_scroll_container();

    use_effect(move || {
        if let Some(key) = &open_project {
            tracing::debug!(key = %key, "Opening linked project");
            dispatch.call(project_card_id(key));
        }
    });

    let page_class = if page.read().overlays().scroll_locked() {
        "page scroll-locked"
    } else {
        "page"
    };

    rsx! {
        div {
            class: "{page_class}",
            onmounted: move |e: MountedEvent| {
                let mut slot = container.0;
                slot.set(Some(e.data()));
                sample_scroll(page, container, sections);
            },
            onscroll: move |_| sample_scroll(page, container, sections),

            NavHeader {}

            main { class: "page-main",
                Hero {}
                About {}
                Skills {}
                Projects {}
                Visualizations {}
                Resume {}
                Contact {}
            }

            footer { class: "page-footer",
                "Built with Rust and Dioxus"
            }

            SkillsOverlay {}
            DetailOverlay {}
            ImageOverlay {}
        }
    }
}
