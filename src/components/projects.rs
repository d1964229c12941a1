//! Project cards and the project detail dialog

use dioxus::prelude::*;
use folio_core::document::{project_card_id, PROJECT_DETAILS_ID};
use folio_core::{SectionId, SurfaceKey};
use folio_ui::{NodeView, OverlaySurface, TagChips, Trigger};

use super::PageSection;
use crate::context::{use_dispatch, use_page};

const CARD_TAGS: usize = 3;

#[component]
pub fn Projects() -> Element {
    let page = use_page();
    let cards: Vec<(String, String, String, Vec<String>)> = page
        .read()
        .content()
        .registry
        .records()
        .iter()
        .map(|r| (r.key.clone(), r.title.clone(), r.description.clone(), r.tags.clone()))
        .collect();

    rsx! {
        PageSection { section: SectionId::Projects, title: "Projects".to_string(),
            div { class: "project-grid",
                for (key, title, description, tags) in cards {
                    ProjectCard { key: "{key}", record_key: key.clone(), title, description, tags }
                }
            }
        }
    }
}

/// Card that opens the detail dialog for `record_key`
#[component]
pub fn ProjectCard(record_key: String, title: String, description: String, tags: Vec<String>) -> Element {
    let dispatch = use_dispatch();

    rsx! {
        Trigger {
            id: project_card_id(&record_key),
            on_dispatch: dispatch,
            class: "project-card".to_string(),
            h3 { class: "project-title", "{title}" }
            p { class: "project-summary", "{description}" }
            TagChips { tags, limit: CARD_TAGS }
            span { class: "card-cta", "Learn More \u{2192}" }
        }
    }
}

#[component]
pub fn DetailOverlay() -> Element {
    let page = use_page();
    let dispatch = use_dispatch();
    let surface = SurfaceKey::detail();
    let visible = page.read().overlays().is_visible(&surface);
    let detail = page.read().overlays().content(&surface).cloned();

    rsx! {
        OverlaySurface {
            surface,
            visible,
            on_dispatch: dispatch,
            class: "detail-content".to_string(),
            div { id: PROJECT_DETAILS_ID,
                if let Some(node) = detail {
                    NodeView { node }
                }
            }
        }
    }
}
