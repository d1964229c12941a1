//! Skills section and the full skills dialog

use dioxus::prelude::*;
use folio_core::document::SKILLS_TRIGGER_ID;
use folio_core::{ElementId, SectionId, SurfaceKey};
use folio_ui::{OverlaySurface, TagChips, Trigger};

use super::PageSection;
use crate::context::{use_dispatch, use_page};

/// Chips shown per group before the dialog is opened
const PREVIEW_TAGS: usize = 3;

#[component]
pub fn Skills() -> Element {
    let page = use_page();
    let dispatch = use_dispatch();
    let groups = page.read().content().skills.clone();

    rsx! {
        PageSection { section: SectionId::Skills, title: "Skills".to_string(),
            div { class: "skill-grid",
                for group in groups {
                    div { key: "{group.category}", class: "skill-card",
                        h3 { "{group.category}" }
                        TagChips { tags: group.items, limit: PREVIEW_TAGS }
                    }
                }
            }
            Trigger {
                id: ElementId::new(SKILLS_TRIGGER_ID),
                on_dispatch: dispatch,
                class: "btn btn-secondary".to_string(),
                "View All Skills"
            }
        }
    }
}

#[component]
pub fn SkillsOverlay() -> Element {
    let page = use_page();
    let dispatch = use_dispatch();
    let surface = SurfaceKey::skills();
    let visible = page.read().overlays().is_visible(&surface);
    let groups = page.read().content().skills.clone();

    rsx! {
        OverlaySurface {
            surface,
            visible,
            on_dispatch: dispatch,
            title: "Technical Skills".to_string(),
            for group in groups {
                div { key: "{group.category}", class: "skill-group",
                    h3 { "{group.category}" }
                    TagChips { tags: group.items }
                }
            }
        }
    }
}
