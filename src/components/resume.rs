use dioxus::prelude::*;
use folio_core::document::{RESUME_CONTAINER_ID, RESUME_TOGGLE_ID};
use folio_core::{ElementId, SectionId};
use folio_ui::Button;

use super::PageSection;
use crate::context::{use_dispatch, use_page};

/// Resume section; the embedded document is only mounted while shown
#[component]
pub fn Resume() -> Element {
    let page = use_page();
    let dispatch = use_dispatch();

    let (visible, label, path) = {
        let state = page.read();
        (state.resume().is_visible(), state.resume().label(), state.content().resume.path.clone())
    };
    let container_class = if visible { "resume-container visible" } else { "resume-container" };

    rsx! {
        PageSection { section: SectionId::Resume, title: "Resume".to_string(),
            Button {
                id: RESUME_TOGGLE_ID.to_string(),
                onclick: move |_: ()| dispatch.call(ElementId::new(RESUME_TOGGLE_ID)),
                "{label}"
            }
            div { id: RESUME_CONTAINER_ID, class: "{container_class}",
                if visible {
                    iframe { class: "resume-frame", src: "{path}", title: "Resume" }
                    a { class: "action-link", href: "{path}", target: "_blank", "Download PDF" }
                }
            }
        }
    }
}
