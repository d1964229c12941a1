//! Navigation Header Component
//!
//! Sticky header with the brand and one link per section. Gains the
//! `scrolled` style once the page scrolls past the configured threshold.

use dioxus::prelude::*;
use folio_core::document::{nav_link_id, HEADER_ID};
use folio_core::SectionId;

use crate::context::{use_dispatch, use_page};

#[component]
pub fn NavHeader() -> Element {
    let page = use_page();
    let header_class = page.read().header().class();
    let name = page.read().content().profile.name.clone();

    rsx! {
        header { id: HEADER_ID, class: "{header_class}",
            nav { class: "nav",
                NavLink { section: SectionId::Home, class: "nav-brand".to_string(), label: name }
                ul { class: "nav-links",
                    for section in SectionId::ALL.into_iter().skip(1) {
                        li { key: "{section}",
                            NavLink { section }
                        }
                    }
                }
            }
        }
    }
}

/// In-page anchor; the click is handled by the page, not the webview
#[component]
fn NavLink(
    section: SectionId,
    #[props(default)] class: Option<String>,
    #[props(default)] label: Option<String>,
) -> Element {
    let dispatch = use_dispatch();
    let id = nav_link_id(section);
    let dispatch_id = id.clone();
    let class = class.unwrap_or_else(|| "nav-link".to_string());
    let label = label.unwrap_or_else(|| section.display_name().to_string());

    rsx! {
        a {
            id: "{id}",
            class: "{class}",
            href: section.href(),
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                e.stop_propagation();
                dispatch.call(dispatch_id.clone());
            },
            "{label}"
        }
    }
}
