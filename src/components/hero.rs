//! Hero section with the typed-out name

use dioxus::prelude::*;
use folio_core::document::{nav_link_id, NAME_TITLE_ID};
use folio_core::{SectionId, Typewriter};
use folio_ui::{Button, ButtonVariant};

use super::PageSection;
use crate::context::{use_config, use_dispatch, use_page};

#[component]
pub fn Hero() -> Element {
    let page = use_page();
    let dispatch = use_dispatch();
    let config = use_config();
    let mut typed = use_signal(String::new);

    let profile = page.read().content().profile.clone();
    let name = profile.name.clone();
    let speed = config.page.typing_speed();

    // Types the name once, one character per tick
    use_future(move || {
        let name = name.clone();
        async move {
            let typewriter = Typewriter::new(name, speed);
            tracing::debug!(duration = ?typewriter.total_duration(), "Typing title");
            for frame in typewriter.frames() {
                typed.set(frame.to_string());
                tokio::time::sleep(typewriter.interval()).await;
            }
        }
    });

    let typing_done = typed.read().as_str() == profile.name;
    let title_class = if typing_done { "name-title" } else { "name-title typing" };

    rsx! {
        PageSection { section: SectionId::Home,
            div { class: "hero",
                h1 { id: NAME_TITLE_ID, class: "{title_class}", "{typed}" }
                if !profile.tagline.is_empty() {
                    p { class: "hero-tagline", "{profile.tagline}" }
                }
                div { class: "hero-actions",
                    Button {
                        onclick: move |_: ()| dispatch.call(nav_link_id(SectionId::Projects)),
                        "View Projects"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_: ()| dispatch.call(nav_link_id(SectionId::Contact)),
                        "Get in Touch"
                    }
                }
            }
        }
    }
}
