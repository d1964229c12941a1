use dioxus::prelude::*;
use folio_core::SectionId;

use super::PageSection;
use crate::context::use_page;

#[component]
pub fn About() -> Element {
    let page = use_page();
    let about = page.read().content().profile.about.clone();

    rsx! {
        PageSection { section: SectionId::About, title: "About Me".to_string(),
            p { class: "about-text", "{about}" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let page = use_page();
    let profile = page.read().content().profile.clone();

    rsx! {
        PageSection { section: SectionId::Contact, title: "Contact".to_string(),
            p { class: "contact-text", "Open to collaborations and new roles." }
            if let Some(email) = &profile.email {
                a { class: "action-link contact-email", href: "mailto:{email}", "{email}" }
            }
        }
    }
}
