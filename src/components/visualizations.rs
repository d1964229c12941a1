//! Plot thumbnails, the regenerate button and the image preview

use dioxus::prelude::*;
use folio_core::document::{plot_thumb_id, GENERATE_TRIGGER_ID, IMAGE_PREVIEW_ID};
use folio_core::{ElementId, SectionId, SurfaceKey};
use folio_ui::{Button, NodeView, OverlaySurface, Trigger};

use super::PageSection;
use crate::context::{use_dispatch, use_page};

#[component]
pub fn Visualizations() -> Element {
    let page = use_page();
    let dispatch = use_dispatch();

    let (thumbs, label, busy) = {
        let state = page.read();
        let thumbs: Vec<(usize, String, String)> = state
            .content()
            .plots
            .iter()
            .zip(state.plot_urls())
            .enumerate()
            .map(|(i, (plot, url))| (i + 1, plot.title.clone(), url.clone()))
            .collect();
        (thumbs, state.generate().label().to_string(), state.generate().is_busy())
    };

    rsx! {
        PageSection { section: SectionId::Visualizations, title: "Visualizations".to_string(),
            div { class: "plot-grid",
                for (index, title, url) in thumbs {
                    Trigger {
                        key: "{index}",
                        id: plot_thumb_id(index),
                        on_dispatch: dispatch,
                        class: "plot-thumb".to_string(),
                        img { class: "plot-image", src: "{url}", alt: "{title}" }
                        p { class: "plot-caption", "{title}" }
                    }
                }
            }
            div { class: "plot-actions",
                Button {
                    id: GENERATE_TRIGGER_ID.to_string(),
                    disabled: busy,
                    onclick: move |_: ()| dispatch.call(ElementId::new(GENERATE_TRIGGER_ID)),
                    if busy {
                        span { class: "spinner" }
                    }
                    "{label}"
                }
            }
        }
    }
}

#[component]
pub fn ImageOverlay() -> Element {
    let page = use_page();
    let dispatch = use_dispatch();
    let surface = SurfaceKey::image();
    let visible = page.read().overlays().is_visible(&surface);
    let preview = page.read().overlays().content(&surface).cloned();

    rsx! {
        OverlaySurface {
            surface,
            visible,
            on_dispatch: dispatch,
            class: "image-content".to_string(),
            div { id: IMAGE_PREVIEW_ID,
                if let Some(node) = preview {
                    NodeView { node }
                }
            }
        }
    }
}
