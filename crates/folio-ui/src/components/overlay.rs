//! Overlay Surface Component
//!
//! Backdrop, inner content region and close control for one named
//! surface. Visibility is owned by the page state; this component only
//! reports which of its parts was clicked.

use dioxus::prelude::*;
use folio_core::document::{close_control_id, surface_content_id};
use folio_core::{ElementId, SurfaceKey};

use super::button::{join_class, CloseButton};

#[derive(Props, Clone, PartialEq)]
pub struct OverlaySurfaceProps {
    /// Surface key; also the backdrop element id
    pub surface: SurfaceKey,
    /// Whether the surface is visible
    pub visible: bool,
    /// Receives the id of the clicked part (backdrop, content or close)
    pub on_dispatch: EventHandler<ElementId>,
    /// Optional heading above the content
    #[props(default)]
    pub title: Option<String>,
    /// Extra classes for the content region
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Overlay surface
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     OverlaySurface {
///         surface: SurfaceKey::skills(),
///         visible: page.read().overlays().is_visible(&SurfaceKey::skills()),
///         on_dispatch: move |id| dispatch(id),
///         title: "Technical Skills".to_string(),
///         SkillsList {}
///     }
/// }
/// ```
#[component]
pub fn OverlaySurface(props: OverlaySurfaceProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    let backdrop_id = ElementId::new(props.surface.as_str());
    let content_id = surface_content_id(&props.surface);
    let close_id = close_control_id(&props.surface);
    let content_class = join_class("modal-content", props.class.as_deref());

    let on_backdrop = {
        let id = backdrop_id.clone();
        move |e: MouseEvent| {
            e.stop_propagation();
            props.on_dispatch.call(id.clone());
        }
    };
    let on_content = {
        let id = content_id.clone();
        move |e: MouseEvent| {
            e.stop_propagation();
            props.on_dispatch.call(id.clone());
        }
    };
    let on_close = {
        let id = close_id.clone();
        move |_: ()| props.on_dispatch.call(id.clone())
    };

    rsx! {
        div {
            id: "{backdrop_id}",
            class: "modal",
            role: "dialog",
            "aria-modal": "true",
            onclick: on_backdrop,

            div {
                id: "{content_id}",
                class: "{content_class}",
                onclick: on_content,

                CloseButton { id: close_id.to_string(), onclick: on_close }

                if let Some(title) = &props.title {
                    h2 { class: "modal-heading", "{title}" }
                }

                {props.children}
            }
        }
    }
}
