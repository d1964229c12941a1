//! Clickable region that reports its element id

use dioxus::prelude::*;
use folio_core::ElementId;

use super::button::join_class;

/// Wraps children in a `div` with `id` and forwards clicks on it to
/// `on_dispatch`.
#[component]
pub fn Trigger(
    id: ElementId,
    on_dispatch: EventHandler<ElementId>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let full_class = join_class("trigger", class.as_deref());
    let dispatch_id = id.clone();

    rsx! {
        div {
            id: "{id}",
            class: "{full_class}",
            role: "button",
            tabindex: "0",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                on_dispatch.call(dispatch_id.clone());
            },
            {children}
        }
    }
}
