//! Button Components
//!
//! - Primary: call-to-action buttons (view resume, generate plots)
//! - Secondary: outlined buttons on cards
//! - Ghost: low-emphasis actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Join a base class with optional extra classes
pub(crate) fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Element id, also the id reported to the page dispatcher
    #[props(default)]
    pub id: Option<String>,
    /// Button content (text, spinner, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// Clicks do not bubble past the button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         id: "resume-toggle".to_string(),
///         onclick: move |_| dispatch(ElementId::new("resume-toggle")),
///         "View Resume"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());
    let id = props.id.clone().unwrap_or_default();

    rsx! {
        button {
            id: "{id}",
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());
    let id = props.id.clone().unwrap_or_default();

    rsx! {
        button {
            id: "{id}",
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(id: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            id: id,
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close".to_string(),
            "\u{00D7}"
        }
    }
}
