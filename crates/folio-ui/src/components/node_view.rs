//! Renders a `folio_core::Node` content tree as Dioxus elements.

use dioxus::prelude::*;
use folio_core::Node;

/// Recursive view of a rendered content tree.
///
/// Only the tags the detail renderer produces are mapped; anything else
/// falls back to a `div` so unknown content still shows.
#[component]
pub fn NodeView(node: Node) -> Element {
    let (tag, class, children) = match &node {
        Node::Text(text) => return rsx! { "{text}" },
        Node::Element { tag, class, children, .. } => (*tag, class.unwrap_or(""), children.clone()),
    };

    match tag {
        "h2" => rsx! {
            h2 { class: "{class}",
                for child in children { NodeView { node: child } }
            }
        },
        "h3" => rsx! {
            h3 { class: "{class}",
                for child in children { NodeView { node: child } }
            }
        },
        "p" => rsx! {
            p { class: "{class}",
                for child in children { NodeView { node: child } }
            }
        },
        "ul" => rsx! {
            ul { class: "{class}",
                for child in children { NodeView { node: child } }
            }
        },
        "li" => rsx! {
            li { class: "{class}",
                for child in children { NodeView { node: child } }
            }
        },
        "span" => rsx! {
            span { class: "{class}",
                for child in children { NodeView { node: child } }
            }
        },
        "a" => {
            let href = node.attr("href").unwrap_or("#").to_string();
            let target = node.attr("target").unwrap_or("_self").to_string();
            let rel = node.attr("rel").unwrap_or_default().to_string();
            let kind = node.attr("data-kind").unwrap_or_default().to_string();
            rsx! {
                a {
                    class: "{class}",
                    href: "{href}",
                    target: "{target}",
                    rel: "{rel}",
                    "data-kind": "{kind}",
                    // Links open externally; keep the click away from the surface
                    onclick: move |e: MouseEvent| e.stop_propagation(),
                    for child in children { NodeView { node: child } }
                }
            }
        }
        "img" => {
            let src = node.attr("src").unwrap_or_default().to_string();
            let alt = node.attr("alt").unwrap_or_default().to_string();
            rsx! {
                img { class: "{class}", src: "{src}", alt: "{alt}" }
            }
        }
        _ => {
            if !is_mapped(tag) {
                tracing::debug!(tag, "No view for tag, rendering as div");
            }
            let key = node.attr("data-key").unwrap_or_default().to_string();
            rsx! {
                div { class: "{class}", "data-key": "{key}",
                    for child in children { NodeView { node: child } }
                }
            }
        }
    }
}

/// Whether `tag` renders as itself rather than through the `div` fallback
fn is_mapped(tag: &str) -> bool {
    matches!(tag, "div" | "h2" | "h3" | "p" | "ul" | "li" | "span" | "a" | "img")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_detail_tags_are_mapped() {
        let record = folio_core::ContentRecord {
            key: "k".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            features: vec!["f".to_string()],
            tags: vec!["Rust".to_string()],
            links: [(folio_core::LinkKind::Source, "https://example.com".to_string())].into_iter().collect(),
        };
        let node = folio_core::render(&record);
        for n in node.descendants() {
            if let Some(tag) = n.tag() {
                assert!(is_mapped(tag), "unmapped tag {}", tag);
            }
        }
        assert!(is_mapped("img"));
        assert!(!is_mapped("table"));
    }
}
