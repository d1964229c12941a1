//! Detail renderer.
//!
//! Rendering produces a small framework-neutral [`Node`] tree. The Dioxus
//! app walks it into elements; the CLI serializes it with [`Node::to_html`].

use crate::content::ContentRecord;

/// Element or text node of a rendered content tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element {
        tag: &'static str,
        class: Option<&'static str>,
        attrs: Vec<(&'static str, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    pub fn element(tag: &'static str) -> Self {
        Node::Element {
            tag,
            class: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Set the class attribute. No-op on text nodes.
    pub fn with_class(mut self, value: &'static str) -> Self {
        if let Node::Element { class, .. } = &mut self {
            *class = Some(value);
        }
        self
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, iter: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(iter);
        }
        self
    }

    /// Element tag, `None` for text
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text(_) => None,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            Node::Element { class, .. } => *class,
            Node::Text(_) => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first pre-order walk
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(&mut out);
        out
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in self.children() {
            child.walk(out);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.class() == Some(class))
            .collect()
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.tag() == Some(tag))
            .collect()
    }

    /// Serialize as an HTML fragment with text and attribute values escaped
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Element {
                tag,
                class,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(class) = class {
                    out.push_str(&format!(" class=\"{}\"", escape(class)));
                }
                for (name, value) in attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
                }
                out.push('>');
                if is_void(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a record into the detail surface's content tree.
///
/// Features become one `li` each and tags one `span.tag-chip` each, both in
/// record order. The link row is only emitted when the record has links.
pub fn render(record: &ContentRecord) -> Node {
    let features = Node::element("ul").with_class("feature-list").with_children(
        record
            .features
            .iter()
            .map(|f| Node::element("li").with_child(Node::text(f))),
    );

    let tags = Node::element("div").with_class("tag-list").with_children(
        record
            .tags
            .iter()
            .map(|t| Node::element("span").with_class("tag-chip").with_child(Node::text(t))),
    );

    let mut root = Node::element("div")
        .with_class("project-detail")
        .with_attr("data-key", record.key.clone())
        .with_child(Node::element("h2").with_class("detail-title").with_child(Node::text(&record.title)))
        .with_child(
            Node::element("p")
                .with_class("detail-description")
                .with_child(Node::text(&record.description)),
        )
        .with_child(Node::element("h3").with_child(Node::text("Key Features:")))
        .with_child(features)
        .with_child(Node::element("h3").with_child(Node::text("Technologies Used:")))
        .with_child(tags);

    if !record.links.is_empty() {
        root = root.with_child(Node::element("div").with_class("detail-links").with_children(
            record.links.iter().map(|(kind, url)| {
                Node::element("a")
                    .with_class("action-link")
                    .with_attr("href", url.clone())
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer")
                    .with_attr("data-kind", kind.as_str())
                    .with_child(Node::text(kind.label()))
            }),
        ));
    }

    root
}

/// Content for the image preview surface
pub fn render_image(src: &str, alt: &str) -> Node {
    Node::element("div")
        .with_class("image-preview")
        .with_child(
            Node::element("img")
                .with_class("modal-image")
                .with_attr("src", src)
                .with_attr("alt", alt),
        )
        .with_child(Node::element("h3").with_class("modal-title").with_child(Node::text(alt)))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::content::LinkKind;

    fn pagerank() -> ContentRecord {
        ContentRecord {
            key: "pagerank".to_string(),
            title: "PageRank Algorithm Implementation".to_string(),
            description: "Power iteration.".to_string(),
            features: vec![
                "Power iteration".to_string(),
                "Sparse matrices".to_string(),
                "Damping factor".to_string(),
                "Convergence plots".to_string(),
            ],
            tags: vec![
                "Python".to_string(),
                "NumPy".to_string(),
                "SciPy".to_string(),
                "NetworkX".to_string(),
                "Matplotlib".to_string(),
            ],
            links: BTreeMap::new(),
        }
    }

    #[test]
    fn test_render_counts_and_order() {
        let record = pagerank();
        let node = render(&record);

        let items: Vec<String> = node.find_by_tag("li").iter().map(|n| n.text_content()).collect();
        assert_eq!(items, record.features);

        let chips: Vec<String> = node
            .find_by_class("tag-chip")
            .iter()
            .map(|n| n.text_content())
            .collect();
        assert_eq!(chips, record.tags);

        assert_eq!(node.find_by_class("detail-title")[0].text_content(), record.title);
    }

    #[test]
    fn test_render_without_links_omits_link_row() {
        let node = render(&pagerank());
        assert!(node.find_by_class("detail-links").is_empty());
        assert!(node.find_by_tag("a").is_empty());
    }

    #[test]
    fn test_render_only_present_links() {
        let mut record = pagerank();
        record.links.insert(LinkKind::Demo, "https://demo.example".to_string());
        let node = render(&record);
        let links = node.find_by_class("action-link");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].attr("href"), Some("https://demo.example"));
        assert_eq!(links[0].attr("data-kind"), Some("demo"));
        assert_eq!(links[0].text_content(), "Live Demo");
    }

    #[test]
    fn test_to_html_escapes() {
        let node = Node::element("p")
            .with_attr("title", "a \"b\"")
            .with_child(Node::text("<script>&"));
        assert_eq!(
            node.to_html(),
            "<p title=\"a &quot;b&quot;\">&lt;script&gt;&amp;</p>"
        );
    }

    #[test]
    fn test_to_html_void_element() {
        let node = render_image("plots/plot1.png", "Sine Wave");
        let html = node.to_html();
        assert!(html.contains("<img class=\"modal-image\" src=\"plots/plot1.png\" alt=\"Sine Wave\">"));
        assert!(!html.contains("</img>"));
        assert!(html.ends_with("<h3 class=\"modal-title\">Sine Wave</h3></div>"));
    }

    #[test]
    fn test_builders_ignore_text_nodes() {
        let node = Node::text("plain").with_class("x").with_child(Node::text("y"));
        assert_eq!(node, Node::text("plain"));
    }
}
