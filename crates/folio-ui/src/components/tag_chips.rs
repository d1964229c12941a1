//! Tag chips shown on project cards

use dioxus::prelude::*;

/// Inline row of technology tags, in the given order
#[component]
pub fn TagChips(tags: Vec<String>, #[props(default)] limit: Option<usize>) -> Element {
    let shown = visible_tags(&tags, limit);
    let hidden = tags.len() - shown.len();

    rsx! {
        div { class: "tag-list",
            for tag in shown {
                span { class: "tag-chip", "{tag}" }
            }
            if hidden > 0 {
                span { class: "tag-chip tag-more", "+{hidden}" }
            }
        }
    }
}

fn visible_tags(tags: &[String], limit: Option<usize>) -> Vec<String> {
    let n = limit.unwrap_or(tags.len()).min(tags.len());
    tags[..n].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<String> {
        ["Python", "NumPy", "SciPy"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn visible_tags_keeps_order() {
        assert_eq!(visible_tags(&tags(), None), tags());
        assert_eq!(visible_tags(&tags(), Some(2)), vec!["Python", "NumPy"]);
        assert_eq!(visible_tags(&tags(), Some(10)).len(), 3);
    }
}
