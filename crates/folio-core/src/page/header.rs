//! Header scroll effect

/// Whether the fixed header shows its compact `scrolled` style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    threshold: f64,
    scrolled: bool,
}

impl HeaderState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Apply a scroll offset; returns true when the style flipped
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let changed = self.would_change(scroll_y);
        self.scrolled = scroll_y > self.threshold;
        changed
    }

    /// Whether `update(scroll_y)` would flip the style
    pub fn would_change(&self, scroll_y: f64) -> bool {
        (scroll_y > self.threshold) != self.scrolled
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let mut header = HeaderState::new(100.0);
        assert!(!header.update(100.0));
        assert!(!header.is_scrolled());

        assert!(header.update(100.5));
        assert!(header.is_scrolled());
        assert_eq!(header.class(), "site-header scrolled");

        assert!(!header.would_change(400.0));
        assert!(header.would_change(50.0));
        assert!(!header.update(400.0));
        assert!(header.update(0.0));
        assert_eq!(header.class(), "site-header");
    }
}
