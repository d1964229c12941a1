//! Resume show/hide toggle

pub const VIEW_RESUME_LABEL: &str = "View Resume";
pub const HIDE_RESUME_LABEL: &str = "Hide Resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResumeToggle {
    visible: bool,
}

impl ResumeToggle {
    /// Flip visibility; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Button text for the current state
    pub fn label(&self) -> &'static str {
        if self.visible {
            HIDE_RESUME_LABEL
        } else {
            VIEW_RESUME_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates_label() {
        let mut resume = ResumeToggle::default();
        assert!(!resume.is_visible());
        assert_eq!(resume.label(), VIEW_RESUME_LABEL);

        assert!(resume.toggle());
        assert_eq!(resume.label(), HIDE_RESUME_LABEL);

        assert!(!resume.toggle());
        assert_eq!(resume.label(), VIEW_RESUME_LABEL);
    }
}
