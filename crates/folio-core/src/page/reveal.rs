//! Scroll-triggered reveal of page sections

use std::collections::BTreeSet;

use crate::types::SectionId;

/// Tracks which sections have scrolled into view. Revealing is one-way.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    margin: f64,
    revealed: BTreeSet<SectionId>,
}

impl RevealTracker {
    /// `margin` is the fraction of the viewport bottom a section top must
    /// clear, e.g. 0.1 reveals once the top is above 90% of the viewport.
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            revealed: BTreeSet::new(),
        }
    }

    /// Record a section position (top relative to the viewport).
    ///
    /// Returns true the first time the section is revealed.
    pub fn observe(&mut self, section: SectionId, top: f64, viewport_height: f64) -> bool {
        if !self.would_reveal(section, top, viewport_height) {
            return false;
        }
        self.revealed.insert(section);
        true
    }

    /// Whether `observe` with these values would reveal the section
    pub fn would_reveal(&self, section: SectionId, top: f64, viewport_height: f64) -> bool {
        !self.revealed.contains(&section) && top < viewport_height * (1.0 - self.margin)
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains(&section)
    }

    pub fn revealed(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.revealed.iter().copied()
    }
}
