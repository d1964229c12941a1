//! Typewriter animation for the page title

use std::time::Duration;

/// Reveals `text` one character at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    speed: Duration,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed: Duration) -> Self {
        Self {
            text: text.into(),
            speed,
        }
    }

    /// Successive prefixes, from empty to the full text, split on char
    /// boundaries
    pub fn frames(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(0)
            .chain(self.text.char_indices().map(|(i, c)| i + c.len_utf8()))
            .map(move |end| &self.text[..end])
    }

    /// Delay between frames
    pub fn interval(&self) -> Duration {
        self.speed
    }

    /// Time until the last frame is shown, saturating at `Duration::MAX`
    pub fn total_duration(&self) -> Duration {
        let steps = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        self.speed.saturating_mul(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_ascii() {
        let tw = Typewriter::new("Hi!", Duration::from_millis(150));
        let frames: Vec<_> = tw.frames().collect();
        assert_eq!(frames, vec!["", "H", "Hi", "Hi!"]);
        assert_eq!(tw.total_duration(), Duration::from_millis(450));
    }

    #[test]
    fn test_frames_respect_char_boundaries() {
        let tw = Typewriter::new("Zoë 日本", Duration::from_millis(10));
        let frames: Vec<_> = tw.frames().collect();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[3], "Zoë");
        assert_eq!(*frames.last().unwrap(), "Zoë 日本");
    }

    #[test]
    fn test_total_duration_saturates() {
        let tw = Typewriter::new("abc", Duration::MAX);
        assert_eq!(tw.total_duration(), Duration::MAX);

        let tw = Typewriter::new("abc", Duration::from_secs(u64::MAX / 2));
        assert_eq!(tw.total_duration(), Duration::MAX);
    }

    #[test]
    fn test_empty_text_single_frame() {
        let tw = Typewriter::new("", Duration::from_millis(10));
        assert_eq!(tw.frames().collect::<Vec<_>>(), vec![""]);
        assert_eq!(tw.total_duration(), Duration::ZERO);
    }
}
