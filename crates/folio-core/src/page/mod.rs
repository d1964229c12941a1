//! Page state with one delegated click handler and one scroll handler.
//!
//! Every click names its target element; the handler looks up that
//! element's [`Role`] in the [`Document`] and dispatches on it.

mod header;
mod resume;
mod reveal;
mod typing;

pub use header::HeaderState;
pub use resume::{ResumeToggle, HIDE_RESUME_LABEL, VIEW_RESUME_LABEL};
pub use reveal::RevealTracker;
pub use typing::Typewriter;

use crate::config::FolioConfig;
use crate::content::PageContent;
use crate::detail::show_detail;
use crate::document::{Document, PointerEvent, Role};
use crate::error::{FolioError, FolioResult};
use crate::generation::{initial_plot_urls, plot_urls, GenerateControl, GenerationOutcome};
use crate::overlay::{OverlayManager, Transition};
use crate::render::render_image;
use crate::types::{SectionId, SurfaceKey};

/// What a click did
#[derive(Debug)]
pub enum ClickOutcome {
    /// Surfaces that went from visible to hidden
    Closed(Vec<Transition>),
    Opened(Transition),
    /// New resume visibility
    ResumeToggled(bool),
    /// The caller should run the generation provider
    StartGeneration,
    /// The caller should smooth-scroll to this section
    ScrollTo(SectionId),
    Ignored,
    /// Handled failure; the page state is unchanged
    Failed(FolioError),
}

/// One scroll observation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSample {
    pub offset_y: f64,
    pub viewport_height: f64,
    /// Section tops relative to the viewport
    pub section_tops: Vec<(SectionId, f64)>,
}

/// All interactive state of the portfolio page
#[derive(Debug, Clone)]
pub struct PageState {
    document: Document,
    content: PageContent,
    overlays: OverlayManager,
    header: HeaderState,
    resume: ResumeToggle,
    reveal: RevealTracker,
    generate: GenerateControl,
    image_dir: String,
    plot_urls: Vec<String>,
}

impl PageState {
    /// Build the state and bind close controls
    pub fn new(document: Document, content: PageContent, config: &FolioConfig) -> Self {
        let mut overlays = OverlayManager::from_document(&document);
        overlays.register_close_controls(&document);

        let image_dir = config.generation.image_dir.clone();
        let plot_urls = initial_plot_urls(&image_dir, content.plot_count());

        Self {
            document,
            content,
            overlays,
            header: HeaderState::new(config.page.header_threshold),
            resume: ResumeToggle::default(),
            reveal: RevealTracker::new(config.page.reveal_margin),
            generate: GenerateControl::default(),
            image_dir,
            plot_urls,
        }
    }

    /// The portfolio document for `content`
    pub fn portfolio(content: PageContent, config: &FolioConfig) -> Self {
        let document = Document::portfolio(&content);
        Self::new(document, content, config)
    }

    /// Delegated click handler
    pub fn on_click(&mut self, event: &PointerEvent) -> ClickOutcome {
        let Some(role) = self.document.role(&event.target).cloned() else {
            tracing::debug!(element = %event.target, "Click on unknown element");
            return ClickOutcome::Ignored;
        };

        let result = match role {
            Role::Surface(_) => {
                let closed = self.overlays.close_all_on_backdrop_click(event);
                Ok(if closed.is_empty() {
                    ClickOutcome::Ignored
                } else {
                    ClickOutcome::Closed(closed)
                })
            }
            Role::CloseControl => self.overlays.close_from_control(event).map(|t| match t {
                Some(t) => ClickOutcome::Closed(vec![t]),
                None => ClickOutcome::Ignored,
            }),
            Role::OpenSurface(key) => self.overlays.open(&key).map(ClickOutcome::Opened),
            Role::DetailTrigger(key) => {
                show_detail(&mut self.overlays, &self.content.registry, &key).map(ClickOutcome::Opened)
            }
            Role::ImageTrigger(index) => self.open_image(index).map(ClickOutcome::Opened),
            Role::ResumeToggle => Ok(ClickOutcome::ResumeToggled(self.resume.toggle())),
            Role::GenerateTrigger => Ok(if self.generate.is_idle() {
                ClickOutcome::StartGeneration
            } else {
                ClickOutcome::Ignored
            }),
            Role::AnchorLink(section) => Ok(if self.document.has_section(section) {
                ClickOutcome::ScrollTo(section)
            } else {
                ClickOutcome::Ignored
            }),
            Role::SurfaceContent | Role::DetailContainer | Role::Section(_) | Role::Static => {
                Ok(ClickOutcome::Ignored)
            }
        };

        result.unwrap_or_else(|e| {
            tracing::warn!(element = %event.target, "Click not handled: {}", e);
            ClickOutcome::Failed(e)
        })
    }

    fn open_image(&mut self, index: usize) -> FolioResult<Transition> {
        let (src, entry) = index
            .checked_sub(1)
            .and_then(|i| Some((self.plot_urls.get(i)?, self.content.plots.get(i)?)))
            .ok_or_else(|| FolioError::RecordNotFound(format!("plot {}", index)))?;
        let node = render_image(src, &entry.title);
        self.overlays.open_with(&SurfaceKey::image(), node)
    }

    /// Scroll handler; returns true when the header style flipped
    pub fn on_scroll(&mut self, sample: &ScrollSample) -> bool {
        for (section, top) in &sample.section_tops {
            if self.reveal.observe(*section, *top, sample.viewport_height) {
                tracing::trace!(%section, "Revealed section");
            }
        }
        self.header.update(sample.offset_y)
    }

    /// Whether `on_scroll(sample)` would change the header or reveal state
    pub fn scroll_changes(&self, sample: &ScrollSample) -> bool {
        self.header.would_change(sample.offset_y)
            || sample
                .section_tops
                .iter()
                .any(|(section, top)| self.reveal.would_reveal(*section, *top, sample.viewport_height))
    }

    /// Enter the busy state; false if a run is already active
    pub fn begin_generation(&mut self) -> bool {
        self.generate.begin()
    }

    /// Record the provider outcome and refresh plot URLs (for both outcomes)
    pub fn finish_generation(&mut self, outcome: GenerationOutcome, timestamp_ms: i64) {
        self.plot_urls = plot_urls(&self.image_dir, self.content.plot_count(), timestamp_ms);
        self.generate.finish(outcome);
    }

    /// Restore the generate button's original label
    pub fn reset_generation(&mut self) {
        self.generate.reset();
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn overlays(&self) -> &OverlayManager {
        &self.overlays
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn resume(&self) -> &ResumeToggle {
        &self.resume
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn generate(&self) -> &GenerateControl {
        &self.generate
    }

    pub fn plot_urls(&self) -> &[String] {
        &self.plot_urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        close_control_id, nav_link_id, plot_thumb_id, project_card_id, surface_content_id,
        GENERATE_TRIGGER_ID, PROJECT_DETAILS_ID, RESUME_TOGGLE_ID, SKILLS_TRIGGER_ID,
    };
    use crate::generation::{GENERATE_LABEL, SUCCESS_LABEL};

    fn page() -> PageState {
        PageState::portfolio(PageContent::embedded().unwrap(), &FolioConfig::default())
    }

    #[test]
    fn test_project_card_opens_detail() {
        let mut page = page();
        let outcome = page.on_click(&PointerEvent::on(project_card_id("pagerank")));
        assert!(matches!(outcome, ClickOutcome::Opened(ref t) if t.surface == SurfaceKey::detail()));

        let node = page.overlays().content(&SurfaceKey::detail()).unwrap();
        assert_eq!(node.find_by_tag("li").len(), 4);
        assert!(page.overlays().scroll_locked());
    }

    #[test]
    fn test_click_inside_content_keeps_surface_open() {
        let mut page = page();
        page.on_click(&PointerEvent::on(project_card_id("rag")));

        for inner in [surface_content_id(&SurfaceKey::detail()), PROJECT_DETAILS_ID.into()] {
            assert!(matches!(page.on_click(&PointerEvent::on(inner)), ClickOutcome::Ignored));
        }
        assert!(page.overlays().is_visible(&SurfaceKey::detail()));
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut page = page();
        page.on_click(&PointerEvent::on(SKILLS_TRIGGER_ID));
        assert!(page.overlays().is_visible(&SurfaceKey::skills()));

        let outcome = page.on_click(&PointerEvent::on(SurfaceKey::SKILLS));
        assert!(matches!(outcome, ClickOutcome::Closed(ref v) if v.len() == 1));
        assert!(!page.overlays().scroll_locked());

        // Backdrop of an already hidden surface does nothing
        assert!(matches!(page.on_click(&PointerEvent::on(SurfaceKey::SKILLS)), ClickOutcome::Ignored));
    }

    #[test]
    fn test_close_control_click() {
        let mut page = page();
        page.on_click(&PointerEvent::on(plot_thumb_id(1)));
        assert!(page.overlays().is_visible(&SurfaceKey::image()));

        let outcome = page.on_click(&PointerEvent::on(close_control_id(&SurfaceKey::image())));
        assert!(matches!(outcome, ClickOutcome::Closed(_)));
        assert!(!page.overlays().is_visible(&SurfaceKey::image()));
        assert!(page.overlays().content(&SurfaceKey::image()).is_none());
    }

    #[test]
    fn test_image_trigger_uses_current_plot_url() {
        let mut page = page();
        page.begin_generation();
        page.finish_generation(GenerationOutcome::Success, 42);

        page.on_click(&PointerEvent::on(plot_thumb_id(2)));
        let node = page.overlays().content(&SurfaceKey::image()).unwrap();
        let img = &node.find_by_tag("img")[0];
        assert_eq!(img.attr("src"), Some("plots/plot2.png?t=42"));
        assert_eq!(img.attr("alt"), Some("Random Scatter Plot"));
    }

    #[test]
    fn test_unknown_detail_key_fails_without_mutation() {
        let mut page = page();
        let mut doc = page.document().clone();
        doc.insert(crate::document::Element::new("ghost", Role::DetailTrigger("unknown-key".to_string())));
        let mut page2 = PageState::new(doc, page.content().clone(), &FolioConfig::default());

        let outcome = page2.on_click(&PointerEvent::on("ghost"));
        assert!(matches!(outcome, ClickOutcome::Failed(FolioError::RecordNotFound(_))));
        assert!(!page2.overlays().is_visible(&SurfaceKey::detail()));
        assert!(page2.overlays().content(&SurfaceKey::detail()).is_none());

        assert!(matches!(page.on_click(&PointerEvent::on("nowhere")), ClickOutcome::Ignored));
    }

    #[test]
    fn test_resume_toggle_click() {
        let mut page = page();
        assert!(matches!(page.on_click(&PointerEvent::on(RESUME_TOGGLE_ID)), ClickOutcome::ResumeToggled(true)));
        assert_eq!(page.resume().label(), HIDE_RESUME_LABEL);
        assert!(matches!(page.on_click(&PointerEvent::on(RESUME_TOGGLE_ID)), ClickOutcome::ResumeToggled(false)));
    }

    #[test]
    fn test_generate_trigger_only_when_idle() {
        let mut page = page();
        assert!(matches!(page.on_click(&PointerEvent::on(GENERATE_TRIGGER_ID)), ClickOutcome::StartGeneration));

        assert!(page.begin_generation());
        assert!(matches!(page.on_click(&PointerEvent::on(GENERATE_TRIGGER_ID)), ClickOutcome::Ignored));

        page.finish_generation(GenerationOutcome::Success, 7);
        assert_eq!(page.generate().label(), SUCCESS_LABEL);
        assert_eq!(page.plot_urls()[0], "plots/plot1.png?t=7");

        page.reset_generation();
        assert_eq!(page.generate().label(), GENERATE_LABEL);
    }

    #[test]
    fn test_scroll_changes_only_on_state_flip() {
        let mut page = page();
        let sample = |offset_y: f64, tops: Vec<(SectionId, f64)>| ScrollSample {
            offset_y,
            viewport_height: 800.0,
            section_tops: tops,
        };

        let first = sample(0.0, vec![(SectionId::Home, 0.0), (SectionId::Contact, 2400.0)]);
        assert!(page.scroll_changes(&first));
        page.on_scroll(&first);
        assert!(page.reveal().is_revealed(SectionId::Home));

        // Same header state, nothing new in view
        let small_scroll = sample(40.0, vec![(SectionId::Home, -40.0), (SectionId::Contact, 2360.0)]);
        assert!(!page.scroll_changes(&small_scroll));

        // Header crosses the threshold
        assert!(page.scroll_changes(&sample(150.0, vec![])));

        // A new section comes into view below the threshold
        assert!(page.scroll_changes(&sample(40.0, vec![(SectionId::Contact, 500.0)])));
    }

    #[test]
    fn test_anchor_link_scrolls() {
        let mut page = page();
        let outcome = page.on_click(&PointerEvent::on(nav_link_id(SectionId::Contact)));
        assert!(matches!(outcome, ClickOutcome::ScrollTo(SectionId::Contact)));
    }

    #[test]
    fn test_scroll_updates_header_and_reveal() {
        let mut page = page();
        let sample = ScrollSample {
            offset_y: 250.0,
            viewport_height: 800.0,
            section_tops: vec![(SectionId::About, 300.0), (SectionId::Contact, 3000.0)],
        };
        assert!(page.on_scroll(&sample));
        assert!(page.header().is_scrolled());
        assert!(page.reveal().is_revealed(SectionId::About));
        assert!(!page.reveal().is_revealed(SectionId::Contact));
    }
}
