//! End-to-end page scenarios
//!
//! Drive `PageState` the way the desktop app does: clicks by element id,
//! scroll samples, and a generation cycle on a paused clock.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::document::{
    close_control_id, plot_thumb_id, project_card_id, Element, GENERATE_TRIGGER_ID, SKILLS_TRIGGER_ID,
};
use folio_core::generation::{generate_once, FAILURE_LABEL, GENERATE_LABEL, GENERATING_LABEL};
use folio_core::{
    ClickOutcome, FolioConfig, FolioError, FolioResult, GenerationProvider, PageContent, PageState, PointerEvent,
    Role, SurfaceKey, Visibility,
};

fn page() -> PageState {
    PageState::portfolio(PageContent::embedded().unwrap(), &FolioConfig::default())
}

// ============================================================================
// Detail Scenarios
// ============================================================================

#[test]
fn test_show_detail_pagerank_scenario() {
    let mut page = page();
    assert_eq!(page.overlays().visibility(&SurfaceKey::detail()), Some(Visibility::Hidden));

    let outcome = page.on_click(&PointerEvent::on(project_card_id("pagerank")));
    let ClickOutcome::Opened(transition) = outcome else {
        panic!("expected the detail surface to open");
    };
    assert_eq!(transition.from, Visibility::Hidden);
    assert_eq!(transition.to, Visibility::Visible);

    let node = page.overlays().content(&SurfaceKey::detail()).unwrap();
    assert_eq!(node.find_by_class("detail-title")[0].text_content(), "PageRank Algorithm Implementation");
    assert_eq!(node.find_by_tag("li").len(), 4);
    assert_eq!(node.find_by_class("tag-chip").len(), 5);
    assert!(node.find_by_class("action-link").is_empty());
}

#[test]
fn test_show_detail_unknown_key_scenario() {
    let content = PageContent::embedded().unwrap();
    let mut document = folio_core::Document::portfolio(&content);
    document.insert(
        Element::new("project-card-unknown-key", Role::DetailTrigger("unknown-key".to_string())).child_of("projects"),
    );
    let mut page = PageState::new(document, content, &FolioConfig::default());

    let outcome = page.on_click(&PointerEvent::on("project-card-unknown-key"));
    assert!(matches!(outcome, ClickOutcome::Failed(FolioError::RecordNotFound(ref k)) if k == "unknown-key"));

    assert!(page.overlays().content(&SurfaceKey::detail()).is_none());
    assert_eq!(page.overlays().visible_count(), 0);
    assert!(!page.overlays().scroll_locked());
}

#[test]
fn test_every_project_card_renders_in_order() {
    let mut page = page();
    let records = page.content().registry.records().to_vec();

    for record in records {
        page.on_click(&PointerEvent::on(project_card_id(&record.key)));
        let node = page.overlays().content(&SurfaceKey::detail()).unwrap();

        let items: Vec<_> = node.find_by_tag("li").iter().map(|n| n.text_content()).collect();
        let chips: Vec<_> = node.find_by_class("tag-chip").iter().map(|n| n.text_content()).collect();
        assert_eq!(items, record.features);
        assert_eq!(chips, record.tags);

        page.on_click(&PointerEvent::on(close_control_id(&SurfaceKey::detail())));
        assert!(!page.overlays().scroll_locked());
    }
}

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn test_stacked_overlays_release_lock_last() {
    let mut page = page();
    page.on_click(&PointerEvent::on(SKILLS_TRIGGER_ID));
    page.on_click(&PointerEvent::on(plot_thumb_id(1)));
    assert_eq!(page.overlays().visible_count(), 2);

    page.on_click(&PointerEvent::on(SurfaceKey::IMAGE));
    assert!(page.overlays().scroll_locked());

    page.on_click(&PointerEvent::on(close_control_id(&SurfaceKey::skills())));
    assert!(!page.overlays().scroll_locked());
}

// ============================================================================
// Generation
// ============================================================================

struct RejectingProvider;

#[async_trait]
impl GenerationProvider for RejectingProvider {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn generate(&self) -> FolioResult<()> {
        Err(FolioError::Generation("endpoint unavailable".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_generation_failure_reverts_label() {
    let mut page = page();
    let provider: Arc<dyn GenerationProvider> = Arc::new(RejectingProvider);
    let reset = FolioConfig::default().generation.label_reset();

    assert!(matches!(page.on_click(&PointerEvent::on(GENERATE_TRIGGER_ID)), ClickOutcome::StartGeneration));
    assert!(page.begin_generation());
    assert_eq!(page.generate().label(), GENERATING_LABEL);

    let outcome = generate_once(provider.as_ref()).await;
    page.finish_generation(outcome, 1234);
    assert_eq!(page.generate().label(), FAILURE_LABEL);
    assert_eq!(page.plot_urls(), ["plots/plot1.png?t=1234", "plots/plot2.png?t=1234"]);

    tokio::time::sleep(reset).await;
    page.reset_generation();
    assert_eq!(page.generate().label(), GENERATE_LABEL);
    assert!(page.generate().is_idle());
}

#[tokio::test(start_paused = true)]
async fn test_local_provider_selected_by_default() {
    let config = FolioConfig::default();
    let provider = folio_core::provider_from_config(&config.generation).unwrap();
    assert_eq!(provider.name(), "local");

    let start = tokio::time::Instant::now();
    assert!(generate_once(provider.as_ref()).await.is_success());
    assert!(start.elapsed() >= Duration::from_millis(config.generation.local_delay_ms));
}
