//! Plot generation.
//!
//! The "regenerate plots" button calls a [`GenerationProvider`], then
//! refreshes the fixed set of plot images with a cache-busting query and
//! shows a transient result label on the button.
//!
//! ```text
//!   Idle ──begin──▶ Busy ──finish──▶ Settled(Success | Failure) ──reset──▶ Idle
//! ```
//!
//! Failures are never propagated past the button: they become the
//! "Error - Try Again" label and a log line.

mod http;
mod local;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

pub use http::HttpProvider;
pub use local::LocalDelayProvider;

use crate::config::{GenerationConfig, ProviderKind};
use crate::error::FolioResult;

pub const GENERATE_LABEL: &str = "Generate New Plots";
pub const GENERATING_LABEL: &str = "Generating...";
pub const SUCCESS_LABEL: &str = "Plots Generated!";
pub const FAILURE_LABEL: &str = "Error - Try Again";

/// Backend that (re)generates the plot images
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn generate(&self) -> FolioResult<()>;
}

/// Build the provider selected in the config
pub fn provider_from_config(config: &GenerationConfig) -> FolioResult<Arc<dyn GenerationProvider>> {
    let provider: Arc<dyn GenerationProvider> = match config.provider {
        ProviderKind::Http => Arc::new(HttpProvider::new(config.endpoint_url())?),
        ProviderKind::Local => Arc::new(LocalDelayProvider::new(config.local_delay())),
    };
    tracing::debug!(provider = provider.name(), "Selected generation provider");
    Ok(provider)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success,
    Failure(String),
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationOutcome::Success => SUCCESS_LABEL,
            GenerationOutcome::Failure(_) => FAILURE_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlPhase {
    Idle,
    Busy,
    Settled(GenerationOutcome),
}

/// Label state of the generate button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateControl {
    original: String,
    phase: ControlPhase,
}

impl Default for GenerateControl {
    fn default() -> Self {
        Self::new(GENERATE_LABEL)
    }
}

impl GenerateControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            original: label.into(),
            phase: ControlPhase::Idle,
        }
    }

    /// Enter the busy state. Returns false (and changes nothing) unless idle.
    pub fn begin(&mut self) -> bool {
        if self.phase != ControlPhase::Idle {
            return false;
        }
        self.phase = ControlPhase::Busy;
        true
    }

    pub fn finish(&mut self, outcome: GenerationOutcome) {
        self.phase = ControlPhase::Settled(outcome);
    }

    /// Restore the original label
    pub fn reset(&mut self) {
        self.phase = ControlPhase::Idle;
    }

    pub fn label(&self) -> &str {
        match &self.phase {
            ControlPhase::Idle => &self.original,
            ControlPhase::Busy => GENERATING_LABEL,
            ControlPhase::Settled(outcome) => outcome.label(),
        }
    }

    pub fn phase(&self) -> &ControlPhase {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ControlPhase::Idle
    }

    pub fn is_busy(&self) -> bool {
        self.phase == ControlPhase::Busy
    }
}

/// `plots/plot1.png?t=...` through `plot{count}.png`, all with one timestamp
pub fn plot_urls(image_dir: &str, count: usize, timestamp_ms: i64) -> Vec<String> {
    let dir = image_dir.trim_end_matches('/');
    (1..=count)
        .map(|n| format!("{}/plot{}.png?t={}", dir, n, timestamp_ms))
        .collect()
}

/// Plot URLs without the cache-busting query, as first rendered
pub fn initial_plot_urls(image_dir: &str, count: usize) -> Vec<String> {
    let dir = image_dir.trim_end_matches('/');
    (1..=count).map(|n| format!("{}/plot{}.png", dir, n)).collect()
}

/// Call the provider once, turning any error into a failure outcome
pub async fn generate_once(provider: &dyn GenerationProvider) -> GenerationOutcome {
    match provider.generate().await {
        Ok(()) => {
            tracing::info!(provider = provider.name(), "Plots generated");
            GenerationOutcome::Success
        }
        Err(e) => {
            tracing::error!(provider = provider.name(), "Error generating plots: {}", e);
            GenerationOutcome::Failure(e.to_string())
        }
    }
}

/// Result of one full generation cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub outcome: GenerationOutcome,
    /// Refreshed image URLs; produced for both outcomes
    pub plot_urls: Vec<String>,
}

/// Drive one generate-button cycle: busy label, provider call, image
/// refresh, result label for `label_reset`, then the original label.
///
/// Returns `None` when the control was not idle. The reset always runs.
pub async fn run_generation(
    provider: &dyn GenerationProvider,
    control: &mut GenerateControl,
    image_dir: &str,
    plot_count: usize,
    label_reset: Duration,
) -> Option<GenerationReport> {
    if !control.begin() {
        tracing::debug!("Generation already in progress, ignoring");
        return None;
    }

    let outcome = generate_once(provider).await;
    let urls = plot_urls(image_dir, plot_count, chrono::Utc::now().timestamp_millis());
    control.finish(outcome.clone());

    tokio::time::sleep(label_reset).await;
    control.reset();

    Some(GenerationReport {
        outcome,
        plot_urls: urls,
    })
}
