//! Configuration for `folio.toml`.
//!
//! | Section        | Purpose                                          |
//! |----------------|--------------------------------------------------|
//! | `[page]`       | Header threshold, typing speed, reveal margin    |
//! | `[generation]` | Plot generation provider and label timing        |
//! | `[content]`    | Optional content file replacing the embedded one |
//!
//! Every field has a default, so an empty or missing file is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Page behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Header gets the `scrolled` style strictly above this offset (px)
    pub header_threshold: f64,
    /// Delay between typed characters (ms)
    pub typing_speed_ms: u64,
    /// Fraction of the viewport bottom a section must clear to be revealed
    pub reveal_margin: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            typing_speed_ms: 150,
            reveal_margin: 0.1,
        }
    }
}

impl PageConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }
}

/// Which generation provider backs the "regenerate plots" button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// POST to the generation endpoint
    Http,
    /// Wait `local_delay_ms` and report success
    #[default]
    Local,
}

impl std::str::FromStr for ProviderKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(ProviderKind::Http),
            "local" => Ok(ProviderKind::Local),
            _ => Err(FolioError::Config(format!(
                "Invalid provider '{}'. Must be one of: http, local",
                s
            ))),
        }
    }
}

/// Plot generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub provider: ProviderKind,
    pub base_url: String,
    pub endpoint: String,
    pub local_delay_ms: u64,
    /// How long the result label stays before the original label returns
    pub label_reset_ms: u64,
    /// Directory prefix of the `plot{n}.png` images
    pub image_dir: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Local,
            base_url: "http://127.0.0.1:8000".to_string(),
            endpoint: "/generate-plots".to_string(),
            local_delay_ms: 1200,
            label_reset_ms: 2000,
            image_dir: "plots".to_string(),
        }
    }
}

impl GenerationConfig {
    /// Full URL of the generation endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }

    pub fn label_reset(&self) -> Duration {
        Duration::from_millis(self.label_reset_ms)
    }

    pub fn local_delay(&self) -> Duration {
        Duration::from_millis(self.local_delay_ms)
    }
}

/// Content source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content file; relative paths resolve against the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub page: PageConfig,
    pub generation: GenerationConfig,
    pub content: ContentConfig,
}

impl FolioConfig {
    pub fn from_toml(source: &str) -> FolioResult<Self> {
        let config: FolioConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> FolioResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&source)?;

        if let (Some(content), Some(dir)) = (config.content.path.as_mut(), path.parent()) {
            if content.is_relative() {
                *content = dir.join(&*content);
            }
        }
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from `path`, or from the default location when `None`
    pub fn load_or_default(path: Option<&Path>) -> FolioResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => match default_config_path() {
                Some(p) => Self::load(&p),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn to_toml(&self) -> FolioResult<String> {
        toml::to_string_pretty(self).map_err(|e| FolioError::Config(e.to_string()))
    }

    fn validate(&self) -> FolioResult<()> {
        if !self.page.header_threshold.is_finite() || self.page.header_threshold < 0.0 {
            return Err(FolioError::Config("page.header_threshold must be a non-negative number".to_string()));
        }
        if !(0.0..1.0).contains(&self.page.reveal_margin) {
            return Err(FolioError::Config("page.reveal_margin must be in [0, 1)".to_string()));
        }
        if self.generation.endpoint.trim().is_empty() {
            return Err(FolioError::Config("generation.endpoint must not be empty".to_string()));
        }
        Ok(())
    }
}

/// `~/.config/folio/folio.toml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("folio.toml"))
}
