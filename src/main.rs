#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::setup_logging;
use folio_core::{FolioConfig, FolioResult, PageContent};

/// Configuration and content loaded before the window opens
pub struct Startup {
    pub config: FolioConfig,
    pub content: PageContent,
}

static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Startup data, set once in `main` before launch
pub fn startup() -> &'static Startup {
    STARTUP.get_or_init(|| Startup {
        config: FolioConfig::default(),
        content: PageContent::embedded().unwrap_or_else(|e| {
            tracing::error!("Embedded content is invalid: {}", e);
            std::process::exit(1);
        }),
    })
}

/// Folio - interactive personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - interactive personal portfolio")]
struct Args {
    /// Config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content file overriding the configured one
    #[arg(long)]
    content: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load(args: &Args) -> FolioResult<Startup> {
    let config = FolioConfig::load_or_default(args.config.as_deref())?;

    let content_path = args.content.as_deref().or(config.content.path.as_deref());
    let content = PageContent::load_or_embedded(content_path)?;

    Ok(Startup { config, content })
}

/// The desktop app logs at info unless asked for more
fn log_verbosity(verbose: u8) -> u8 {
    verbose.max(1)
}

fn main() {
    let args = Args::parse();
    setup_logging(log_verbosity(args.verbose));

    let startup = match load(&args) {
        Ok(startup) => startup,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let title = format!("{} - Portfolio", startup.content.profile.name);
    tracing::info!(
        projects = startup.content.registry.len(),
        provider = ?startup.config.generation.provider,
        "Starting '{}'",
        title
    );
    let _ = STARTUP.set(startup);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
}
