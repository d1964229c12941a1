//! Folio CLI
//!
//! Thin wrapper around folio-core for inspecting content and running plot
//! generation without the desktop window.
//!
//! ## Usage
//!
//! ```bash
//! # List project records
//! folio content list
//!
//! # Check a content file
//! folio --content portfolio.toml content validate
//!
//! # Show one project's detail view
//! folio content show pagerank --format html
//!
//! # Run the generation provider once
//! folio plots generate --provider http
//!
//! # Print the effective configuration
//! folio config show
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use folio_core::config::default_config_path;
use folio_core::generation::GENERATING_LABEL;
use folio_core::logging::setup_logging;
use folio_core::{
    provider_from_config, render, run_generation, ContentRecord, FolioConfig, GenerateControl,
    PageContent, ProviderKind,
};

/// Folio - interactive personal portfolio
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - portfolio content and plot tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/folio/folio.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content file overriding the configured one
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project content
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// Plot generation
    Plots {
        #[command(subcommand)]
        action: PlotsAction,
    },

    /// Configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ContentAction {
    /// List project records in display order
    List,

    /// Load and validate the content file
    Validate,

    /// Show the detail view of one project
    Show {
        /// Record key (e.g. pagerank)
        key: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum PlotsAction {
    /// Run the generation provider once and print the refreshed image URLs
    Generate {
        /// Provider override: local or http
        #[arg(short, long)]
        provider: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the default config file location
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

fn parse_provider(s: &str) -> Result<ProviderKind> {
    s.parse::<ProviderKind>().map_err(|e| anyhow::anyhow!("{}", e))
}

fn load_content(cli_content: Option<&PathBuf>, config: &FolioConfig) -> Result<PageContent> {
    let path = cli_content.map(PathBuf::as_path).or(config.content.path.as_deref());
    let content = PageContent::load_or_embedded(path)?;
    Ok(content)
}

fn print_record(record: &ContentRecord) {
    println!("{}", record.title);
    println!("  Key: {}", record.key);
    println!();
    println!("{}", record.description);
    println!();
    println!("Key Features:");
    for feature in &record.features {
        println!("  - {}", feature);
    }
    println!();
    println!("Technologies Used:");
    for tag in &record.tags {
        println!("  * {}", tag);
    }
    if !record.links.is_empty() {
        println!();
        println!("Links:");
        for (kind, url) in &record.links {
            println!("  {}: {}", kind.label(), url);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = FolioConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Content { action } => {
            let content = load_content(cli.content.as_ref(), &config)?;

            match action {
                ContentAction::List => {
                    for record in content.registry.records() {
                        println!("{:<20} {}", record.key, record.title);
                    }
                    println!();
                    println!("{} projects", content.registry.len());
                }

                ContentAction::Validate => {
                    println!("Content OK");
                    println!("  Profile: {}", content.profile.name);
                    println!("  Projects: {}", content.registry.len());
                    println!("  Plots: {}", content.plot_count());
                    println!("  Skill groups: {}", content.skills.len());
                }

                ContentAction::Show { key, format } => {
                    let record = content.registry.resolve(&key)?;
                    match format {
                        OutputFormat::Text => print_record(record),
                        OutputFormat::Html => println!("{}", render(record).to_html()),
                        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
                    }
                }
            }
        }

        Commands::Plots { action } => match action {
            PlotsAction::Generate { provider } => {
                let content = load_content(cli.content.as_ref(), &config)?;

                let mut generation = config.generation.clone();
                if let Some(kind) = provider.as_deref() {
                    generation.provider = parse_provider(kind)?;
                }
                let provider = provider_from_config(&generation)?;

                println!("{} ({})", GENERATING_LABEL, provider.name());
                let mut control = GenerateControl::default();
                let report = run_generation(
                    provider.as_ref(),
                    &mut control,
                    &generation.image_dir,
                    content.plot_count(),
                    Duration::ZERO,
                )
                .await
                .ok_or_else(|| anyhow::anyhow!("Generation already in progress"))?;

                println!("{}", report.outcome.label());
                for url in &report.plot_urls {
                    println!("  {}", url);
                }

                if let folio_core::GenerationOutcome::Failure(reason) = report.outcome {
                    anyhow::bail!("Generation failed: {}", reason);
                }
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                print!("{}", config.to_toml()?);
            }

            ConfigAction::Path => match default_config_path() {
                Some(path) => println!("{}", path.display()),
                None => anyhow::bail!("No config directory on this platform"),
            },
        },
    }

    Ok(())
}
