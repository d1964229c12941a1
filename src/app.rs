use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{provider_from_config, FolioConfig, LocalDelayProvider, PageState};

use crate::context::{provide_page_context, SharedProvider};
use crate::pages::{Portfolio, ProjectLink};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page
/// - `/projects/:key` - Portfolio page with one project's details open
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Portfolio {},
    #[route("/projects/:key")]
    ProjectLink { key: String },
}

/// Build the configured provider, falling back to the local one.
fn shared_provider(config: &FolioConfig) -> SharedProvider {
    match provider_from_config(&config.generation) {
        Ok(provider) => SharedProvider(provider),
        Err(e) => {
            tracing::error!("Generation provider unavailable, using local: {}", e);
            SharedProvider(Arc::new(LocalDelayProvider::new(config.generation.local_delay())))
        }
    }
}

/// Root application component.
///
/// Provides global styles, the page context, and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| crate::startup().config.clone());
    let provider = use_hook(|| shared_provider(&config));

    let page_config = config.clone();
    provide_page_context(
        move || PageState::portfolio(crate::startup().content.clone(), &page_config),
        config,
        provider,
    );

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
