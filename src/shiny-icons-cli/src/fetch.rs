//! Downloads of the proto definitions and pogoapi.net datasets

use anyhow::{Context, Result};
use shiny_icons::{Catalog, EnumOverrides};
use tracing::info;

use crate::config::Config;

/// Blocking HTTP client with a per-request timeout
pub struct Fetcher {
    agent: ureq::Agent,
}

impl Fetcher {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout()).build();
        Fetcher { agent }
    }

    /// GET a URL and return the body as text
    pub fn text(&self, url: &str) -> Result<String> {
        info!("GET {}", url);
        let response = self
            .agent
            .get(url)
            .call()
            .with_context(|| format!("Failed to fetch {}", url))?;

        response
            .into_string()
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

/// Fetch all three sources and build the catalog
pub fn load_catalog(config: &Config, overrides: &EnumOverrides) -> Result<Catalog> {
    let fetcher = Fetcher::new(config);

    let proto = fetcher.text(&config.proto_url)?;
    let shiny = fetcher.text(&config.shiny_url)?;
    let released = fetcher.text(&config.released_url)?;

    let catalog = Catalog::from_sources(&proto, &shiny, &released, overrides)
        .context("Failed to parse downloaded datasets")?;

    info!(
        "{} species, {} forms, {} released, {} shiny",
        catalog.species.len(),
        catalog.forms.len(),
        catalog.released.len(),
        catalog.shiny.len()
    );

    Ok(catalog)
}
