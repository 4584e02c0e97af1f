// Application state module
// Everything a request needs, built once at startup and shared read-only

use super::integrations::Integrations;
use super::types::Config;
use crate::site::{Renderer, SiteConfig};

/// Application state
pub struct AppState {
    pub config: Config,
    pub site: SiteConfig,
    pub integrations: Integrations,
    pub renderer: Renderer,
}

impl AppState {
    /// Build state and load templates from `site.templates_dir`
    pub fn new(config: Config, integrations: Integrations) -> Result<Self, tera::Error> {
        let renderer = Renderer::from_dir(&config.site.templates_dir)?;
        Ok(Self::with_renderer(config, integrations, renderer))
    }

    pub fn with_renderer(config: Config, integrations: Integrations, renderer: Renderer) -> Self {
        let site = SiteConfig::from_settings(&config.site, &integrations.site_url);
        Self {
            config,
            site,
            integrations,
            renderer,
        }
    }
}
