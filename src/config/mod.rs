// Configuration module entry point
// Loads layered configuration and builds the shared application state

mod integrations;
mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use integrations::{Integrations, SupabaseConfig};
pub use state::AppState;
pub use types::{Config, SiteSettings};

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("AQUATECH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.backlog", 128)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "Aquatech-Web/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("site.name", "Aquatech Pumps")?
            .set_default("site.tagline", "Engineered pumping for water that matters")?
            .set_default("site.language", "en")?
            .set_default("site.templates_dir", "templates")?
            .set_default("site.static_dir", "static")?
            .set_default("site.logo_path", "static/img/logo.svg")?
            .set_default("site.favicon_path", "static/favicon.svg")?
            .set_default("site.og_image_path", "static/img/logo.svg")?
            .set_default("site.title", "Aquatech Pumps | Solar and Electric Water Pumps")?
            .set_default(
                "site.description",
                "Aquatech designs and manufactures efficient solar, submersible and surface water pumps for agriculture, communities and industry.",
            )?
            .set_default(
                "site.keywords",
                "water pumps, solar pumps, submersible pumps, irrigation, pump manufacturer",
            )?
            .set_default("site.author", "Aquatech Group")?
            .set_default("site.twitter_card", "summary_large_image")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/config").unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.site.language, "en");
        assert_eq!(cfg.site.templates_dir, "templates");
        assert!(cfg.logging.access_log_file.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("does-not-exist/config").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), cfg.server.port);
    }
}
