//! SEO metadata
//!
//! Site-wide defaults plus the per-page overrides that are laid over them.

use super::assets::asset_url;
use crate::config::SiteSettings;
use std::collections::BTreeMap;

/// Ordered metadata mapping (tag name -> content)
pub type MetaMap = BTreeMap<String, String>;

/// Immutable site identity and default meta tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: String,
    /// Canonical base URL, kept exactly as configured
    pub url: String,
    pub tagline: String,
    pub language: String,
    pub logo_path: String,
    pub favicon_path: String,
    pub og_image_path: String,
    pub default_meta: MetaMap,
}

impl SiteConfig {
    pub fn from_settings(settings: &SiteSettings, site_url: &str) -> Self {
        let og_image = asset_url(site_url, &settings.og_image_path);

        let mut default_meta = MetaMap::new();
        let mut put = |key: &str, value: &str| {
            default_meta.insert(key.to_string(), value.to_string());
        };
        put("title", &settings.title);
        put("description", &settings.description);
        put("keywords", &settings.keywords);
        put("author", &settings.author);
        put("robots", "index, follow");
        put("canonical", &asset_url(site_url, ""));
        put("og_type", "website");
        put("og_site_name", &settings.name);
        put("og_title", &settings.title);
        put("og_description", &settings.description);
        put("og_image", &og_image);
        put("twitter_card", &settings.twitter_card);
        put("twitter_title", &settings.title);
        put("twitter_description", &settings.description);
        put("twitter_image", &og_image);

        Self {
            name: settings.name.clone(),
            url: site_url.to_string(),
            tagline: settings.tagline.clone(),
            language: settings.language.clone(),
            logo_path: settings.logo_path.clone(),
            favicon_path: settings.favicon_path.clone(),
            og_image_path: settings.og_image_path.clone(),
            default_meta,
        }
    }

    pub fn asset(&self, relative_path: &str) -> String {
        asset_url(&self.url, relative_path)
    }
}

/// Per-page metadata override. Unset fields keep the site default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
}

impl PageMeta {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    #[must_use]
    pub fn canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    #[must_use]
    pub fn og_title(mut self, og_title: impl Into<String>) -> Self {
        self.og_title = Some(og_title.into());
        self
    }

    #[must_use]
    pub fn og_description(mut self, og_description: impl Into<String>) -> Self {
        self.og_description = Some(og_description.into());
        self
    }

    /// Only the fields that are set
    pub fn to_map(&self) -> MetaMap {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("keywords", &self.keywords),
            ("canonical", &self.canonical),
            ("og_title", &self.og_title),
            ("og_description", &self.og_description),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
        .collect()
    }
}

/// Overlay `overrides` on `defaults`; override wins on key collision.
pub fn merge_meta(defaults: &MetaMap, overrides: &MetaMap) -> MetaMap {
    let mut merged = defaults.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn test_settings() -> SiteSettings {
        SiteSettings {
            name: "Aquatech Pumps".to_string(),
            tagline: "Pumps that last".to_string(),
            language: "en".to_string(),
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            logo_path: "static/img/logo.svg".to_string(),
            favicon_path: "static/favicon.svg".to_string(),
            og_image_path: "/static/img/og-cover.png".to_string(),
            title: "Aquatech Pumps".to_string(),
            description: "Water pumps".to_string(),
            keywords: "pumps".to_string(),
            author: "Aquatech Group".to_string(),
            twitter_card: "summary_large_image".to_string(),
        }
    }

    pub fn test_site() -> SiteConfig {
        SiteConfig::from_settings(&test_settings(), "https://example.com/")
    }

    #[test]
    fn test_default_meta_uses_absolute_image() {
        let site = test_site();
        assert_eq!(
            site.default_meta["og_image"],
            "https://example.com/static/img/og-cover.png"
        );
        assert_eq!(site.default_meta["twitter_image"], site.default_meta["og_image"]);
        assert_eq!(site.default_meta["canonical"], "https://example.com/");
    }

    #[test]
    fn test_page_meta_only_set_fields() {
        let map = PageMeta::new().title("Products").og_title("Our pumps").to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["title"], "Products");
        assert_eq!(map["og_title"], "Our pumps");
    }

    #[test]
    fn test_merge_override_wins_and_keeps_defaults() {
        let site = test_site();
        let overrides = PageMeta::new().title("Contact").keywords("contact").to_map();
        let merged = merge_meta(&site.default_meta, &overrides);

        for key in site.default_meta.keys() {
            assert!(merged.contains_key(key), "missing default key {key}");
        }
        assert_eq!(merged["title"], "Contact");
        assert_eq!(merged["keywords"], "contact");
        assert_eq!(merged["description"], "Water pumps");
    }

    #[test]
    fn test_merge_with_empty_override_is_defaults() {
        let site = test_site();
        assert_eq!(merge_meta(&site.default_meta, &MetaMap::new()), site.default_meta);
    }
}
