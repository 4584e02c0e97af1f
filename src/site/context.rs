//! Page context builder
//!
//! Produces the full mapping handed to the template for one request.

use super::meta::{merge_meta, PageMeta, SiteConfig};
use super::structured_data::{structured_data, to_script_json};
use crate::config::Integrations;
use serde_json::{json, Value};

/// Build the template context for `page_id`.
///
/// The `meta` block always holds every default key. `canonical` comes from
/// the override when given, else from `request_path` joined onto the site URL.
pub fn base_context(
    page_id: &str,
    overrides: Option<&PageMeta>,
    request_path: &str,
    site: &SiteConfig,
    integrations: &Integrations,
) -> Value {
    let override_map = overrides.map(PageMeta::to_map).unwrap_or_default();
    let mut meta = merge_meta(&site.default_meta, &override_map);
    if !override_map.contains_key("canonical") {
        meta.insert("canonical".to_string(), site.asset(request_path));
    }

    let blocks = structured_data(site);
    let blocks_json: Vec<String> = blocks.iter().map(to_script_json).collect();

    json!({
        "page": page_id,
        "lang": site.language,
        "supabase": integrations.supabase,
        "chatbot": {
            "provider": integrations.chatbot.provider,
            "model": integrations.chatbot.model,
            "enabled": integrations.chatbot.has_api_key,
        },
        "meta": meta,
        "site": {
            "name": site.name,
            "url": site.url,
            "tagline": site.tagline,
            "logo_url": site.asset(&site.logo_path),
            "favicon_url": site.asset(&site.favicon_path),
            "og_image_url": site.asset(&site.og_image_path),
        },
        "structured_data": blocks,
        "structured_data_json": blocks_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::meta::tests::test_site;
    use std::collections::HashMap;

    fn integrations() -> Integrations {
        Integrations::from_vars(HashMap::new()).unwrap()
    }

    #[test]
    fn test_all_default_keys_present() {
        let site = test_site();
        let ctx = base_context("home", None, "/", &site, &integrations());
        let meta = ctx["meta"].as_object().unwrap();
        for (key, value) in &site.default_meta {
            assert!(meta.contains_key(key), "missing meta key {key}");
            if key != "canonical" {
                assert_eq!(meta[key], Value::String(value.clone()));
            }
        }
        assert_eq!(ctx["page"], "home");
        assert_eq!(ctx["lang"], "en");
    }

    #[test]
    fn test_override_wins() {
        let site = test_site();
        let overrides = PageMeta::new()
            .title("Products | Aquatech")
            .description("Pump range");
        let ctx = base_context("products", Some(&overrides), "/products", &site, &integrations());
        assert_eq!(ctx["meta"]["title"], "Products | Aquatech");
        assert_eq!(ctx["meta"]["description"], "Pump range");
        assert_eq!(ctx["meta"]["author"], "Aquatech Group");
    }

    #[test]
    fn test_canonical_from_request_path() {
        let site = test_site();
        let ctx = base_context("impact", None, "/impact", &site, &integrations());
        assert_eq!(ctx["meta"]["canonical"], "https://example.com/impact");

        let root = base_context("home", None, "/", &site, &integrations());
        assert_eq!(root["meta"]["canonical"], "https://example.com/");
    }

    #[test]
    fn test_explicit_canonical_kept() {
        let site = test_site();
        let overrides = PageMeta::new().canonical("https://example.com/about");
        let ctx = base_context("about", Some(&overrides), "/aquatech-group", &site, &integrations());
        assert_eq!(ctx["meta"]["canonical"], "https://example.com/about");
    }

    #[test]
    fn test_site_and_structured_data_blocks() {
        let site = test_site();
        let ctx = base_context("home", None, "/", &site, &integrations());
        assert_eq!(ctx["site"]["logo_url"], "https://example.com/static/img/logo.svg");
        assert_eq!(ctx["structured_data"].as_array().unwrap().len(), 2);
        assert_eq!(ctx["structured_data_json"].as_array().unwrap().len(), 2);
        assert_eq!(ctx["supabase"]["is_configured"], false);
        assert_eq!(ctx["supabase"]["contact_table"], "contact_messages");
        assert_eq!(ctx["supabase"]["url"], "");
        assert_eq!(ctx["chatbot"]["enabled"], false);
    }

    #[test]
    fn test_idempotent() {
        let site = test_site();
        let overrides = PageMeta::new().title("Technology");
        let integrations = integrations();
        let first = base_context("technology", Some(&overrides), "/technology", &site, &integrations);
        let second = base_context("technology", Some(&overrides), "/technology", &site, &integrations);
        assert_eq!(first, second);
    }
}
