//! JSON-LD blocks describing the organization and the website

use super::meta::SiteConfig;
use serde_json::{json, Value};

const SCHEMA_CONTEXT: &str = "https://schema.org";

pub fn organization(site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": site.name,
        "url": site.asset(""),
        "logo": site.asset(&site.logo_path),
        "image": site.asset(&site.og_image_path),
        "slogan": site.tagline,
    })
}

pub fn website(site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.name,
        "url": site.asset(""),
        "inLanguage": site.language,
        "publisher": {
            "@type": "Organization",
            "name": site.name,
        },
    })
}

/// Organization first, then WebSite
pub fn structured_data(site: &SiteConfig) -> Vec<Value> {
    vec![organization(site), website(site)]
}

/// Serialize a block for embedding inside a `<script type="application/ld+json">` tag
///
/// `</` is escaped so the payload cannot close the script element.
pub fn to_script_json(block: &Value) -> String {
    block.to_string().replace("</", "<\\/")
}
