//! Fixed page table
//!
//! Maps each public path to its page id, template and metadata override.

use super::meta::PageMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Products,
    Technology,
    Impact,
    AquatechGroup,
    Contact,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Products,
        Self::Technology,
        Self::Impact,
        Self::AquatechGroup,
        Self::Contact,
    ];

    /// Resolve a request path; a single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = normalize_path(path);
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Products => "/products",
            Self::Technology => "/technology",
            Self::Impact => "/impact",
            Self::AquatechGroup => "/aquatech-group",
            Self::Contact => "/contact",
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::Technology => "technology",
            Self::Impact => "impact",
            Self::AquatechGroup => "aquatech-group",
            Self::Contact => "contact",
        }
    }

    pub const fn template(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Products => "products.html",
            Self::Technology => "technology.html",
            Self::Impact => "impact.html",
            Self::AquatechGroup => "aquatech_group.html",
            Self::Contact => "contact.html",
        }
    }

    pub fn meta(self, site_name: &str) -> PageMeta {
        match self {
            Self::Home => PageMeta::new()
                .og_title(format!("{site_name} | Reliable water, pumped efficiently")),
            Self::Products => PageMeta::new()
                .title(format!("Products | {site_name}"))
                .description(
                    "Solar, submersible and surface pumps with matched controllers for irrigation, livestock and domestic supply.",
                )
                .keywords("solar pump, submersible pump, surface pump, pump controller, irrigation pump")
                .og_title(format!("{site_name} pump range"))
                .og_description("Find the pump that fits your head, flow and power source."),
            Self::Technology => PageMeta::new()
                .title(format!("Technology | {site_name}"))
                .description(
                    "Brushless DC motors, MPPT solar controllers and stainless steel hydraulics engineered for long service life.",
                )
                .keywords("brushless motor, MPPT controller, pump efficiency, stainless steel pump")
                .og_title(format!("Inside {site_name} technology")),
            Self::Impact => PageMeta::new()
                .title(format!("Impact | {site_name}"))
                .description(
                    "How solar pumping cuts diesel use, saves water and brings reliable supply to farms and communities.",
                )
                .keywords("solar irrigation, water access, sustainable agriculture, diesel replacement")
                .og_title(format!("{site_name} impact")),
            Self::AquatechGroup => PageMeta::new()
                .title(format!("About the Aquatech Group | {site_name}"))
                .description(
                    "The Aquatech Group designs, manufactures and services water pumps with partners across several continents.",
                )
                .keywords("Aquatech Group, pump manufacturer, about us")
                .og_title("About the Aquatech Group"),
            Self::Contact => PageMeta::new()
                .title(format!("Contact | {site_name}"))
                .description("Request a quote or talk to our pump engineers about your project.")
                .keywords("pump quote, contact pump manufacturer, pump sizing")
                .og_title(format!("Contact {site_name}")),
        }
    }
}

/// Strip exactly one trailing slash, keeping the root as `/`.
/// Paths ending in repeated slashes (`//`, `/products//`) are left as-is.
pub fn normalize_path(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped,
        _ => path,
    }
}
