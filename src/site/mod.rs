//! Site content module
//!
//! Page table, SEO metadata, structured data and the template renderer.
//! Everything here is pure apart from template loading at startup.

pub mod assets;
pub mod contact;
pub mod context;
pub mod meta;
pub mod pages;
pub mod render;
pub mod structured_data;

pub use context::base_context;
pub use meta::SiteConfig;
pub use pages::Page;
pub use render::Renderer;
