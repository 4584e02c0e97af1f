//! HTTP protocol layer module
//!
//! Response builders, default header injection, and cache validators,
//! independent of which page or asset is being served.

pub mod cache;
pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use headers::apply_default_headers;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_asset_response, build_html_response, build_json_response, build_options_response,
};
