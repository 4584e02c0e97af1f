//! Request handler module
//!
//! Routes requests to the page renderer, the health probe, or static files.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
