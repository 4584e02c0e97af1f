//! Static file serving module
//!
//! Serves files under the configured static directory with `ETag`
//! revalidation. Paths resolving outside the directory are refused.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Favicon file inside the static directory
pub const FAVICON_FILE: &str = "favicon.svg";

/// Serve `relative` from `static_dir`
pub async fn serve_static(
    ctx: &RequestContext<'_>,
    static_dir: &str,
    relative: &str,
) -> Response<Full<Bytes>> {
    let Some((content, file_path)) = load_asset(static_dir, relative).await else {
        return http::build_404_response();
    };

    let etag = cache::etag_for(&content);
    if cache::not_modified(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::build_asset_response(
        Bytes::from(content),
        mime::content_type_for(&file_path),
        &etag,
        ctx.is_head,
    )
}

/// Serve the site favicon for `/favicon.ico` and `/favicon.svg`
pub async fn serve_favicon(ctx: &RequestContext<'_>, static_dir: &str) -> Response<Full<Bytes>> {
    serve_static(ctx, static_dir, FAVICON_FILE).await
}

/// Read a regular file below `static_dir`, returning its bytes and resolved path
async fn load_asset(static_dir: &str, relative: &str) -> Option<(Vec<u8>, PathBuf)> {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() || relative.split('/').any(|segment| segment == "..") {
        logger::log_warning(&format!("Rejected static path: '{relative}'"));
        return None;
    }

    let root = match fs::canonicalize(static_dir).await {
        Ok(root) => root,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // Missing files are an ordinary 404
    let resolved = fs::canonicalize(Path::new(&root).join(relative)).await.ok()?;
    if !resolved.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {relative} -> {}",
            resolved.display()
        ));
        return None;
    }

    if !fs::metadata(&resolved).await.ok()?.is_file() {
        return None;
    }

    match fs::read(&resolved).await {
        Ok(content) => Some((content, resolved)),
        Err(e) => {
            logger::log_error(&format!("Failed to read '{}': {e}", resolved.display()));
            None
        }
    }
}
