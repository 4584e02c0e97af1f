//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, page rendering, and the response post-processing every
//! response goes through.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::site::pages::normalize_path;
use crate::site::{base_context, Page};
use chrono::{SecondsFormat, Utc};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderName, IF_NONE_MATCH, REFERER, USER_AGENT};
use hyper::{Method, Request, Response, StatusCode};
use serde_json::json;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

pub const HEALTH_PATH: &str = "/health";
pub const STATIC_PREFIX: &str = "/static/";
pub const FAVICON_PATHS: [&str; 2] = ["/favicon.ico", "/favicon.svg"];

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let mut entry = state
        .config
        .logging
        .access_log
        .then(|| access_entry(&req, peer_addr));

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let mut response = respond(&req, &state).await;
    http::apply_default_headers(&mut response, &state.config.http.server_name);

    if let Some(entry) = entry.as_mut() {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

async fn respond<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    let method = req.method();
    if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        return resp;
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *method == Method::HEAD,
        if_none_match: req
            .headers()
            .get(IF_NONE_MATCH)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    route_request(&ctx, state).await
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path
async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    if ctx.path == HEALTH_PATH {
        return health_response(state, ctx.is_head);
    }

    let static_dir = &state.config.site.static_dir;
    if FAVICON_PATHS.contains(&ctx.path) {
        return static_files::serve_favicon(ctx, static_dir).await;
    }
    if let Some(relative) = ctx.path.strip_prefix(STATIC_PREFIX) {
        return static_files::serve_static(ctx, static_dir, relative).await;
    }

    match Page::from_path(ctx.path) {
        Some(page) => render_page(ctx, page, state),
        None => http::build_404_response(),
    }
}

fn render_page(ctx: &RequestContext<'_>, page: Page, state: &AppState) -> Response<Full<Bytes>> {
    let overrides = page.meta(&state.site.name);
    let context = base_context(
        page.id(),
        Some(&overrides),
        normalize_path(ctx.path),
        &state.site,
        &state.integrations,
    );

    match state.renderer.render(page.template(), context) {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to render {}: {}",
                page.template(),
                error_chain(&e)
            ));
            http::build_500_response()
        }
    }
}

fn health_response(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let body = json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        "service": state.site.name,
    });
    http::build_json_response(StatusCode::OK, &body, is_head)
}

fn access_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let header = |name: HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = format!("{:?}", req.version())
        .trim_start_matches("HTTP/")
        .to_string();
    entry.referer = header(REFERER);
    entry.user_agent = header(USER_AGENT);
    entry
}

/// Render an error with its `source()` chain, tera nests the useful part
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
