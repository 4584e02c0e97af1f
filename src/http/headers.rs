//! Response post-processing
//!
//! Adds the site-wide cache and security headers to every response without
//! touching status or body. A header the handler already set is left alone.

use hyper::header::{HeaderName, HeaderValue, SERVER};
use hyper::Response;

pub const CACHE_CONTROL_VALUE: &str = "public, max-age=3600, stale-while-revalidate=60";
pub const PERMISSIONS_POLICY_VALUE: &str = "accelerometer=(), camera=(), geolocation=(), gyroscope=(), magnetometer=(), microphone=(), payment=(), usb=()";

/// Header name (lowercase) and fixed value
pub const DEFAULT_HEADERS: [(&str, &str); 5] = [
    ("cache-control", CACHE_CONTROL_VALUE),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("permissions-policy", PERMISSIONS_POLICY_VALUE),
];

pub fn apply_default_headers<B>(response: &mut Response<B>, server_name: &str) {
    let headers = response.headers_mut();
    for (name, value) in DEFAULT_HEADERS {
        headers
            .entry(HeaderName::from_static(name))
            .or_insert_with(|| HeaderValue::from_static(value));
    }

    if !headers.contains_key(SERVER) {
        if let Ok(value) = HeaderValue::from_str(server_name) {
            headers.insert(SERVER, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::CACHE_CONTROL;
    use hyper::StatusCode;

    #[test]
    fn test_sets_all_when_absent() {
        let mut response = Response::new("body");
        apply_default_headers(&mut response, "Test/1.0");

        for (name, value) in DEFAULT_HEADERS {
            assert_eq!(response.headers()[name], value, "header {name}");
        }
        assert_eq!(response.headers()[SERVER], "Test/1.0");
        assert_eq!(*response.body(), "body");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_handler_value_preserved() {
        let mut response = Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header(CACHE_CONTROL, "no-store")
            .header("X-Frame-Options", "DENY")
            .body(())
            .unwrap();
        apply_default_headers(&mut response, "Test/1.0");

        assert_eq!(response.headers()[CACHE_CONTROL], "no-store");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
        assert_eq!(response.headers().get_all(CACHE_CONTROL).iter().count(), 1);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_server_name_skipped() {
        let mut response = Response::new(());
        apply_default_headers(&mut response, "bad\nname");
        assert!(response.headers().get(SERVER).is_none());
    }
}
