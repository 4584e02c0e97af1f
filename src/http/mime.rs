//! Content-Type lookup for files under the static directory

use std::path::Path;

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("webmanifest") => "application/manifest+json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("pdf") => "application/pdf",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_asset_types() {
        assert_eq!(content_type_for(Path::new("css/site.css")), "text/css; charset=utf-8");
        assert_eq!(content_type_for(Path::new("js/main.js")), "text/javascript; charset=utf-8");
        assert_eq!(content_type_for(Path::new("locales/en.json")), "application/json");
        assert_eq!(content_type_for(Path::new("img/logo.SVG")), "image/svg+xml");
        assert_eq!(content_type_for(Path::new("docs/datasheet.pdf")), "application/pdf");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Path::new("archive.xyz")), "application/octet-stream");
        assert_eq!(content_type_for(Path::new("LICENSE")), "application/octet-stream");
    }
}
