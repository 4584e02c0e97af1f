//! Absolute asset URL resolution

/// Join a relative static path onto the site base URL with exactly one `/`
/// between them.
///
/// Paths that are already absolute (`http://`, `https://`) are returned as-is.
pub fn asset_url(base_url: &str, relative_path: &str) -> String {
    if relative_path.starts_with("http://") || relative_path.starts_with("https://") {
        return relative_path.to_string();
    }

    let base = base_url.trim_end_matches('/');
    let path = relative_path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_separator() {
        let expected = "https://example.com/img/logo.svg";
        assert_eq!(asset_url("https://example.com", "img/logo.svg"), expected);
        assert_eq!(asset_url("https://example.com/", "img/logo.svg"), expected);
        assert_eq!(asset_url("https://example.com", "/img/logo.svg"), expected);
        assert_eq!(asset_url("https://example.com//", "//img/logo.svg"), expected);
    }

    #[test]
    fn test_empty_path_yields_root() {
        assert_eq!(asset_url("https://example.com", ""), "https://example.com/");
        assert_eq!(asset_url("https://example.com/", "/"), "https://example.com/");
    }

    #[test]
    fn test_absolute_path_untouched() {
        assert_eq!(
            asset_url("https://example.com", "https://cdn.example.net/a.png"),
            "https://cdn.example.net/a.png"
        );
    }
}
