//! Opening social links in the system browser.
//!
//! Links are handed to the `open` crate, which launches the browser as a
//! separate process: the opened page has no handle back to the card. Only
//! absolute `http`/`https` URLs are ever passed on.

use thiserror::Error;
use url::Url;

/// Why a link was not opened.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Invalid link '{url}': {reason}")]
    Invalid { url: String, reason: String },

    #[error("Refusing to open {scheme}: link")]
    UnsupportedScheme { scheme: String },

    #[error("Failed to open browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Parses `raw` and accepts it only if it is an absolute web URL.
///
/// # Errors
///
/// Returns an error for unparsable input and non-http(s) schemes.
pub fn parse_web_url(raw: &str) -> Result<Url, LinkError> {
    let url = Url::parse(raw).map_err(|e| LinkError::Invalid {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        "http" | "https" => Err(LinkError::Invalid {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        }),
        scheme => Err(LinkError::UnsupportedScheme {
            scheme: scheme.to_string(),
        }),
    }
}

/// Launches the system browser for `raw`.
///
/// # Errors
///
/// Returns an error if the URL is rejected or the browser cannot be started.
pub fn open_in_browser(raw: &str) -> Result<(), LinkError> {
    let url = parse_web_url(raw)?;
    tracing::info!(%url, "Opening link");
    open::that_detached(url.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://github.com/beeman")]
    #[case("https://t.me/beemandev")]
    #[case("http://example.com/path?q=1")]
    fn test_web_urls_are_accepted(#[case] raw: &str) {
        assert!(parse_web_url(raw).is_ok());
    }

    #[rstest]
    #[case("javascript:alert(1)", "javascript")]
    #[case("file:///etc/passwd", "file")]
    #[case("mailto:me@example.com", "mailto")]
    fn test_other_schemes_are_refused(#[case] raw: &str, #[case] scheme: &str) {
        match parse_web_url(raw) {
            Err(LinkError::UnsupportedScheme { scheme: got }) => assert_eq!(got, scheme),
            other => panic!("expected UnsupportedScheme, got {other:?}"),
        }
    }

    #[test]
    fn test_relative_path_is_invalid() {
        let err = parse_web_url("/in/beeman").unwrap_err();
        assert!(matches!(err, LinkError::Invalid { .. }));
        assert!(err.to_string().starts_with("Invalid link '/in/beeman'"));
    }

    #[test]
    fn test_open_refuses_before_launching() {
        let err = open_in_browser("javascript:alert(1)").unwrap_err();
        assert_eq!(err.to_string(), "Refusing to open javascript: link");
    }
}
