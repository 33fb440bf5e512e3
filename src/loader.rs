//! Site Document loading.
//!
//! A document comes from an `http(s)` URL (unauthenticated GET, optionally
//! cache-busted with a timestamp query parameter) or from a local file.
//! Every failure (transport, status, I/O, decode) is one error class,
//! `LoadError`. There are no retries.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use crate::document::SiteDocument;

/// Query parameter used to defeat intermediate caches.
pub const CACHE_BUST_PARAM: &str = "v";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Url(String),
    File(PathBuf),
}

impl DocumentSource {
    /// `http://` and `https://` are URLs, anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DocumentSource::Url(raw.to_string())
        } else {
            DocumentSource::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Url(url) => write!(f, "{}", url),
            DocumentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub cache_bust: bool,
    pub timeout: Duration,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            cache_bust: true,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Append the cache-busting parameter, respecting an existing query string
/// and keeping any fragment last.
pub fn cache_busted_url(url: &str, stamp: i64) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    let mut busted = format!("{}{}{}={}", base, separator, CACHE_BUST_PARAM, stamp);
    if let Some(fragment) = fragment {
        busted.push('#');
        busted.push_str(fragment);
    }
    busted
}

/// Load and decode the Site Document.
pub async fn load_document(
    source: &DocumentSource,
    options: &LoaderOptions,
) -> Result<SiteDocument, LoadError> {
    let raw = match source {
        DocumentSource::Url(url) => fetch_url(url, options).await?,
        DocumentSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?,
    };

    let document = SiteDocument::from_json(&raw)?;
    tracing::debug!(
        "Loaded site document from {} ({} sections)",
        source,
        document.present_sections().len()
    );
    Ok(document)
}

async fn fetch_url(url: &str, options: &LoaderOptions) -> Result<String, LoadError> {
    let target = if options.cache_bust {
        cache_busted_url(url, Utc::now().timestamp_millis())
    } else {
        url.to_string()
    };

    let network = |source| LoadError::Network {
        url: target.clone(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(network)?;

    tracing::debug!("GET {}", target);
    let response = client.get(&target).send().await.map_err(network)?;
    if !response.status().is_success() {
        return Err(LoadError::Status {
            url: target.clone(),
            status: response.status().as_u16(),
        });
    }
    response.text().await.map_err(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse() {
        assert_eq!(
            DocumentSource::parse("https://lab.example/info.json"),
            DocumentSource::Url("https://lab.example/info.json".to_string())
        );
        assert_eq!(
            DocumentSource::parse("info.json"),
            DocumentSource::File(PathBuf::from("info.json"))
        );
        assert_eq!(
            DocumentSource::parse(" http://localhost:8000/info.json "),
            DocumentSource::Url("http://localhost:8000/info.json".to_string())
        );
    }

    #[test]
    fn test_cache_busted_url() {
        assert_eq!(
            cache_busted_url("https://lab.example/info.json", 42),
            "https://lab.example/info.json?v=42"
        );
        assert_eq!(
            cache_busted_url("https://lab.example/info.json?lang=en", 42),
            "https://lab.example/info.json?lang=en&v=42"
        );
        assert_eq!(
            cache_busted_url("https://lab.example/info.json#top", 7),
            "https://lab.example/info.json?v=7#top"
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        std::fs::write(&path, r#"{"lab": {"name": "Vision Lab", "description": "We see."}}"#)
            .unwrap();

        let doc = load_document(&DocumentSource::File(path), &LoaderOptions::default())
            .await
            .unwrap();
        assert_eq!(doc.lab.unwrap().name, "Vision Lab");
    }

    #[tokio::test]
    async fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DocumentSource::File(dir.path().join("missing.json"));
        let err = load_document(&source, &LoaderOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.json");
        std::fs::write(&path, "<html>not json</html>").unwrap();

        let err = load_document(&DocumentSource::File(path), &LoaderOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_url_is_load_error() {
        // Port 9 (discard) on loopback refuses connections on test hosts.
        let source = DocumentSource::Url("http://127.0.0.1:9/info.json".to_string());
        let options = LoaderOptions {
            cache_bust: true,
            timeout: Duration::from_secs(2),
        };
        let err = load_document(&source, &options).await.unwrap_err();
        assert!(matches!(err, LoadError::Network { .. }));
    }
}
