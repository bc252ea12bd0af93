//! Scan configuration.
//!
//! Built once in `main` from CLI flags (with env fallbacks) and passed by
//! reference to the loader and the prober. Tests build one directly and point
//! it at a mock server.

use crate::probe::PlaceholderTable;
use std::time::Duration;

pub const DEFAULT_SPEC_URL: &str = "http://localhost:8000/openapi.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Query string appended to every probed endpoint.
pub const DEFAULT_QUERY: &str = "q=latest&page=1&sort=date";

/// Pause between two probes.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Client identifier sent when downloading the spec document.
pub const SPEC_USER_AGENT: &str = "Mozilla/5.0";

/// Client identifier sent with every probe.
pub const PROBE_USER_AGENT: &str = "AutoScanner/1.0";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub spec_url: String,
    pub base_url: String,
    pub token: String,
    pub query: String,
    pub delay: Duration,
    pub placeholders: PlaceholderTable,

    /// Print a short preview of successful response bodies.
    pub show_body: bool,
}

impl ScanConfig {
    pub fn new(
        spec_url: impl Into<String>,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            spec_url: spec_url.into(),
            base_url: base_url.into(),
            token: token.into(),
            query: DEFAULT_QUERY.to_string(),
            delay: DEFAULT_DELAY,
            placeholders: PlaceholderTable::default(),
            show_body: false,
        }
    }

    /// Full request URL for an already materialized path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}{}?{}",
            self.base_url.trim_end_matches('/'),
            path,
            self.query
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_url_appends_fixed_query() {
        let config = ScanConfig::new(DEFAULT_SPEC_URL, "http://api.test/", "t");
        assert_eq!(
            config.endpoint_url("/videos/12345"),
            "http://api.test/videos/12345?q=latest&page=1&sort=date"
        );
    }

    #[test]
    fn endpoint_url_keeps_unknown_placeholders() {
        let config = ScanConfig::new(DEFAULT_SPEC_URL, "http://api.test", "t");
        assert_eq!(
            config.endpoint_url("/tags/{tag}"),
            "http://api.test/tags/{tag}?q=latest&page=1&sort=date"
        );
    }
}
