use crate::config::{PROBE_USER_AGENT, ScanConfig};

use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, warn};

/// Status and raw body of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// HTTP status, or 0 when no response was received.
    pub status: u16,
    pub body: String,
}

impl ProbeResult {
    fn transport_failure(err: reqwest::Error) -> Self {
        warn!(error = %err, "probe request failed");
        Self {
            status: 0,
            body: err.to_string(),
        }
    }
}

/// Send one GET to `url` with the probe headers. Never fails: transport errors
/// are folded into a status-0 result.
pub async fn send_probe(client: &Client, config: &ScanConfig, url: &str) -> ProbeResult {
    debug!(%url, "probing");

    let response = client
        .get(url)
        .bearer_auth(&config.token)
        .header(ACCEPT, "application/json")
        .header(USER_AGENT, PROBE_USER_AGENT)
        .send()
        .await;

    let response = match response {
        Ok(r) => r,
        Err(err) => return ProbeResult::transport_failure(err),
    };

    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => ProbeResult { status, body },
        Err(err) => ProbeResult::transport_failure(err),
    }
}
