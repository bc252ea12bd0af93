use crate::config::{SPEC_USER_AGENT, ScanConfig};
use crate::spec::SpecDocument;

use reqwest::Client;
use reqwest::header::USER_AGENT;
use thiserror::Error;
use tracing::{debug, info};

/// Why the spec document could not be loaded. Every variant aborts the scan.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP Error {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("invalid spec document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Download and parse the OpenAPI document at `config.spec_url`.
pub async fn load_specification(
    client: &Client,
    config: &ScanConfig,
) -> Result<SpecDocument, LoadError> {
    debug!(url = %config.spec_url, "downloading spec document");

    let response = client
        .get(&config.spec_url)
        .header(USER_AGENT, SPEC_USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    let text = response.text().await?;
    let doc = SpecDocument::from_json(&text)?;

    info!(paths = doc.path_count(), "spec document loaded");
    Ok(doc)
}
