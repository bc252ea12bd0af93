//! Scan driver: load the spec once, then probe each GET endpoint in order.

use crate::Result;
use crate::config::ScanConfig;
use crate::probe::{materialize_path, send_probe};
use crate::report::Reporter;
use crate::spec::load_specification;

use reqwest::Client;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Every GET endpoint was probed.
    Completed { probed: usize },
    /// The spec document could not be loaded; nothing was probed.
    Aborted,
}

pub async fn run_scan<W: Write>(
    client: &Client,
    config: &ScanConfig,
    reporter: &mut Reporter<W>,
) -> Result<ScanOutcome> {
    reporter.banner()?;
    reporter.line("1. Downloading OpenAPI Spec...")?;

    let doc = match load_specification(client, config).await {
        Ok(doc) => doc,
        Err(err) => {
            reporter.fatal(&err)?;
            return Ok(ScanOutcome::Aborted);
        }
    };

    reporter.line(format!("   Found {} paths definition.", doc.path_count()))?;
    reporter.banner()?;
    reporter.line("2. Starting Scan...")?;
    reporter.banner()?;

    let mut probed = 0;
    for template in doc.retrieval_paths() {
        reporter.start_probe(template)?;

        let path = materialize_path(template, &config.placeholders);
        let url = config.endpoint_url(&path);
        let result = send_probe(client, config, &url).await;

        reporter.finish_probe(&result, config.show_body)?;
        probed += 1;

        tokio::time::sleep(config.delay).await;
    }

    reporter.banner()?;
    reporter.line("Scan Complete.")?;

    Ok(ScanOutcome::Completed { probed })
}
