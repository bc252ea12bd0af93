use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::Duration;

mod config;
mod diagnostics;
mod probe;
mod report;
mod scan;
mod spec;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "api-probe")]
#[command(about = "Probe the GET endpoints declared in an OpenAPI document", long_about = None)]
struct Cli {
    /// Emit debug logs on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the spec and probe every GET endpoint once.
    Scan {
        #[arg(long, env = "API_PROBE_SPEC_URL", default_value = config::DEFAULT_SPEC_URL)]
        spec_url: String,

        #[arg(long, env = "API_PROBE_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
        base_url: String,

        /// Bearer credential sent with every probe.
        #[arg(long, env = "API_PROBE_TOKEN", hide_env_values = true)]
        token: String,

        /// Pause between probes, in milliseconds.
        #[arg(long, default_value_t = 200)]
        delay_ms: u64,

        /// Extra or overriding placeholder value (repeatable).
        #[arg(long = "placeholder", value_name = "NAME=VALUE", value_parser = probe::parse_assignment)]
        placeholders: Vec<(String, String)>,

        /// Start from an empty placeholder table.
        #[arg(long)]
        no_default_placeholders: bool,

        /// Print the start of each successful response body.
        #[arg(long)]
        show_body: bool,

        #[arg(long)]
        no_color: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    diagnostics::init_tracing(cli.verbose)?;

    match cli.cmd {
        Commands::Scan {
            spec_url,
            base_url,
            token,
            delay_ms,
            placeholders,
            no_default_placeholders,
            show_body,
            no_color,
        } => {
            let mut config = config::ScanConfig::new(spec_url, base_url, token);
            config.delay = Duration::from_millis(delay_ms);
            config.show_body = show_body;
            if no_default_placeholders {
                config.placeholders = probe::PlaceholderTable::empty();
            }
            config.placeholders.extend(placeholders);

            let client = reqwest::Client::builder().build()?;
            let color = !no_color && diagnostics::use_color();
            colored::control::set_override(color);
            let mut reporter = report::Reporter::new(std::io::stdout(), color);

            match scan::run_scan(&client, &config, &mut reporter).await? {
                scan::ScanOutcome::Completed { probed } => {
                    tracing::info!(probed, "scan finished");
                    Ok(ExitCode::SUCCESS)
                }
                scan::ScanOutcome::Aborted => Ok(ExitCode::FAILURE),
            }
        }
    }
}
