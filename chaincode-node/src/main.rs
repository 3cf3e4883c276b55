//! Balance chaincode host binary.
//!
//! Runs a single invocation against local ledger state and prints the
//! response envelope as JSON on stdout. Logs go to stderr.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use chaincode_node::cli::Cli;
use chaincode_node::config::HostConfig;
use chaincode_node::host::Host;

fn main() -> anyhow::Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Build configuration
    let config = HostConfig::from_cli(&cli);

    // Set up logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::debug!("Chaincode host v{}", env!("CARGO_PKG_VERSION"));

    // Run the invocation
    let mut host = Host::open(config)?;
    let response = host.execute(&cli.command);
    host.flush()?;

    println!("{}", serde_json::to_string(&response)?);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
