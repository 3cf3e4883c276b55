//! Command-line argument parsing.

use std::path::PathBuf;

use chaincode_state::{DEFAULT_CHAINCODE_NAME, DEFAULT_CHANNEL};
use clap::{Parser, Subcommand};

/// Balance chaincode host.
#[derive(Parser, Debug, Clone)]
#[command(name = "chaincode-node")]
#[command(about = "Run one balance chaincode invocation against local ledger state")]
#[command(version)]
pub struct Cli {
    /// Data directory for ledger state.
    #[arg(long, default_value = "~/.chaincode")]
    pub data_dir: PathBuf,

    /// Keep state in memory only (nothing is persisted).
    #[arg(long)]
    pub in_memory: bool,

    /// Channel name used to tag log output.
    #[arg(long, default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Chaincode name used to tag log output.
    #[arg(long = "chaincode", default_value = DEFAULT_CHAINCODE_NAME)]
    pub chaincode_name: String,

    /// Correlation id for this invocation (a UUID is generated if omitted).
    #[arg(long)]
    pub correlation_id: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Invocation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Invocation entry points.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Instantiate the chaincode: NAME_A BALANCE_A NAME_B BALANCE_B.
    Init {
        /// Instantiation arguments.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Invoke a function: `invoke FROM TO AMOUNT`, `delete NAME` or `query NAME`.
    Invoke {
        /// Function name.
        function: String,

        /// Function arguments.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Expand the data directory path (handle ~ for home).
    pub fn expanded_data_dir(&self) -> PathBuf {
        let path_str = self.data_dir.to_string_lossy();
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        self.data_dir.clone()
    }
}
