//! Host configuration.

use std::path::PathBuf;

use chaincode_state::{ExecutionContext, DEFAULT_CHAINCODE_NAME, DEFAULT_CHANNEL};

use crate::cli::Cli;

/// File name of the state database inside the data directory.
pub const STATE_DB_NAME: &str = "state.db";

/// Complete host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Data directory for ledger state. `None` keeps state in memory.
    pub data_dir: Option<PathBuf>,

    /// Channel name used to tag log output.
    pub channel: String,

    /// Chaincode name used to tag log output.
    pub chaincode_name: String,

    /// Caller-supplied correlation id.
    pub correlation_id: Option<String>,

    /// Log level.
    pub log_level: String,
}

impl HostConfig {
    /// Create a host configuration from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let data_dir = if cli.in_memory {
            None
        } else {
            Some(cli.expanded_data_dir())
        };

        Self {
            data_dir,
            channel: cli.channel.clone(),
            chaincode_name: cli.chaincode_name.clone(),
            correlation_id: cli.correlation_id.clone(),
            log_level: cli.log_level.clone(),
        }
    }

    /// Path of the state database, if state is persisted.
    pub fn state_db_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(STATE_DB_NAME))
    }

    /// Build the execution context for one invocation.
    pub fn execution_context(&self) -> ExecutionContext {
        ExecutionContext::new(&self.channel, &self.chaincode_name)
            .with_optional_correlation_id(self.correlation_id.clone())
    }

    /// Check if state is kept in memory only.
    pub fn is_in_memory(&self) -> bool {
        self.data_dir.is_none()
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            channel: DEFAULT_CHANNEL.to_string(),
            chaincode_name: DEFAULT_CHAINCODE_NAME.to_string(),
            correlation_id: None,
            log_level: "info".to_string(),
        }
    }
}
