//! Invocation host.
//!
//! Owns the chaincode service and the ledger state, and turns a parsed
//! [`Command`] into an [`InvocationResponse`].

use std::sync::Arc;

use chaincode_state::{Chaincode, InvocationResponse};
use chaincode_storage::{KvBackend, KvState, MemoryBackend};

use crate::cli::Command;
use crate::config::HostConfig;

/// Runs chaincode invocations against one state backend.
pub struct Host {
    /// Host configuration.
    config: HostConfig,

    /// The chaincode service.
    chaincode: Chaincode,

    /// Ledger state.
    state: KvState<dyn KvBackend>,
}

impl Host {
    /// Open the state backend described by `config`.
    pub fn open(config: HostConfig) -> anyhow::Result<Self> {
        let backend = open_backend(&config)?;
        Ok(Self::with_backend(config, backend))
    }

    /// Create a host over an existing backend.
    pub fn with_backend(config: HostConfig, backend: Arc<dyn KvBackend>) -> Self {
        Self {
            config,
            chaincode: Chaincode::new(),
            state: KvState::new(backend),
        }
    }

    /// Host configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Run one command.
    pub fn execute(&mut self, command: &Command) -> InvocationResponse {
        match command {
            Command::Init { args } => self.init(args),
            Command::Invoke { function, args } => self.invoke(function, args),
        }
    }

    /// Instantiate the chaincode.
    pub fn init(&mut self, args: &[String]) -> InvocationResponse {
        let ctx = self.config.execution_context();
        self.chaincode.init(&mut self.state, &ctx, args).into()
    }

    /// Invoke a function by name.
    pub fn invoke(&mut self, function: &str, args: &[String]) -> InvocationResponse {
        let ctx = self.config.execution_context();
        self.chaincode
            .invoke(&mut self.state, &ctx, function, args)
            .into()
    }

    /// Flush buffered writes to disk.
    pub fn flush(&self) -> anyhow::Result<()> {
        self.state.backend().flush()?;
        Ok(())
    }
}

fn open_backend(config: &HostConfig) -> anyhow::Result<Arc<dyn KvBackend>> {
    let Some(db_path) = config.state_db_path() else {
        tracing::info!("Running without persistence (no data directory)");
        return Ok(Arc::new(MemoryBackend::new()));
    };

    open_persistent(&db_path)
}

#[cfg(feature = "rocksdb")]
fn open_persistent(db_path: &std::path::Path) -> anyhow::Result<Arc<dyn KvBackend>> {
    tracing::info!("State database: {:?}", db_path);
    Ok(Arc::new(chaincode_storage::RocksBackend::open(db_path)?))
}

#[cfg(not(feature = "rocksdb"))]
fn open_persistent(db_path: &std::path::Path) -> anyhow::Result<Arc<dyn KvBackend>> {
    anyhow::bail!(
        "persistent state at {:?} requires the `rocksdb` feature; use --in-memory",
        db_path
    )
}
