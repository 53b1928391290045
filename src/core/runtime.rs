//! Worker runtime management for the benchmark server
//!
//! The benchmark contract maps the configured worker count directly onto
//! the runtime's scheduler threads, so the runtime is built explicitly
//! here instead of through the tokio main macro.

use log::info;
use tokio::runtime::{Builder, Runtime};

use crate::config::ServerConfig;
use crate::error::{HelloBenchError, Result};

/// Multi-threaded runtime sized by the configured worker count
pub struct WorkerRuntime {
    /// Runtime instance driving the serve loop
    runtime: Runtime,
    /// Number of worker threads in the runtime
    worker_count: usize,
}

impl WorkerRuntime {
    /// Create a new runtime with the specified number of worker threads
    ///
    /// # Arguments
    /// * `worker_count` - Number of scheduler threads to create
    ///
    /// # Returns
    /// A `Result` containing the `WorkerRuntime` or an error
    pub fn new(worker_count: usize) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(worker_count)
            .enable_io()
            .enable_time()
            .thread_name("hello-bench-worker")
            .build()
            .map_err(|e| {
                HelloBenchError::SystemError(format!("Failed to build worker runtime: {}", e))
            })?;

        info!("Created worker runtime with {} threads", worker_count);

        Ok(Self {
            runtime,
            worker_count,
        })
    }

    /// Create a runtime from server configuration
    ///
    /// # Arguments
    /// * `config` - Server configuration containing the worker count
    ///
    /// # Returns
    /// A `Result` containing the `WorkerRuntime` or an error
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(config.worker_count)
    }

    /// Number of worker threads backing this runtime
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Run a future to completion on this runtime
    pub fn block_on<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        self.runtime.block_on(future)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_creation() {
        let runtime = WorkerRuntime::new(2).expect("Failed to create worker runtime");
        assert_eq!(runtime.worker_count(), 2);
    }

    #[test]
    fn test_block_on_executes_future() {
        let runtime = WorkerRuntime::new(2).expect("Failed to create worker runtime");

        let value = runtime.block_on(async { 41 + 1 });
        assert_eq!(value, 42);
    }

    #[test]
    fn test_from_config_uses_configured_count() {
        let config = ServerConfig::for_testing();
        let runtime =
            WorkerRuntime::from_config(&config).expect("Failed to create worker runtime");
        assert_eq!(runtime.worker_count(), config.worker_count);
    }
}
