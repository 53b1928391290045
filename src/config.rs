//! Server configuration module
//! Handles the startup parameters for the benchmark server

use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, FIXED_WORKER_COUNT, IDLE_TIMEOUT_SECS, READ_TIMEOUT_SECS,
};
use crate::error::{HelloBenchError, Result};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration parameters
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Number of worker threads used by the runtime
    pub worker_count: usize,
    /// Maximum duration the server waits for a request head
    pub read_timeout: Duration,
    /// Maximum duration a kept-alive connection may stay idle
    pub idle_timeout: Duration,
}

impl ServerConfig {
    /// Build a configuration from an explicitly supplied worker count
    ///
    /// # Arguments
    /// * `worker_count` - Requested number of runtime worker threads
    ///
    /// # Returns
    /// A `Result` containing the configuration, or a configuration error
    /// if the count is not a positive integer
    pub fn with_worker_count(worker_count: i64) -> Result<Self> {
        Self::validate_worker_count(worker_count)?;

        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            worker_count: worker_count as usize,
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(IDLE_TIMEOUT_SECS),
        })
    }

    /// Build the fixed-variant configuration with the embedded worker count
    pub fn fixed() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            worker_count: FIXED_WORKER_COUNT,
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(IDLE_TIMEOUT_SECS),
        }
    }

    /// Validate that a worker count is usable as a parallelism degree
    fn validate_worker_count(count: i64) -> Result<()> {
        if count <= 0 {
            return Err(HelloBenchError::ConfigError(format!(
                "worker_count must be a positive integer indicating the number of \
                 threads to be used by the runtime, got {}",
                count
            )));
        }
        Ok(())
    }

    /// Resolve the configured host and port into a socket address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse().map_err(|e| {
            HelloBenchError::ConfigError(format!(
                "Failed to parse server address '{}:{}': {}",
                self.host, self.port, e
            ))
        })
    }

    /// Create a test configuration bound to an ephemeral local port
    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 0,
            worker_count: 2,
            read_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(5),
        }
    }
}
