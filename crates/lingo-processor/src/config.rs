use serde::{Deserialize, Serialize};

/// Configuration for the chunk worker pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Number of workers processing chunks at the same time.
    pub concurrency: usize,
    /// Maximum number of top-level entries per chunk.
    pub max_chunk_entries: usize,
    /// Extra attempts per chunk after the first one fails.
    pub chunk_retry_limit: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            concurrency: 3,
            max_chunk_entries: 6,
            chunk_retry_limit: 5,
        }
    }
}

impl ProcessorConfig {
    /// A single-worker configuration.
    pub fn sequential() -> Self {
        Self {
            concurrency: 1,
            ..Default::default()
        }
    }

    /// Total attempts allowed per chunk.
    pub fn max_attempts(&self) -> usize {
        self.chunk_retry_limit + 1
    }
}
