use std::time::Duration;

use crate::constants::{DEFAULT_BLOCK_COUNT, DEFAULT_READ_TIMEOUT_MS, MAX_BLOCK_COUNT};
use crate::{Error, Result};

/// Settings for one history read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// Number of history blocks to request, starting at block 0
    pub block_count: usize,
    /// Timeout handed to the transport for the exchange
    pub timeout_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            block_count: DEFAULT_BLOCK_COUNT,
            timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl ReaderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_count > MAX_BLOCK_COUNT {
            return Err(Error::InvalidInput(format!(
                "block count {} exceeds the maximum of {}",
                self.block_count, MAX_BLOCK_COUNT
            )));
        }
        if self.timeout_ms == 0 {
            return Err(Error::InvalidInput("timeout must be non-zero".into()));
        }
        Ok(())
    }
}
