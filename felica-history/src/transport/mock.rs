// felica-history/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for tests. It records sent frames and returns queued
/// responses in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Timeouts passed to each transceive call
    pub timeouts: Vec<u64>,
    /// Number of upcoming transceive calls that should fail
    pub transceive_failures: usize,
    pub connects: usize,
    pub closes: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<Vec<u8>>) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }

    /// Set how many subsequent transceive calls should fail (for tests).
    pub fn set_transceive_failures(&mut self, n: usize) {
        self.transceive_failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Result<()> {
        self.connects += 1;
        Ok(())
    }

    fn transceive(&mut self, request: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        self.sent.push(request.to_vec());
        self.timeouts.push(timeout_ms);

        if self.transceive_failures > 0 {
            self.transceive_failures -= 1;
            return Err(Error::Transport("tag was lost".into()));
        }
        if self.responses.is_empty() {
            return Err(Error::Transport("no response queued".into()));
        }
        Ok(self.responses.remove(0))
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;
        Ok(())
    }
}
