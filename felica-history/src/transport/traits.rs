// felica-history/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the physical link (NFC-F tag handle, USB
/// reader, ...) away from the protocol code. It only moves whole frames.
pub trait Transport {
    /// Open the link to the card. Default implementation does nothing, for
    /// transports that are connected when created.
    fn connect(&mut self) -> Result<()> {
        Ok(())
    }

    /// Send one request frame and return the card's response frame.
    fn transceive(&mut self, request: &[u8], timeout_ms: u64) -> Result<Vec<u8>>;

    /// Release the link. Default implementation does nothing.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
