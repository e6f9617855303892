// felica-history/src/protocol/parser.rs

//! Bounds-checked readers over a borrowed response. Every accessor checks
//! the length first so a short response becomes `MalformedResponse`
//! instead of a panic.

use crate::constants::HISTORY_RECORD_LEN;
use crate::types::HistoryRecord;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::MalformedResponse {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Copy the 16-byte record starting at `start`.
pub fn record_at(data: &[u8], start: usize) -> Result<HistoryRecord> {
    let s = slice_at(data, start, HISTORY_RECORD_LEN)?;
    HistoryRecord::try_from(s)
}
