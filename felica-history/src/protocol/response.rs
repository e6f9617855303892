// felica-history/src/protocol/response.rs

use crate::constants::{HISTORY_RECORD_LEN, RESPONSE_COUNT_OFFSET, RESPONSE_RECORDS_OFFSET};
use crate::protocol::parser;
use crate::types::HistoryRecord;
use crate::Result;

/// Slice a Read Without Encryption response into its history records.
///
/// Bytes before offset 12 (length, response code, IDm, status flags) are
/// left to the caller. Offset 12 holds the record count N and N 16-byte
/// records follow back to back from offset 13, in the order the card
/// stores them. Trailing bytes past the last record are ignored.
pub fn parse_read_response(response: &[u8]) -> Result<Vec<HistoryRecord>> {
    let count = parser::byte_at(response, RESPONSE_COUNT_OFFSET)? as usize;
    parser::ensure_len(response, RESPONSE_RECORDS_OFFSET + count * HISTORY_RECORD_LEN)?;

    (0..count)
        .map(|i| parser::record_at(response, RESPONSE_RECORDS_OFFSET + i * HISTORY_RECORD_LEN))
        .collect()
}
