// felica-history/src/constants.rs
//! Protocol constants for the Read Without Encryption exchange

/// FeliCa "Read Without Encryption" command code
pub const CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;

/// Length of a FeliCa manufacture ID (IDm) in bytes
pub const IDM_LEN: usize = 8;

/// Suica-style transaction history service, sent little-endian as 0x0f 0x09
pub const HISTORY_SERVICE_CODE: u16 = 0x090f;

/// Block list element flag: 2-byte element, access mode "read", service index 0
pub const BLOCK_LIST_ELEMENT_FLAG: u8 = 0x80;

/// Length byte + command code + IDm + service count + service code + block count
pub const READ_REQUEST_HEADER_LEN: usize = 1 + 1 + IDM_LEN + 1 + 2 + 1;

/// Size of one 2-byte block list element
pub const BLOCK_LIST_ELEMENT_LEN: usize = 2;

/// Size of one history record (one FeliCa data block)
pub const HISTORY_RECORD_LEN: usize = 16;

/// Offset of the record count in a read response
pub const RESPONSE_COUNT_OFFSET: usize = 12;

/// Offset of the first record in a read response
pub const RESPONSE_RECORDS_OFFSET: usize = 13;

/// Both frames carry their own length in a single byte
pub const MAX_FRAME_LEN: usize = 255;

/// Largest block count whose response (13 + 16 * n bytes) still fits in a frame
pub const MAX_BLOCK_COUNT: usize = (MAX_FRAME_LEN - RESPONSE_RECORDS_OFFSET) / HISTORY_RECORD_LEN;

/// Number of history blocks requested when the caller does not say otherwise
pub const DEFAULT_BLOCK_COUNT: usize = 10;

/// Transceive timeout in milliseconds when the caller does not set one
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;
