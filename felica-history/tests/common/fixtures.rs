// fixtures.rs: commonly used identifiers, records and card responses

use felica_history::test_support::history_response;
use felica_history::types::{HistoryRecord, Idm};

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

/// Record whose first byte is `fill` and the rest counts up from it, so
/// neighbouring records never compare equal by accident.
pub fn sample_record_bytes(fill: u8) -> [u8; 16] {
    let mut r = [0u8; 16];
    for (i, b) in r.iter_mut().enumerate() {
        *b = fill.wrapping_add(i as u8);
    }
    r
}

pub fn sample_record(fill: u8) -> HistoryRecord {
    HistoryRecord::from_bytes(sample_record_bytes(fill))
}

/// Full card response with `n` records filled 0x10, 0x20, ...
pub fn response_with_records(n: usize) -> Vec<u8> {
    let records: Vec<[u8; 16]> = (0..n)
        .map(|i| sample_record_bytes(((i + 1) * 0x10) as u8))
        .collect();
    history_response(&sample_idm(), &records)
}

/// Expected request for `sample_idm()` and two blocks.
pub const TWO_BLOCK_REQUEST_HEX: &str = "12 06 0102030405060708 01 0F09 02 8000 8001";
