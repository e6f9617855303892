//! Test support helpers intended for use by unit and integration tests.
//!
//! These build card responses the way a FeliCa card frames them so tests
//! across the crate and tests/ directory don't each hand-assemble bytes.
#![allow(dead_code)]

use crate::constants::{CMD_READ_WITHOUT_ENCRYPTION, HISTORY_RECORD_LEN};
use crate::transport::mock::MockTransport;
use crate::types::Idm;

/// Build a successful Read Without Encryption response carrying `records`:
/// len(1) + response code(1) + idm(8) + status1(1) + status2(1) + count(1)
/// + records(N*16).
#[doc(hidden)]
pub fn history_response(idm: &Idm, records: &[[u8; HISTORY_RECORD_LEN]]) -> Vec<u8> {
    let mut resp = vec![0u8];
    resp.push(CMD_READ_WITHOUT_ENCRYPTION + 1);
    resp.extend_from_slice(idm.as_bytes());
    resp.push(0x00); // status flag 1
    resp.push(0x00); // status flag 2
    resp.push(records.len() as u8);
    for r in records {
        resp.extend_from_slice(r);
    }
    resp[0] = resp.len() as u8;
    resp
}

/// Build a MockTransport pre-seeded with the given responses.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    MockTransport::with_responses(responses)
}
