#[path = "../common/mod.rs"]
mod common;

use felica_history::constants::MAX_BLOCK_COUNT;
use felica_history::protocol::build_read_request;
use felica_history::utils::parse_hex;
use felica_history::Error;

#[test]
fn two_block_request_matches_wire_dump() {
    let req = build_read_request(&common::fixtures::sample_idm_bytes(), 2).unwrap();
    let expected = parse_hex(common::fixtures::TWO_BLOCK_REQUEST_HEX).unwrap();
    assert_eq!(req.as_bytes(), &expected[..]);
    assert_eq!(req.as_bytes()[0], 0x12);
}

#[test]
fn request_length_tracks_block_count() {
    let idm = common::fixtures::sample_idm_bytes();
    for n in 0..=MAX_BLOCK_COUNT {
        let req = build_read_request(&idm, n).unwrap();
        assert_eq!(req.len(), 14 + 2 * n);
        assert_eq!(req.as_bytes()[0] as usize, req.len());
        assert_eq!(req.as_bytes()[1], 0x06);
    }
}

#[test]
fn default_history_request_is_ten_blocks() {
    let req = build_read_request(
        &common::fixtures::sample_idm_bytes(),
        felica_history::constants::DEFAULT_BLOCK_COUNT,
    )
    .unwrap();
    assert_eq!(req.len(), 34);
    assert_eq!(req.as_bytes()[13], 10);
    assert_eq!(&req.as_bytes()[32..], &[0x80, 0x09]);
}

#[test]
fn invalid_arguments_yield_no_frame() {
    let idm = common::fixtures::sample_idm_bytes();
    assert!(matches!(
        build_read_request(&idm[..6], 2),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        build_read_request(&idm, MAX_BLOCK_COUNT + 1),
        Err(Error::InvalidInput(_))
    ));
}
