#[path = "../common/mod.rs"]
mod common;

use felica_history::prelude::*;
use felica_history::transport::MockTransport;

#[test]
fn transport_error_is_propagated_once_and_not_retried() {
    let mut m = MockTransport::with_responses(vec![common::fixtures::response_with_records(1)]);
    m.set_transceive_failures(1);

    let mut reader = HistoryReader::new(
        ReaderConfig {
            block_count: 1,
            ..ReaderConfig::default()
        },
        RawRecordDecoder,
        HistoryCollector::new(),
    );
    let tag = Tag::felica(common::fixtures::sample_idm_bytes());

    match reader.on_tag_discovered(&tag, &mut m) {
        Err(Error::Transport(msg)) => assert!(msg.contains("lost")),
        other => panic!("expected Transport error, got {:?}", other),
    }
    assert_eq!(m.sent.len(), 1);
    assert_eq!(m.closes, 1);

    // The caller decides to retry; the queued response is still there.
    assert_eq!(reader.on_tag_discovered(&tag, &mut m).unwrap(), Some(1));
    assert_eq!(m.sent.len(), 2);
}

#[test]
fn short_response_surfaces_malformed_error() {
    let mut resp = common::fixtures::response_with_records(2);
    resp.truncate(30);
    let mut m = MockTransport::with_responses(vec![resp]);

    let mut reader = HistoryReader::new(
        ReaderConfig {
            block_count: 2,
            ..ReaderConfig::default()
        },
        RawRecordDecoder,
        HistoryCollector::new(),
    );

    let err = reader
        .read(&common::fixtures::sample_idm(), &mut m)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { expected: 45, actual: 30 }));
    assert!(reader.consumer().batches().is_empty());
}
