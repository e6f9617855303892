#[path = "../common/mod.rs"]
mod common;

use felica_history::prelude::*;
use felica_history::test_support::mock_with_responses;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn read_history_via_mock_transport() -> anyhow::Result<()> {
    init_logger();
    let mut transport = mock_with_responses(vec![common::fixtures::response_with_records(2)]);

    let mut reader = ReaderBuilder::new()
        .with_block_count(2)
        .with_decoder(RawRecordDecoder)
        .with_consumer(HistoryCollector::<HistoryRecord>::new())
        .build()?;

    let delivered = reader.read(&common::fixtures::sample_idm(), &mut transport)?;
    assert_eq!(delivered, 2);

    let sent = transport.pop_sent().expect("request was sent");
    assert_eq!(sent, parse_hex(common::fixtures::TWO_BLOCK_REQUEST_HEX)?);

    let batches = reader.into_consumer().into_batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(
        batches[0],
        vec![
            common::fixtures::sample_record(0x10),
            common::fixtures::sample_record(0x20)
        ]
    );
    Ok(())
}

#[test]
fn decoder_failures_skip_only_the_bad_record() -> anyhow::Result<()> {
    init_logger();
    let mut transport = mock_with_responses(vec![common::fixtures::response_with_records(3)]);

    // Rejects the record that starts with 0x20
    let decoder = |r: &HistoryRecord| -> std::result::Result<u8, String> {
        match r.as_bytes()[0] {
            0x20 => Err("unrecognised record type".to_string()),
            b => Ok(b),
        }
    };

    let mut received = Vec::new();
    let mut reader = HistoryReader::new(
        ReaderConfig {
            block_count: 3,
            ..ReaderConfig::default()
        },
        decoder,
        |records: Vec<u8>| received.push(records),
    );

    let delivered = reader.read(&common::fixtures::sample_idm(), &mut transport)?;
    assert_eq!(delivered, 2);
    drop(reader);
    assert_eq!(received, vec![vec![0x10, 0x30]]);
    Ok(())
}

#[test]
fn empty_history_is_delivered_as_empty_batch() -> anyhow::Result<()> {
    let mut transport = mock_with_responses(vec![common::fixtures::response_with_records(0)]);
    let mut reader = ReaderBuilder::new()
        .with_block_count(0)
        .with_decoder(RawRecordDecoder)
        .with_consumer(HistoryCollector::<HistoryRecord>::new())
        .build()?;

    assert_eq!(reader.read(&common::fixtures::sample_idm(), &mut transport)?, 0);
    assert_eq!(reader.consumer().batches().len(), 1);
    assert!(reader.consumer().batches()[0].is_empty());
    Ok(())
}
