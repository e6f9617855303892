// felica-history/src/decoder.rs

//! Per-record decoding.
//!
//! The layout inside a history record is owned by whoever implements
//! [`RecordDecoder`]; this crate only promises to call it once per record,
//! in card order. A record that fails to decode is logged and skipped so
//! the remaining records still reach the consumer.

use std::fmt::Display;

use log::warn;

use crate::types::HistoryRecord;
use crate::Error;

/// Turns one opaque 16-byte record into something meaningful.
pub trait RecordDecoder {
    type Output;
    type Error: Display;

    fn decode(&self, record: &HistoryRecord) -> Result<Self::Output, Self::Error>;
}

/// Identity decoder: hands the raw record through.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRecordDecoder;

impl RecordDecoder for RawRecordDecoder {
    type Output = HistoryRecord;
    type Error = std::convert::Infallible;

    fn decode(&self, record: &HistoryRecord) -> Result<HistoryRecord, Self::Error> {
        Ok(*record)
    }
}

impl<F, T, E> RecordDecoder for F
where
    F: Fn(&HistoryRecord) -> Result<T, E>,
    E: Display,
{
    type Output = T;
    type Error = E;

    fn decode(&self, record: &HistoryRecord) -> Result<T, E> {
        self(record)
    }
}

/// Decode `records` in order, skipping (and logging) the ones that fail.
pub fn decode_records<D>(decoder: &D, records: &[HistoryRecord]) -> Vec<D::Output>
where
    D: RecordDecoder + ?Sized,
{
    let mut out = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match decoder.decode(record) {
            Ok(decoded) => out.push(decoded),
            Err(e) => {
                let err = Error::RecordDecode {
                    index,
                    reason: e.to_string(),
                };
                warn!("skipping history record {}: {}", record.to_hex(), err);
            }
        }
    }
    out
}
