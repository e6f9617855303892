// felica-history/src/prelude.rs

pub use crate::decoder::{RawRecordDecoder, RecordDecoder, decode_records};
pub use crate::protocol::{ReadRequest, build_read_request, parse_read_response};
pub use crate::reader::{
    HistoryCollector, HistoryConsumer, HistoryReader, ReaderBuilder, ReaderConfig, Tag,
    TagTechnology,
};
pub use crate::transport::Transport;
pub use crate::{BlockListElement, Error, HistoryRecord, Idm, Result, ServiceCode};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
