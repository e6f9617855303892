// felica-history/src/protocol/mod.rs

pub mod parser;
pub mod request;
pub mod response;

pub use request::{ReadRequest, build_read_request, encode_read};
pub use response::parse_read_response;
