// felica-history/src/lib.rs

//! felica-history
//!
//! Builds FeliCa "Read Without Encryption" requests for the transit history
//! service and slices the card's answer into 16-byte history records.
#![warn(missing_docs)]

pub mod constants;
pub mod decoder;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are reachable without the module path.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
