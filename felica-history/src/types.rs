// felica-history/src/types.rs

use crate::constants::{BLOCK_LIST_ELEMENT_FLAG, HISTORY_RECORD_LEN, HISTORY_SERVICE_CODE, IDM_LEN};
use crate::Error;
use derive_more::{AsRef, From};

/// IDm - the card's manufacture ID, used to address every command (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, AsRef)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; IDM_LEN]);

impl Idm {
    pub fn from_bytes(bytes: [u8; IDM_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IDM_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; IDM_LEN] = bytes.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "card identifier must be {} bytes, got {}",
                IDM_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// ServiceCode (u16), transmitted little-endian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// Transit history service
    pub const HISTORY: Self = Self(HISTORY_SERVICE_CODE);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// Two-byte block list element.
///
/// The first byte carries the element-length flag, the access mode and the
/// index into the request's service list; the second byte is the block
/// number, so only blocks 0..=255 are addressable in this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockListElement {
    service_index: u8,
    block_number: u8,
}

impl BlockListElement {
    /// Read `block_number` of the first service in the request.
    pub fn read(block_number: u8) -> Self {
        Self {
            service_index: 0,
            block_number,
        }
    }

    pub fn block_number(&self) -> u8 {
        self.block_number
    }

    pub fn encode(&self) -> [u8; 2] {
        [
            BLOCK_LIST_ELEMENT_FLAG | (self.service_index & 0x0f),
            self.block_number,
        ]
    }
}

/// One history record as stored on the card (16 bytes, contents opaque)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, AsRef)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord([u8; HISTORY_RECORD_LEN]);

impl HistoryRecord {
    pub fn from_bytes(bytes: [u8; HISTORY_RECORD_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HISTORY_RECORD_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for HistoryRecord {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; HISTORY_RECORD_LEN] =
            bytes.try_into().map_err(|_| Error::MalformedResponse {
                expected: HISTORY_RECORD_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}
