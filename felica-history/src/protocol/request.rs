// felica-history/src/protocol/request.rs

use crate::constants::{
    BLOCK_LIST_ELEMENT_LEN, CMD_READ_WITHOUT_ENCRYPTION, MAX_BLOCK_COUNT, MAX_FRAME_LEN,
    READ_REQUEST_HEADER_LEN,
};
use crate::types::{BlockListElement, Idm, ServiceCode};
use crate::{Error, Result};

/// A complete Read Without Encryption request, ready for the transport.
///
/// Byte 0 always holds the total frame length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest(Vec<u8>);

impl ReadRequest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl AsRef<[u8]> for ReadRequest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Encode a single-service Read Without Encryption frame (command code 0x06).
///
/// Layout: len(1) + cmd(1) + idm(8) + service_count(1) + service(2, LE)
/// + block_count(1) + blocks(N*2)
pub fn encode_read(
    idm: &Idm,
    service: ServiceCode,
    blocks: &[BlockListElement],
) -> Result<ReadRequest> {
    let total = READ_REQUEST_HEADER_LEN + blocks.len() * BLOCK_LIST_ELEMENT_LEN;
    if total > MAX_FRAME_LEN {
        return Err(Error::InvalidInput(format!(
            "request of {} blocks is {} bytes, frame limit is {}",
            blocks.len(),
            total,
            MAX_FRAME_LEN
        )));
    }

    let mut buf = Vec::with_capacity(total);
    buf.push(0); // length, patched below
    buf.push(CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    buf.push(1); // one service
    buf.extend_from_slice(&service.to_le_bytes());
    buf.push(blocks.len() as u8);
    for blk in blocks {
        buf.extend_from_slice(&blk.encode());
    }

    buf[0] = buf.len() as u8;
    Ok(ReadRequest(buf))
}

/// Build the history read request: blocks `0..block_count` of the history
/// service for the card identified by `card_identifier`.
pub fn build_read_request(card_identifier: &[u8], block_count: usize) -> Result<ReadRequest> {
    let idm = Idm::try_from(card_identifier)?;

    if block_count > MAX_BLOCK_COUNT {
        return Err(Error::InvalidInput(format!(
            "block count {} exceeds the maximum of {}",
            block_count, MAX_BLOCK_COUNT
        )));
    }

    let blocks: Vec<BlockListElement> = (0..block_count as u8)
        .map(BlockListElement::read)
        .collect();

    encode_read(&idm, ServiceCode::HISTORY, &blocks)
}
