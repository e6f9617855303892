// felica-history/src/reader/mod.rs

//! Composes the request builder, a transport, the response parser and a
//! record decoder into one history read, delivering the result to a
//! consumer.

use log::{debug, error, info, warn};

use crate::decoder::{RecordDecoder, decode_records};
use crate::protocol::{build_read_request, parse_read_response};
use crate::transport::Transport;
use crate::types::Idm;
use crate::utils::bytes_to_hex;
use crate::Result;

mod builder;
mod config;
mod consumer;
mod tag;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use consumer::{HistoryCollector, HistoryConsumer};
pub use tag::{Tag, TagTechnology};

/// Reads the transaction history of FeliCa cards handed to it.
pub struct HistoryReader<D, C> {
    config: ReaderConfig,
    decoder: D,
    consumer: C,
}

impl<D, C> HistoryReader<D, C>
where
    D: RecordDecoder,
    C: HistoryConsumer<D::Output>,
{
    pub fn new(config: ReaderConfig, decoder: D, consumer: C) -> Self {
        Self {
            config,
            decoder,
            consumer,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn into_consumer(self) -> C {
        self.consumer
    }

    /// Read `config.block_count` history blocks from the card at `idm`.
    ///
    /// The transport is closed after the exchange whether or not it
    /// succeeded. Returns the number of decoded records handed to the
    /// consumer; records the decoder rejects are logged and left out.
    pub fn read(&mut self, idm: &Idm, transport: &mut dyn Transport) -> Result<usize> {
        let request = build_read_request(idm.as_bytes(), self.config.block_count)?;
        info!("req:{}", request.to_hex());

        transport.connect()?;
        let exchanged = transport.transceive(request.as_bytes(), self.config.timeout_ms);
        if let Err(e) = transport.close() {
            warn!("closing transport for {} failed: {}", idm.to_hex(), e);
        }
        let response = exchanged?;
        info!("res:{}", bytes_to_hex(&response));

        let records = parse_read_response(&response)?;
        debug!("card {} returned {} history records", idm.to_hex(), records.len());

        let decoded = decode_records(&self.decoder, &records);
        let delivered = decoded.len();
        self.consumer.on_history(decoded);
        Ok(delivered)
    }

    /// Entry point for a platform tag-discovery callback.
    ///
    /// Tags without FeliCa support are ignored (`Ok(None)`). Failures are
    /// logged and returned; nothing is retried.
    pub fn on_tag_discovered(
        &mut self,
        tag: &Tag,
        transport: &mut dyn Transport,
    ) -> Result<Option<usize>> {
        info!("New tag discovered: {}", bytes_to_hex(tag.id()));

        if !tag.supports(TagTechnology::NfcF) {
            warn!(
                "tag {} is not FeliCa ({:?}), ignoring",
                bytes_to_hex(tag.id()),
                tag.technologies()
            );
            return Ok(None);
        }

        let outcome = Idm::try_from(tag.id()).and_then(|idm| self.read(&idm, transport));
        match outcome {
            Ok(n) => Ok(Some(n)),
            Err(e) => {
                error!("history read from tag {} failed: {}", bytes_to_hex(tag.id()), e);
                Err(e)
            }
        }
    }
}
