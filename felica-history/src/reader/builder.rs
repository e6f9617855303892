// felica-history/src/reader/builder.rs

use crate::decoder::RecordDecoder;
use crate::reader::{HistoryConsumer, HistoryReader, ReaderConfig};
use crate::{Error, Result};

/// Helper to construct a `HistoryReader` with optional configuration.
pub struct ReaderBuilder<D, C> {
    config: ReaderConfig,
    decoder: Option<D>,
    consumer: Option<C>,
}

impl<D, C> Default for ReaderBuilder<D, C> {
    fn default() -> Self {
        Self {
            config: ReaderConfig::default(),
            decoder: None,
            consumer: None,
        }
    }
}

impl<D, C> ReaderBuilder<D, C>
where
    D: RecordDecoder,
    C: HistoryConsumer<D::Output>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_block_count(mut self, block_count: usize) -> Self {
        self.config.block_count = block_count;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn with_decoder(mut self, decoder: D) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn with_consumer(mut self, consumer: C) -> Self {
        self.consumer = Some(consumer);
        self
    }

    /// Validate the configuration and return the reader. Decoder and
    /// consumer are both required.
    pub fn build(self) -> Result<HistoryReader<D, C>> {
        self.config.validate()?;
        let decoder = self
            .decoder
            .ok_or_else(|| Error::InvalidInput("no record decoder configured".into()))?;
        let consumer = self
            .consumer
            .ok_or_else(|| Error::InvalidInput("no history consumer configured".into()))?;
        Ok(HistoryReader::new(self.config, decoder, consumer))
    }
}
