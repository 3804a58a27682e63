// src/ticker_manager.rs

use crate::config::ProviderConfig;
use crate::daily_bar::DailyBar;
use crate::daily_extractor::DailyExtractor;
use crate::kline_info::KlineInfo;
use crate::movement::movement_string;
use crate::pattern_writer::PatternRecord;
use crate::session::{QuoteTransport, TransportError};

/// Runs the fetch → decode → classify pipeline for one ticker.
pub struct TickerManager {
    pub kline_info: KlineInfo,
    config: ProviderConfig,
}

impl TickerManager {
    pub fn new(kline_info: KlineInfo) -> Self {
        TickerManager {
            kline_info,
            config: ProviderConfig::default(),
        }
    }

    pub fn with_config(kline_info: KlineInfo, config: ProviderConfig) -> Self {
        TickerManager { kline_info, config }
    }

    /// Fetches the ticker's daily bars in the provider's chronological
    /// order (oldest first).
    pub async fn fetch_daily_bars(
        &self,
        transport: &dyn QuoteTransport,
    ) -> Result<Vec<DailyBar>, TransportError> {
        let extractor =
            DailyExtractor::with_config(self.kline_info.clone(), self.config.clone());
        extractor.extract(transport).await
    }

    /// Fetches and classifies the ticker into one aggregate record.
    ///
    /// Returns `None` when the fetch yields no bars; tickers without data
    /// never produce a CSV row.
    pub async fn build_record(
        &self,
        transport: &dyn QuoteTransport,
    ) -> Result<Option<PatternRecord>, TransportError> {
        let bars = self.fetch_daily_bars(transport).await?;
        if bars.is_empty() {
            return Ok(None);
        }

        Ok(Some(PatternRecord {
            code: self.kline_info.code.clone(),
            name: self.kline_info.name.clone(),
            movement_string: movement_string(&bars),
        }))
    }
}
