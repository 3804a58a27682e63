// src/ticker_manager_pool.rs

use std::path::Path;

use crate::kline_info::KlineInfo;
use crate::pattern_writer::{PatternWriter, WriteError, WriteMode};
use crate::session::QuoteTransport;
use crate::ticker_manager::TickerManager;

/// Drives the per-ticker pipeline across a batch and accumulates the
/// aggregate pattern CSV.
///
/// Tickers are processed strictly in caller order, one fetch at a time;
/// the provider throttles aggressively enough that fanning out buys
/// nothing here.
pub struct TickerManagerPool {
    ticker_managers: Vec<TickerManager>,
}

impl TickerManagerPool {
    pub fn new(kline_infos: Vec<KlineInfo>) -> Self {
        let ticker_managers = kline_infos.into_iter().map(TickerManager::new).collect();
        TickerManagerPool { ticker_managers }
    }

    /// Fetches every ticker and appends one row per ticker with data to
    /// the aggregate file at `path`.
    ///
    /// The first successful record truncates the file and writes the
    /// header; fetch failures and empty results are logged and skipped, so
    /// the header still lands exactly once even when early tickers fail.
    /// Only a file-write failure aborts the batch.
    ///
    /// Returns (rows written, tickers skipped).
    pub async fn write_pattern_csv(
        &self,
        transport: &dyn QuoteTransport,
        path: &Path,
    ) -> Result<(usize, usize), WriteError> {
        let mut mode = WriteMode::FirstWrite;
        let mut written = 0;
        let mut skipped = 0;

        for manager in &self.ticker_managers {
            let info = &manager.kline_info;
            println!("fetching daily bars for {} ({})...", info.code, info.name);

            match manager.build_record(transport).await {
                Ok(Some(record)) => {
                    PatternWriter::append_record(path, &record, mode)?;
                    mode = WriteMode::Append;
                    written += 1;
                }
                Ok(None) => {
                    println!("no data for {}, skipping", info.code);
                    skipped += 1;
                }
                Err(error) => {
                    eprintln!("failed to fetch {}: {}", info.code, error);
                    skipped += 1;
                }
            }
        }

        Ok((written, skipped))
    }
}
