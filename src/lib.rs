// src/lib.rs

pub mod config;
pub mod daily_bar;
pub mod daily_extractor;
pub mod kline_info;
pub mod market_code;
pub mod movement;
pub mod pattern_writer;
pub mod session;

mod ticker_manager;
mod ticker_manager_pool;

pub use session::SinaHistorySession;
pub use session::{QuoteTransport, TransportError};

pub use config::ProviderConfig;
pub use daily_bar::DailyBar;
pub use daily_extractor::DailyExtractor;
pub use kline_info::KlineInfo;
pub use market_code::normalize_market_code;
pub use movement::{movement_string, MovementCode};
pub use pattern_writer::{PatternRecord, PatternWriter, WriteError, WriteMode};
pub use ticker_manager::TickerManager;
pub use ticker_manager_pool::TickerManagerPool;
