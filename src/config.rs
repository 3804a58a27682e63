// src/config.rs

/// User-Agent sent with every provider request. Sina rejects requests
/// without a browser-like agent string.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Sina K-line history endpoint. `{code}` is replaced with the normalized
/// market-prefixed ticker code; the code appears both in the JSONP callback
/// variable and in the `symbol` query parameter.
pub const SINA_KLINE_ENDPOINT: &str =
    "https://quotes.sina.cn/cn/api/jsonp_v2.php/var%20_{code}_day_data=%20/CN_MarketDataService.getKLineData";

/// Names of the record fields in the provider payload.
#[derive(Debug, Clone)]
pub struct FieldNames {
    pub day: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            day: "day".to_string(),
            open: "open".to_string(),
            high: "high".to_string(),
            low: "low".to_string(),
            close: "close".to_string(),
            volume: "volume".to_string(),
        }
    }
}

/// Provider-specific request and payload configuration.
///
/// The defaults target the Sina K-line service; tests and alternate
/// providers substitute their own values instead of patching constants.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint_template: String,
    pub date_format: String,
    /// Bar granularity in minutes; 240 selects daily bars.
    pub scale: u32,
    /// Moving-average window requested alongside the bars.
    pub ma_window: u32,
    /// Maximum number of records the provider may return.
    pub max_records: u32,
    pub field_names: FieldNames,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            endpoint_template: SINA_KLINE_ENDPOINT.to_string(),
            date_format: "%Y-%m-%d".to_string(),
            scale: 240,
            ma_window: 5,
            max_records: 60,
            field_names: FieldNames::default(),
        }
    }
}
