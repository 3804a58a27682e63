// src/daily_extractor.rs

use chrono::NaiveDate;
use serde_json::Value;

use crate::config::{FieldNames, ProviderConfig};
use crate::daily_bar::DailyBar;
use crate::kline_info::KlineInfo;
use crate::market_code::normalize_market_code;
use crate::session::{QuoteTransport, TransportError};

/// Fetches and decodes one ticker's daily bars for the configured
/// provider.
pub struct DailyExtractor {
    pub kline_info: KlineInfo,
    pub config: ProviderConfig,
}

impl DailyExtractor {
    pub fn new(kline_info: KlineInfo) -> Self {
        DailyExtractor {
            kline_info,
            config: ProviderConfig::default(),
        }
    }

    pub fn with_config(kline_info: KlineInfo, config: ProviderConfig) -> Self {
        DailyExtractor { kline_info, config }
    }

    /// Fetches the raw response over the given transport and decodes it.
    ///
    /// Malformed payloads decode to an empty sequence rather than failing;
    /// only the network call itself can error.
    pub async fn extract(
        &self,
        transport: &dyn QuoteTransport,
    ) -> Result<Vec<DailyBar>, TransportError> {
        let url = UrlBuilder::build(
            &self.config,
            &self.kline_info.code,
            self.kline_info.start_date,
            self.kline_info.end_date,
        );
        let body = transport.fetch(&url).await?;
        Ok(ResponseDecoder::decode(&body, &self.config.field_names))
    }
}

/// Builds the provider request URL from the configured endpoint template.
pub struct UrlBuilder;

impl UrlBuilder {
    /// Normalizes the ticker code, substitutes it into the endpoint
    /// template, and appends the daily-bar query parameters with the
    /// dates in the provider's expected format.
    pub fn build(config: &ProviderConfig, code: &str, start: NaiveDate, end: NaiveDate) -> String {
        let market_code = normalize_market_code(code);
        let endpoint = config.endpoint_template.replace("{code}", &market_code);

        format!(
            "{}?symbol={}&scale={}&ma={}&datalen={}&from={}&to={}",
            endpoint,
            market_code,
            config.scale,
            config.ma_window,
            config.max_records,
            start.format(&config.date_format),
            end.format(&config.date_format),
        )
    }
}

/// Tolerant decoder for the JSONP-wrapped array of daily records.
///
/// The provider wraps a flat JSON array in a callback assignment, so the
/// decoder slices from the first `[` to the last `]` before parsing.
/// Nothing in here fails: a payload that cannot be located or parsed
/// decodes to an empty sequence, malformed numeric fields fall back to
/// zero, and records without a date are dropped.
pub struct ResponseDecoder;

impl ResponseDecoder {
    pub fn decode(raw: &str, fields: &FieldNames) -> Vec<DailyBar> {
        let payload = match Self::payload_slice(raw) {
            Some(payload) => payload,
            None => return Vec::new(),
        };

        let records: Value = match serde_json::from_str(payload) {
            Ok(value) => value,
            Err(_) => return Vec::new(),
        };

        match records.as_array() {
            Some(records) => records
                .iter()
                .filter_map(|record| Self::decode_record(record, fields))
                .collect(),
            None => Vec::new(),
        }
    }

    fn payload_slice(raw: &str) -> Option<&str> {
        let start = raw.find('[')?;
        let end = raw.rfind(']')?;
        if end <= start {
            return None;
        }
        Some(&raw[start..=end])
    }

    fn decode_record(record: &Value, fields: &FieldNames) -> Option<DailyBar> {
        let date = Self::text_field(record, &fields.day);
        if date.is_empty() {
            return None;
        }

        Some(DailyBar {
            date,
            open: Self::decimal_field(record, &fields.open),
            high: Self::decimal_field(record, &fields.high),
            low: Self::decimal_field(record, &fields.low),
            close: Self::decimal_field(record, &fields.close),
            volume: Self::integer_field(record, &fields.volume),
        })
    }

    fn text_field(record: &Value, name: &str) -> String {
        record
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    // Sina sends numbers as quoted strings, but bare numbers are accepted
    // too so a provider change does not silently zero every field.
    fn decimal_field(record: &Value, name: &str) -> f64 {
        match record.get(name) {
            Some(Value::String(text)) => text.parse().unwrap_or(0.0),
            Some(value) => value.as_f64().unwrap_or(0.0),
            None => 0.0,
        }
    }

    fn integer_field(record: &Value, name: &str) -> u64 {
        match record.get(name) {
            Some(Value::String(text)) => text.parse().unwrap_or(0),
            Some(value) => value.as_u64().unwrap_or(0),
            None => 0,
        }
    }
}
