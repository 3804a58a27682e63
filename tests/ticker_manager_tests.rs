// tests/ticker_manager_tests.rs

use std::collections::HashMap;
use std::fs;

use async_trait::async_trait;
use chrono::NaiveDate;
use sinaextract::{
    KlineInfo, QuoteTransport, TickerManager, TickerManagerPool, TransportError,
};

/// Canned transport keyed by the normalized code embedded in the URL.
/// Unknown codes fail the way a broken provider connection would.
struct StubTransport {
    responses: HashMap<String, String>,
}

impl StubTransport {
    fn new(responses: Vec<(&str, String)>) -> Self {
        StubTransport {
            responses: responses
                .into_iter()
                .map(|(code, body)| (code.to_string(), body))
                .collect(),
        }
    }
}

#[async_trait]
impl QuoteTransport for StubTransport {
    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        for (code, body) in &self.responses {
            if url.contains(code.as_str()) {
                return Ok(body.clone());
            }
        }
        Err(TransportError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ))
    }
}

/// Builds a JSONP body with one record per (open, close) pair.
fn kline_body(code: &str, pairs: &[(f64, f64)]) -> String {
    let records = pairs
        .iter()
        .enumerate()
        .map(|(i, (open, close))| {
            format!(
                r#"{{"day":"2024-05-{:02}","open":"{}","high":"{}","low":"{}","close":"{}","volume":"1000000"}}"#,
                i + 1,
                open,
                open.max(*close),
                open.min(*close),
                close
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    format!("var _{}_day_data= ([{}]);", code, records)
}

fn may_info(code: &str, name: &str) -> KlineInfo {
    KlineInfo::new(
        code,
        name,
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
    )
}

#[tokio::test]
async fn test_ticker_manager_builds_pattern_record() {
    let body = kline_body(
        "sh600000",
        &[(100.0, 105.0), (100.0, 90.0), (100.0, 110.0), (100.0, 100.0)],
    );
    let transport = StubTransport::new(vec![("sh600000", body)]);

    let manager = TickerManager::new(may_info("600000", "浦发银行"));
    let record = manager.build_record(&transport).await.unwrap().unwrap();

    // The record keeps the caller-supplied code, not the normalized one.
    assert_eq!(record.code, "600000");
    assert_eq!(record.name, "浦发银行");
    assert_eq!(record.movement_string, "1020");
}

#[tokio::test]
async fn test_ticker_manager_fetches_bars_in_payload_order() {
    let body = kline_body("sh600519", &[(10.0, 11.0), (11.0, 10.5)]);
    let transport = StubTransport::new(vec![("sh600519", body)]);

    let manager = TickerManager::new(may_info("sh600519", "贵州茅台"));
    let bars = manager.fetch_daily_bars(&transport).await.unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].date, "2024-05-01");
    assert_eq!(bars[1].date, "2024-05-02");
}

#[tokio::test]
async fn test_ticker_manager_empty_payload_yields_no_record() {
    let transport = StubTransport::new(vec![("sh600000", "var _sh600000_day_data= ([]);".to_string())]);

    let manager = TickerManager::new(may_info("600000", "浦发银行"));
    let record = manager.build_record(&transport).await.unwrap();

    assert!(record.is_none());
}

#[tokio::test]
async fn test_ticker_manager_propagates_transport_failure() {
    let transport = StubTransport::new(vec![]);

    let manager = TickerManager::new(may_info("600000", "浦发银行"));
    let result = manager.build_record(&transport).await;

    assert!(matches!(result, Err(TransportError::Status(_))));
}

#[tokio::test]
async fn test_pool_writes_one_header_and_skips_failed_tickers() {
    // First ticker fails, so the header must come from the second.
    let transport = StubTransport::new(vec![
        ("sz000001", kline_body("sz000001", &[(10.0, 10.5), (10.5, 10.0)])),
        ("sh600519", kline_body("sh600519", &[(100.0, 120.0)])),
    ]);

    let infos = vec![
        may_info("600000", "浦发银行"),
        may_info("000001", "平安银行"),
        may_info("sh600519", "贵州茅台"),
    ];
    let pool = TickerManagerPool::new(infos);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.csv");
    let (written, skipped) = pool.write_pattern_csv(&transport, &path).await.unwrap();

    assert_eq!(written, 2);
    assert_eq!(skipped, 1);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "股票代码,股票名称,涨跌字符串");
    assert_eq!(lines[1], "000001,平安银行,10");
    assert_eq!(lines[2], "sh600519,贵州茅台,2");
}

#[tokio::test]
async fn test_pool_with_no_successful_tickers_writes_nothing() {
    let transport = StubTransport::new(vec![]);

    let infos = KlineInfo::create_kline_infos(
        vec![
            ("600000".to_string(), "浦发银行".to_string()),
            ("000001".to_string(), "平安银行".to_string()),
        ],
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
    );
    let pool = TickerManagerPool::new(infos);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.csv");
    let (written, skipped) = pool.write_pattern_csv(&transport, &path).await.unwrap();

    assert_eq!(written, 0);
    assert_eq!(skipped, 2);
    assert!(!path.exists());
}
