// src/session.rs

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use thiserror::Error;

use crate::config::DEFAULT_USER_AGENT;

lazy_static! {
    static ref SINGLETON_SESSION: SinaHistorySession = SinaHistorySession::new();
}

/// Network-level failure while fetching a quote response. Callers recover
/// at the per-ticker boundary: log, skip the ticker, continue.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(reqwest::StatusCode),
}

/// Transport seam between the extractor and the network. The production
/// implementation is [`SinaHistorySession`]; tests substitute a stub.
#[async_trait]
pub trait QuoteTransport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, TransportError>;
}

pub struct SinaHistorySession {
    client: Client,
}

impl SinaHistorySession {
    fn new() -> Self {
        SinaHistorySession {
            client: Client::new(),
        }
    }

    /// Process-wide session sharing one HTTP client across all fetches.
    pub fn shared() -> &'static SinaHistorySession {
        &SINGLETON_SESSION
    }

    pub async fn send_request(url: &str) -> Result<String, TransportError> {
        Self::shared().fetch(url).await
    }
}

#[async_trait]
impl QuoteTransport for SinaHistorySession {
    async fn fetch(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.text().await?)
    }
}
