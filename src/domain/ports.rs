use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Response head and body as handed back by a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub url: String,
    pub body: String,
}

/// Issues GET requests for the records pipeline.
///
/// Timeouts and connection handling belong to the implementation; the
/// pipeline never cancels an in-flight call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<TransportResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
}
