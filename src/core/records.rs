use crate::adapters::http::ReqwestTransport;
use crate::core::classify::summarize;
use crate::core::pagination::probe;
use crate::core::query::serialize;
use crate::core::request::build_request;
use crate::core::response::resolve;
use crate::domain::model::{PageResult, RequestOptions};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::Result;

/// Default `/records` endpoint used by [`RecordsClient::with_default_endpoint`].
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/records";

pub struct RecordsClient<T: Transport> {
    transport: T,
    endpoint: String,
}

impl RecordsClient<ReqwestTransport> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::new(transport, config.endpoint()))
    }
}

impl<T: Transport> RecordsClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn with_default_endpoint(transport: T) -> Self {
        Self::new(transport, DEFAULT_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one page from the configured endpoint.
    ///
    /// Failures are logged and yield `None`, so "no result" and "request
    /// failed" look the same here. Use [`Self::try_retrieve`] to tell them apart.
    pub async fn retrieve(&self, options: &RequestOptions) -> Option<PageResult> {
        self.retrieve_from(options, &self.endpoint).await
    }

    pub async fn retrieve_from(&self, options: &RequestOptions, url: &str) -> Option<PageResult> {
        match self.try_retrieve_from(options, url).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!("Failed to retrieve records from {}: {} ({:?})", url, e, e.kind());
                None
            }
        }
    }

    pub async fn try_retrieve(&self, options: &RequestOptions) -> Result<PageResult> {
        self.try_retrieve_from(options, &self.endpoint).await
    }

    pub async fn try_retrieve_from(&self, options: &RequestOptions, url: &str) -> Result<PageResult> {
        let descriptor = build_request(options, url);
        let context = serialize(&descriptor)?;

        tracing::debug!("Requesting records: {}", context.as_str());
        let first = resolve(self.transport.get(context.url()).await?)?;

        // Decoding the first page and probing the next one are independent.
        let (records, links) = tokio::join!(async { first.data() }, probe(&self.transport, &context));
        let records = records?;
        let links = links?;

        let summary = summarize(&records);
        tracing::debug!(
            "Retrieved {} records ({} open, {} closed primary)",
            summary.ids.len(),
            summary.open.len(),
            summary.closed_primary_count
        );

        Ok(PageResult {
            ids: summary.ids,
            open: summary.open,
            closed_primary_count: summary.closed_primary_count,
            previous_page: links.previous_page,
            next_page: links.next_page,
        })
    }
}
