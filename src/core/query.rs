//! Query-string serialization for record requests.
//!
//! List values are expanded into repeated `color[]` pairs whatever the field
//! is called; the `/records` API only accepts that key for list filters.
//! The rendered URL is carried forward in a [`RequestContext`] so later stages
//! can recover the offset of the request they follow up on.

use crate::core::request::{QueryValue, RequestDescriptor};
use crate::utils::error::Result;
use url::Url;

/// Key every list element is emitted under.
pub const ARRAY_KEY: &str = "color[]";

const OFFSET_KEY: &str = "offset";

/// The fully rendered URL of one request in a `retrieve` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    url: Url,
}

impl RequestContext {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Decoded query pairs, in order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// The last `offset` value in the query; missing or unparsable is 0.
    pub fn offset(&self) -> i64 {
        self.url
            .query_pairs()
            .filter(|(k, _)| k == OFFSET_KEY)
            .last()
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(0)
    }

    /// Same request with every `offset` pair replaced by one trailing `offset`.
    pub fn with_offset(&self, offset: i64) -> Self {
        let retained: Vec<(String, String)> = self
            .pairs()
            .into_iter()
            .filter(|(k, _)| k != OFFSET_KEY)
            .collect();

        let mut url = self.url.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair(OFFSET_KEY, &offset.to_string());

        Self { url }
    }
}

/// Flatten descriptor fields into ordered key/value pairs.
pub fn expand_entries<K: AsRef<str>>(entries: &[(K, QueryValue)]) -> Vec<(String, String)> {
    entries
        .iter()
        .flat_map(|(key, value)| match value {
            QueryValue::Scalar(v) => vec![(key.as_ref().to_string(), v.clone())],
            QueryValue::List(values) => values
                .iter()
                .map(|v| (ARRAY_KEY.to_string(), v.clone()))
                .collect(),
        })
        .collect()
}

pub fn serialize(descriptor: &RequestDescriptor) -> Result<RequestContext> {
    let mut url = Url::parse(&descriptor.url)?;
    let pairs = expand_entries(&descriptor.options.entries());

    url.query_pairs_mut().extend_pairs(pairs);

    Ok(RequestContext::new(url))
}
