use crate::domain::model::RawRecord;
use crate::domain::ports::TransportResponse;
use crate::utils::error::{RecordsError, Result};

/// A successful response whose body has not been decoded yet.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub headers: Vec<(String, String)>,
    pub status: u16,
    pub status_text: String,
    pub url: String,
    body: String,
}

impl RawResponse {
    /// Decode the body as a list of records.
    pub fn data(&self) -> Result<Vec<RawRecord>> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Accept 2xx responses and reject everything else.
pub fn resolve(response: TransportResponse) -> Result<RawResponse> {
    if !(200..300).contains(&response.status) {
        return Err(RecordsError::HttpStatus {
            status: response.status,
            status_text: response.status_text,
            url: response.url,
        });
    }

    tracing::debug!("Resolved {} {} from {}", response.status, response.status_text, response.url);

    Ok(RawResponse {
        headers: response.headers,
        status: response.status,
        status_text: response.status_text,
        url: response.url,
        body: response.body,
    })
}
