use crate::domain::model::{ColorFilter, RequestOptions};

/// Number of records requested per page; also the offset stride.
pub const PAGE_SIZE: i64 = 10;

/// A query field value before serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

/// API-shaped options derived from [`RequestOptions`].
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorOptions {
    pub limit: i64,
    pub colors: Option<ColorFilter>,
    pub offset: i64,
}

impl DescriptorOptions {
    /// Fields in query order: `limit`, `colors` (when present), `offset`.
    pub fn entries(&self) -> Vec<(&'static str, QueryValue)> {
        let mut entries = vec![("limit", QueryValue::Scalar(self.limit.to_string()))];

        match &self.colors {
            Some(ColorFilter::Single(color)) => {
                entries.push(("colors", QueryValue::Scalar(color.clone())))
            }
            Some(ColorFilter::Multiple(colors)) => {
                entries.push(("colors", QueryValue::List(colors.clone())))
            }
            None => {}
        }

        entries.push(("offset", QueryValue::Scalar(self.offset.to_string())));
        entries
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub options: DescriptorOptions,
    pub url: String,
}

/// Offset of the first record on `page`.
///
/// `None`, `0` and `1` all map to the first page. Other values are not
/// validated, so a negative page yields a negative offset.
pub fn offset_for_page(page: Option<i64>) -> i64 {
    match page {
        Some(page) if page != 0 && page != 1 => page.saturating_sub(1).saturating_mul(PAGE_SIZE),
        _ => 0,
    }
}

pub fn build_request(options: &RequestOptions, url: &str) -> RequestDescriptor {
    RequestDescriptor {
        options: DescriptorOptions {
            limit: PAGE_SIZE,
            colors: options.colors.clone(),
            offset: offset_for_page(options.page),
        },
        url: url.to_string(),
    }
}
