//! Next/previous page discovery.
//!
//! The API exposes no total count, so the page after the current one is
//! fetched and inspected: any records at `offset + PAGE_SIZE` means a next
//! page exists.
//!
//! `next_page` is `offset / PAGE_SIZE + 2`, one more than the page number
//! that follows the current one. Existing callers depend on that value, so it
//! is reported as-is.

use crate::core::query::RequestContext;
use crate::core::request::PAGE_SIZE;
use crate::core::response::resolve;
use crate::domain::ports::Transport;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
}

/// Derive page links from the current offset and whether a next page exists.
pub fn page_links(offset: i64, has_next: bool) -> PageLinks {
    let previous_index = offset.div_euclid(PAGE_SIZE);

    PageLinks {
        previous_page: (previous_index > 0).then_some(previous_index),
        next_page: has_next.then_some(previous_index + 2),
    }
}

/// Fetch the page after `context` and build the links for `context`.
pub async fn probe<T>(transport: &T, context: &RequestContext) -> Result<PageLinks>
where
    T: Transport + ?Sized,
{
    let offset = context.offset();
    let next = context.with_offset(offset.saturating_add(PAGE_SIZE));

    tracing::debug!("Probing next page: {}", next.as_str());
    let next_records = resolve(transport.get(next.url()).await?)?.data()?;
    tracing::debug!("Next page holds {} records", next_records.len());

    Ok(page_links(offset, !next_records.is_empty()))
}
