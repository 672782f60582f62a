pub mod classify;
pub mod pagination;
pub mod query;
pub mod records;
pub mod request;
pub mod response;

pub use crate::domain::model::{ClassifiedRecord, PageResult, RawRecord, RequestOptions};
pub use crate::domain::ports::{ConfigProvider, Transport, TransportResponse};
pub use crate::utils::error::Result;
