pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::http::ReqwestTransport;
pub use crate::core::records::RecordsClient;
pub use crate::domain::model::{ClassifiedRecord, ColorFilter, PageResult, RawRecord, RequestOptions};
pub use crate::utils::error::{ErrorKind, RecordsError, Result};
