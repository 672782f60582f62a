use crate::config::toml_config::{TomlConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::core::records::DEFAULT_ENDPOINT;
use crate::core::{ConfigProvider, RequestOptions};
use crate::utils::error::Result;
use crate::utils::validation::{validate_min, validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "managed-records")]
#[command(about = "Fetch one page of records and print the page summary as JSON")]
pub struct CliConfig {
    #[arg(long, help = "Records endpoint [default: http://localhost:3000/records]")]
    pub endpoint: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Color filters, sent as color[] pairs")]
    pub colors: Vec<String>,

    #[arg(long, conflicts_with = "colors", help = "A single color, sent as a scalar filter")]
    pub single_color: Option<String>,

    #[arg(long, help = "1-indexed page number")]
    pub page: Option<i64>,

    #[arg(long, help = "Request timeout in seconds [default: 30]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML file with [client] and [logging] sections")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fill connection settings not given on the command line from a
    /// config file's `[client]` section. Explicit flags always win.
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if self.endpoint.is_none() {
            self.endpoint = file.client.endpoint.clone();
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = file.client.timeout_seconds;
        }
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn request_options(&self) -> RequestOptions {
        let mut options = RequestOptions::new();
        if let Some(color) = &self.single_color {
            options = options.with_color(color.clone());
        } else if !self.colors.is_empty() {
            options = options.with_colors(self.colors.iter().cloned());
        }
        if let Some(page) = self.page {
            options = options.with_page(page);
        }
        options
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", self.endpoint())?;
        validate_min("timeout_seconds", self.timeout_seconds(), 1)?;
        if let Some(page) = self.page {
            validate_min("page", page, 1)?;
        }
        for color in self.colors.iter().chain(self.single_color.iter()) {
            validate_non_empty_string("colors", color)?;
        }
        Ok(())
    }
}
