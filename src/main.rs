use anyhow::Context;
use clap::Parser;
use managed_records::utils::{logger, validation::Validate};
use managed_records::{CliConfig, RecordsClient, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    let file_config = match &config.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?,
        ),
        None => None,
    };

    let log_level = file_config.as_ref().and_then(|c| c.log_level());
    if config.json_logs {
        logger::init_json_logger(config.verbose, log_level);
    } else {
        logger::init_cli_logger(config.verbose, log_level);
    }

    if let Some(file_config) = &file_config {
        file_config.validate().context("invalid config file")?;
        config.apply_file(file_config);
    }

    tracing::info!("Starting managed-records");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = RecordsClient::from_config(&config).context("failed to build HTTP client")?;
    let options = config.request_options();

    match client.retrieve(&options).await {
        Some(result) => {
            tracing::info!(
                "Retrieved {} records from {}",
                result.ids.len(),
                client.endpoint()
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        None => {
            eprintln!("No records retrieved from {}", client.endpoint());
            std::process::exit(1);
        }
    }

    Ok(())
}
