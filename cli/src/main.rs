//! veriflow — run a collected verification record through the pipeline.

mod logging;

use std::path::{Path, PathBuf};

use clap::Parser;
use veriflow_decision::aggregate;
use veriflow_dispatch::Dispatcher;
use veriflow_gateway::{GatewayConfig, SigningGateway};
use veriflow_types::{DecisionStatus, VerificationRecord};

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(name = "veriflow", about = "Identity verification pipeline")]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "VERIFLOW_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "VERIFLOW_LOG_FORMAT")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Verify a collected record against the provider endpoints.
    Verify {
        /// Path to the record JSON file.
        #[arg(long)]
        record: PathBuf,

        /// Path to a TOML configuration file. Environment variables
        /// override file values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the provider base URL.
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(LogFormat::parse(&cli.log_format), &cli.log_level);

    let code = match cli.command {
        Command::Verify {
            record,
            config,
            base_url,
        } => run_verify(&record, config.as_deref(), base_url).await,
    };
    std::process::exit(code);
}

/// Exit codes: 0 verified, 1 review/failed, 2 configuration or record error.
async fn run_verify(
    record_path: &Path,
    config_path: Option<&Path>,
    base_url: Option<String>,
) -> i32 {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            // Detail stays in the operator log; the caller gets a
            // generic message so credential state never leaks.
            tracing::error!("configuration error: {e}");
            eprintln!("Server configuration error.");
            return 2;
        }
    };
    if let Some(url) = base_url {
        config.base_url = url;
    }

    let record = match load_record(record_path) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Invalid record: {e}");
            return 2;
        }
    };

    let gateway = match SigningGateway::new(config) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            eprintln!("Server configuration error.");
            return 2;
        }
    };

    let outcomes = Dispatcher::new(gateway).dispatch(&record).await;
    let decision = aggregate(&outcomes);

    println!(
        "{}",
        serde_json::to_string_pretty(&decision).expect("decision serializes to JSON")
    );

    match decision.status {
        DecisionStatus::Verified => 0,
        DecisionStatus::ManualReview | DecisionStatus::Failed => 1,
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GatewayConfig> {
    let config = match path {
        Some(path) => {
            let config = GatewayConfig::from_toml_file(&path.to_string_lossy())?;
            tracing::info!("loaded config from {}", path.display());
            config
        }
        None => GatewayConfig::default(),
    };
    Ok(config.apply_env())
}

fn load_record(path: &Path) -> anyhow::Result<VerificationRecord> {
    let content = std::fs::read_to_string(path)?;
    let record: VerificationRecord = serde_json::from_str(&content)?;
    record.validate().map_err(anyhow::Error::from)?;
    Ok(record)
}
