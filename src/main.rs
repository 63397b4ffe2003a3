mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::api::{SalesApi, SalesApiClient};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::ENVIRONMENT_VAR;
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the sales dashboard
    Start {
        /// Base URL of the sales API, or "local"
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print flow events and the loaded widgets instead of opening the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Paint a background color behind the dashboard
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Print a single transaction
    Transaction {
        /// ID of the transaction to fetch
        #[arg(long, value_name = "ID")]
        id: u64,

        /// Base URL of the sales API, or "local"
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Save the sales API URL in the config file
    SetApi {
        /// Base URL of the sales API, or "local"
        #[arg(long, value_name = "URL")]
        url: String,
    },
    /// Delete the config file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            headless,
            with_background,
        } => {
            let environment = resolve_environment(api_url)?;
            let session = setup_session(environment);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Transaction { id, api_url } => {
            let environment = resolve_environment(api_url)?;
            print_transaction(environment, id).await
        }
        Command::SetApi { url } => {
            // Validate before writing anything
            let environment: Environment = url.parse()?;
            let config_path = get_config_path()?;
            Config::new(url)
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("API saved", "{}", environment.api_url());
            Ok(())
        }
        Command::ClearConfig => {
            let config_path = get_config_path()?;
            print_cmd_info!("Clearing config", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Picks the backend: flag, then environment variable, then config file, then local.
///
/// The home directory is only looked up when the config file is consulted.
fn resolve_environment(api_url: Option<String>) -> Result<Environment, Box<dyn Error>> {
    if let Some(url) = api_url {
        return url.parse::<Environment>().map_err(Into::into);
    }

    if let Ok(value) = std::env::var(ENVIRONMENT_VAR) {
        if !value.is_empty() {
            match value.parse::<Environment>() {
                Ok(environment) => return Ok(environment),
                Err(e) => print_cmd_warn!(
                    "Ignoring environment variable",
                    "{}: {}",
                    ENVIRONMENT_VAR,
                    e
                ),
            }
        }
    }

    let config_path = match get_config_path() {
        Ok(path) => path,
        Err(e) => {
            print_cmd_warn!("Skipping config file", "{}", e);
            return Ok(Environment::default());
        }
    };
    if config_path.exists() {
        let from_config = Config::load_from_file(&config_path)
            .map_err(|e| e.to_string())
            .and_then(|config| config.environment());
        match from_config {
            Ok(environment) => return Ok(environment),
            Err(e) => print_cmd_warn!("Ignoring config file", "{}", e),
        }
    }

    Ok(Environment::default())
}

/// Fetches and prints one transaction.
async fn print_transaction(environment: Environment, id: u64) -> Result<(), Box<dyn Error>> {
    let client = SalesApiClient::new(environment);
    match client.get_transaction(id).await {
        Ok(record) => {
            print_cmd_success!("Transaction", "{}", id);
            print!("{}", record);
            Ok(())
        }
        Err(e) if e.status() == Some(404) => {
            print_cmd_error!("Transaction not found", &id.to_string());
            Err(format!("transaction {} not found", id).into())
        }
        Err(e) => {
            print_cmd_error!("Failed to fetch transaction", &e.to_string());
            Err(e.into())
        }
    }
}
