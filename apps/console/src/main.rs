use console::cli::Cli;
use console::commands::Context;
use console::error::ConsoleError;
use console::logger::{initialize as LoggerInitialize, level_for_verbosity};

use access_core::ConsoleClient;
use access_core::config::env::try_load_dotenv;
use access_core::config::{ClientConfig, default_config_dir};
use access_core::credential::{CredentialStore, FileCredentialStore};
use access_core::router::{NavigationState, RouteGuard, RouteTable};
use access_core::transport::LogNotifier;

use std::fs::create_dir_all;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if !matches!(e, ConsoleError::Rejected { .. }) {
                eprintln!("{e}");
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<(), ConsoleError> {
    let env_file = try_load_dotenv();

    let config_dir = cli
        .config_dir
        .clone()
        .or_else(default_config_dir)
        .ok_or_else(|| ConsoleError::console("Cannot determine a config directory; pass --config-dir"))?;

    let mut config = ClientConfig::load(&config_dir)?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }

    let storage_dir = config.storage_dir()?;
    create_dir_all(&storage_dir).map_err(|e| {
        ConsoleError::console(format!(
            "Failed to create {}: {e}",
            storage_dir.display()
        ))
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&storage_dir, level_for_verbosity(cli.verbose))?;
    env_file.log();
    info!("Config directory: {}", config_dir.display());
    info!("Storage directory: {}", storage_dir.display());

    let credentials: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::open(&storage_dir)?);
    let navigator = Arc::new(NavigationState::default());

    let client = ConsoleClient::from_config(
        &config,
        credentials.clone(),
        Arc::new(LogNotifier),
        navigator.clone(),
    )?;
    let guard = RouteGuard::new(RouteTable::default(), credentials);
    let context = Context::new(client, guard, navigator);

    let result = context.run(cli.command).await;
    info!("Finished on route {}", context.current_route());

    if let Err(ConsoleError::Rejected {
        category: "unauthorized",
        ..
    }) = &result
    {
        warn!("Session expired; log in again with `sau-console login`");
    }

    println!("{}", result?);
    Ok(())
}
