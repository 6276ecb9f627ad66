use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use widgetz::api::{WidgetPaths, WidgetzApi};
use widgetz::config::{ConfigOverrides, WidgetzConfig};
use widgetz::error::{Result, WidgetzError};
use widgetz::server;
use widgetz::store::fs::FileStore;
use widgetz::store::memory::InMemoryStore;

mod args;
use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "widgetz failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("widgetz=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = resolve_config_dir(cli.config_dir)?;

    match cli.command {
        Commands::Serve(args) => {
            let config = load_config(&config_dir, args.into())?;
            handle_serve(config).await
        }
        Commands::Config(args) => {
            let config = load_config(&config_dir, args.into())?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
            Ok(())
        }
        Commands::Init => {
            let path = WidgetzConfig::default().save(&config_dir)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    ProjectDirs::from("com", "widgetz", "widgetz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| WidgetzError::Config("Could not determine config dir".to_string()))
}

fn load_config(config_dir: &Path, overrides: ConfigOverrides) -> Result<WidgetzConfig> {
    let config = WidgetzConfig::load(config_dir)?.with_overrides(overrides);
    tracing::debug!(config_dir = %config_dir.display(), ?config, "configuration loaded");
    Ok(config)
}

async fn handle_serve(config: WidgetzConfig) -> Result<()> {
    let paths = WidgetPaths::new(&config.base_path);
    let listener = TcpListener::bind(config.bind_addr.as_str())
        .await
        .map_err(WidgetzError::Io)?;

    match config.data_file {
        Some(data_file) => {
            tracing::info!(data_file = %data_file.display(), "using file store");
            let api = WidgetzApi::new(FileStore::new(data_file), paths);
            server::serve(api, listener, config.compat_routes, shutdown_signal()).await
        }
        None => {
            tracing::warn!("no data file configured, widgets are kept in memory only");
            let api = WidgetzApi::new(InMemoryStore::new(), paths);
            server::serve(api, listener, config.compat_routes, shutdown_signal()).await
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
