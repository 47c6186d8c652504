//! fundi - command-line client for the fundi contractor marketplace.
//!
//! This is a thin presentation layer over the `fundi-http` client: every
//! subcommand maps onto one backend call, and the session survives between
//! invocations via a file-backed store.

mod cli;
mod commands;
mod output;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use fundi_core::BaseUrl;
use fundi_http::ApiClient;

use cli::{Cli, Commands};
use commands::{assignments, auth, categories, contractors, requests, reviews, wallet};
use store::FileStore;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let client = api_client(cli.api.as_deref())?;

    match cli.command {
        Commands::Auth(cmd) => auth::handle(cmd, &client).await,
        Commands::Categories(cmd) => categories::handle(cmd, &client).await,
        Commands::Requests(cmd) => requests::handle(cmd, &client).await,
        Commands::Contractors(cmd) => contractors::handle(cmd, &client).await,
        Commands::Assignments(cmd) => assignments::handle(cmd, &client).await,
        Commands::Wallet(cmd) => wallet::handle(cmd, &client).await,
        Commands::Reviews(cmd) => reviews::handle(cmd, &client).await,
    }
}

/// Build the API client from the flag, the environment, or the default.
fn api_client(api_flag: Option<&str>) -> Result<ApiClient> {
    let base = match api_flag {
        Some(url) => url.to_string(),
        None => std::env::var("FUNDI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
    };
    let base = BaseUrl::new(&base).with_context(|| format!("Invalid backend URL '{}'", base))?;
    let store = Arc::new(FileStore::default_location()?);

    Ok(ApiClient::new(base, store))
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
