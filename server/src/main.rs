//! Server entrypoint for BorderPass
//!
//! Wires together all layers: configuration, the questionnaire catalog,
//! the Groq completion gateway, and the HTTP router.

mod cli;
mod routes;
mod state;

use anyhow::{Context, Result};
use borderpass_application::AssistUseCase;
use borderpass_infrastructure::{ConfigLoader, GroqCompletionGateway, builtin_catalog, load_catalog};
use clap::Parser;
use cli::Cli;
use state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let catalog_path = cli.catalog.as_ref().or(config.catalog.path.as_ref());
    let catalog = match catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => builtin_catalog(),
    };

    if cli.print_catalog {
        println!("{}", serde_json::to_string_pretty(catalog.questions())?);
        return Ok(());
    }

    // === Dependency Injection ===
    let mut gateway = GroqCompletionGateway::from_env(&config.assistant.api_key_env)?
        .with_params(config.assistant.params());
    if let Some(base_url) = &config.assistant.base_url {
        gateway = gateway.with_base_url(base_url);
    }

    let assist = AssistUseCase::new(Arc::new(gateway));
    let state = AppState::new(assist, catalog);

    let host = cli.host.unwrap_or(config.server.host);
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("BorderPass listening on {addr}");
    info!(model = %config.assistant.model, "Assistant gateway ready");

    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}
