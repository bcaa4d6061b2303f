use anyhow::Context;
use brave_search::WebSearchService;
use clap::Parser;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, tower::StreamableHttpService,
};
use rmcp::transport::{stdio, StreamableHttpServerConfig};
use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod routes;
mod services;
mod tools;

use config::{Args, Command};
use services::BraveSearchClient;
use tools::BraveSearchTools;

/// Name reported by the health route and MCP server info
pub const SERVICE_NAME: &str = "mcp-brave-search";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the stdio protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = Arc::new(
        BraveSearchClient::new(args.api_key.clone(), args.timeout())
            .context("Failed to configure Brave Search client")?,
    );
    info!(
        timeout_secs = client.timeout().as_secs(),
        "Brave Search client configured"
    );

    let result = match args.command() {
        Command::Stdio => serve_stdio(Arc::clone(&client)).await,
        Command::Serve { listen } => serve_http(Arc::clone(&client), listen).await,
        Command::Check => check_connection(&client).await,
    };

    client.close().await;
    result
}

async fn serve_stdio(client: Arc<BraveSearchClient>) -> anyhow::Result<()> {
    info!("Running in stdio mode");

    let running = BraveSearchTools::new(client)
        .serve(stdio())
        .await
        .context("Failed to start MCP stdio transport")?;

    let reason = running
        .waiting()
        .await
        .context("MCP stdio session ended abnormally")?;
    info!(reason = ?reason, "MCP stdio session closed");
    Ok(())
}

async fn serve_http(client: Arc<BraveSearchClient>, listen: SocketAddr) -> anyhow::Result<()> {
    let tools = BraveSearchTools::new(client);
    let mcp_service = StreamableHttpService::new(
        move || Ok(tools.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    let app = routes::health::router()
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind {listen}"))?;
    info!(address = %listen, "Running in HTTP mode (MCP at /mcp, health at /health)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn check_connection(client: &BraveSearchClient) -> anyhow::Result<()> {
    let status = client.test_connection().await;
    println!("{}", serde_json::to_string_pretty(&status)?);

    if !status.success {
        anyhow::bail!(
            "Brave Search connection check failed: {}",
            status.error.unwrap_or_default()
        );
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
