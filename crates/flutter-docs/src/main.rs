mod config;
mod error;
mod pages;
mod server;
mod web;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::FlutterDocsServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting flutter-docs");

    let config = Config::from_env()?;
    info!(
        catalog = config.catalog_path.as_deref().unwrap_or("built-in"),
        http_addr = config.http_addr.as_deref().unwrap_or("disabled"),
        mcp = !config.disable_mcp,
        "configuration loaded"
    );

    let store = Arc::new(config.load_store()?);
    info!(
        categories = store.categories().len(),
        documents = store.document_count(),
        "document store ready"
    );

    let site = config.http_addr.clone().map(|addr| {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            web::serve(&addr, store).await.inspect_err(|e| {
                tracing::error!(error = %e, "documentation site error");
            })
        })
    });

    if config.disable_mcp {
        if let Some(site) = site {
            site.await??;
        }
        return Ok(());
    }

    let server = FlutterDocsServer::new(store);

    if let Some(addr) = config.mcp_tcp_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
