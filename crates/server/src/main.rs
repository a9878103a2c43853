//! SoulChat BaZi Server - Production Bootstrap

use tracing::{error, info};

use soulchat_server::api_router::create_api_router;
use soulchat_server::bootstrap::{init_tracing, initialize_server, load_config, log_config_summary};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_tracing(&config.logging)?;
    info!("🚀 Starting SoulChat BaZi Server v{}", env!("CARGO_PKG_VERSION"));

    log_config_summary(&config);
    let server_components = initialize_server(config);

    let bind_address = server_components.config.server.bind_address();
    let app = create_api_router(server_components);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("✅ Server listening on http://{}", bind_address);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    if let Err(e) = server.await {
        error!("❌ HTTP server error: {}", e);
        return Err(e.into());
    }

    info!("✅ Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Received Ctrl-C, initiating graceful shutdown..."),
        Err(err) => {
            error!("Failed to listen for Ctrl-C signal: {}", err);
            std::future::pending::<()>().await
        }
    }
}
