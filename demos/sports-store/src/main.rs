// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sports store server.
//!
//! ```bash
//! SPORTS_STORE_ADDR=127.0.0.1:3000 RUST_LOG=debug cargo run -p sports-store
//! ```

use sports_store::{config::AppConfig, domain::Catalog, web};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sports_store=debug,scaffold_core=debug"))
        )
        .init();

    let config = AppConfig::from_env()?;
    let catalog = Catalog::seeded();
    let app = web::router(&catalog, &config)?.layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "sports store listening");
    axum::serve(listener, app).await?;

    Ok(())
}
