//! xwave HTTP Server Binary
//!
//! Serves the Sesame name-resolution proxy and the coordinate endpoints used
//! by the search UI.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin xwave-server
//!
//! # Point at a different Sesame mirror
//! SESAME_URL=https://vizier.cfa.harvard.edu/viz-bin/nph-sesame/-oI/SNV \
//!   cargo run --bin xwave-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SESAME_URL`: Sesame endpoint
//! - `SESAME_TIMEOUT_SECS`: Upstream timeout (default: 10)
//! - `XWAVE_CONFIG`: Optional TOML file with the same settings
//! - `RUST_LOG`: Log filter directives (default: info)

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use xwave_search::config::ServerConfig;
use xwave_search::http::{create_router, AppState};
use xwave_search::resolver::SesameResolver;

/// `RUST_LOG` directives such as `xwave_search=debug,tower_http=info`;
/// unset or malformed falls back to `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting xwave HTTP Server");

    let config = ServerConfig::from_env()?;
    let resolver = SesameResolver::new(config.sesame_url.clone(), config.sesame_timeout())?;
    info!(sesame_url = %config.sesame_url, "Sesame resolver ready");

    let state = AppState::new(Arc::new(resolver));
    let app = create_router(state);

    let addr = config.bind_address()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
