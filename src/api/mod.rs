//! HTTP front controller: routing, state, templates, and the server runtime.

mod handlers;
mod routes;
mod state;
mod static_assets;
mod templates;


use std::net::IpAddr;

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use routes::create_router;
pub use state::AppState;

/// Server configuration, injected once at process start.
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".parse().unwrap(),
            port: 5000,
        }
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the site server with the given configuration and database.
pub async fn run<D: Database>(config: Config, db: D) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let state = AppState::new(db);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("portfolio server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
