//! HTTP Routes
//!
//! - `/` - the demo page
//! - `/api/model/load`, `/api/retrieve`, `/api/index/status` - handlers bound to the page's buttons
//! - `/api/health` - health check

pub mod demo;
pub mod health;
pub mod ui;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Create the application router
pub fn create_router() -> Router {
    info!("Creating application router");

    Router::new()
        .merge(ui::router())
        .merge(demo::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
}
