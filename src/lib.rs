// ColBERT v2.0 WebUI - a demo of the late-interaction retrieval workflow

pub mod config;
pub mod demo;
pub mod models;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use types::{AppError, AppResult};

pub fn create_router() -> axum::Router {
    routes::create_router()
}
