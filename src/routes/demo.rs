//! Demo API
//!
//! - POST /api/model/load - simulated model load
//! - POST /api/retrieve - placeholder retrieval report
//! - GET /api/index/status - index status text

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::demo;
use crate::models::{RetrieveRequest, RetrieveResponse, StatusResponse};
use crate::types::AppResult;

pub fn router() -> Router {
    Router::new()
        .route("/api/model/load", post(load_model))
        .route("/api/retrieve", post(retrieve))
        .route("/api/index/status", get(index_status))
}

async fn load_model() -> Json<StatusResponse> {
    info!("Model load requested (demo mode)");

    Json(StatusResponse {
        status: demo::load_model().to_string(),
    })
}

async fn retrieve(
    payload: Result<Json<RetrieveRequest>, JsonRejection>,
) -> AppResult<Json<RetrieveResponse>> {
    let Json(request) = payload?;
    let query = request.query();

    info!(
        query_chars = query.chars().count(),
        top_k = ?request.top_k,
        "Retrieve requested"
    );

    Ok(Json(RetrieveResponse {
        output: demo::retrieve(query, request.top_k()),
    }))
}

async fn index_status() -> Json<StatusResponse> {
    info!("Index status requested");

    Json(StatusResponse {
        status: demo::index_status().to_string(),
    })
}
