// Request and response bodies for the JSON API

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetrieveRequest {
    #[serde(default)]
    pub query: Option<String>,
    /// Taken as-is from the client. Only finite JSON numbers count as a
    /// Top-K value, everything else falls back to the default.
    #[serde(default)]
    pub top_k: serde_json::Value,
}

impl RetrieveRequest {
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    pub fn top_k(&self) -> Option<f64> {
        self.top_k.as_f64()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieveResponse {
    pub output: String,
}

/// Body for the model-load and index-status endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub mode: String,
    pub version: String,
    pub timestamp: String,
}
