//! API request and response types

use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Health-check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub timestamp: String,
    pub features: HealthFeatures,
}

/// Feature flags reported by the health check
#[derive(Debug, Serialize)]
pub struct HealthFeatures {
    pub chat: bool,
    pub fallback: bool,
    pub deepseek: bool,
}
