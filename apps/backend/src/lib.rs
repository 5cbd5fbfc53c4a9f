//! Marquee Backend Library
//!
//! Core functionality for the Marquee movie lookup service.
//! This library exposes modules for use in integration tests.

use axum::response::Json;
use serde::Serialize;
use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use services::MovieLookup;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn MovieLookup>,
}

impl AppState {
    /// Get a reference to the movie catalog.
    pub fn catalog(&self) -> &dyn MovieLookup {
        self.catalog.as_ref()
    }
}

#[derive(Serialize)]
pub struct ApiResponse {
    pub message: String,
    pub version: String,
}

pub async fn health_check() -> Json<ApiResponse> {
    Json(ApiResponse {
        message: "Marquee Backend is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
