//! HTTP API Layer
//!
//! This crate provides the REST API for the quote toolkit using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Quote validation, quote images, reference data, health
//! - **Middleware**: Tracing, CORS, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses with per-field details
//!
//! Every image request builds its own generator, and with it its own
//! canvas, so concurrent requests never share a drawing surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(config, Some(painter));
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use core_kernel::ReferenceData;
use infra_render::{RenderSettings, TextPainter};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{health, quotes, reference};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    /// Text painter for quote images; `None` until fonts are loaded
    pub painter: Option<Arc<dyn TextPainter>>,
    pub reference: ReferenceData,
    pub settings: RenderSettings,
}

impl AppState {
    /// Creates state with the standard reference data
    pub fn new(config: ApiConfig, painter: Option<Arc<dyn TextPainter>>) -> Self {
        let settings = config.render_settings();
        Self {
            config,
            painter,
            reference: ReferenceData::standard(),
            settings,
        }
    }

    /// Replaces the render settings
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Quote routes
    let quote_routes = Router::new()
        .route("/validate", post(quotes::validate_quote))
        .route("/image", post(quotes::render_quote_image));

    // Reference data routes
    let reference_routes = Router::new()
        .route("/", get(reference::get_reference_data))
        .route("/:name", get(reference::get_lookup_table));

    let api_routes = Router::new()
        .nest("/quotes", quote_routes)
        .nest("/reference-data", reference_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
