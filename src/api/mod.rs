//! # HTTP API
//!
//! Serves the question router over HTTP.
//!
//! ## Endpoints
//!
//! - `POST /v1/ask` - Answer a question; the client sends its conversation
//!   history and receives it back with the new turns appended
//! - `GET /health` - Dataset size and fallback status
//!
//! ## Example
//!
//! ```no_run
//! use vitalis::api::{create_router, AppState};
//! use vitalis::config::FallbackConfig;
//! use vitalis::dataset::Dataset;
//! use vitalis::fallback::OpenRouterClient;
//! use vitalis::router::QuestionRouter;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = Arc::new(Dataset::load(Path::new("LifeExpectancy.csv"))?);
//! let fallback = OpenRouterClient::from_config(
//!     &FallbackConfig::default(),
//!     Arc::new(reqwest::Client::new()),
//! );
//! let router = Arc::new(QuestionRouter::new(dataset, Arc::new(fallback)));
//!
//! let app = create_router(Arc::new(AppState::new(router)));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8501").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallback failures are not HTTP errors: the answer text carries the
//! `Erro na API: ` prefix and the source is `fallback_error`. Only malformed
//! requests are rejected:
//! ```json
//! {
//!   "error": {
//!     "message": "question must not be empty",
//!     "type": "invalid_request_error",
//!     "code": "invalid_request_error"
//!   }
//! }
//! ```

mod ask;
mod health;
pub mod types;

pub use types::*;

use crate::router::QuestionRouter;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (1 MB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub router: Arc<QuestionRouter>,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(router: Arc<QuestionRouter>) -> Self {
        Self {
            router,
            start_time: Instant::now(),
        }
    }
}

/// Create the API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/ask", post(ask::handle))
        .route("/health", get(health::handle))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
