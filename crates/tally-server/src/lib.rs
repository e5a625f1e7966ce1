//! Tally Web Server
//!
//! Axum-based REST API around the Tally analysis core. The server holds no
//! data: every request carries the expenses (and budgets) to analyze.
//!
//! - Restrictive CORS policy
//! - Request tracing
//! - Panics inside handlers become 500 responses
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use tally_core::{BudgetConfig, Config, SuggestionConfig, SuggestionEngine};

mod handlers;

/// Server configuration
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Suggestion engine thresholds
    pub suggestions: SuggestionConfig,
    /// Budget status thresholds
    pub budgets: BudgetConfig,
}

impl ServerConfig {
    /// Build from the loaded Tally configuration
    pub fn from_config(config: &Config, allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            suggestions: config.suggestions.clone(),
            budgets: config.budgets.clone(),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
    pub suggestions: SuggestionEngine,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let suggestions = SuggestionEngine::with_config(config.suggestions.clone());
        Self {
            config,
            suggestions,
        }
    }
}

/// Parse a comma-separated list of CORS origins
pub fn parse_allowed_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Create the application router
pub fn create_router(config: ServerConfig) -> Router {
    let cors = build_cors(&config.allowed_origins);
    let state = Arc::new(AppState::new(config));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/suggestions", post(handlers::suggestions))
        .route("/report", post(handlers::report))
        .route("/report/monthly", post(handlers::monthly_report))
        .route("/budgets/status", post(handlers::budget_status))
        .route("/dashboard", post(handlers::dashboard))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        cors
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Render a handler panic as a sanitized 500
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Handler panicked");

    AppError::internal("An internal error occurred").into_response()
}

/// Start the server
pub async fn serve(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM, whichever comes first
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::debug!("Received ctrl+c signal"),
        _ = terminate => tracing::debug!("Received terminate signal"),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map an error from request parsing
    ///
    /// A missing key uses `missing_message`; other input errors keep their
    /// own text. Anything else is an internal error.
    pub fn from_request(err: tally_core::Error, missing_message: &str) -> Self {
        match err {
            tally_core::Error::MissingField(field) => {
                warn!(field, "Request missing required field");
                Self::bad_request(missing_message)
            }
            err if err.is_client_error() => {
                warn!(error = %err, "Invalid request");
                Self::bad_request(&err.to_string())
            }
            err => err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
