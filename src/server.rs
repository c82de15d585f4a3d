//! HTTP surface: health check plus describe/image routes for every tier.

use crate::generation::GenerationService;
use crate::models::{DescribeRequest, DescribeResult, HealthResponse, ImageRequest, ImageResult};
use crate::tier::Tier;
use crate::{Error, Result};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub generation: Arc<GenerationService>,
}

impl AppState {
    pub fn new(generation: GenerationService) -> Self {
        Self {
            generation: Arc::new(generation),
        }
    }
}

/// Failure of any generation route.
///
/// Renders as `500 Internal Server Error` with the original message as a
/// plain-text body, whatever the underlying cause.
#[derive(Debug)]
pub struct ApiError(String);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0).into_response()
    }
}

/// Build the router. Routes are registered per entry of [`Tier::ALL`], with
/// the tier bound by the path rather than the request body.
pub fn create_app(state: AppState) -> Router {
    let mut router = Router::new().route("/health", get(health_handler));

    for tier in Tier::ALL {
        router = router
            .route(
                &format!("/{}/describe", tier),
                post(
                    move |state: State<AppState>, body: Json<DescribeRequest>| {
                        describe_handler(tier, state, body)
                    },
                ),
            )
            .route(
                &format!("/{}/image", tier),
                post(move |state: State<AppState>, body: Json<ImageRequest>| {
                    image_handler(tier, state, body)
                }),
            );
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn describe_handler(
    tier: Tier,
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> std::result::Result<Json<DescribeResult>, ApiError> {
    state
        .generation
        .describe(tier, &request)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("{} describe failed: {}", tier, e);
            ApiError::from(e)
        })
}

async fn image_handler(
    tier: Tier,
    State(state): State<AppState>,
    Json(request): Json<ImageRequest>,
) -> std::result::Result<Json<ImageResult>, ApiError> {
    state
        .generation
        .image(tier, &request)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("{} image failed: {}", tier, e);
            ApiError::from(e)
        })
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Gift card API listening on {}", listener.local_addr()?);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
