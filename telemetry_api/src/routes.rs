use crate::models::{HealthStatus, RootResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use telemetry_core::{Result, TelemetryError};
use telemetry_metrics::{MetricsQuery, MetricsReport};
use telemetry_source::{CorsConfig, ServiceConfig};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Builds the service router with tracing, timeout and (optionally) CORS layers.
pub fn build_router(state: AppState, config: &ServiceConfig) -> Result<Router> {
    let mut router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/metrics", post(region_metrics))
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.cors)? {
        router = router.layer(cors);
    }

    Ok(router)
}

fn cors_layer(cors: &CorsConfig) -> Result<Option<CorsLayer>> {
    if !cors.enabled {
        return Ok(None);
    }

    // Wildcard mirrors the caller's origin so credentialed requests still pass.
    if cors.allows_any_origin() {
        return Ok(Some(CorsLayer::very_permissive()));
    }

    let origins = cors
        .allow_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                TelemetryError::InvalidConfig(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    ))
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.message.to_string(),
        available_regions: state.dataset.region_names(),
    })
}

async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(
        state.start_time.elapsed().as_secs(),
        state.dataset.len(),
    ))
}

async fn region_metrics(
    State(state): State<AppState>,
    Json(query): Json<MetricsQuery>,
) -> Json<MetricsReport> {
    debug!(
        "Metrics query for {} regions, threshold {} ms",
        query.regions.len(),
        query.threshold_ms
    );
    Json(query.evaluate(&state.dataset))
}
