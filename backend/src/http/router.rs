//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use crate::routes::{
    baby_cost::BABY_COST_PATH, conception::CONCEPTION_PATH, due_date::DUE_DATE_PATH,
    health::HEALTH_PATH, ovulation::OVULATION_PATH, pregnancy_check::PREGNANCY_CHECK_PATH,
    pregnancy_week::{PREGNANCY_WEEKS_PATH, PREGNANCY_WEEK_DETAIL_PATH, PREGNANCY_WEEK_PATH},
    vaccination::VACCINATION_SCHEDULE_PATH, TOOLS_PREFIX,
};

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let tools = Router::new()
        .route(DUE_DATE_PATH, post(handlers::due_date))
        .route(OVULATION_PATH, post(handlers::ovulation))
        .route(CONCEPTION_PATH, post(handlers::conception))
        .route(PREGNANCY_WEEK_PATH, post(handlers::pregnancy_week))
        .route(PREGNANCY_WEEK_DETAIL_PATH, get(handlers::pregnancy_week_detail))
        .route(PREGNANCY_WEEKS_PATH, get(handlers::pregnancy_weeks))
        .route(PREGNANCY_CHECK_PATH, post(handlers::pregnancy_check))
        .route(VACCINATION_SCHEDULE_PATH, post(handlers::vaccination_schedule))
        .route(BABY_COST_PATH, post(handlers::baby_cost));

    Router::new()
        .route(HEALTH_PATH, get(handlers::health_check))
        .nest(TOOLS_PREFIX, tools)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::FixedOffset;

    use crate::services::SystemClock;

    #[test]
    fn test_router_creation() {
        let state = AppState::with_embedded_tables(
            Arc::new(SystemClock),
            FixedOffset::east_opt(330 * 60).unwrap(),
        )
        .unwrap();
        let _router = create_router(state, &ServerConfig::default());
    }

    #[test]
    fn test_router_with_restricted_origins() {
        let state = AppState::with_embedded_tables(
            Arc::new(SystemClock),
            FixedOffset::east_opt(0).unwrap(),
        )
        .unwrap();
        let config = ServerConfig {
            cors_allowed_origins: vec!["https://janmasethu.example".into(), "bad\norigin".into()],
            ..ServerConfig::default()
        };
        let _router = create_router(state, &config);
    }
}
