//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. JSON and path extraction failures are turned into `BAD_REQUEST`
//! responses instead of axum's plain-text rejections.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use super::dto::{
    BabyCostRequest, BabyCostResult, ConceptionRequest, ConceptionResult, DueDateRequest,
    DueDateResult, HealthResponse, OvulationRequest, OvulationResult, PregnancyCheckRequest,
    PregnancyCheckResult, PregnancyWeekData, PregnancyWeekRequest, PregnancyWeekResult,
    VaccinationRequest, VaccinationStage,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// JSON body that rejects into [`AppError`].
type JsonBody<T> = Result<Json<T>, JsonRejection>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Pregnancy dates
// =============================================================================

/// POST /api/tools/due-date
pub async fn due_date(
    State(state): State<AppState>,
    payload: JsonBody<DueDateRequest>,
) -> HandlerResult<DueDateResult> {
    let Json(request) = payload?;
    Ok(Json(services::due_date_summary(request.lmp, state.today())))
}

/// POST /api/tools/ovulation
pub async fn ovulation(payload: JsonBody<OvulationRequest>) -> HandlerResult<OvulationResult> {
    let Json(request) = payload?;
    Ok(Json(services::ovulation_window(
        request.last_period,
        request.cycle_length,
    )))
}

/// POST /api/tools/conception-calculator
pub async fn conception(
    payload: JsonBody<ConceptionRequest>,
) -> HandlerResult<ConceptionResult> {
    let Json(request) = payload?;
    Ok(Json(services::conception_window(
        request.date,
        request.kind,
        request.cycle_length,
        request.is_irregular,
        request.due_date_confidence,
    )))
}

// =============================================================================
// Week by week
// =============================================================================

/// POST /api/tools/pregnancy-week
pub async fn pregnancy_week(
    State(state): State<AppState>,
    payload: JsonBody<PregnancyWeekRequest>,
) -> HandlerResult<PregnancyWeekResult> {
    let Json(request) = payload?;
    let today = state.today();
    Ok(Json(state.pregnancy_weeks.week_for_reference(
        request.reference_date,
        request.kind,
        today,
    )))
}

/// GET /api/tools/pregnancy-week/{week}
///
/// 404 for any integer week outside the table, negative ones included.
pub async fn pregnancy_week_detail(
    State(state): State<AppState>,
    week: Result<Path<i64>, PathRejection>,
) -> HandlerResult<PregnancyWeekData> {
    let Path(week) = week?;
    u32::try_from(week)
        .ok()
        .and_then(|week| state.pregnancy_weeks.lookup(week))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no data for pregnancy week {}", week)))
}

/// GET /api/tools/pregnancy-weeks
pub async fn pregnancy_weeks(
    State(state): State<AppState>,
) -> HandlerResult<Vec<PregnancyWeekData>> {
    Ok(Json(state.pregnancy_weeks.all().to_vec()))
}

// =============================================================================
// Screening and planning
// =============================================================================

/// POST /api/tools/am-i-pregnant
pub async fn pregnancy_check(
    payload: JsonBody<PregnancyCheckRequest>,
) -> HandlerResult<PregnancyCheckResult> {
    let Json(request) = payload?;
    Ok(Json(services::assess_pregnancy_check(&request)))
}

/// POST /api/tools/vaccination-schedule
pub async fn vaccination_schedule(
    State(state): State<AppState>,
    payload: JsonBody<VaccinationRequest>,
) -> HandlerResult<Vec<VaccinationStage>> {
    let Json(request) = payload?;
    Ok(Json(state.vaccination.build(request.dob, state.today())))
}

/// POST /api/tools/baby-cost-calculator
pub async fn baby_cost(
    State(state): State<AppState>,
    payload: JsonBody<BabyCostRequest>,
) -> HandlerResult<BabyCostResult> {
    let Json(request) = payload?;
    let result = services::estimate_baby_cost(&request, &state.pricing)?;
    Ok(Json(result))
}
