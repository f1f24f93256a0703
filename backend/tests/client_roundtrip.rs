#![cfg(all(feature = "client", feature = "http-server"))]

mod support;

use std::sync::Arc;
use std::time::Duration;

use janmasethu_tools::api::{
    DueDateRequest, OvulationRequest, PregnancyCheckRequest, PregnancyLikelihood,
    VaccinationRequest,
};
use janmasethu_tools::client::{ClientError, CostEstimateDebouncer, EstimateState, ToolsClient};
use janmasethu_tools::config::ServerConfig;
use janmasethu_tools::http::{create_router, AppState};
use janmasethu_tools::models::{CalendarDate, CycleLength};
use janmasethu_tools::services::FixedClock;

async fn spawn_server(today: &str) -> String {
    let today = CalendarDate::parse(today).unwrap();
    let clock = Arc::new(FixedClock::at_date(today));
    let state = AppState::with_embedded_tables(clock, support::server::ist()).unwrap();
    let app = create_router(state, &ServerConfig::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn date(value: &str) -> CalendarDate {
    CalendarDate::parse(value).unwrap()
}

#[tokio::test]
async fn test_client_calls_every_calculator() {
    let client = ToolsClient::new(&spawn_server("2024-05-17").await)
        .unwrap()
        .with_timeout(Duration::from_secs(5));

    assert_eq!(client.health().await.unwrap().status, "ok");

    let due = client.due_date(&DueDateRequest { lmp: date("2024-01-01") }).await.unwrap();
    assert_eq!(due.due_date, date("2024-10-07"));
    assert_eq!(due.weeks_pregnant, 19);

    let ovulation = client
        .ovulation(&OvulationRequest {
            last_period: date("2024-01-01"),
            cycle_length: CycleLength::new(30).unwrap(),
        })
        .await
        .unwrap();
    assert_eq!(ovulation.ovulation_date, date("2024-01-17"));

    let stages = client
        .vaccination_schedule(&VaccinationRequest { dob: date("2024-01-01") })
        .await
        .unwrap();
    assert_eq!(stages.len(), 11);

    let weeks = client.pregnancy_weeks().await.unwrap();
    assert_eq!(client.pregnancy_week_detail(20).await.unwrap(), weeks[16]);

    let quiz: PregnancyCheckRequest = serde_json::from_str(
        r#"{
            "q1_period": "NO",
            "q2_sex": "NO",
            "q3_spotting": "NO",
            "q4_symptoms": "NONE",
            "q5_test": "NO"
        }"#,
    )
    .unwrap();
    assert_eq!(
        client.pregnancy_check(&quiz).await.unwrap().result,
        PregnancyLikelihood::Unlikely
    );
}

#[tokio::test]
async fn test_client_surfaces_error_status() {
    let client = ToolsClient::new(&spawn_server("2024-05-17").await).unwrap();

    let err = client.pregnancy_week_detail(41).await.unwrap_err();
    match &err {
        ClientError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.api_code().as_deref(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_debouncer_against_server() {
    let client = ToolsClient::new(&spawn_server("2024-05-17").await).unwrap();
    let debouncer = CostEstimateDebouncer::with_quiet_period(client, Duration::from_millis(50));

    let request = serde_json::from_value(serde_json::json!({
        "city_tier": "TIER3",
        "hospital_type": "GOVT",
        "delivery_type": "NORMAL",
        "feeding_type": "BREAST",
        "diapers_per_day": 0,
        "diaper_brand": "BUDGET",
        "wipes_enabled": false,
        "clothing_tier": "BUDGET",
        "health_type": "GOVT",
        "childcare_type": "NONE"
    }))
    .unwrap();
    debouncer.submit(request);

    let mut rx = debouncer.subscribe();
    let state = rx
        .wait_for(|s| matches!(s, EstimateState::Ready(_) | EstimateState::Failed(_)))
        .await
        .unwrap()
        .clone();
    match state {
        // 5000 x 0.75
        EstimateState::Ready(result) => assert_eq!(result.delivery, 3750.0),
        other => panic!("unexpected state {:?}", other),
    }
}
