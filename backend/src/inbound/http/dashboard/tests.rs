//! Handler tests for dashboard endpoints.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockCashFlowQuery;
use crate::domain::{Error, UserId};
use crate::inbound::http::routes::configure;
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::{in_memory_state, unused_ports};
use crate::test_support::fixture_now;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};

fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(|cfg| configure(cfg, 4096))
}

fn with_query(query: MockCashFlowQuery) -> HttpState {
    HttpState::new(HttpStatePorts {
        cash_flow: Arc::new(query),
        ..unused_ports()
    })
}

async fn read(res: ServiceResponse) -> (StatusCode, Value) {
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

#[rstest]
#[case("/api/dashboard/abc")]
#[case("/api/transactions/0")]
#[case("/api/insights/-1")]
#[case("/api/health/1.5")]
#[case("/api/team/x")]
#[case("/api/alerts/none")]
#[actix_web::test]
async fn non_numeric_user_ids_are_not_found(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(with_query(MockCashFlowQuery::new()))).await;

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let (status, body) = read(res).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn transactions_report_total() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;
    let register = actix_test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"name": "A", "email": "a@x.com", "company": "Co", "password": "p"}))
        .to_request();
    assert!(actix_test::call_service(&app, register).await.status().is_success());

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/transactions/1").to_request(),
    )
    .await;
    let (status, body) = read(res).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 10);
    let first = &body["transactions"][0];
    assert_eq!(first["date"], fixture_now().date_naive().to_string());
    assert!(first["type"].is_string());
    assert!(first.get("userId").is_none());
}

#[rstest]
#[case(json!({"userId": 1}), 6)]
#[case(json!({"userId": "1", "monthsAhead": 2}), 2)]
#[actix_web::test]
async fn forecast_passes_horizon_to_the_query(#[case] payload: Value, #[case] months: u32) {
    let mut query = MockCashFlowQuery::new();
    query
        .expect_forecast()
        .withf(move |request| {
            request.user_id == UserId::new(1) && request.horizon().ok() == Some(months)
        })
        .times(1)
        .return_once(|_| {
            Ok(ForecastReport {
                forecast: Vec::new(),
                generated_at: fixture_now(),
                confidence: 0.95,
            })
        });
    let app = actix_test::init_service(test_app(with_query(query))).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/forecast")
        .set_json(payload)
        .to_request();
    let (status, body) = read(actix_test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["confidence"], 0.95);
}

#[actix_web::test]
async fn forecast_for_unknown_user_is_not_found_even_with_bad_horizon() {
    let app = actix_test::init_service(test_app(in_memory_state())).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/forecast")
        .set_json(json!({"userId": 42, "monthsAhead": 0}))
        .to_request();
    let (status, body) = read(actix_test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn forecast_without_user_id_is_rejected() {
    let app = actix_test::init_service(test_app(with_query(MockCashFlowQuery::new()))).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/forecast")
        .set_json(json!({"monthsAhead": 0}))
        .to_request();
    let (status, body) = read(actix_test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: userId");
}

#[actix_web::test]
async fn team_reports_total() {
    let mut query = MockCashFlowQuery::new();
    query.expect_team().times(1).return_once(|_| {
        Ok(vec![TeamMember {
            id: 1,
            name: "Sarah Chen",
            email: "sarah.chen@cashflowpro.io",
            role: "Chief Financial Officer",
        }])
    });
    let app = actix_test::init_service(test_app(with_query(query))).await;

    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/api/team/1").to_request())
            .await;
    let (status, body) = read(res).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["team"][0]["role"], "Chief Financial Officer");
}

#[actix_web::test]
async fn unknown_user_from_query_is_not_found() {
    let mut query = MockCashFlowQuery::new();
    query
        .expect_health()
        .times(1)
        .return_once(|_| Err(Error::not_found("User not found")));
    let app = actix_test::init_service(test_app(with_query(query))).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/health/8").to_request(),
    )
    .await;
    let (status, body) = read(res).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}
