//! End-to-end tests for the CashFlowPro HTTP surface.
//!
//! Requests run through the same middleware stack and route table as the
//! production server, backed by a fresh in-memory store per test.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test, web};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};

use cashflow_backend::inbound::http::health::HealthState;
use cashflow_backend::inbound::http::routes::configure;
use cashflow_backend::inbound::http::state::HttpState;
use cashflow_backend::middleware::{Cors, Trace};
use cashflow_backend::outbound::random::SeededRandomSource;

const MAX_BODY_BYTES: usize = 4096;

fn app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::in_memory(
        Arc::new(SeededRandomSource::new(2024)),
        Arc::new(DefaultClock),
    );
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(health))
        .wrap(Cors)
        .wrap(Trace)
        .configure(|cfg| configure(cfg, MAX_BODY_BYTES))
}

fn registration(email: &str) -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": email,
        "company": "Analytical Engines",
        "password": "hunter2",
    })
}

fn field(value: &Value, path: &str) -> Value {
    value.pointer(path).cloned().unwrap_or(Value::Null)
}

#[actix_web::test]
async fn registered_user_gets_a_consistent_dashboard() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("ada@example.com"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(field(&body, "/message"), "Account created successfully");
    assert_eq!(field(&body, "/user/id"), 1);
    assert_eq!(field(&body, "/user/plan"), "starter");
    assert!(field(&body, "/user/password").is_null());

    let req = test::TestRequest::get().uri("/api/dashboard/1").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let dashboard: Value = test::read_body_json(res).await;

    let series = dashboard["cashFlowData"].as_array().expect("series array");
    assert_eq!(series.len(), 12);
    let net: i64 = series
        .iter()
        .map(|m| {
            let inflow = m["inflow"].as_i64().expect("numeric inflow");
            let outflow = m["outflow"].as_i64().expect("numeric outflow");
            assert_eq!(m["balance"].as_i64(), Some(inflow - outflow));
            inflow - outflow
        })
        .sum();
    assert_eq!(field(&dashboard, "/summary/currentCash").as_i64(), Some(net));
    assert_eq!(
        field(&dashboard, "/recentData").as_array().map(Vec::len),
        Some(3)
    );
    assert_eq!(
        field(&dashboard, "/recentTransactions").as_array().map(Vec::len),
        Some(5)
    );
    assert_eq!(field(&dashboard, "/alerts").as_array().map(Vec::len), Some(2));
    assert_eq!(field(&dashboard, "/insights").as_array().map(Vec::len), Some(3));
}

#[actix_web::test]
async fn duplicate_email_is_rejected_without_creating_a_user() {
    let app = test::init_service(app()).await;
    for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(registration("dup@example.com"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected);
    }

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("other@example.com"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(field(&body, "/user/id"), 2);
}

#[actix_web::test]
async fn login_issues_token_for_known_email_only() {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("ada@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "ada@example.com", "password": "anything" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(field(&body, "/token"), "fake-jwt-token-1");
    assert_eq!(field(&body, "/message"), "Login successful");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": "nobody@example.com", "password": "x" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(field(&body, "/error"), "Invalid credentials");
    assert_eq!(field(&body, "/code"), "unauthorized");
}

#[actix_web::test]
async fn forecast_confidence_decays_and_balances_add_up() {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("ada@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/forecast")
        .set_json(json!({ "userId": 1, "monthsAhead": 3 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let points = body["forecast"].as_array().expect("forecast array");
    let confidences: Vec<f64> = points
        .iter()
        .filter_map(|p| p["confidence"].as_f64())
        .collect();
    assert_eq!(confidences, vec![0.95, 0.93, 0.91]);
    for point in points {
        assert_eq!(
            point["predictedBalance"].as_i64(),
            point["predictedInflow"]
                .as_i64()
                .zip(point["predictedOutflow"].as_i64())
                .map(|(inflow, outflow)| inflow - outflow)
        );
    }
    assert_eq!(field(&body, "/confidence").as_f64(), Some(0.95));
}

#[rstest]
#[case(json!({ "userId": 42, "monthsAhead": 0 }), StatusCode::NOT_FOUND)]
#[case(json!({ "userId": 1, "monthsAhead": 0 }), StatusCode::BAD_REQUEST)]
#[case(json!({ "userId": 1, "monthsAhead": 25 }), StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn forecast_resolves_user_before_checking_horizon(
    #[case] payload: Value,
    #[case] expected: StatusCode,
) {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("ada@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/forecast")
        .set_json(payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), expected);
}

#[actix_web::test]
async fn resolving_an_alert_hides_it_and_keeps_first_timestamp() {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(registration("ada@example.com"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/api/alerts/1/resolve")
        .to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(field(&first, "/message"), "Alert resolved");
    assert_eq!(field(&first, "/alert/resolved"), true);

    let req = test::TestRequest::put()
        .uri("/api/alerts/1/resolve")
        .to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        field(&second, "/alert/resolvedAt"),
        field(&first, "/alert/resolvedAt")
    );

    let req = test::TestRequest::get().uri("/api/alerts/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(field(&body, "/total"), 1);

    let req = test::TestRequest::put()
        .uri("/api/alerts/99/resolve")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn preflight_requests_get_cors_headers() {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/register")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(res.headers().contains_key("trace-id"));
}

#[rstest]
#[case(Method::GET, "/api/unknown")]
#[case(Method::DELETE, "/api/register")]
#[case(Method::GET, "/api/register")]
#[actix_web::test]
async fn unmatched_routes_return_json_not_found(#[case] method: Method, #[case] uri: &str) {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::default()
        .method(method.clone())
        .uri(uri)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        field(&body, "/error"),
        Value::String(format!("Route {method} {uri} not found"))
    );
    assert_eq!(field(&body, "/code"), "not_found");
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::post()
        .uri("/api/register")
        .insert_header(header::ContentType::json())
        .set_payload("{\"name\": ")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(field(&body, "/error"), "Invalid JSON body");
}

#[rstest]
#[case("/api/register", json!({ "email": "a@x.com" }), vec!["name", "company", "password"])]
#[case("/api/login", json!({}), vec!["email", "password"])]
#[case("/api/payment/setup", json!({ "userId": 1 }), vec!["paymentMethod"])]
#[case("/api/reports/export", json!({ "userId": "", "format": "pdf" }), vec!["userId", "reportType"])]
#[actix_web::test]
async fn missing_fields_are_listed(
    #[case] uri: &str,
    #[case] payload: Value,
    #[case] expected: Vec<&str>,
) {
    let app = test::init_service(app()).await;
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(field(&body, "/details/fields"), json!(expected));
    assert_eq!(field(&body, "/details/code"), "missing_field");
}

#[actix_web::test]
async fn health_endpoints_report_readiness() {
    let app = test::init_service(app()).await;
    for uri in ["/health/ready", "/health/live"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
    }
}
