mod common;

use actix_web::{test, web, App};
use serial_test::serial;

use common::TestApp;
use ko_lake_api::routes;

async fn get_quote(test_app: &TestApp, uri: &str) -> serde_json::Value {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    test::read_body_json(resp).await
}

#[actix_rt::test]
#[serial]
async fn test_quote_stacks_last_minute_discount() {
    let test_app = TestApp::new().await;

    // 2025-06-16 is a Monday, two days after the reference date
    let body = get_quote(
        &test_app,
        "/api/pricing/quote?base_night=119&check_in=2025-06-16&reference_date=2025-06-14&standard_pct=10&last_minute_pct=25",
    )
    .await;

    assert_eq!(body["standard_pct"], 10);
    assert_eq!(body["extra_pct"], 25);
    assert_eq!(body["total_pct"], 35);
    assert_eq!(body["final"].as_f64(), Some(77.35));
    assert_eq!(body["savings"].as_f64(), Some(41.65));
}

#[actix_rt::test]
#[serial]
async fn test_quote_outside_window_applies_standard_only() {
    let test_app = TestApp::new().await;

    // 2025-06-20 is a Friday, outside the Sun-Wed window
    let body = get_quote(
        &test_app,
        "/api/pricing/quote?base_night=119&check_in=2025-06-20&reference_date=2025-06-18&standard_pct=10&last_minute_pct=25",
    )
    .await;

    assert_eq!(body["extra_pct"], 0);
    assert_eq!(body["total_pct"], 10);
    assert_eq!(body["final"].as_f64(), Some(107.1));
    assert_eq!(body["savings"].as_f64(), Some(11.9));
}

#[actix_rt::test]
#[serial]
async fn test_quote_clamps_combined_discount() {
    let test_app = TestApp::new().await;

    let body = get_quote(
        &test_app,
        "/api/pricing/quote?base_night=119&check_in=2025-06-16&reference_date=2025-06-14&standard_pct=80&last_minute_pct=80",
    )
    .await;

    assert_eq!(body["total_pct"], 90);
    assert!(body["final"].as_f64().unwrap() > 0.0);
}

#[actix_rt::test]
#[serial]
async fn test_quote_clamps_negative_base_rate() {
    let test_app = TestApp::new().await;

    let body = get_quote(
        &test_app,
        "/api/pricing/quote?base_night=-50&standard_pct=10&last_minute_pct=25",
    )
    .await;

    assert_eq!(body["final"].as_f64(), Some(0.0));
    assert_eq!(body["savings"].as_f64(), Some(0.0));
}

#[actix_rt::test]
#[serial]
async fn test_quote_uses_stored_or_default_settings_when_unspecified() {
    let test_app = TestApp::new().await;

    let body = get_quote(&test_app, "/api/pricing/quote?base_night=119").await;

    // Exact percentages depend on stored settings; the invariants do not.
    let total_pct = body["total_pct"].as_u64().unwrap();
    assert!(total_pct < 100);
    let base = body["base_night"].as_f64().unwrap();
    let final_night = body["final"].as_f64().unwrap();
    let savings = body["savings"].as_f64().unwrap();
    assert!(final_night >= 0.0 && final_night <= base);
    assert!((base - final_night - savings).abs() < 1e-9);
}

#[actix_rt::test]
#[serial]
async fn test_quote_requires_base_rate() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/pricing/quote?check_in=2025-06-16")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
