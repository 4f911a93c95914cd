mod common;

use actix_web::{test, web, App};
use serde_json::json;
use serial_test::serial;

use common::TestApp;
use ko_lake_api::routes;

#[actix_rt::test]
#[serial]
async fn test_health_check() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    // Overall status is "ok" or "degraded" depending on the environment
    assert!(body["status"] == "ok" || body["status"] == "degraded");
    assert!(body["services"]["mongodb"].is_object());
}

#[actix_rt::test]
#[serial]
async fn test_accommodations_return_cards_with_pricing() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/accommodations")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let cards = body.as_array().expect("expected an array of cards");
    assert!(!cards.is_empty());

    for card in cards {
        let pricing = &card["pricing"];
        assert!(pricing["final"].as_f64().is_some());
        assert!(pricing["savings"].as_f64().is_some());
        let total_pct = pricing["total_pct"].as_u64().unwrap();
        assert!(total_pct < 100);
    }
}

#[actix_rt::test]
#[serial]
async fn test_booking_rejects_invalid_email() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(&json!({
            "name": "Test Guest",
            "email": "not-an-email",
            "room": "master",
            "check_in": "2025-06-16",
            "check_out": "2025-06-18"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_booking_rejects_inverted_dates() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/bookings")
        .set_json(&json!({
            "name": "Test Guest",
            "email": "guest@example.com",
            "room": "villa",
            "check_in": "2025-06-18",
            "check_out": "2025-06-16"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_contact_requires_message() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(&json!({
            "name": "Test Guest",
            "email": "guest@example.com",
            "message": ""
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
#[serial]
async fn test_contact_info_is_public() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/contact").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ko Lake Villa");
}

#[actix_rt::test]
#[serial]
async fn test_booking_lookup_rejects_malformed_id() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/bookings/not-an-object-id")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
