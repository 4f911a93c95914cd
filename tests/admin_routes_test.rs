mod common;

use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mongodb::bson::oid::ObjectId;
use serial_test::serial;

use common::TestApp;
use ko_lake_api::middleware::auth::Claims;
use ko_lake_api::routes;

const TEST_SECRET: &str = "test-secret";

fn make_token(role: &str) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: "tester@example.com".to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(1)).timestamp() as usize,
        user_id: ObjectId::new().to_string(),
        role: Some(role.to_string()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_ref()),
    )
    .expect("failed to encode test token")
}

#[actix_rt::test]
#[serial]
async fn test_admin_pricing_requires_auth() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/admin/pricing")
        .set_json(&serde_json::json!({ "standard_pct": 15, "last_minute_pct": 20 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn test_admin_pricing_rejects_non_admin_token() {
    std::env::set_var("JWT_SECRET", TEST_SECRET);

    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let token = make_token("user");
    let req = test::TestRequest::put()
        .uri("/api/admin/pricing")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&serde_json::json!({ "standard_pct": 15, "last_minute_pct": 20 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_rt::test]
#[serial]
async fn test_admin_pricing_allows_admin_token() {
    std::env::set_var("JWT_SECRET", TEST_SECRET);

    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let token = make_token("admin");
    let req = test::TestRequest::get()
        .uri("/api/admin/pricing")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["standard_pct"].is_i64() || body["standard_pct"].is_u64());
    assert!(body["last_minute_pct"].is_i64() || body["last_minute_pct"].is_u64());
}

#[actix_rt::test]
#[serial]
async fn test_gallery_upload_requires_admin() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/admin/gallery/upload")
        .set_json(&serde_json::json!({
            "image": {
                "data": "aGVsbG8=",
                "fileName": "villa.jpg",
                "fileType": "image/jpeg",
                "fileSize": 5
            },
            "title": "Villa Exterior"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
#[serial]
async fn test_session_requires_token() {
    let test_app = TestApp::new().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_app.client.clone()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/auth/session").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
