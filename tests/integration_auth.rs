mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{count_rows, create_test_legislator, generate_unique_email, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn register_body(email: &str, password: &str, password_confirmation: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": password,
        "password_confirmation": password_confirmation,
        "name_en": "National Accreditation Body",
        "name_ar": "الهيئة القومية للاعتماد",
        "location_branch_name_en": "Head Office",
        "location_branch_name_ar": "المكتب الرئيسي",
        "primary_contact_name": "Contact Person",
        "website": "http://naab.example.com",
        "country": "Egypt",
        "governorate": "Cairo",
        "city": "Cairo",
        "phone": "+201000000000",
        "landline": "+20233333333",
        "publicly_listed": true
    })
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_success_creates_user_and_legislator(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let request = post_json("/api/auth/register", &register_body(&email, "secret-pass-1", "secret-pass-1"));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["message"], "Legislator successfully registered");
    assert!(body["token"].as_str().unwrap().len() == 40);
    assert_eq!(body["legislator"]["email"], email);

    assert_eq!(count_rows(&pool, "users").await, 1);
    assert_eq!(count_rows(&pool, "legislators").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_password_mismatch_creates_nothing(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let request = post_json("/api/auth/register", &register_body(&email, "secret-pass-1", "different-pass"));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].as_str().unwrap().contains("password"));

    assert_eq!(count_rows(&pool, "users").await, 0);
    assert_eq!(count_rows(&pool, "legislators").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email_rejected(pool: PgPool) {
    let email = generate_unique_email();

    let app = setup_test_app(pool.clone()).await;
    let request = post_json("/api/auth/register", &register_body(&email, "secret-pass-1", "secret-pass-1"));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = setup_test_app(pool.clone()).await;
    let request = post_json("/api/auth/register", &register_body(&email, "secret-pass-1", "secret-pass-1"));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(count_rows(&pool, "users").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_token_is_usable(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let email = generate_unique_email();
    let request = post_json("/api/auth/register", &register_body(&email, "secret-pass-1", "secret-pass-1"));
    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let token = body["token"].as_str().unwrap();

    let app = setup_test_app(pool).await;
    let request = Request::builder()
        .method("GET")
        .uri("/api/legislators/me")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success_returns_token(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_legislator(&mut tx, &email, "correct-password").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;
    let request = post_json(
        "/api/auth/login",
        &json!({"email": email, "password": "correct-password"}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body.get("token").is_some());
    assert_eq!(body["user"]["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_reuses_existing_token(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    let legislator = create_test_legislator(&mut tx, &email, "correct-password").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;
    let request = post_json(
        "/api/auth/login",
        &json!({"email": email, "password": "correct-password"}),
    );

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["token"], legislator.user.token.as_str());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password_unauthorized(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_legislator(&mut tx, &email, "correct-password").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;
    let request = post_json(
        "/api/auth/login",
        &json!({"email": email, "password": "wrong-password"}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body.get("token").is_none());
    assert_eq!(body["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_email_unauthorized(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let request = post_json(
        "/api/auth/login",
        &json!({"email": "nobody@test.com", "password": "whatever"}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_missing_password_bad_request(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let request = post_json("/api/auth/login", &json!({"email": "test@test.com"}));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_invalid_email_bad_request(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = post_json(
        "/api/auth/register",
        &register_body("not-an-email", "secret-pass-1", "secret-pass-1"),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(count_rows(&pool, "users").await, 0);
}
