mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    count_rows, create_test_legislator, create_test_user, generate_unique_email, setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn authed(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_public_directory_excludes_unlisted(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let listed = create_test_legislator(&mut tx, &generate_unique_email(), "pass-12345").await;
    let unlisted = create_test_legislator(&mut tx, &generate_unique_email(), "pass-12345").await;
    sqlx::query("UPDATE legislators SET publicly_listed = FALSE WHERE id = $1")
        .bind(unlisted.id)
        .execute(&mut *tx)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("GET")
        .uri("/api/legislators")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let directory = body.as_array().unwrap();
    assert_eq!(directory.len(), 1);
    assert_eq!(directory[0]["id"], listed.id.to_string());

    // Unlisted profile is also hidden from direct retrieval.
    let app = setup_test_app(pool).await;
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/legislators/{}", unlisted.id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_own_profile_requires_legislator_capability(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "pass-12345").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;
    let response = app
        .oneshot(authed("GET", "/api/legislators/me", &user.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_own_profile(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let legislator = create_test_legislator(&mut tx, &generate_unique_email(), "pass-12345").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("PUT")
        .uri("/api/legislators/me")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", legislator.user.token))
        .body(Body::from(
            serde_json::to_string(&json!({
                "name_en": "Renamed Authority",
                "publicly_listed": false
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["name_en"], "Renamed Authority");
    assert_eq!(body["publicly_listed"], false);
    // Untouched fields survive.
    assert_eq!(body["country"], "Egypt");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_rejects_invalid_website(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let legislator = create_test_legislator(&mut tx, &generate_unique_email(), "pass-12345").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool).await;
    let request = Request::builder()
        .method("PUT")
        .uri("/api/legislators/me")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", legislator.user.token))
        .body(Body::from(
            serde_json::to_string(&json!({"website": "not a url"})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_account_cascades_user_and_criteria(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let legislator = create_test_legislator(&mut tx, &generate_unique_email(), "pass-12345").await;

    sqlx::query(
        "INSERT INTO faculty_criteria (name_en, name_ar, legislator_id)
         VALUES ('Owned Standards', 'معايير', $1)",
    )
    .bind(legislator.id)
    .execute(&mut *tx)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO course_criteria (name_en, name_ar, legislator_id)
         VALUES ('Course Standards', 'معايير', $1)",
    )
    .bind(legislator.id)
    .execute(&mut *tx)
    .await
    .unwrap();
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let response = app
        .oneshot(authed("DELETE", "/api/legislators/me", &legislator.user.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(count_rows(&pool, "users").await, 0);
    assert_eq!(count_rows(&pool, "legislators").await, 0);
    assert_eq!(count_rows(&pool, "faculty_criteria").await, 0);
    assert_eq!(count_rows(&pool, "course_criteria").await, 0);
    assert_eq!(count_rows(&pool, "auth_tokens").await, 0);

    // The old token no longer authenticates.
    let app = setup_test_app(pool).await;
    let response = app
        .oneshot(authed("GET", "/api/legislators/me", &legislator.user.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
