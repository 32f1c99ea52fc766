mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_lookup_fixture, setup_test_app};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_lookup_endpoints_are_public(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    create_lookup_fixture(&mut tx).await;
    tx.commit().await.unwrap();

    for uri in [
        "/api/lookups/governorates",
        "/api/lookups/cities",
        "/api/lookups/institute-categories",
        "/api/lookups/account-types",
        "/api/lookups/institution-types",
        "/api/lookups/accreditation-statuses",
    ] {
        let app = setup_test_app(pool.clone()).await;
        let (status, body) = get_json(app, uri).await;
        assert_eq!(status, StatusCode::OK, "unexpected status for {}", uri);
        assert_eq!(body.as_array().unwrap().len(), 1, "unexpected count for {}", uri);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cities_filter_by_governorate(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let lookups = create_lookup_fixture(&mut tx).await;

    // Second governorate with its own city.
    let (other_governorate,): (Uuid,) = sqlx::query_as(
        "INSERT INTO governorates (name_en, name_ar) VALUES ('Giza', 'الجيزة') RETURNING id",
    )
    .fetch_one(&mut *tx)
    .await
    .unwrap();
    sqlx::query("INSERT INTO cities (governorate_id, name_en, name_ar) VALUES ($1, 'Giza', 'الجيزة')")
        .bind(other_governorate)
        .execute(&mut *tx)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let (status, body) = get_json(app, "/api/lookups/cities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let app = setup_test_app(pool).await;
    let (status, body) = get_json(
        app,
        &format!("/api/lookups/cities?governorate_id={}", lookups.governorate_id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let cities = body.as_array().unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0]["governorate_id"], lookups.governorate_id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_lookup_lists_empty_without_seed(pool: PgPool) {
    let app = setup_test_app(pool).await;
    let (status, body) = get_json(app, "/api/lookups/governorates").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}
