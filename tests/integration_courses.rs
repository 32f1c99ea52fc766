mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    count_rows, create_lookup_fixture, create_test_faculty, create_test_institution,
    create_test_legislator, create_test_major, create_test_user, generate_unique_email,
    setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn authed_json(method: &str, uri: &str, token: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

struct CourseFixture {
    token: String,
    #[allow(dead_code)]
    major_id: Uuid,
}

/// Legislator plus an institution with one faculty ("Engineering") holding
/// one major ("Computer Science").
async fn setup_fixture(pool: &PgPool) -> CourseFixture {
    let mut tx = pool.begin().await.unwrap();
    let legislator = create_test_legislator(&mut tx, &generate_unique_email(), "pass-12345").await;
    let lookups = create_lookup_fixture(&mut tx).await;
    let institution = create_test_institution(&mut tx, "Cairo University", &lookups).await;
    let faculty = create_test_faculty(&mut tx, institution, "Engineering").await;
    let major_id = create_test_major(&mut tx, faculty, "Computer Science").await;
    tx.commit().await.unwrap();

    CourseFixture {
        token: legislator.user.token,
        major_id,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_single_course_create(pool: PgPool) {
    let fixture = setup_fixture(&pool).await;

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json(
        "POST",
        "/api/courses",
        &fixture.token,
        &json!({
            "name_en": "Algorithms",
            "name_ar": "الخوارزميات",
            "faculty_name": "Engineering",
            "major_name": "Computer Science"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert!(body.is_object());
    assert_eq!(body["name_en"], "Algorithms");

    assert_eq!(count_rows(&pool, "courses").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_course_create_preserves_order(pool: PgPool) {
    let fixture = setup_fixture(&pool).await;

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json(
        "POST",
        "/api/courses",
        &fixture.token,
        &json!([
            {"name_en": "Algorithms", "name_ar": "الخوارزميات",
             "faculty_name": "Engineering", "major_name": "Computer Science"},
            {"name_en": "Databases", "name_ar": "قواعد البيانات",
             "faculty_name": "Engineering", "major_name": "Computer Science"},
            {"name_en": "Operating Systems", "name_ar": "نظم التشغيل",
             "faculty_name": "Engineering", "major_name": "Computer Science"}
        ]),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    let created = body.as_array().unwrap();
    assert_eq!(created.len(), 3);
    assert_eq!(created[0]["name_en"], "Algorithms");
    assert_eq!(created[1]["name_en"], "Databases");
    assert_eq!(created[2]["name_en"], "Operating Systems");

    assert_eq!(count_rows(&pool, "courses").await, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_create_unknown_faculty_rolls_back_everything(pool: PgPool) {
    let fixture = setup_fixture(&pool).await;

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json(
        "POST",
        "/api/courses",
        &fixture.token,
        &json!([
            {"name_en": "Algorithms", "name_ar": "الخوارزميات",
             "faculty_name": "Engineering", "major_name": "Computer Science"},
            {"name_en": "Phantom Course", "name_ar": "مقرر وهمي",
             "faculty_name": "Nonexistent Faculty", "major_name": "Computer Science"}
        ]),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("faculty_name"));

    // All-or-nothing: the valid first item must not survive.
    assert_eq!(count_rows(&pool, "courses").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bulk_create_unknown_major_rolls_back_everything(pool: PgPool) {
    let fixture = setup_fixture(&pool).await;

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json(
        "POST",
        "/api/courses",
        &fixture.token,
        &json!([
            {"name_en": "Algorithms", "name_ar": "الخوارزميات",
             "faculty_name": "Engineering", "major_name": "Computer Science"},
            {"name_en": "Phantom Course", "name_ar": "مقرر وهمي",
             "faculty_name": "Engineering", "major_name": "Astrology"}
        ]),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("major_name"));

    assert_eq!(count_rows(&pool, "courses").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_create_requires_legislator(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let user = create_test_user(&mut tx, &generate_unique_email(), "pass-12345").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json(
        "POST",
        "/api/courses",
        &user.token,
        &json!({
            "name_en": "Algorithms",
            "name_ar": "الخوارزميات",
            "faculty_name": "Engineering",
            "major_name": "Computer Science"
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    assert_eq!(count_rows(&pool, "courses").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_create_requires_authentication(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/courses")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name_en": "Algorithms",
                "name_ar": "الخوارزميات",
                "faculty_name": "Engineering",
                "major_name": "Computer Science"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_course_update_and_delete(pool: PgPool) {
    let fixture = setup_fixture(&pool).await;

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json(
        "POST",
        "/api/courses",
        &fixture.token,
        &json!({
            "name_en": "Algorithms",
            "name_ar": "الخوارزميات",
            "faculty_name": "Engineering",
            "major_name": "Computer Science"
        }),
    );
    let body = json_body(app.oneshot(request).await.unwrap()).await;
    let course_id = body["id"].as_str().unwrap().to_string();

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json(
        "PUT",
        &format!("/api/courses/{}", course_id),
        &fixture.token,
        &json!({"name_en": "Advanced Algorithms"}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name_en"], "Advanced Algorithms");
    assert_eq!(body["name_ar"], "الخوارزميات");

    let app = setup_test_app(pool.clone()).await;
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/courses/{}", course_id))
        .header("authorization", format!("Bearer {}", fixture.token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(count_rows(&pool, "courses").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_empty_bulk_create_rejected(pool: PgPool) {
    let fixture = setup_fixture(&pool).await;

    let app = setup_test_app(pool.clone()).await;
    let request = authed_json("POST", "/api/courses", &fixture.token, &json!([]));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
