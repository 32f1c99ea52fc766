use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateMajorDto, Major, UpdateMajorDto};
use super::service::MajorService;

#[utoipa::path(
    post,
    path = "/api/faculties/{faculty_id}/majors",
    params(("faculty_id" = Uuid, Path, description = "Faculty ID")),
    request_body = CreateMajorDto,
    responses(
        (status = 201, description = "Major created", body = Major),
        (status = 400, description = "Validation error or unknown criteria"),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Majors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_major(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(faculty_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateMajorDto>,
) -> Result<(StatusCode, Json<Major>), AppError> {
    let major = MajorService::create(&state.db, faculty_id, dto).await?;
    Ok((StatusCode::CREATED, Json(major)))
}

#[utoipa::path(
    get,
    path = "/api/faculties/{faculty_id}/majors",
    params(("faculty_id" = Uuid, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Majors in the faculty", body = Vec<Major>),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Majors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_majors(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(faculty_id): Path<Uuid>,
) -> Result<Json<Vec<Major>>, AppError> {
    let majors = MajorService::list_by_faculty(&state.db, faculty_id).await?;
    Ok(Json(majors))
}

#[utoipa::path(
    get,
    path = "/api/majors/{id}",
    params(("id" = Uuid, Path, description = "Major ID")),
    responses(
        (status = 200, description = "Major", body = Major),
        (status = 404, description = "Major not found")
    ),
    tag = "Majors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_major(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Major>, AppError> {
    let major = MajorService::get_by_id(&state.db, id).await?;
    Ok(Json(major))
}

#[utoipa::path(
    put,
    path = "/api/majors/{id}",
    params(("id" = Uuid, Path, description = "Major ID")),
    request_body = UpdateMajorDto,
    responses(
        (status = 200, description = "Major updated", body = Major),
        (status = 400, description = "Validation error or unknown criteria"),
        (status = 404, description = "Major not found")
    ),
    tag = "Majors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_major(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateMajorDto>,
) -> Result<Json<Major>, AppError> {
    let major = MajorService::update(&state.db, id, dto).await?;
    Ok(Json(major))
}

/// Cascades to the major's courses.
#[utoipa::path(
    delete,
    path = "/api/majors/{id}",
    params(("id" = Uuid, Path, description = "Major ID")),
    responses(
        (status = 204, description = "Major deleted"),
        (status = 404, description = "Major not found")
    ),
    tag = "Majors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_major(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    MajorService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
