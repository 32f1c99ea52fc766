use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateFacultyDto, Faculty, FacultyFilterParams, UpdateFacultyDto};
use super::service::FacultyService;

#[utoipa::path(
    post,
    path = "/api/faculties",
    request_body = CreateFacultyDto,
    responses(
        (status = 201, description = "Faculty created", body = Faculty),
        (status = 400, description = "Validation error or unknown reference"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_faculty(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateFacultyDto>,
) -> Result<(StatusCode, Json<Faculty>), AppError> {
    let faculty = FacultyService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(faculty)))
}

#[utoipa::path(
    get,
    path = "/api/faculties",
    params(FacultyFilterParams),
    responses(
        (status = 200, description = "Faculties", body = Vec<Faculty>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_faculties(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(filters): Query<FacultyFilterParams>,
) -> Result<Json<Vec<Faculty>>, AppError> {
    let faculties = FacultyService::list(&state.db, filters).await?;
    Ok(Json(faculties))
}

#[utoipa::path(
    get,
    path = "/api/faculties/{faculty_id}",
    params(("faculty_id" = Uuid, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Faculty", body = Faculty),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_faculty(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Faculty>, AppError> {
    let faculty = FacultyService::get_by_id(&state.db, id).await?;
    Ok(Json(faculty))
}

#[utoipa::path(
    put,
    path = "/api/faculties/{faculty_id}",
    params(("faculty_id" = Uuid, Path, description = "Faculty ID")),
    request_body = UpdateFacultyDto,
    responses(
        (status = 200, description = "Faculty updated", body = Faculty),
        (status = 400, description = "Validation error or unknown reference"),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_faculty(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateFacultyDto>,
) -> Result<Json<Faculty>, AppError> {
    let faculty = FacultyService::update(&state.db, id, dto).await?;
    Ok(Json(faculty))
}

/// Cascades to the faculty's programs and majors.
#[utoipa::path(
    delete,
    path = "/api/faculties/{faculty_id}",
    params(("faculty_id" = Uuid, Path, description = "Faculty ID")),
    responses(
        (status = 204, description = "Faculty deleted"),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Faculties",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_faculty(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    FacultyService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
