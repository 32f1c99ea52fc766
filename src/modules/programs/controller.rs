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

use super::model::{CreateProgramDto, Program, UpdateProgramDto};
use super::service::ProgramService;

#[utoipa::path(
    post,
    path = "/api/faculties/{faculty_id}/programs",
    params(("faculty_id" = Uuid, Path, description = "Faculty ID")),
    request_body = CreateProgramDto,
    responses(
        (status = 201, description = "Program created", body = Program),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_program(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(faculty_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateProgramDto>,
) -> Result<(StatusCode, Json<Program>), AppError> {
    let program = ProgramService::create(&state.db, faculty_id, dto).await?;
    Ok((StatusCode::CREATED, Json(program)))
}

#[utoipa::path(
    get,
    path = "/api/faculties/{faculty_id}/programs",
    params(("faculty_id" = Uuid, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Programs in the faculty", body = Vec<Program>),
        (status = 404, description = "Faculty not found")
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_programs(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(faculty_id): Path<Uuid>,
) -> Result<Json<Vec<Program>>, AppError> {
    let programs = ProgramService::list_by_faculty(&state.db, faculty_id).await?;
    Ok(Json(programs))
}

#[utoipa::path(
    get,
    path = "/api/programs/{id}",
    params(("id" = Uuid, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Program", body = Program),
        (status = 404, description = "Program not found")
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_program(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Program>, AppError> {
    let program = ProgramService::get_by_id(&state.db, id).await?;
    Ok(Json(program))
}

#[utoipa::path(
    put,
    path = "/api/programs/{id}",
    params(("id" = Uuid, Path, description = "Program ID")),
    request_body = UpdateProgramDto,
    responses(
        (status = 200, description = "Program updated", body = Program),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Program not found")
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_program(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateProgramDto>,
) -> Result<Json<Program>, AppError> {
    let program = ProgramService::update(&state.db, id, dto).await?;
    Ok(Json(program))
}

#[utoipa::path(
    delete,
    path = "/api/programs/{id}",
    params(("id" = Uuid, Path, description = "Program ID")),
    responses(
        (status = 204, description = "Program deleted"),
        (status = 404, description = "Program not found")
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_program(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ProgramService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
