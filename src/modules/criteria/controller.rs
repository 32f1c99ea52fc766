use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentLegislator;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CourseCriteriaResponse, CreateCourseCriteriaDto, CreateFacultyCriteriaDto,
    CreateMajorCriteriaDto, FacultyCriteriaResponse, MajorCriteriaResponse,
    UpdateCourseCriteriaDto, UpdateFacultyCriteriaDto, UpdateMajorCriteriaDto,
};
use super::service::{CourseCriteriaService, FacultyCriteriaService, MajorCriteriaService};

// --- Faculty criteria ---

#[utoipa::path(
    post,
    path = "/api/faculty-criteria",
    request_body = CreateFacultyCriteriaDto,
    responses(
        (status = 201, description = "Faculty criteria created", body = FacultyCriteriaResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator, dto))]
pub async fn create_faculty_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    ValidatedJson(dto): ValidatedJson<CreateFacultyCriteriaDto>,
) -> Result<(StatusCode, Json<FacultyCriteriaResponse>), AppError> {
    let criteria =
        FacultyCriteriaService::create(&state.db, legislator.legislator_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(criteria)))
}

#[utoipa::path(
    get,
    path = "/api/faculty-criteria",
    responses(
        (status = 200, description = "The caller's faculty criteria", body = Vec<FacultyCriteriaResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn list_faculty_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
) -> Result<Json<Vec<FacultyCriteriaResponse>>, AppError> {
    let criteria = FacultyCriteriaService::list(&state.db, legislator.legislator_id()).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    get,
    path = "/api/faculty-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    responses(
        (status = 200, description = "Faculty criteria", body = FacultyCriteriaResponse),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn get_faculty_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<Json<FacultyCriteriaResponse>, AppError> {
    let criteria = FacultyCriteriaService::get(&state.db, legislator.legislator_id(), id).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    put,
    path = "/api/faculty-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    request_body = UpdateFacultyCriteriaDto,
    responses(
        (status = 200, description = "Faculty criteria updated", body = FacultyCriteriaResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator, dto))]
pub async fn update_faculty_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateFacultyCriteriaDto>,
) -> Result<Json<FacultyCriteriaResponse>, AppError> {
    let criteria =
        FacultyCriteriaService::update(&state.db, legislator.legislator_id(), id, dto).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    delete,
    path = "/api/faculty-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    responses(
        (status = 204, description = "Faculty criteria deleted"),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn delete_faculty_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    FacultyCriteriaService::delete(&state.db, legislator.legislator_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Major criteria ---

#[utoipa::path(
    post,
    path = "/api/major-criteria",
    request_body = CreateMajorCriteriaDto,
    responses(
        (status = 201, description = "Major criteria created", body = MajorCriteriaResponse),
        (status = 400, description = "Validation error or parent owned by another legislator"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator, dto))]
pub async fn create_major_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    ValidatedJson(dto): ValidatedJson<CreateMajorCriteriaDto>,
) -> Result<(StatusCode, Json<MajorCriteriaResponse>), AppError> {
    let criteria = MajorCriteriaService::create(&state.db, legislator.legislator_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(criteria)))
}

#[utoipa::path(
    get,
    path = "/api/major-criteria",
    responses(
        (status = 200, description = "The caller's major criteria", body = Vec<MajorCriteriaResponse>),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn list_major_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
) -> Result<Json<Vec<MajorCriteriaResponse>>, AppError> {
    let criteria = MajorCriteriaService::list(&state.db, legislator.legislator_id()).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    get,
    path = "/api/major-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    responses(
        (status = 200, description = "Major criteria", body = MajorCriteriaResponse),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn get_major_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<Json<MajorCriteriaResponse>, AppError> {
    let criteria = MajorCriteriaService::get(&state.db, legislator.legislator_id(), id).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    put,
    path = "/api/major-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    request_body = UpdateMajorCriteriaDto,
    responses(
        (status = 200, description = "Major criteria updated", body = MajorCriteriaResponse),
        (status = 400, description = "Validation error or parent owned by another legislator"),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator, dto))]
pub async fn update_major_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateMajorCriteriaDto>,
) -> Result<Json<MajorCriteriaResponse>, AppError> {
    let criteria =
        MajorCriteriaService::update(&state.db, legislator.legislator_id(), id, dto).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    delete,
    path = "/api/major-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    responses(
        (status = 204, description = "Major criteria deleted"),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn delete_major_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    MajorCriteriaService::delete(&state.db, legislator.legislator_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// --- Course criteria ---

#[utoipa::path(
    post,
    path = "/api/course-criteria",
    request_body = CreateCourseCriteriaDto,
    responses(
        (status = 201, description = "Course criteria created", body = CourseCriteriaResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator, dto))]
pub async fn create_course_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    ValidatedJson(dto): ValidatedJson<CreateCourseCriteriaDto>,
) -> Result<(StatusCode, Json<CourseCriteriaResponse>), AppError> {
    let criteria =
        CourseCriteriaService::create(&state.db, legislator.legislator_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(criteria)))
}

#[utoipa::path(
    get,
    path = "/api/course-criteria",
    responses(
        (status = 200, description = "The caller's course criteria", body = Vec<CourseCriteriaResponse>),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn list_course_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
) -> Result<Json<Vec<CourseCriteriaResponse>>, AppError> {
    let criteria = CourseCriteriaService::list(&state.db, legislator.legislator_id()).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    get,
    path = "/api/course-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    responses(
        (status = 200, description = "Course criteria", body = CourseCriteriaResponse),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn get_course_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseCriteriaResponse>, AppError> {
    let criteria = CourseCriteriaService::get(&state.db, legislator.legislator_id(), id).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    put,
    path = "/api/course-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    request_body = UpdateCourseCriteriaDto,
    responses(
        (status = 200, description = "Course criteria updated", body = CourseCriteriaResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator, dto))]
pub async fn update_course_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseCriteriaDto>,
) -> Result<Json<CourseCriteriaResponse>, AppError> {
    let criteria =
        CourseCriteriaService::update(&state.db, legislator.legislator_id(), id, dto).await?;
    Ok(Json(criteria))
}

#[utoipa::path(
    delete,
    path = "/api/course-criteria/{id}",
    params(("id" = Uuid, Path, description = "Criteria ID")),
    responses(
        (status = 204, description = "Course criteria deleted"),
        (status = 404, description = "Not found or owned by another legislator")
    ),
    tag = "Criteria",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn delete_course_criteria(
    State(state): State<AppState>,
    legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CourseCriteriaService::delete(&state.db, legislator.legislator_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
