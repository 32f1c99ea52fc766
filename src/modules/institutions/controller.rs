use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::{AuthUser, CurrentLegislator};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    CreateInstitutionDto, CreateReviewDto, Institution, InstitutionFilterParams,
    PaginatedInstitutionsResponse, ReviewRecord, SelectionsDto, UpdateInstitutionDto,
};
use super::service::InstitutionService;

#[utoipa::path(
    post,
    path = "/api/institutions",
    request_body = CreateInstitutionDto,
    responses(
        (status = 201, description = "Institution created", body = Institution),
        (status = 400, description = "Validation error or unknown reference"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_institution(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateInstitutionDto>,
) -> Result<(StatusCode, Json<Institution>), AppError> {
    let institution = InstitutionService::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(institution)))
}

#[utoipa::path(
    get,
    path = "/api/institutions",
    params(InstitutionFilterParams),
    responses(
        (status = 200, description = "Paginated institutions", body = PaginatedInstitutionsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_institutions(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(filters): Query<InstitutionFilterParams>,
) -> Result<Json<PaginatedInstitutionsResponse>, AppError> {
    let institutions = InstitutionService::list(&state.db, filters).await?;
    Ok(Json(institutions))
}

#[utoipa::path(
    get,
    path = "/api/institutions/{id}",
    params(("id" = Uuid, Path, description = "Institution ID")),
    responses(
        (status = 200, description = "Institution", body = Institution),
        (status = 404, description = "Institution not found")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_institution(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Institution>, AppError> {
    let institution = InstitutionService::get_by_id(&state.db, id).await?;
    Ok(Json(institution))
}

#[utoipa::path(
    put,
    path = "/api/institutions/{id}",
    params(("id" = Uuid, Path, description = "Institution ID")),
    request_body = UpdateInstitutionDto,
    responses(
        (status = 200, description = "Institution updated", body = Institution),
        (status = 400, description = "Validation error or unknown reference"),
        (status = 404, description = "Institution not found")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_institution(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateInstitutionDto>,
) -> Result<Json<Institution>, AppError> {
    let institution = InstitutionService::update(&state.db, id, dto).await?;
    Ok(Json(institution))
}

/// Cascades to faculties, review history and selection rows.
#[utoipa::path(
    delete,
    path = "/api/institutions/{id}",
    params(("id" = Uuid, Path, description = "Institution ID")),
    responses(
        (status = 204, description = "Institution deleted"),
        (status = 404, description = "Institution not found")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_institution(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    InstitutionService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/institutions/{id}/selections",
    params(("id" = Uuid, Path, description = "Institution ID")),
    responses(
        (status = 200, description = "Selected course and criteria id sets", body = SelectionsDto),
        (status = 404, description = "Institution not found")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_selections(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SelectionsDto>, AppError> {
    let selections = InstitutionService::get_selections(&state.db, id).await?;
    Ok(Json(selections))
}

#[utoipa::path(
    put,
    path = "/api/institutions/{id}/selections",
    params(("id" = Uuid, Path, description = "Institution ID")),
    request_body = SelectionsDto,
    responses(
        (status = 200, description = "Selections replaced", body = SelectionsDto),
        (status = 400, description = "One or more ids do not exist"),
        (status = 404, description = "Institution not found")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn replace_selections(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<SelectionsDto>,
) -> Result<Json<SelectionsDto>, AppError> {
    let selections = InstitutionService::replace_selections(&state.db, id, dto).await?;
    Ok(Json(selections))
}

/// Record a review of the institution. Only legislators may review;
/// the record is append-only and flips `legislator_reviewed`.
#[utoipa::path(
    post,
    path = "/api/institutions/{id}/reviews",
    params(("id" = Uuid, Path, description = "Institution ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review recorded", body = ReviewRecord),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Caller has no legislator account"),
        (status = 404, description = "Institution not found")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _legislator, dto))]
pub async fn create_review(
    State(state): State<AppState>,
    _legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ReviewRecord>), AppError> {
    let record = InstitutionService::add_review(&state.db, id, dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/institutions/{id}/reviews",
    params(("id" = Uuid, Path, description = "Institution ID")),
    responses(
        (status = 200, description = "Review history, newest first", body = Vec<ReviewRecord>),
        (status = 404, description = "Institution not found")
    ),
    tag = "Institutions",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn list_reviews(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ReviewRecord>>, AppError> {
    let records = InstitutionService::list_reviews(&state.db, id).await?;
    Ok(Json(records))
}
