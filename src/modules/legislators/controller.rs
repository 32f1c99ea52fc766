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

use super::model::{Legislator, UpdateLegislatorDto};
use super::service::LegislatorService;

/// Public directory of accreditation bodies
#[utoipa::path(
    get,
    path = "/api/legislators",
    responses(
        (status = 200, description = "Publicly listed legislators", body = Vec<Legislator>)
    ),
    tag = "Legislators"
)]
#[instrument(skip(state))]
pub async fn list_legislators(
    State(state): State<AppState>,
) -> Result<Json<Vec<Legislator>>, AppError> {
    let legislators = LegislatorService::list_public(&state.db).await?;
    Ok(Json(legislators))
}

#[utoipa::path(
    get,
    path = "/api/legislators/{id}",
    params(("id" = Uuid, Path, description = "Legislator ID")),
    responses(
        (status = 200, description = "Legislator profile", body = Legislator),
        (status = 404, description = "Unknown or unlisted legislator")
    ),
    tag = "Legislators"
)]
#[instrument(skip(state))]
pub async fn get_legislator(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Legislator>, AppError> {
    let legislator = LegislatorService::get_public_by_id(&state.db, id).await?;
    Ok(Json(legislator))
}

/// The caller's own profile
#[utoipa::path(
    get,
    path = "/api/legislators/me",
    responses(
        (status = 200, description = "Own profile", body = Legislator),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Legislators",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_own_profile(
    CurrentLegislator(legislator): CurrentLegislator,
) -> Json<Legislator> {
    Json(legislator)
}

#[utoipa::path(
    put,
    path = "/api/legislators/me",
    request_body = UpdateLegislatorDto,
    responses(
        (status = 200, description = "Profile updated", body = Legislator),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Legislators",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator, dto))]
pub async fn update_own_profile(
    State(state): State<AppState>,
    CurrentLegislator(legislator): CurrentLegislator,
    ValidatedJson(dto): ValidatedJson<UpdateLegislatorDto>,
) -> Result<Json<Legislator>, AppError> {
    let updated = LegislatorService::update_profile(&state.db, legislator, dto).await?;
    Ok(Json(updated))
}

/// Delete the caller's account. Cascades to the linked user, its tokens
/// and all criteria owned by this legislator.
#[utoipa::path(
    delete,
    path = "/api/legislators/me",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Legislators",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, legislator))]
pub async fn delete_own_account(
    State(state): State<AppState>,
    CurrentLegislator(legislator): CurrentLegislator,
) -> Result<StatusCode, AppError> {
    LegislatorService::delete_account(&state.db, legislator.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
