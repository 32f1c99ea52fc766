use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{
    AccountType, AccreditationStatus, City, CityFilterParams, Governorate, InstituteCategory,
    InstitutionType,
};
use super::service::LookupService;

#[utoipa::path(
    get,
    path = "/api/lookups/governorates",
    responses((status = 200, description = "Governorates", body = Vec<Governorate>)),
    tag = "Lookups"
)]
#[instrument(skip(state))]
pub async fn list_governorates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Governorate>>, AppError> {
    Ok(Json(LookupService::list_governorates(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/api/lookups/cities",
    params(CityFilterParams),
    responses((status = 200, description = "Cities", body = Vec<City>)),
    tag = "Lookups"
)]
#[instrument(skip(state))]
pub async fn list_cities(
    State(state): State<AppState>,
    Query(filters): Query<CityFilterParams>,
) -> Result<Json<Vec<City>>, AppError> {
    Ok(Json(
        LookupService::list_cities(&state.db, filters.governorate_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/lookups/institute-categories",
    responses((status = 200, description = "Institute categories", body = Vec<InstituteCategory>)),
    tag = "Lookups"
)]
#[instrument(skip(state))]
pub async fn list_institute_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<InstituteCategory>>, AppError> {
    Ok(Json(
        LookupService::list_institute_categories(&state.db).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/lookups/account-types",
    responses((status = 200, description = "Account types", body = Vec<AccountType>)),
    tag = "Lookups"
)]
#[instrument(skip(state))]
pub async fn list_account_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountType>>, AppError> {
    Ok(Json(LookupService::list_account_types(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/api/lookups/institution-types",
    responses((status = 200, description = "Institution types", body = Vec<InstitutionType>)),
    tag = "Lookups"
)]
#[instrument(skip(state))]
pub async fn list_institution_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<InstitutionType>>, AppError> {
    Ok(Json(LookupService::list_institution_types(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/api/lookups/accreditation-statuses",
    responses((status = 200, description = "Accreditation statuses", body = Vec<AccreditationStatus>)),
    tag = "Lookups"
)]
#[instrument(skip(state))]
pub async fn list_accreditation_statuses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccreditationStatus>>, AppError> {
    Ok(Json(
        LookupService::list_accreditation_statuses(&state.db).await?,
    ))
}
