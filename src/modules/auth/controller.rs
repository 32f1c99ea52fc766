use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, RegisterLegislatorDto, RegisterResponse};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new legislator account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterLegislatorDto,
    responses(
        (status = 201, description = "Legislator registered successfully", body = RegisterResponse),
        (status = 400, description = "Validation error, password mismatch or email already registered", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_legislator(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterLegislatorDto>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let (legislator, token) = AuthService::register_legislator(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Legislator successfully registered".to_string(),
            token,
            legislator,
        }),
    ))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(&state.db, dto).await?;
    Ok(Json(response))
}
