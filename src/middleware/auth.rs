use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::User;
use crate::modules::legislators::model::Legislator;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that resolves the bearer token to the authenticated user.
///
/// Tokens are opaque strings looked up in the `auth_tokens` table; a token
/// stays valid until the owning account is deleted.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn user_id(&self) -> uuid::Uuid {
        self.0.id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let user = sqlx::query_as::<_, User>(
            "SELECT u.id, u.username, u.email, u.name_en, u.name_ar,
                    u.institution_id, u.account_type_id, u.created_at, u.updated_at
             FROM users u
             INNER JOIN auth_tokens t ON t.user_id = u.id
             WHERE t.token = $1",
        )
        .bind(token)
        .fetch_optional(&state.db)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::unauthorized("Invalid token"))?;

        Ok(AuthUser(user))
    }
}

/// Extractor for the legislator capability.
///
/// Resolves the authenticated user's legislator record via a typed lookup;
/// plain accounts without one are rejected with 403. Handlers receive the
/// full [`Legislator`] row so ownership scoping never needs a second query.
#[derive(Debug, Clone)]
pub struct CurrentLegislator(pub Legislator);

impl CurrentLegislator {
    pub fn legislator_id(&self) -> uuid::Uuid {
        self.0.id
    }
}

impl FromRequestParts<AppState> for CurrentLegislator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let legislator = sqlx::query_as::<_, Legislator>(
            "SELECT id, user_id, name_en, name_ar, email,
                    location_branch_name_en, location_branch_name_ar,
                    primary_contact_name, website, country, governorate, city,
                    phone, landline, publicly_listed, created_at, updated_at
             FROM legislators
             WHERE user_id = $1",
        )
        .bind(auth_user.user_id())
        .fetch_optional(&state.db)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| {
            AppError::forbidden("Access denied. A legislator account is required.")
        })?;

        Ok(CurrentLegislator(legislator))
    }
}
