use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::legislators::model::Legislator;

/// An authenticated principal. The password hash is never selected into
/// this struct; services that need it use a local row type.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name_en: String,
    pub name_ar: String,
    pub institution_id: Option<Uuid>,
    pub account_type_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterLegislatorDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub password_confirmation: String,
    #[validate(length(min = 1))]
    pub name_en: String,
    #[validate(length(min = 1))]
    pub name_ar: String,
    #[validate(length(min = 1))]
    pub location_branch_name_en: String,
    #[validate(length(min = 1))]
    pub location_branch_name_ar: String,
    #[validate(length(min = 1))]
    pub primary_contact_name: String,
    #[validate(url)]
    pub website: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub governorate: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub landline: String,
    #[serde(default = "default_publicly_listed")]
    pub publicly_listed: bool,
}

fn default_publicly_listed() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
    pub legislator: Legislator,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}
