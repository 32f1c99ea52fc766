use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An academic division of an institution, optionally governed by a
/// faculty-level criterion.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Faculty {
    pub id: Uuid,
    pub institution_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub website_url: String,
    pub criteria_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFacultyDto {
    pub institution_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: String,
    #[validate(url)]
    pub website_url: String,
    pub criteria_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFacultyDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: Option<String>,
    #[validate(url)]
    pub website_url: Option<String>,
    pub criteria_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct FacultyFilterParams {
    pub institution_id: Option<Uuid>,
}
