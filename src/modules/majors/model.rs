use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A specialization within a faculty, optionally governed by a major-level
/// criterion.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Major {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub criteria_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMajorDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: String,
    pub criteria_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMajorDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: Option<String>,
    pub criteria_id: Option<Uuid>,
}
