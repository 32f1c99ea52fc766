use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An accreditation authority profile, one-to-one with a user account.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Legislator {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub email: String,
    pub location_branch_name_en: String,
    pub location_branch_name_ar: String,
    pub primary_contact_name: String,
    pub website: String,
    pub country: String,
    pub governorate: String,
    pub city: String,
    pub phone: String,
    pub landline: String,
    pub publicly_listed: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Partial update of the caller's own profile. Absent fields are left
/// untouched.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLegislatorDto {
    #[validate(length(min = 1))]
    pub name_en: Option<String>,
    #[validate(length(min = 1))]
    pub name_ar: Option<String>,
    #[validate(length(min = 1))]
    pub location_branch_name_en: Option<String>,
    #[validate(length(min = 1))]
    pub location_branch_name_ar: Option<String>,
    #[validate(length(min = 1))]
    pub primary_contact_name: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(length(min = 1))]
    pub country: Option<String>,
    #[validate(length(min = 1))]
    pub governorate: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub landline: Option<String>,
    pub publicly_listed: Option<bool>,
}
