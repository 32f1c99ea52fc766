use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Institution {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub url: String,
    pub ministry_listed: bool,
    pub legislator_reviewed: bool,
    pub accreditation_expiry_date: NaiveDate,
    pub institute_category_id: Uuid,
    pub account_type_id: Uuid,
    pub institution_type_id: Uuid,
    pub accreditation_status_id: Uuid,
    pub city_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInstitutionDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: String,
    #[validate(url)]
    pub url: String,
    pub ministry_listed: bool,
    pub accreditation_expiry_date: NaiveDate,
    pub institute_category_id: Uuid,
    pub account_type_id: Uuid,
    pub institution_type_id: Uuid,
    pub accreditation_status_id: Uuid,
    pub city_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInstitutionDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub ministry_listed: Option<bool>,
    pub legislator_reviewed: Option<bool>,
    pub accreditation_expiry_date: Option<NaiveDate>,
    pub institute_category_id: Option<Uuid>,
    pub account_type_id: Option<Uuid>,
    pub institution_type_id: Option<Uuid>,
    pub accreditation_status_id: Option<Uuid>,
    pub city_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct InstitutionFilterParams {
    /// Case-insensitive match against either language's name
    pub name: Option<String>,
    pub city_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedInstitutionsResponse {
    pub data: Vec<Institution>,
    pub meta: PaginationMeta,
}

/// The id sets an institution has adopted. `PUT` replaces all four sets
/// wholesale; absent arrays clear the corresponding set.
#[derive(Debug, Serialize, Deserialize, Default, ToSchema)]
pub struct SelectionsDto {
    #[serde(default)]
    pub course_ids: Vec<Uuid>,
    #[serde(default)]
    pub faculty_criteria_ids: Vec<Uuid>,
    #[serde(default)]
    pub major_criteria_ids: Vec<Uuid>,
    #[serde(default)]
    pub course_criteria_ids: Vec<Uuid>,
}

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct ReviewRecord {
    pub id: Uuid,
    pub institution_id: Uuid,
    pub review_date: NaiveDate,
    pub status: String,
    pub comments: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewDto {
    pub review_date: NaiveDate,
    #[validate(length(min = 1, max = 100))]
    pub status: String,
    pub comments: Option<String>,
}
