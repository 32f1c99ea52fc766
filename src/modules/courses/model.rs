use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub major_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub institution_id: Option<Uuid>,
    pub criteria_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A course to create. The owning faculty and major are named, not
/// identified: both are matched on their English name.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: String,
    #[validate(length(min = 1))]
    pub faculty_name: String,
    #[validate(length(min = 1))]
    pub major_name: String,
    pub institution_id: Option<Uuid>,
    pub criteria_id: Option<Uuid>,
}

/// The create endpoint takes either a single course object or an ordered
/// array of them.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CourseCreatePayload {
    Single(CreateCourseDto),
    Bulk(Vec<CreateCourseDto>),
}

/// Echoes the created records in the same shape the request used.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CreatedCourses {
    Single(Course),
    Bulk(Vec<Course>),
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: Option<String>,
    pub major_id: Option<Uuid>,
    pub institution_id: Option<Uuid>,
    pub criteria_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct CourseFilterParams {
    pub major_id: Option<Uuid>,
    /// Case-insensitive match against either language's name
    pub name: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub data: Vec<Course>,
    pub meta: PaginationMeta,
}
