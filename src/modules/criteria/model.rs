use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Versioned documentation attached one-to-one to a criterion.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct CriteriaDetail {
    pub id: Uuid,
    pub description_en: String,
    pub description_ar: String,
    pub document_link: Option<String>,
    pub version: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriteriaDetailDto {
    #[validate(length(min = 1))]
    pub description_en: String,
    #[validate(length(min = 1))]
    pub description_ar: String,
    #[validate(url)]
    pub document_link: Option<String>,
    pub version: Option<String>,
}

#[derive(FromRow, Debug, Clone)]
pub struct FacultyCriteria {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub legislator_id: Uuid,
    pub detail_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(FromRow, Debug, Clone)]
pub struct MajorCriteria {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub faculty_criteria_id: Uuid,
    pub detail_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(FromRow, Debug, Clone)]
pub struct CourseCriteria {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub legislator_id: Uuid,
    pub detail_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Wire form of a faculty criterion with its detail embedded.
#[derive(Serialize, Debug, ToSchema)]
pub struct FacultyCriteriaResponse {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub legislator_id: Uuid,
    pub detail: Option<CriteriaDetail>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl FacultyCriteriaResponse {
    pub fn from_parts(criteria: FacultyCriteria, detail: Option<CriteriaDetail>) -> Self {
        Self {
            id: criteria.id,
            name_en: criteria.name_en,
            name_ar: criteria.name_ar,
            legislator_id: criteria.legislator_id,
            detail,
            created_at: criteria.created_at,
            updated_at: criteria.updated_at,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct MajorCriteriaResponse {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub faculty_criteria_id: Uuid,
    pub detail: Option<CriteriaDetail>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl MajorCriteriaResponse {
    pub fn from_parts(criteria: MajorCriteria, detail: Option<CriteriaDetail>) -> Self {
        Self {
            id: criteria.id,
            name_en: criteria.name_en,
            name_ar: criteria.name_ar,
            faculty_criteria_id: criteria.faculty_criteria_id,
            detail,
            created_at: criteria.created_at,
            updated_at: criteria.updated_at,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CourseCriteriaResponse {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub legislator_id: Uuid,
    pub detail: Option<CriteriaDetail>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl CourseCriteriaResponse {
    pub fn from_parts(criteria: CourseCriteria, detail: Option<CriteriaDetail>) -> Self {
        Self {
            id: criteria.id,
            name_en: criteria.name_en,
            name_ar: criteria.name_ar,
            legislator_id: criteria.legislator_id,
            detail,
            created_at: criteria.created_at,
            updated_at: criteria.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFacultyCriteriaDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: String,
    #[validate(nested)]
    pub detail: Option<CriteriaDetailDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFacultyCriteriaDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: Option<String>,
    #[validate(nested)]
    pub detail: Option<CriteriaDetailDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMajorCriteriaDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: String,
    pub faculty_criteria_id: Uuid,
    #[validate(nested)]
    pub detail: Option<CriteriaDetailDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMajorCriteriaDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: Option<String>,
    pub faculty_criteria_id: Option<Uuid>,
    #[validate(nested)]
    pub detail: Option<CriteriaDetailDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseCriteriaDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: String,
    #[validate(nested)]
    pub detail: Option<CriteriaDetailDto>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseCriteriaDto {
    #[validate(length(min = 1, max = 255))]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name_ar: Option<String>,
    #[validate(nested)]
    pub detail: Option<CriteriaDetailDto>,
}
