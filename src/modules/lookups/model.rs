use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Governorate {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct City {
    pub id: Uuid,
    pub governorate_id: Uuid,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct InstituteCategory {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct AccountType {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct InstitutionType {
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct AccreditationStatus {
    pub id: Uuid,
    pub status_en: String,
    pub status_ar: String,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct CityFilterParams {
    pub governorate_id: Option<Uuid>,
}
