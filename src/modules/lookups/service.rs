use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{
    AccountType, AccreditationStatus, City, Governorate, InstituteCategory, InstitutionType,
};

pub struct LookupService;

impl LookupService {
    #[instrument(skip(db))]
    pub async fn list_governorates(db: &PgPool) -> Result<Vec<Governorate>, AppError> {
        let rows = sqlx::query_as::<_, Governorate>(
            "SELECT id, name_en, name_ar FROM governorates ORDER BY name_en",
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(db))]
    pub async fn list_cities(
        db: &PgPool,
        governorate_id: Option<Uuid>,
    ) -> Result<Vec<City>, AppError> {
        let rows = match governorate_id {
            Some(governorate_id) => {
                sqlx::query_as::<_, City>(
                    "SELECT id, governorate_id, name_en, name_ar FROM cities
                     WHERE governorate_id = $1 ORDER BY name_en",
                )
                .bind(governorate_id)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, City>(
                    "SELECT id, governorate_id, name_en, name_ar FROM cities ORDER BY name_en",
                )
                .fetch_all(db)
                .await?
            }
        };

        Ok(rows)
    }

    #[instrument(skip(db))]
    pub async fn list_institute_categories(
        db: &PgPool,
    ) -> Result<Vec<InstituteCategory>, AppError> {
        let rows = sqlx::query_as::<_, InstituteCategory>(
            "SELECT id, name_en, name_ar FROM institute_categories ORDER BY name_en",
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(db))]
    pub async fn list_account_types(db: &PgPool) -> Result<Vec<AccountType>, AppError> {
        let rows = sqlx::query_as::<_, AccountType>(
            "SELECT id, name_en, name_ar FROM account_types ORDER BY name_en",
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(db))]
    pub async fn list_institution_types(db: &PgPool) -> Result<Vec<InstitutionType>, AppError> {
        let rows = sqlx::query_as::<_, InstitutionType>(
            "SELECT id, name_en, name_ar FROM institution_types ORDER BY name_en",
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(db))]
    pub async fn list_accreditation_statuses(
        db: &PgPool,
    ) -> Result<Vec<AccreditationStatus>, AppError> {
        let rows = sqlx::query_as::<_, AccreditationStatus>(
            "SELECT id, status_en, status_ar FROM accreditation_statuses ORDER BY status_en",
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }
}
