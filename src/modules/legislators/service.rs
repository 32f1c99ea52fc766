use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{Legislator, UpdateLegislatorDto};

const LEGISLATOR_COLUMNS: &str = "id, user_id, name_en, name_ar, email, \
     location_branch_name_en, location_branch_name_ar, primary_contact_name, \
     website, country, governorate, city, phone, landline, publicly_listed, \
     created_at, updated_at";

pub struct LegislatorService;

impl LegislatorService {
    /// Public directory: only profiles that opted into listing.
    #[instrument(skip(db))]
    pub async fn list_public(db: &PgPool) -> Result<Vec<Legislator>, AppError> {
        let legislators = sqlx::query_as::<_, Legislator>(&format!(
            "SELECT {} FROM legislators WHERE publicly_listed = TRUE ORDER BY name_en",
            LEGISLATOR_COLUMNS
        ))
        .fetch_all(db)
        .await?;

        Ok(legislators)
    }

    #[instrument(skip(db), fields(legislator.id = %id))]
    pub async fn get_public_by_id(db: &PgPool, id: Uuid) -> Result<Legislator, AppError> {
        sqlx::query_as::<_, Legislator>(&format!(
            "SELECT {} FROM legislators WHERE id = $1 AND publicly_listed = TRUE",
            LEGISLATOR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Legislator not found")))
    }

    #[instrument(skip(db, dto, existing), fields(legislator.id = %existing.id))]
    pub async fn update_profile(
        db: &PgPool,
        existing: Legislator,
        dto: UpdateLegislatorDto,
    ) -> Result<Legislator, AppError> {
        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let location_branch_name_en = dto
            .location_branch_name_en
            .unwrap_or(existing.location_branch_name_en);
        let location_branch_name_ar = dto
            .location_branch_name_ar
            .unwrap_or(existing.location_branch_name_ar);
        let primary_contact_name = dto
            .primary_contact_name
            .unwrap_or(existing.primary_contact_name);
        let website = dto.website.unwrap_or(existing.website);
        let country = dto.country.unwrap_or(existing.country);
        let governorate = dto.governorate.unwrap_or(existing.governorate);
        let city = dto.city.unwrap_or(existing.city);
        let phone = dto.phone.unwrap_or(existing.phone);
        let landline = dto.landline.unwrap_or(existing.landline);
        let publicly_listed = dto.publicly_listed.unwrap_or(existing.publicly_listed);

        let legislator = sqlx::query_as::<_, Legislator>(&format!(
            "UPDATE legislators
             SET name_en = $1, name_ar = $2, location_branch_name_en = $3,
                 location_branch_name_ar = $4, primary_contact_name = $5,
                 website = $6, country = $7, governorate = $8, city = $9,
                 phone = $10, landline = $11, publicly_listed = $12,
                 updated_at = NOW()
             WHERE id = $13
             RETURNING {}",
            LEGISLATOR_COLUMNS
        ))
        .bind(&name_en)
        .bind(&name_ar)
        .bind(&location_branch_name_en)
        .bind(&location_branch_name_ar)
        .bind(&primary_contact_name)
        .bind(&website)
        .bind(&country)
        .bind(&governorate)
        .bind(&city)
        .bind(&phone)
        .bind(&landline)
        .bind(publicly_listed)
        .bind(existing.id)
        .fetch_one(db)
        .await?;

        info!(legislator.id = %legislator.id, "Legislator profile updated");

        Ok(legislator)
    }

    /// Deleting the account removes the user row; the legislator profile,
    /// its tokens and every criterion it owns go with it through the
    /// schema's cascade rules.
    #[instrument(skip(db), fields(user.id = %user_id))]
    pub async fn delete_account(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            debug!(user.id = %user_id, "Account already gone");
            return Err(AppError::not_found(anyhow::anyhow!("Account not found")));
        }

        info!(user.id = %user_id, "Legislator account deleted");

        Ok(())
    }
}
