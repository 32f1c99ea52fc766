use sqlx::PgPool;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::modules::faculties::service::FacultyService;
use crate::utils::errors::AppError;

use super::model::{CreateMajorDto, Major, UpdateMajorDto};

const MAJOR_COLUMNS: &str = "id, faculty_id, name_en, name_ar, criteria_id, created_at, updated_at";

fn map_reference_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::bad_request(anyhow::anyhow!(
            "criteria_id: Major criteria does not exist"
        ));
    }
    error!(error = %e, "Database error writing major");
    AppError::from(e)
}

pub struct MajorService;

impl MajorService {
    #[instrument(skip(db, dto), fields(faculty.id = %faculty_id))]
    pub async fn create(
        db: &PgPool,
        faculty_id: Uuid,
        dto: CreateMajorDto,
    ) -> Result<Major, AppError> {
        FacultyService::get_by_id(db, faculty_id).await?;

        let major = sqlx::query_as::<_, Major>(&format!(
            "INSERT INTO majors (faculty_id, name_en, name_ar, criteria_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            MAJOR_COLUMNS
        ))
        .bind(faculty_id)
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .bind(dto.criteria_id)
        .fetch_one(db)
        .await
        .map_err(map_reference_error)?;

        info!(major.id = %major.id, "Major created");

        Ok(major)
    }

    #[instrument(skip(db), fields(faculty.id = %faculty_id))]
    pub async fn list_by_faculty(db: &PgPool, faculty_id: Uuid) -> Result<Vec<Major>, AppError> {
        FacultyService::get_by_id(db, faculty_id).await?;

        let majors = sqlx::query_as::<_, Major>(&format!(
            "SELECT {} FROM majors WHERE faculty_id = $1 ORDER BY name_en",
            MAJOR_COLUMNS
        ))
        .bind(faculty_id)
        .fetch_all(db)
        .await?;

        Ok(majors)
    }

    #[instrument(skip(db), fields(major.id = %id))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Major, AppError> {
        sqlx::query_as::<_, Major>(&format!(
            "SELECT {} FROM majors WHERE id = $1",
            MAJOR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Major not found")))
    }

    #[instrument(skip(db, dto), fields(major.id = %id))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateMajorDto) -> Result<Major, AppError> {
        let existing = Self::get_by_id(db, id).await?;

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let criteria_id = dto.criteria_id.or(existing.criteria_id);

        let major = sqlx::query_as::<_, Major>(&format!(
            "UPDATE majors
             SET name_en = $1, name_ar = $2, criteria_id = $3, updated_at = NOW()
             WHERE id = $4
             RETURNING {}",
            MAJOR_COLUMNS
        ))
        .bind(&name_en)
        .bind(&name_ar)
        .bind(criteria_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(map_reference_error)?;

        info!(major.id = %major.id, "Major updated");

        Ok(major)
    }

    #[instrument(skip(db), fields(major.id = %id))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM majors WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Major not found")));
        }

        info!(major.id = %id, "Major deleted");

        Ok(())
    }
}
