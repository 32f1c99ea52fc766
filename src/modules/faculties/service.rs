use sqlx::PgPool;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateFacultyDto, Faculty, FacultyFilterParams, UpdateFacultyDto};

const FACULTY_COLUMNS: &str =
    "id, institution_id, name_en, name_ar, website_url, criteria_id, created_at, updated_at";

fn map_reference_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::bad_request(anyhow::anyhow!(
            "Faculty references an unknown institution or criteria"
        ));
    }
    error!(error = %e, "Database error writing faculty");
    AppError::from(e)
}

pub struct FacultyService;

impl FacultyService {
    #[instrument(skip(db, dto), fields(faculty.name = %dto.name_en))]
    pub async fn create(db: &PgPool, dto: CreateFacultyDto) -> Result<Faculty, AppError> {
        let faculty = sqlx::query_as::<_, Faculty>(&format!(
            "INSERT INTO faculties (institution_id, name_en, name_ar, website_url, criteria_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            FACULTY_COLUMNS
        ))
        .bind(dto.institution_id)
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .bind(&dto.website_url)
        .bind(dto.criteria_id)
        .fetch_one(db)
        .await
        .map_err(map_reference_error)?;

        info!(faculty.id = %faculty.id, "Faculty created");

        Ok(faculty)
    }

    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        filters: FacultyFilterParams,
    ) -> Result<Vec<Faculty>, AppError> {
        let faculties = match filters.institution_id {
            Some(institution_id) => {
                sqlx::query_as::<_, Faculty>(&format!(
                    "SELECT {} FROM faculties WHERE institution_id = $1 ORDER BY name_en",
                    FACULTY_COLUMNS
                ))
                .bind(institution_id)
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Faculty>(&format!(
                    "SELECT {} FROM faculties ORDER BY name_en",
                    FACULTY_COLUMNS
                ))
                .fetch_all(db)
                .await?
            }
        };

        Ok(faculties)
    }

    #[instrument(skip(db), fields(faculty.id = %id))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Faculty, AppError> {
        sqlx::query_as::<_, Faculty>(&format!(
            "SELECT {} FROM faculties WHERE id = $1",
            FACULTY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Faculty not found")))
    }

    #[instrument(skip(db, dto), fields(faculty.id = %id))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateFacultyDto,
    ) -> Result<Faculty, AppError> {
        let existing = Self::get_by_id(db, id).await?;

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let website_url = dto.website_url.unwrap_or(existing.website_url);
        let criteria_id = dto.criteria_id.or(existing.criteria_id);

        let faculty = sqlx::query_as::<_, Faculty>(&format!(
            "UPDATE faculties
             SET name_en = $1, name_ar = $2, website_url = $3, criteria_id = $4,
                 updated_at = NOW()
             WHERE id = $5
             RETURNING {}",
            FACULTY_COLUMNS
        ))
        .bind(&name_en)
        .bind(&name_ar)
        .bind(&website_url)
        .bind(criteria_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(map_reference_error)?;

        info!(faculty.id = %faculty.id, "Faculty updated");

        Ok(faculty)
    }

    #[instrument(skip(db), fields(faculty.id = %id))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Faculty not found")));
        }

        info!(faculty.id = %id, "Faculty deleted");

        Ok(())
    }
}
