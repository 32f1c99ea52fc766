use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::faculties::service::FacultyService;
use crate::utils::errors::AppError;

use super::model::{CreateProgramDto, Program, UpdateProgramDto};

const PROGRAM_COLUMNS: &str = "id, faculty_id, name_en, name_ar, created_at, updated_at";

pub struct ProgramService;

impl ProgramService {
    #[instrument(skip(db, dto), fields(faculty.id = %faculty_id))]
    pub async fn create(
        db: &PgPool,
        faculty_id: Uuid,
        dto: CreateProgramDto,
    ) -> Result<Program, AppError> {
        FacultyService::get_by_id(db, faculty_id).await?;

        let program = sqlx::query_as::<_, Program>(&format!(
            "INSERT INTO programs (faculty_id, name_en, name_ar)
             VALUES ($1, $2, $3)
             RETURNING {}",
            PROGRAM_COLUMNS
        ))
        .bind(faculty_id)
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .fetch_one(db)
        .await?;

        info!(program.id = %program.id, "Program created");

        Ok(program)
    }

    #[instrument(skip(db), fields(faculty.id = %faculty_id))]
    pub async fn list_by_faculty(db: &PgPool, faculty_id: Uuid) -> Result<Vec<Program>, AppError> {
        FacultyService::get_by_id(db, faculty_id).await?;

        let programs = sqlx::query_as::<_, Program>(&format!(
            "SELECT {} FROM programs WHERE faculty_id = $1 ORDER BY name_en",
            PROGRAM_COLUMNS
        ))
        .bind(faculty_id)
        .fetch_all(db)
        .await?;

        Ok(programs)
    }

    #[instrument(skip(db), fields(program.id = %id))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>(&format!(
            "SELECT {} FROM programs WHERE id = $1",
            PROGRAM_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Program not found")))
    }

    #[instrument(skip(db, dto), fields(program.id = %id))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateProgramDto,
    ) -> Result<Program, AppError> {
        let existing = Self::get_by_id(db, id).await?;

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);

        let program = sqlx::query_as::<_, Program>(&format!(
            "UPDATE programs
             SET name_en = $1, name_ar = $2, updated_at = NOW()
             WHERE id = $3
             RETURNING {}",
            PROGRAM_COLUMNS
        ))
        .bind(&name_en)
        .bind(&name_ar)
        .bind(id)
        .fetch_one(db)
        .await?;

        info!(program.id = %program.id, "Program updated");

        Ok(program)
    }

    #[instrument(skip(db), fields(program.id = %id))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Program not found")));
        }

        info!(program.id = %id, "Program deleted");

        Ok(())
    }
}
