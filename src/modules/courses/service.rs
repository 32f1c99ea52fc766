use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{
    Course, CourseFilterParams, CreateCourseDto, PaginatedCoursesResponse, UpdateCourseDto,
};

const COURSE_COLUMNS: &str =
    "id, major_id, name_en, name_ar, institution_id, criteria_id, created_at, updated_at";

fn map_reference_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::bad_request(anyhow::anyhow!(
            "Course references an unknown institution or criteria"
        ));
    }
    error!(error = %e, "Database error writing course");
    AppError::from(e)
}

/// Resolve the owning major from the named faculty and major. Name matching
/// follows the registration data: English names, exact.
async fn resolve_major(
    tx: &mut Transaction<'_, Postgres>,
    dto: &CreateCourseDto,
) -> Result<Uuid, AppError> {
    let faculty: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM faculties WHERE name_en = $1 LIMIT 1")
            .bind(&dto.faculty_name)
            .fetch_optional(&mut **tx)
            .await?;

    let Some((faculty_id,)) = faculty else {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "faculty_name: Faculty name is invalid or does not exist"
        )));
    };

    let major: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM majors WHERE faculty_id = $1 AND name_en = $2 LIMIT 1")
            .bind(faculty_id)
            .bind(&dto.major_name)
            .fetch_optional(&mut **tx)
            .await?;

    let Some((major_id,)) = major else {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "major_name: Major name is invalid or does not exist"
        )));
    };

    Ok(major_id)
}

pub struct CourseService;

impl CourseService {
    /// Create a batch of courses in one transaction. The first item that
    /// fails to resolve aborts the request; nothing from the batch is
    /// persisted. Results come back in input order.
    #[instrument(skip(db, dtos), fields(count = dtos.len()))]
    pub async fn create_many(
        db: &PgPool,
        dtos: Vec<CreateCourseDto>,
    ) -> Result<Vec<Course>, AppError> {
        let mut tx = db.begin().await?;
        let mut courses = Vec::with_capacity(dtos.len());

        for dto in &dtos {
            let major_id = resolve_major(&mut tx, dto).await?;

            let course = sqlx::query_as::<_, Course>(&format!(
                "INSERT INTO courses (major_id, name_en, name_ar, institution_id, criteria_id)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING {}",
                COURSE_COLUMNS
            ))
            .bind(major_id)
            .bind(&dto.name_en)
            .bind(&dto.name_ar)
            .bind(dto.institution_id)
            .bind(dto.criteria_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_reference_error)?;

            courses.push(course);
        }

        tx.commit().await?;

        info!(count = courses.len(), "Courses created");

        Ok(courses)
    }

    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        filters: CourseFilterParams,
    ) -> Result<PaginatedCoursesResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut where_clause = String::new();
        let mut name_param = None;

        if let Some(name) = &filters.name {
            name_param = Some(format!("%{}%", name));
            where_clause.push_str(" AND (name_en ILIKE $1 OR name_ar ILIKE $1)");
        }
        if filters.major_id.is_some() {
            let idx = if name_param.is_some() { 2 } else { 1 };
            where_clause.push_str(&format!(" AND major_id = ${}", idx));
        }

        let count_query = format!("SELECT COUNT(*) FROM courses WHERE 1=1{}", where_clause);
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(name) = &name_param {
            count_sql = count_sql.bind(name);
        }
        if let Some(major_id) = filters.major_id {
            count_sql = count_sql.bind(major_id);
        }
        let total = count_sql.fetch_one(db).await?;

        let data_query = format!(
            "SELECT {} FROM courses WHERE 1=1{} ORDER BY created_at DESC LIMIT {} OFFSET {}",
            COURSE_COLUMNS, where_clause, limit, offset
        );
        let mut data_sql = sqlx::query_as::<_, Course>(&data_query);
        if let Some(name) = &name_param {
            data_sql = data_sql.bind(name);
        }
        if let Some(major_id) = filters.major_id {
            data_sql = data_sql.bind(major_id);
        }
        let courses = data_sql.fetch_all(db).await?;

        let has_more = offset + limit < total;

        debug!(total = %total, returned = %courses.len(), "Courses fetched");

        Ok(PaginatedCoursesResponse {
            data: courses,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more,
            },
        })
    }

    #[instrument(skip(db), fields(course.id = %id))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {} FROM courses WHERE id = $1",
            COURSE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course not found")))
    }

    #[instrument(skip(db, dto), fields(course.id = %id))]
    pub async fn update(db: &PgPool, id: Uuid, dto: UpdateCourseDto) -> Result<Course, AppError> {
        let existing = Self::get_by_id(db, id).await?;

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let major_id = dto.major_id.unwrap_or(existing.major_id);
        let institution_id = dto.institution_id.or(existing.institution_id);
        let criteria_id = dto.criteria_id.or(existing.criteria_id);

        let course = sqlx::query_as::<_, Course>(&format!(
            "UPDATE courses
             SET name_en = $1, name_ar = $2, major_id = $3, institution_id = $4,
                 criteria_id = $5, updated_at = NOW()
             WHERE id = $6
             RETURNING {}",
            COURSE_COLUMNS
        ))
        .bind(&name_en)
        .bind(&name_ar)
        .bind(major_id)
        .bind(institution_id)
        .bind(criteria_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(map_reference_error)?;

        info!(course.id = %course.id, "Course updated");

        Ok(course)
    }

    #[instrument(skip(db), fields(course.id = %id))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Course not found")));
        }

        info!(course.id = %id, "Course deleted");

        Ok(())
    }
}
