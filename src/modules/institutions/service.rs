use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{
    CreateInstitutionDto, CreateReviewDto, Institution, InstitutionFilterParams,
    PaginatedInstitutionsResponse, ReviewRecord, SelectionsDto, UpdateInstitutionDto,
};

const INSTITUTION_COLUMNS: &str = "id, name_en, name_ar, url, ministry_listed, \
     legislator_reviewed, accreditation_expiry_date, institute_category_id, \
     account_type_id, institution_type_id, accreditation_status_id, city_id, \
     created_at, updated_at";

fn map_reference_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::bad_request(anyhow::anyhow!(
            "Institution references an unknown city or classification value"
        ));
    }
    error!(error = %e, "Database error writing institution");
    AppError::from(e)
}

pub struct InstitutionService;

impl InstitutionService {
    #[instrument(skip(db, dto), fields(institution.name = %dto.name_en))]
    pub async fn create(
        db: &PgPool,
        dto: CreateInstitutionDto,
    ) -> Result<Institution, AppError> {
        let institution = sqlx::query_as::<_, Institution>(&format!(
            "INSERT INTO institutions (
                 name_en, name_ar, url, ministry_listed, accreditation_expiry_date,
                 institute_category_id, account_type_id, institution_type_id,
                 accreditation_status_id, city_id
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {}",
            INSTITUTION_COLUMNS
        ))
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .bind(&dto.url)
        .bind(dto.ministry_listed)
        .bind(dto.accreditation_expiry_date)
        .bind(dto.institute_category_id)
        .bind(dto.account_type_id)
        .bind(dto.institution_type_id)
        .bind(dto.accreditation_status_id)
        .bind(dto.city_id)
        .fetch_one(db)
        .await
        .map_err(map_reference_error)?;

        info!(institution.id = %institution.id, "Institution created");

        Ok(institution)
    }

    #[instrument(skip(db, filters))]
    pub async fn list(
        db: &PgPool,
        filters: InstitutionFilterParams,
    ) -> Result<PaginatedInstitutionsResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut where_clause = String::new();
        let mut name_param = None;

        if let Some(name) = &filters.name {
            name_param = Some(format!("%{}%", name));
            where_clause.push_str(" AND (name_en ILIKE $1 OR name_ar ILIKE $1)");
        }
        if filters.city_id.is_some() {
            let idx = if name_param.is_some() { 2 } else { 1 };
            where_clause.push_str(&format!(" AND city_id = ${}", idx));
        }

        let count_query = format!("SELECT COUNT(*) FROM institutions WHERE 1=1{}", where_clause);
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(name) = &name_param {
            count_sql = count_sql.bind(name);
        }
        if let Some(city_id) = filters.city_id {
            count_sql = count_sql.bind(city_id);
        }
        let total = count_sql.fetch_one(db).await?;

        let data_query = format!(
            "SELECT {} FROM institutions WHERE 1=1{} ORDER BY created_at DESC LIMIT {} OFFSET {}",
            INSTITUTION_COLUMNS, where_clause, limit, offset
        );
        let mut data_sql = sqlx::query_as::<_, Institution>(&data_query);
        if let Some(name) = &name_param {
            data_sql = data_sql.bind(name);
        }
        if let Some(city_id) = filters.city_id {
            data_sql = data_sql.bind(city_id);
        }
        let institutions = data_sql.fetch_all(db).await?;

        let has_more = offset + limit < total;

        debug!(total = %total, returned = %institutions.len(), "Institutions fetched");

        Ok(PaginatedInstitutionsResponse {
            data: institutions,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more,
            },
        })
    }

    #[instrument(skip(db), fields(institution.id = %id))]
    pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<Institution, AppError> {
        sqlx::query_as::<_, Institution>(&format!(
            "SELECT {} FROM institutions WHERE id = $1",
            INSTITUTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Institution not found")))
    }

    #[instrument(skip(db, dto), fields(institution.id = %id))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateInstitutionDto,
    ) -> Result<Institution, AppError> {
        let existing = Self::get_by_id(db, id).await?;

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let url = dto.url.unwrap_or(existing.url);
        let ministry_listed = dto.ministry_listed.unwrap_or(existing.ministry_listed);
        let legislator_reviewed = dto
            .legislator_reviewed
            .unwrap_or(existing.legislator_reviewed);
        let accreditation_expiry_date = dto
            .accreditation_expiry_date
            .unwrap_or(existing.accreditation_expiry_date);
        let institute_category_id = dto
            .institute_category_id
            .unwrap_or(existing.institute_category_id);
        let account_type_id = dto.account_type_id.unwrap_or(existing.account_type_id);
        let institution_type_id = dto
            .institution_type_id
            .unwrap_or(existing.institution_type_id);
        let accreditation_status_id = dto
            .accreditation_status_id
            .unwrap_or(existing.accreditation_status_id);
        let city_id = dto.city_id.unwrap_or(existing.city_id);

        let institution = sqlx::query_as::<_, Institution>(&format!(
            "UPDATE institutions
             SET name_en = $1, name_ar = $2, url = $3, ministry_listed = $4,
                 legislator_reviewed = $5, accreditation_expiry_date = $6,
                 institute_category_id = $7, account_type_id = $8,
                 institution_type_id = $9, accreditation_status_id = $10,
                 city_id = $11, updated_at = NOW()
             WHERE id = $12
             RETURNING {}",
            INSTITUTION_COLUMNS
        ))
        .bind(&name_en)
        .bind(&name_ar)
        .bind(&url)
        .bind(ministry_listed)
        .bind(legislator_reviewed)
        .bind(accreditation_expiry_date)
        .bind(institute_category_id)
        .bind(account_type_id)
        .bind(institution_type_id)
        .bind(accreditation_status_id)
        .bind(city_id)
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(map_reference_error)?;

        info!(institution.id = %institution.id, "Institution updated");

        Ok(institution)
    }

    #[instrument(skip(db), fields(institution.id = %id))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM institutions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Institution not found")));
        }

        info!(institution.id = %id, "Institution deleted");

        Ok(())
    }

    /// Replace all four selection sets in one transaction. Every id must
    /// resolve; otherwise nothing changes.
    #[instrument(skip(db, dto), fields(institution.id = %id))]
    pub async fn replace_selections(
        db: &PgPool,
        id: Uuid,
        dto: SelectionsDto,
    ) -> Result<SelectionsDto, AppError> {
        Self::get_by_id(db, id).await?;

        let course_ids = dedup(dto.course_ids);
        let faculty_criteria_ids = dedup(dto.faculty_criteria_ids);
        let major_criteria_ids = dedup(dto.major_criteria_ids);
        let course_criteria_ids = dedup(dto.course_criteria_ids);

        let mut tx = db.begin().await?;

        assert_all_exist(&mut tx, "courses", "course_ids", &course_ids).await?;
        assert_all_exist(
            &mut tx,
            "faculty_criteria",
            "faculty_criteria_ids",
            &faculty_criteria_ids,
        )
        .await?;
        assert_all_exist(
            &mut tx,
            "major_criteria",
            "major_criteria_ids",
            &major_criteria_ids,
        )
        .await?;
        assert_all_exist(
            &mut tx,
            "course_criteria",
            "course_criteria_ids",
            &course_criteria_ids,
        )
        .await?;

        replace_join_rows(
            &mut tx,
            "institution_selected_courses",
            "course_id",
            id,
            &course_ids,
        )
        .await?;
        replace_join_rows(
            &mut tx,
            "institution_faculty_criteria",
            "faculty_criteria_id",
            id,
            &faculty_criteria_ids,
        )
        .await?;
        replace_join_rows(
            &mut tx,
            "institution_major_criteria",
            "major_criteria_id",
            id,
            &major_criteria_ids,
        )
        .await?;
        replace_join_rows(
            &mut tx,
            "institution_course_criteria",
            "course_criteria_id",
            id,
            &course_criteria_ids,
        )
        .await?;

        tx.commit().await?;

        info!(institution.id = %id, "Institution selections replaced");

        Ok(SelectionsDto {
            course_ids,
            faculty_criteria_ids,
            major_criteria_ids,
            course_criteria_ids,
        })
    }

    #[instrument(skip(db), fields(institution.id = %id))]
    pub async fn get_selections(db: &PgPool, id: Uuid) -> Result<SelectionsDto, AppError> {
        Self::get_by_id(db, id).await?;

        let course_ids = fetch_join_ids(db, "institution_selected_courses", "course_id", id).await?;
        let faculty_criteria_ids =
            fetch_join_ids(db, "institution_faculty_criteria", "faculty_criteria_id", id).await?;
        let major_criteria_ids =
            fetch_join_ids(db, "institution_major_criteria", "major_criteria_id", id).await?;
        let course_criteria_ids =
            fetch_join_ids(db, "institution_course_criteria", "course_criteria_id", id).await?;

        Ok(SelectionsDto {
            course_ids,
            faculty_criteria_ids,
            major_criteria_ids,
            course_criteria_ids,
        })
    }

    /// Append a review record and mark the institution as reviewed, in one
    /// transaction. Records are never updated or removed afterwards.
    #[instrument(skip(db, dto), fields(institution.id = %id))]
    pub async fn add_review(
        db: &PgPool,
        id: Uuid,
        dto: CreateReviewDto,
    ) -> Result<ReviewRecord, AppError> {
        Self::get_by_id(db, id).await?;

        let mut tx = db.begin().await?;

        let record = sqlx::query_as::<_, ReviewRecord>(
            "INSERT INTO review_history (institution_id, review_date, status, comments)
             VALUES ($1, $2, $3, $4)
             RETURNING id, institution_id, review_date, status, comments, created_at",
        )
        .bind(id)
        .bind(dto.review_date)
        .bind(&dto.status)
        .bind(&dto.comments)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE institutions SET legislator_reviewed = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            institution.id = %id,
            review.id = %record.id,
            review.status = %record.status,
            "Review recorded"
        );

        Ok(record)
    }

    #[instrument(skip(db), fields(institution.id = %id))]
    pub async fn list_reviews(db: &PgPool, id: Uuid) -> Result<Vec<ReviewRecord>, AppError> {
        Self::get_by_id(db, id).await?;

        let records = sqlx::query_as::<_, ReviewRecord>(
            "SELECT id, institution_id, review_date, status, comments, created_at
             FROM review_history
             WHERE institution_id = $1
             ORDER BY review_date DESC, created_at DESC",
        )
        .bind(id)
        .fetch_all(db)
        .await?;

        Ok(records)
    }
}

fn dedup(mut ids: Vec<Uuid>) -> Vec<Uuid> {
    ids.sort();
    ids.dedup();
    ids
}

async fn assert_all_exist(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    field: &str,
    ids: &[Uuid],
) -> Result<(), AppError> {
    if ids.is_empty() {
        return Ok(());
    }

    let count: i64 =
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {} WHERE id = ANY($1)", table))
            .bind(ids)
            .fetch_one(&mut **tx)
            .await?;

    if count as usize != ids.len() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "{}: one or more ids do not exist",
            field
        )));
    }

    Ok(())
}

async fn replace_join_rows(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    column: &str,
    institution_id: Uuid,
    ids: &[Uuid],
) -> Result<(), AppError> {
    sqlx::query(&format!("DELETE FROM {} WHERE institution_id = $1", table))
        .bind(institution_id)
        .execute(&mut **tx)
        .await?;

    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(&format!(
        "INSERT INTO {} (institution_id, {}) SELECT $1, unnest($2::uuid[])",
        table, column
    ))
    .bind(institution_id)
    .bind(ids)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn fetch_join_ids(
    db: &PgPool,
    table: &str,
    column: &str,
    institution_id: Uuid,
) -> Result<Vec<Uuid>, AppError> {
    let ids: Vec<(Uuid,)> = sqlx::query_as(&format!(
        "SELECT {} FROM {} WHERE institution_id = $1 ORDER BY {}",
        column, table, column
    ))
    .bind(institution_id)
    .fetch_all(db)
    .await?;

    Ok(ids.into_iter().map(|(id,)| id).collect())
}
