use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{
    CourseCriteria, CourseCriteriaResponse, CreateCourseCriteriaDto, CreateFacultyCriteriaDto,
    CreateMajorCriteriaDto, CriteriaDetail, CriteriaDetailDto, FacultyCriteria,
    FacultyCriteriaResponse, MajorCriteria, MajorCriteriaResponse, UpdateCourseCriteriaDto,
    UpdateFacultyCriteriaDto, UpdateMajorCriteriaDto,
};

const DETAIL_COLUMNS: &str =
    "id, description_en, description_ar, document_link, version, created_at, updated_at";

async fn insert_detail(
    tx: &mut Transaction<'_, Postgres>,
    dto: &CriteriaDetailDto,
) -> Result<CriteriaDetail, AppError> {
    let detail = sqlx::query_as::<_, CriteriaDetail>(&format!(
        "INSERT INTO criteria_details (description_en, description_ar, document_link, version)
         VALUES ($1, $2, $3, $4)
         RETURNING {}",
        DETAIL_COLUMNS
    ))
    .bind(&dto.description_en)
    .bind(&dto.description_ar)
    .bind(&dto.document_link)
    .bind(&dto.version)
    .fetch_one(&mut **tx)
    .await?;

    Ok(detail)
}

async fn update_detail(
    tx: &mut Transaction<'_, Postgres>,
    detail_id: Uuid,
    dto: &CriteriaDetailDto,
) -> Result<CriteriaDetail, AppError> {
    let detail = sqlx::query_as::<_, CriteriaDetail>(&format!(
        "UPDATE criteria_details
         SET description_en = $1, description_ar = $2, document_link = $3,
             version = $4, updated_at = NOW()
         WHERE id = $5
         RETURNING {}",
        DETAIL_COLUMNS
    ))
    .bind(&dto.description_en)
    .bind(&dto.description_ar)
    .bind(&dto.document_link)
    .bind(&dto.version)
    .bind(detail_id)
    .fetch_one(&mut **tx)
    .await?;

    Ok(detail)
}

/// Maintain the one-to-one detail row during an update: replace it in place
/// when one exists, create it when the criterion never had one.
async fn upsert_detail(
    tx: &mut Transaction<'_, Postgres>,
    existing_detail_id: Option<Uuid>,
    dto: &CriteriaDetailDto,
) -> Result<CriteriaDetail, AppError> {
    match existing_detail_id {
        Some(id) => update_detail(tx, id, dto).await,
        None => insert_detail(tx, dto).await,
    }
}

async fn fetch_detail(
    db: &PgPool,
    detail_id: Option<Uuid>,
) -> Result<Option<CriteriaDetail>, AppError> {
    let Some(detail_id) = detail_id else {
        return Ok(None);
    };

    let detail = sqlx::query_as::<_, CriteriaDetail>(&format!(
        "SELECT {} FROM criteria_details WHERE id = $1",
        DETAIL_COLUMNS
    ))
    .bind(detail_id)
    .fetch_optional(db)
    .await?;

    Ok(detail)
}

async fn fetch_details_by_ids(
    db: &PgPool,
    ids: &[Uuid],
) -> Result<HashMap<Uuid, CriteriaDetail>, AppError> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let details = sqlx::query_as::<_, CriteriaDetail>(&format!(
        "SELECT {} FROM criteria_details WHERE id = ANY($1)",
        DETAIL_COLUMNS
    ))
    .bind(ids)
    .fetch_all(db)
    .await?;

    Ok(details.into_iter().map(|d| (d.id, d)).collect())
}

pub struct FacultyCriteriaService;

impl FacultyCriteriaService {
    #[instrument(skip(db, dto), fields(legislator.id = %legislator_id))]
    pub async fn create(
        db: &PgPool,
        legislator_id: Uuid,
        dto: CreateFacultyCriteriaDto,
    ) -> Result<FacultyCriteriaResponse, AppError> {
        let mut tx = db.begin().await?;

        let detail = match &dto.detail {
            Some(detail_dto) => Some(insert_detail(&mut tx, detail_dto).await?),
            None => None,
        };

        let criteria = sqlx::query_as::<_, FacultyCriteria>(
            "INSERT INTO faculty_criteria (name_en, name_ar, legislator_id, detail_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at",
        )
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .bind(legislator_id)
        .bind(detail.as_ref().map(|d| d.id))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(criteria.id = %criteria.id, "Faculty criteria created");

        Ok(FacultyCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db), fields(legislator.id = %legislator_id))]
    pub async fn list(
        db: &PgPool,
        legislator_id: Uuid,
    ) -> Result<Vec<FacultyCriteriaResponse>, AppError> {
        let rows = sqlx::query_as::<_, FacultyCriteria>(
            "SELECT id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at
             FROM faculty_criteria
             WHERE legislator_id = $1
             ORDER BY created_at DESC",
        )
        .bind(legislator_id)
        .fetch_all(db)
        .await?;

        let detail_ids: Vec<Uuid> = rows.iter().filter_map(|r| r.detail_id).collect();
        let mut details = fetch_details_by_ids(db, &detail_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let detail = row.detail_id.and_then(|id| details.remove(&id));
                FacultyCriteriaResponse::from_parts(row, detail)
            })
            .collect())
    }

    #[instrument(skip(db), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn get(
        db: &PgPool,
        legislator_id: Uuid,
        id: Uuid,
    ) -> Result<FacultyCriteriaResponse, AppError> {
        let criteria = sqlx::query_as::<_, FacultyCriteria>(
            "SELECT id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at
             FROM faculty_criteria
             WHERE id = $1 AND legislator_id = $2",
        )
        .bind(id)
        .bind(legislator_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Faculty criteria not found")))?;

        let detail = fetch_detail(db, criteria.detail_id).await?;

        Ok(FacultyCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db, dto), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn update(
        db: &PgPool,
        legislator_id: Uuid,
        id: Uuid,
        dto: UpdateFacultyCriteriaDto,
    ) -> Result<FacultyCriteriaResponse, AppError> {
        let mut tx = db.begin().await?;

        let existing = sqlx::query_as::<_, FacultyCriteria>(
            "SELECT id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at
             FROM faculty_criteria
             WHERE id = $1 AND legislator_id = $2",
        )
        .bind(id)
        .bind(legislator_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Faculty criteria not found")))?;

        let detail = match &dto.detail {
            Some(detail_dto) => Some(upsert_detail(&mut tx, existing.detail_id, detail_dto).await?),
            None => None,
        };

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let detail_id = detail.as_ref().map(|d| d.id).or(existing.detail_id);

        let criteria = sqlx::query_as::<_, FacultyCriteria>(
            "UPDATE faculty_criteria
             SET name_en = $1, name_ar = $2, detail_id = $3, updated_at = NOW()
             WHERE id = $4
             RETURNING id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at",
        )
        .bind(&name_en)
        .bind(&name_ar)
        .bind(detail_id)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let detail = match detail {
            Some(detail) => Some(detail),
            None => fetch_detail(db, criteria.detail_id).await?,
        };

        Ok(FacultyCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn delete(db: &PgPool, legislator_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        let detail_id: Option<(Option<Uuid>,)> = sqlx::query_as(
            "SELECT detail_id FROM faculty_criteria WHERE id = $1 AND legislator_id = $2",
        )
        .bind(id)
        .bind(legislator_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((detail_id,)) = detail_id else {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Faculty criteria not found"
            )));
        };

        sqlx::query("DELETE FROM faculty_criteria WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        // The criterion references the detail, not the other way around, so
        // the orphaned detail row has to go explicitly.
        if let Some(detail_id) = detail_id {
            sqlx::query("DELETE FROM criteria_details WHERE id = $1")
                .bind(detail_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(criteria.id = %id, "Faculty criteria deleted");

        Ok(())
    }
}

pub struct MajorCriteriaService;

impl MajorCriteriaService {
    /// The parent faculty criterion must belong to the same legislator;
    /// ownership of major criteria is derived entirely from that parent.
    async fn assert_parent_owned(
        tx: &mut Transaction<'_, Postgres>,
        legislator_id: Uuid,
        faculty_criteria_id: Uuid,
    ) -> Result<(), AppError> {
        let parent: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM faculty_criteria WHERE id = $1 AND legislator_id = $2",
        )
        .bind(faculty_criteria_id)
        .bind(legislator_id)
        .fetch_optional(&mut **tx)
        .await?;

        if parent.is_none() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "faculty_criteria_id: Faculty criteria does not exist or belongs to another legislator"
            )));
        }

        Ok(())
    }

    #[instrument(skip(db, dto), fields(legislator.id = %legislator_id))]
    pub async fn create(
        db: &PgPool,
        legislator_id: Uuid,
        dto: CreateMajorCriteriaDto,
    ) -> Result<MajorCriteriaResponse, AppError> {
        let mut tx = db.begin().await?;

        Self::assert_parent_owned(&mut tx, legislator_id, dto.faculty_criteria_id).await?;

        let detail = match &dto.detail {
            Some(detail_dto) => Some(insert_detail(&mut tx, detail_dto).await?),
            None => None,
        };

        let criteria = sqlx::query_as::<_, MajorCriteria>(
            "INSERT INTO major_criteria (name_en, name_ar, faculty_criteria_id, detail_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name_en, name_ar, faculty_criteria_id, detail_id, created_at, updated_at",
        )
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .bind(dto.faculty_criteria_id)
        .bind(detail.as_ref().map(|d| d.id))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(criteria.id = %criteria.id, "Major criteria created");

        Ok(MajorCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db), fields(legislator.id = %legislator_id))]
    pub async fn list(
        db: &PgPool,
        legislator_id: Uuid,
    ) -> Result<Vec<MajorCriteriaResponse>, AppError> {
        let rows = sqlx::query_as::<_, MajorCriteria>(
            "SELECT mc.id, mc.name_en, mc.name_ar, mc.faculty_criteria_id, mc.detail_id,
                    mc.created_at, mc.updated_at
             FROM major_criteria mc
             INNER JOIN faculty_criteria fc ON fc.id = mc.faculty_criteria_id
             WHERE fc.legislator_id = $1
             ORDER BY mc.created_at DESC",
        )
        .bind(legislator_id)
        .fetch_all(db)
        .await?;

        let detail_ids: Vec<Uuid> = rows.iter().filter_map(|r| r.detail_id).collect();
        let mut details = fetch_details_by_ids(db, &detail_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let detail = row.detail_id.and_then(|id| details.remove(&id));
                MajorCriteriaResponse::from_parts(row, detail)
            })
            .collect())
    }

    async fn get_scoped(
        db: &PgPool,
        legislator_id: Uuid,
        id: Uuid,
    ) -> Result<MajorCriteria, AppError> {
        sqlx::query_as::<_, MajorCriteria>(
            "SELECT mc.id, mc.name_en, mc.name_ar, mc.faculty_criteria_id, mc.detail_id,
                    mc.created_at, mc.updated_at
             FROM major_criteria mc
             INNER JOIN faculty_criteria fc ON fc.id = mc.faculty_criteria_id
             WHERE mc.id = $1 AND fc.legislator_id = $2",
        )
        .bind(id)
        .bind(legislator_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Major criteria not found")))
    }

    #[instrument(skip(db), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn get(
        db: &PgPool,
        legislator_id: Uuid,
        id: Uuid,
    ) -> Result<MajorCriteriaResponse, AppError> {
        let criteria = Self::get_scoped(db, legislator_id, id).await?;
        let detail = fetch_detail(db, criteria.detail_id).await?;

        Ok(MajorCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db, dto), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn update(
        db: &PgPool,
        legislator_id: Uuid,
        id: Uuid,
        dto: UpdateMajorCriteriaDto,
    ) -> Result<MajorCriteriaResponse, AppError> {
        let existing = Self::get_scoped(db, legislator_id, id).await?;

        let mut tx = db.begin().await?;

        let faculty_criteria_id = dto
            .faculty_criteria_id
            .unwrap_or(existing.faculty_criteria_id);
        if faculty_criteria_id != existing.faculty_criteria_id {
            Self::assert_parent_owned(&mut tx, legislator_id, faculty_criteria_id).await?;
        }

        let detail = match &dto.detail {
            Some(detail_dto) => Some(upsert_detail(&mut tx, existing.detail_id, detail_dto).await?),
            None => None,
        };

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let detail_id = detail.as_ref().map(|d| d.id).or(existing.detail_id);

        let criteria = sqlx::query_as::<_, MajorCriteria>(
            "UPDATE major_criteria
             SET name_en = $1, name_ar = $2, faculty_criteria_id = $3, detail_id = $4,
                 updated_at = NOW()
             WHERE id = $5
             RETURNING id, name_en, name_ar, faculty_criteria_id, detail_id, created_at, updated_at",
        )
        .bind(&name_en)
        .bind(&name_ar)
        .bind(faculty_criteria_id)
        .bind(detail_id)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let detail = match detail {
            Some(detail) => Some(detail),
            None => fetch_detail(db, criteria.detail_id).await?,
        };

        Ok(MajorCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn delete(db: &PgPool, legislator_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let existing = Self::get_scoped(db, legislator_id, id).await?;

        let mut tx = db.begin().await?;

        sqlx::query("DELETE FROM major_criteria WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if let Some(detail_id) = existing.detail_id {
            sqlx::query("DELETE FROM criteria_details WHERE id = $1")
                .bind(detail_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(criteria.id = %id, "Major criteria deleted");

        Ok(())
    }
}

pub struct CourseCriteriaService;

impl CourseCriteriaService {
    #[instrument(skip(db, dto), fields(legislator.id = %legislator_id))]
    pub async fn create(
        db: &PgPool,
        legislator_id: Uuid,
        dto: CreateCourseCriteriaDto,
    ) -> Result<CourseCriteriaResponse, AppError> {
        let mut tx = db.begin().await?;

        let detail = match &dto.detail {
            Some(detail_dto) => Some(insert_detail(&mut tx, detail_dto).await?),
            None => None,
        };

        let criteria = sqlx::query_as::<_, CourseCriteria>(
            "INSERT INTO course_criteria (name_en, name_ar, legislator_id, detail_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at",
        )
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .bind(legislator_id)
        .bind(detail.as_ref().map(|d| d.id))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(criteria.id = %criteria.id, "Course criteria created");

        Ok(CourseCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db), fields(legislator.id = %legislator_id))]
    pub async fn list(
        db: &PgPool,
        legislator_id: Uuid,
    ) -> Result<Vec<CourseCriteriaResponse>, AppError> {
        let rows = sqlx::query_as::<_, CourseCriteria>(
            "SELECT id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at
             FROM course_criteria
             WHERE legislator_id = $1
             ORDER BY created_at DESC",
        )
        .bind(legislator_id)
        .fetch_all(db)
        .await?;

        let detail_ids: Vec<Uuid> = rows.iter().filter_map(|r| r.detail_id).collect();
        let mut details = fetch_details_by_ids(db, &detail_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let detail = row.detail_id.and_then(|id| details.remove(&id));
                CourseCriteriaResponse::from_parts(row, detail)
            })
            .collect())
    }

    #[instrument(skip(db), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn get(
        db: &PgPool,
        legislator_id: Uuid,
        id: Uuid,
    ) -> Result<CourseCriteriaResponse, AppError> {
        let criteria = sqlx::query_as::<_, CourseCriteria>(
            "SELECT id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at
             FROM course_criteria
             WHERE id = $1 AND legislator_id = $2",
        )
        .bind(id)
        .bind(legislator_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course criteria not found")))?;

        let detail = fetch_detail(db, criteria.detail_id).await?;

        Ok(CourseCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db, dto), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn update(
        db: &PgPool,
        legislator_id: Uuid,
        id: Uuid,
        dto: UpdateCourseCriteriaDto,
    ) -> Result<CourseCriteriaResponse, AppError> {
        let mut tx = db.begin().await?;

        let existing = sqlx::query_as::<_, CourseCriteria>(
            "SELECT id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at
             FROM course_criteria
             WHERE id = $1 AND legislator_id = $2",
        )
        .bind(id)
        .bind(legislator_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course criteria not found")))?;

        let detail = match &dto.detail {
            Some(detail_dto) => Some(upsert_detail(&mut tx, existing.detail_id, detail_dto).await?),
            None => None,
        };

        let name_en = dto.name_en.unwrap_or(existing.name_en);
        let name_ar = dto.name_ar.unwrap_or(existing.name_ar);
        let detail_id = detail.as_ref().map(|d| d.id).or(existing.detail_id);

        let criteria = sqlx::query_as::<_, CourseCriteria>(
            "UPDATE course_criteria
             SET name_en = $1, name_ar = $2, detail_id = $3, updated_at = NOW()
             WHERE id = $4
             RETURNING id, name_en, name_ar, legislator_id, detail_id, created_at, updated_at",
        )
        .bind(&name_en)
        .bind(&name_ar)
        .bind(detail_id)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        let detail = match detail {
            Some(detail) => Some(detail),
            None => fetch_detail(db, criteria.detail_id).await?,
        };

        Ok(CourseCriteriaResponse::from_parts(criteria, detail))
    }

    #[instrument(skip(db), fields(criteria.id = %id, legislator.id = %legislator_id))]
    pub async fn delete(db: &PgPool, legislator_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await?;

        let detail_id: Option<(Option<Uuid>,)> = sqlx::query_as(
            "SELECT detail_id FROM course_criteria WHERE id = $1 AND legislator_id = $2",
        )
        .bind(id)
        .bind(legislator_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((detail_id,)) = detail_id else {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course criteria not found"
            )));
        };

        sqlx::query("DELETE FROM course_criteria WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if let Some(detail_id) = detail_id {
            sqlx::query("DELETE FROM criteria_details WHERE id = $1")
                .bind(detail_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(criteria.id = %id, "Course criteria deleted");

        Ok(())
    }
}
