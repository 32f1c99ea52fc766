use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::middleware::auth::CurrentLegislator;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::{ValidatedJson, format_errors};

use super::model::{
    Course, CourseCreatePayload, CourseFilterParams, CreatedCourses, PaginatedCoursesResponse,
    UpdateCourseDto,
};
use super::service::CourseService;

/// Create one course or an ordered batch. The response mirrors the request
/// shape: an object in, an object out; an array in, an array out in the
/// same order.
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CourseCreatePayload,
    responses(
        (status = 201, description = "Course(s) created", body = CreatedCourses),
        (status = 400, description = "Validation error or unresolvable faculty/major name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _legislator, payload))]
pub async fn create_courses(
    State(state): State<AppState>,
    _legislator: CurrentLegislator,
    Json(payload): Json<CourseCreatePayload>,
) -> Result<(StatusCode, Json<CreatedCourses>), AppError> {
    // The payload is an untagged single-or-array, so field validation runs
    // here rather than in the extractor.
    let (dtos, single) = match payload {
        CourseCreatePayload::Single(dto) => (vec![dto], true),
        CourseCreatePayload::Bulk(dtos) => (dtos, false),
    };

    if dtos.is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "At least one course is required"
        )));
    }

    for dto in &dtos {
        dto.validate()
            .map_err(|errors| AppError::bad_request(anyhow::anyhow!("{}", format_errors(&errors))))?;
    }

    let mut courses = CourseService::create_many(&state.db, dtos).await?;

    let created = if single {
        CreatedCourses::Single(courses.remove(0))
    } else {
        CreatedCourses::Bulk(courses)
    };

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/courses",
    params(CourseFilterParams),
    responses(
        (status = 200, description = "Paginated courses", body = PaginatedCoursesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller has no legislator account")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _legislator))]
pub async fn list_courses(
    State(state): State<AppState>,
    _legislator: CurrentLegislator,
    Query(filters): Query<CourseFilterParams>,
) -> Result<Json<PaginatedCoursesResponse>, AppError> {
    let courses = CourseService::list(&state.db, filters).await?;
    Ok(Json(courses))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _legislator))]
pub async fn get_course(
    State(state): State<AppState>,
    _legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::get_by_id(&state.db, id).await?;
    Ok(Json(course))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 400, description = "Validation error or unknown reference"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _legislator, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    _legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<Json<Course>, AppError> {
    let course = CourseService::update(&state.db, id, dto).await?;
    Ok(Json(course))
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found")
    ),
    tag = "Courses",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _legislator))]
pub async fn delete_course(
    State(state): State<AppState>,
    _legislator: CurrentLegislator,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CourseService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
