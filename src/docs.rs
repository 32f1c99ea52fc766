use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterLegislatorDto, RegisterResponse, User};
use crate::modules::courses::model::{
    Course, CourseCreatePayload, CourseFilterParams, CreateCourseDto, CreatedCourses,
    PaginatedCoursesResponse, UpdateCourseDto,
};
use crate::modules::criteria::model::{
    CourseCriteriaResponse, CreateCourseCriteriaDto, CreateFacultyCriteriaDto,
    CreateMajorCriteriaDto, CriteriaDetail, CriteriaDetailDto, FacultyCriteriaResponse,
    MajorCriteriaResponse, UpdateCourseCriteriaDto, UpdateFacultyCriteriaDto,
    UpdateMajorCriteriaDto,
};
use crate::modules::institutions::model::{
    CreateInstitutionDto, CreateReviewDto, Institution, InstitutionFilterParams,
    PaginatedInstitutionsResponse, ReviewRecord, SelectionsDto, UpdateInstitutionDto,
};
use crate::modules::legislators::model::{Legislator, UpdateLegislatorDto};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_legislator,
        crate::modules::auth::controller::login_user,
        crate::modules::legislators::controller::list_legislators,
        crate::modules::legislators::controller::get_legislator,
        crate::modules::legislators::controller::get_own_profile,
        crate::modules::legislators::controller::update_own_profile,
        crate::modules::legislators::controller::delete_own_account,
        crate::modules::criteria::controller::create_faculty_criteria,
        crate::modules::criteria::controller::list_faculty_criteria,
        crate::modules::criteria::controller::get_faculty_criteria,
        crate::modules::criteria::controller::update_faculty_criteria,
        crate::modules::criteria::controller::delete_faculty_criteria,
        crate::modules::criteria::controller::create_major_criteria,
        crate::modules::criteria::controller::list_major_criteria,
        crate::modules::criteria::controller::create_course_criteria,
        crate::modules::criteria::controller::list_course_criteria,
        crate::modules::institutions::controller::create_institution,
        crate::modules::institutions::controller::list_institutions,
        crate::modules::institutions::controller::get_institution,
        crate::modules::institutions::controller::replace_selections,
        crate::modules::institutions::controller::create_review,
        crate::modules::institutions::controller::list_reviews,
        crate::modules::courses::controller::create_courses,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            User,
            RegisterLegislatorDto,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            Legislator,
            UpdateLegislatorDto,
            CriteriaDetail,
            CriteriaDetailDto,
            FacultyCriteriaResponse,
            CreateFacultyCriteriaDto,
            UpdateFacultyCriteriaDto,
            MajorCriteriaResponse,
            CreateMajorCriteriaDto,
            UpdateMajorCriteriaDto,
            CourseCriteriaResponse,
            CreateCourseCriteriaDto,
            UpdateCourseCriteriaDto,
            Institution,
            CreateInstitutionDto,
            UpdateInstitutionDto,
            InstitutionFilterParams,
            PaginatedInstitutionsResponse,
            SelectionsDto,
            ReviewRecord,
            CreateReviewDto,
            Course,
            CreateCourseDto,
            CourseCreatePayload,
            CreatedCourses,
            UpdateCourseDto,
            CourseFilterParams,
            PaginatedCoursesResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Legislator registration and login"),
        (name = "Legislators", description = "Accreditation authority profiles"),
        (name = "Criteria", description = "Faculty, major and course criteria management"),
        (name = "Institutions", description = "Institution management, selections and reviews"),
        (name = "Faculties", description = "Academic divisions of institutions"),
        (name = "Programs", description = "Tracks within faculties"),
        (name = "Majors", description = "Specializations within faculties"),
        (name = "Courses", description = "Taught units and bulk registration"),
        (name = "Lookups", description = "Administrator-managed vocabularies")
    ),
    info(
        title = "Mizan API",
        version = "0.1.0",
        description = "Curriculum accreditation administration backend built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Opaque token issued at registration or login"))
                        .build(),
                ),
            )
        }
    }
}
