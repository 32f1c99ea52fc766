use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::courses::router::init_courses_router;
use crate::modules::criteria::router::{
    init_course_criteria_router, init_faculty_criteria_router, init_major_criteria_router,
};
use crate::modules::faculties::router::init_faculties_router;
use crate::modules::institutions::router::init_institutions_router;
use crate::modules::legislators::router::init_legislators_router;
use crate::modules::lookups::router::init_lookups_router;
use crate::modules::majors::router::{init_faculty_majors_router, init_majors_router};
use crate::modules::programs::router::{init_faculty_programs_router, init_programs_router};
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/legislators", init_legislators_router())
                .nest("/faculty-criteria", init_faculty_criteria_router())
                .nest("/major-criteria", init_major_criteria_router())
                .nest("/course-criteria", init_course_criteria_router())
                .nest("/institutions", init_institutions_router())
                .nest(
                    "/faculties",
                    init_faculties_router()
                        .nest("/{faculty_id}/programs", init_faculty_programs_router())
                        .nest("/{faculty_id}/majors", init_faculty_majors_router()),
                )
                .nest("/programs", init_programs_router())
                .nest("/majors", init_majors_router())
                .nest("/courses", init_courses_router())
                .nest("/lookups", init_lookups_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
