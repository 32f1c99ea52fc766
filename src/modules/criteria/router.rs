use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_course_criteria, create_faculty_criteria, create_major_criteria,
    delete_course_criteria, delete_faculty_criteria, delete_major_criteria, get_course_criteria,
    get_faculty_criteria, get_major_criteria, list_course_criteria, list_faculty_criteria,
    list_major_criteria, update_course_criteria, update_faculty_criteria, update_major_criteria,
};

pub fn init_faculty_criteria_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_faculty_criteria).get(list_faculty_criteria))
        .route(
            "/{id}",
            get(get_faculty_criteria)
                .put(update_faculty_criteria)
                .delete(delete_faculty_criteria),
        )
}

pub fn init_major_criteria_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_major_criteria).get(list_major_criteria))
        .route(
            "/{id}",
            get(get_major_criteria)
                .put(update_major_criteria)
                .delete(delete_major_criteria),
        )
}

pub fn init_course_criteria_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_course_criteria).get(list_course_criteria))
        .route(
            "/{id}",
            get(get_course_criteria)
                .put(update_course_criteria)
                .delete(delete_course_criteria),
        )
}
