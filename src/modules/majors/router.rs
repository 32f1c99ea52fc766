use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_major, delete_major, get_major, list_majors, update_major};

/// Nested under `/api/faculties/{faculty_id}/majors`.
pub fn init_faculty_majors_router() -> Router<AppState> {
    Router::new().route("/", post(create_major).get(list_majors))
}

/// Flat routes for addressing a major directly.
pub fn init_majors_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(get_major).put(update_major).delete(delete_major),
    )
}
