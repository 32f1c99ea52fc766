use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_program, delete_program, get_program, list_programs, update_program,
};

/// Nested under `/api/faculties/{faculty_id}/programs`.
pub fn init_faculty_programs_router() -> Router<AppState> {
    Router::new().route("/", post(create_program).get(list_programs))
}

/// Flat routes for addressing a program directly.
pub fn init_programs_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(get_program).put(update_program).delete(delete_program),
    )
}
