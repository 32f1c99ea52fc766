use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_faculty, delete_faculty, get_faculty, list_faculties, update_faculty,
};

pub fn init_faculties_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_faculty).get(list_faculties))
        .route(
            "/{faculty_id}",
            get(get_faculty).put(update_faculty).delete(delete_faculty),
        )
}
