use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_institution, create_review, delete_institution, get_institution, get_selections,
    list_institutions, list_reviews, replace_selections, update_institution,
};

pub fn init_institutions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_institution).get(list_institutions))
        .route(
            "/{id}",
            get(get_institution)
                .put(update_institution)
                .delete(delete_institution),
        )
        .route(
            "/{id}/selections",
            get(get_selections).put(replace_selections),
        )
        .route("/{id}/reviews", post(create_review).get(list_reviews))
}
