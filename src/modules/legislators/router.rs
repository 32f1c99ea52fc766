use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    delete_own_account, get_legislator, get_own_profile, list_legislators, update_own_profile,
};

pub fn init_legislators_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_legislators))
        .route(
            "/me",
            get(get_own_profile)
                .put(update_own_profile)
                .delete(delete_own_account),
        )
        .route("/{id}", get(get_legislator))
}
