use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_user, register_legislator};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_legislator))
        .route("/login", post(login_user))
}
