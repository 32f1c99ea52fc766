use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    list_account_types, list_accreditation_statuses, list_cities, list_governorates,
    list_institute_categories, list_institution_types,
};

pub fn init_lookups_router() -> Router<AppState> {
    Router::new()
        .route("/governorates", get(list_governorates))
        .route("/cities", get(list_cities))
        .route("/institute-categories", get(list_institute_categories))
        .route("/account-types", get(list_account_types))
        .route("/institution-types", get(list_institution_types))
        .route("/accreditation-statuses", get(list_accreditation_statuses))
}
