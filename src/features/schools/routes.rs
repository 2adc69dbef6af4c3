//! School routes

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::schools::handlers;
use crate::features::schools::services::SchoolService;

/// Create routes for the schools feature
pub fn routes(service: Arc<SchoolService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_schools))
        .route("/addSchool", post(handlers::add_school))
        .route("/addMultipleSchools", post(handlers::add_sample_schools))
        .route("/listSchools", get(handlers::list_schools_by_distance))
        .with_state(service)
}
