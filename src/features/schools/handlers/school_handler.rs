//! School handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::schools::dtos::{
    CreateSchoolDto, DistanceQuery, RankedSchoolDto, SchoolResponseDto,
};
use crate::features::schools::services::SchoolService;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// List all schools
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All schools", body = Vec<SchoolResponseDto>),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "schools"
)]
pub async fn list_schools(
    State(service): State<Arc<SchoolService>>,
) -> Result<Json<Vec<SchoolResponseDto>>> {
    let schools = service.list().await?;
    let dtos: Vec<SchoolResponseDto> = schools.into_iter().map(Into::into).collect();

    Ok(Json(dtos))
}

/// Add a new school
///
/// All four fields are required; coordinates must be within valid ranges.
#[utoipa::path(
    post,
    path = "/addSchool",
    request_body = CreateSchoolDto,
    responses(
        (status = 201, description = "School added successfully", body = MessageResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "schools"
)]
pub async fn add_school(
    State(service): State<Arc<SchoolService>>,
    AppJson(dto): AppJson<CreateSchoolDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let new_school = dto.into_new_school()?;

    service.create(new_school).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("School added successfully")),
    ))
}

/// Insert the bundled sample schools
#[utoipa::path(
    post,
    path = "/addMultipleSchools",
    responses(
        (status = 201, description = "Sample schools added successfully", body = MessageResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "schools"
)]
pub async fn add_sample_schools(
    State(service): State<Arc<SchoolService>>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    service.seed_samples().await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Sample schools added successfully")),
    ))
}

/// List schools sorted by distance from a reference point
///
/// Distances are great-circle kilometers; nearest school first.
#[utoipa::path(
    get,
    path = "/listSchools",
    params(DistanceQuery),
    responses(
        (status = 200, description = "Schools sorted by ascending distance", body = Vec<RankedSchoolDto>),
        (status = 400, description = "Missing coordinates", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    tag = "schools"
)]
pub async fn list_schools_by_distance(
    State(service): State<Arc<SchoolService>>,
    Query(query): Query<DistanceQuery>,
) -> Result<Json<Vec<RankedSchoolDto>>> {
    let (latitude, longitude) = query
        .coordinates()
        .ok_or_else(|| AppError::BadRequest("Latitude and longitude are required".to_string()))?;

    let ranked = service.list_by_distance(latitude, longitude).await?;
    let dtos: Vec<RankedSchoolDto> = ranked.into_iter().map(Into::into).collect();

    Ok(Json(dtos))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;

    use crate::features::schools::routes;
    use crate::features::schools::services::SchoolService;

    /// Router backed by a lazy pool: no connection is made until a query
    /// runs, so request-boundary rejections can be tested without Postgres.
    fn test_server() -> TestServer {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/schoolfinder_test")
            .expect("lazy pool");
        let router = routes::routes(Arc::new(SchoolService::new(pool)));

        TestServer::new(router).expect("test server")
    }

    #[tokio::test]
    async fn test_list_schools_by_distance_requires_both_coordinates() {
        let server = test_server();

        for path in [
            "/listSchools",
            "/listSchools?latitude=40.7128",
            "/listSchools?longitude=-74.0060",
        ] {
            let response = server.get(path).await;
            response.assert_status_bad_request();
            response.assert_json(&json!({"error": "Latitude and longitude are required"}));
        }
    }

    #[tokio::test]
    async fn test_list_schools_by_distance_rejects_non_numeric_coordinates() {
        let server = test_server();

        let response = server
            .get("/listSchools?latitude=north&longitude=-74.0060")
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"error": "Latitude and longitude are required"}));
    }

    #[tokio::test]
    async fn test_add_school_rejects_missing_fields() {
        let server = test_server();

        let response = server
            .post("/addSchool")
            .json(&json!({"name": "Greenwood High", "address": "123 Elm Street"}))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({"error": "All fields are required"}));
    }

    #[tokio::test]
    async fn test_add_school_rejects_out_of_range_latitude() {
        let server = test_server();

        let response = server
            .post("/addSchool")
            .json(&json!({
                "name": "Greenwood High",
                "address": "123 Elm Street",
                "latitude": 123.0,
                "longitude": -74.0060
            }))
            .await;

        response.assert_status_bad_request();
        assert!(response.text().contains("latitude must be between -90 and 90"));
    }

    #[tokio::test]
    async fn test_add_school_rejects_malformed_json() {
        let server = test_server();

        let response = server
            .post("/addSchool")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;

        response.assert_status_bad_request();
    }
}
