use utoipa::{Modify, OpenApi};

use crate::features::schools::{dtos as schools_dtos, handlers as schools_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        schools_handlers::list_schools,
        schools_handlers::add_school,
        schools_handlers::add_sample_schools,
        schools_handlers::list_schools_by_distance,
    ),
    components(
        schemas(
            schools_dtos::CreateSchoolDto,
            schools_dtos::SchoolResponseDto,
            schools_dtos::RankedSchoolDto,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "schools", description = "School directory and proximity search"),
    ),
    info(
        title = "Schoolfinder API",
        version = "0.1.0",
        description = "School directory with proximity search by great-circle distance",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
