use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::types::Pagination;

#[derive(OpenApi)]
#[openapi(
    paths(
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
    ),
    components(
        schemas(
            categories_dtos::CategoryRequestDto,
            categories_dtos::CategoryIdDto,
            categories_dtos::CategoryResponseDto,
            Pagination<categories_dtos::CategoryResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Category management"),
    ),
    info(
        title = "Admin Catalog API",
        version = "0.1.0",
        description = "Category management for the admin catalog",
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
