use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::gateway::CategoryGateway;
use crate::features::categories::models::{Category, SearchCategoryQuery};
use crate::shared::types::Pagination;

#[derive(Debug, Clone, Default)]
pub struct ListCategoriesInput {
    pub page: i64,
    pub per_page: i64,
    pub terms: String,
    pub sort: String,
    pub direction: String,
}

/// Search categories. Paging values are passed to the gateway as given.
pub struct ListCategoriesUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl ListCategoriesUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: ListCategoriesInput) -> Result<Pagination<Category>> {
        let query = SearchCategoryQuery {
            page: input.page,
            per_page: input.per_page,
            terms: input.terms,
            sort: input.sort,
            direction: input.direction,
        };

        self.gateway.find_all(query).await
    }
}
