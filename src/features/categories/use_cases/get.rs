use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::gateway::CategoryGateway;
use crate::features::categories::models::{Category, CategoryId};

#[derive(Debug, Clone)]
pub struct GetCategoryByIdInput {
    pub id: String,
}

pub struct GetCategoryByIdUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl GetCategoryByIdUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: GetCategoryByIdInput) -> Result<Category> {
        let id: CategoryId = input.id.parse()?;

        self.gateway.get_category_by_id(id).await
    }
}
