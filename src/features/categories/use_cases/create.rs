use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::gateway::CategoryGateway;
use crate::features::categories::models::{Category, CategoryId};

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

/// Validate a new category and hand it to the gateway
pub struct CreateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl CreateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: CreateCategoryInput) -> Result<CreateCategoryOutput> {
        let category = Category::new(input.name, input.description, input.is_active);

        category.validate()?;

        let category = self.gateway.create_category(category).await?;

        tracing::info!(
            "Category created: id={}, active={}",
            category.id(),
            category.is_active()
        );

        Ok(CreateCategoryOutput { id: category.id() })
    }
}
