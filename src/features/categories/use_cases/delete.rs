use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::gateway::CategoryGateway;
use crate::features::categories::models::CategoryId;

#[derive(Debug, Clone)]
pub struct DeleteCategoryInput {
    pub id: String,
}

/// Hard-delete a category. Existence is not checked first.
pub struct DeleteCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DeleteCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: DeleteCategoryInput) -> Result<()> {
        let id: CategoryId = input.id.parse()?;

        self.gateway.delete_category(id).await?;

        tracing::info!("Category deleted: id={}", id);

        Ok(())
    }
}
