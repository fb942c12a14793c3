use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::gateway::CategoryGateway;
use crate::features::categories::models::CategoryId;

#[derive(Debug, Clone)]
pub struct UpdateCategoryInput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

/// Load a category, apply new values, validate, then store it
pub struct UpdateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl UpdateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: UpdateCategoryInput) -> Result<UpdateCategoryOutput> {
        let id: CategoryId = input.id.parse()?;

        let mut category = self.gateway.get_category_by_id(id).await?;

        category.update(input.name, input.description, input.is_active);
        category.validate()?;

        let category = self.gateway.update_category(category).await?;

        tracing::info!(
            "Category updated: id={}, active={}",
            category.id(),
            category.is_active()
        );

        Ok(UpdateCategoryOutput { id: category.id() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::categories::models::Category;
    use crate::shared::test_helpers::{storage_error, GatewayOp, InMemoryCategoryGateway};
    use tokio_test::{assert_err, assert_ok};

    fn input(id: CategoryId, name: &str, is_active: bool) -> UpdateCategoryInput {
        UpdateCategoryInput {
            id: id.to_string(),
            name: name.to_string(),
            description: "new description".to_string(),
            is_active,
        }
    }

    #[tokio::test]
    async fn test_update_applies_values() {
        let category = Category::new("Movies", "old", true);
        let gateway = Arc::new(InMemoryCategoryGateway::with_categories(vec![
            category.clone(),
        ]));
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        let output = assert_ok!(use_case.execute(input(category.id(), "Series", true)).await);

        assert_eq!(output.id, category.id());
        let stored = gateway.find(category.id()).await.unwrap();
        assert_eq!(stored.name(), "Series");
        assert_eq!(stored.description(), "new description");
        assert!(stored.is_active());
        assert_eq!(stored.created_at(), category.created_at());
    }

    #[tokio::test]
    async fn test_update_deactivates() {
        let category = Category::new("Movies", "old", true);
        let gateway = Arc::new(InMemoryCategoryGateway::with_categories(vec![
            category.clone(),
        ]));
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        assert_ok!(use_case.execute(input(category.id(), "Movies", false)).await);

        let stored = gateway.find(category.id()).await.unwrap();
        assert!(!stored.is_active());
        assert!(stored.deleted_at().is_some());
    }

    #[tokio::test]
    async fn test_update_keeps_earlier_deleted_at() {
        let category = Category::new("Movies", "old", false);
        let deleted_at = category.deleted_at();
        let gateway = Arc::new(InMemoryCategoryGateway::with_categories(vec![
            category.clone(),
        ]));
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        assert_ok!(use_case.execute(input(category.id(), "Movies", false)).await);

        let stored = gateway.find(category.id()).await.unwrap();
        assert_eq!(stored.deleted_at(), deleted_at);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_name_without_persisting() {
        let category = Category::new("Movies", "old", true);
        let gateway = Arc::new(InMemoryCategoryGateway::with_categories(vec![
            category.clone(),
        ]));
        let use_case = UpdateCategoryUseCase::new(gateway.clone());

        let err = assert_err!(use_case.execute(input(category.id(), "  ", true)).await);

        assert!(matches!(err, AppError::Validation(ref e) if e.len() == 2));
        assert_eq!(gateway.find(category.id()).await.unwrap(), category);
    }

    #[tokio::test]
    async fn test_update_malformed_id() {
        let use_case = UpdateCategoryUseCase::new(Arc::new(InMemoryCategoryGateway::new()));

        let err = assert_err!(
            use_case
                .execute(UpdateCategoryInput {
                    id: "123".to_string(),
                    name: "Movies".to_string(),
                    description: String::new(),
                    is_active: true,
                })
                .await
        );

        assert!(matches!(err, AppError::InvalidIdentifier(_)));
    }

    #[tokio::test]
    async fn test_update_missing_category() {
        let use_case = UpdateCategoryUseCase::new(Arc::new(InMemoryCategoryGateway::new()));

        let err = assert_err!(use_case.execute(input(CategoryId::new(), "Movies", true)).await);

        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }

    #[tokio::test]
    async fn test_update_propagates_gateway_error() {
        let category = Category::new("Movies", "old", true);
        let gateway = Arc::new(
            InMemoryCategoryGateway::with_categories(vec![category.clone()])
                .failing_on(GatewayOp::Update),
        );
        let use_case = UpdateCategoryUseCase::new(gateway);

        let err = assert_err!(use_case.execute(input(category.id(), "Series", true)).await);

        assert_eq!(err.to_string(), storage_error().to_string());
    }
}
