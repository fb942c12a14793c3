use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{Category, CategoryId, SearchCategoryQuery};
use crate::shared::types::Pagination;

/// Persistence boundary for categories.
///
/// Implementations report storage failures as [`AppError::Database`], including
/// a lookup that finds no row. Callers pass these errors through unchanged.
///
/// [`AppError::Database`]: crate::core::error::AppError::Database
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn create_category(&self, category: Category) -> Result<Category>;

    async fn get_category_by_id(&self, id: CategoryId) -> Result<Category>;

    async fn update_category(&self, category: Category) -> Result<Category>;

    /// Remove the row. Deleting an unknown id is not an error.
    async fn delete_category(&self, id: CategoryId) -> Result<()>;

    async fn find_all(&self, query: SearchCategoryQuery) -> Result<Pagination<Category>>;
}
