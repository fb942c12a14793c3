#[cfg(test)]
use std::cmp::Ordering;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum::Router;
#[cfg(test)]
use tokio::sync::RwLock;

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::features::categories::{
    gateway::CategoryGateway,
    models::{Category, CategoryId, SearchCategoryQuery, SortDirection, SortField},
    routes,
    use_cases::CategoryUseCases,
};
#[cfg(test)]
use crate::shared::types::Pagination;

/// Gateway operation that a test gateway can be told to fail
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOp {
    Create,
    Get,
    Update,
    Delete,
    FindAll,
}

/// Storage error returned by a failing test gateway
#[cfg(test)]
pub fn storage_error() -> AppError {
    AppError::Database(sqlx::Error::Protocol("database error".to_string()))
}

/// Category gateway backed by a vector.
///
/// Filtering, ordering and paging follow the PostgreSQL gateway: terms match
/// name or description case-sensitively, the sort falls back to `created_at`,
/// and pages below 1 are served as page 1.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryCategoryGateway {
    categories: RwLock<Vec<Category>>,
    failing: Option<GatewayOp>,
}

#[cfg(test)]
#[allow(dead_code)]
impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: RwLock::new(categories),
            failing: None,
        }
    }

    /// Same store, but `op` always fails with [`storage_error`]
    pub fn failing_on(mut self, op: GatewayOp) -> Self {
        self.failing = Some(op);
        self
    }

    pub async fn snapshot(&self) -> Vec<Category> {
        self.categories.read().await.clone()
    }

    pub async fn find(&self, id: CategoryId) -> Option<Category> {
        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id() == id)
            .cloned()
    }

    fn check(&self, op: GatewayOp) -> Result<()> {
        if self.failing == Some(op) {
            Err(storage_error())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
fn compare(a: &Category, b: &Category, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name().cmp(b.name()),
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    }
}

#[cfg(test)]
#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create_category(&self, category: Category) -> Result<Category> {
        self.check(GatewayOp::Create)?;
        self.categories.write().await.push(category.clone());
        Ok(category)
    }

    async fn get_category_by_id(&self, id: CategoryId) -> Result<Category> {
        self.check(GatewayOp::Get)?;
        self.find(id)
            .await
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))
    }

    async fn update_category(&self, category: Category) -> Result<Category> {
        self.check(GatewayOp::Update)?;
        let mut categories = self.categories.write().await;
        if let Some(stored) = categories.iter_mut().find(|c| c.id() == category.id()) {
            *stored = category.clone();
        }
        Ok(category)
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        self.check(GatewayOp::Delete)?;
        self.categories.write().await.retain(|c| c.id() != id);
        Ok(())
    }

    async fn find_all(&self, query: SearchCategoryQuery) -> Result<Pagination<Category>> {
        self.check(GatewayOp::FindAll)?;

        let mut matching: Vec<Category> = self
            .categories
            .read()
            .await
            .iter()
            .filter(|c| {
                query.terms.is_empty()
                    || c.name().contains(&query.terms)
                    || c.description().contains(&query.terms)
            })
            .cloned()
            .collect();

        let field = query.sort_field();
        match query.sort_direction() {
            SortDirection::Asc => matching.sort_by(|a, b| compare(a, b, field)),
            SortDirection::Desc => matching.sort_by(|a, b| compare(b, a, field)),
        }

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();

        Ok(Pagination::new(query.page(), query.limit(), total, items))
    }
}

/// Category routes wired to the given gateway, ready for `axum_test::TestServer`
#[cfg(test)]
pub fn category_router(gateway: Arc<dyn CategoryGateway>) -> Router {
    routes::routes(Arc::new(CategoryUseCases::new(gateway)))
}
