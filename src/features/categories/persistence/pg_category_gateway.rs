use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::gateway::CategoryGateway;
use crate::features::categories::models::{Category, CategoryId, SearchCategoryQuery};
use crate::shared::types::Pagination;

const CATEGORY_COLUMNS: &str =
    "id, name, description, activated, created_at, updated_at, deleted_at";

/// Row of the `categories` table
#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    description: String,
    activated: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::from_parts(
            CategoryId::from(row.id),
            row.name,
            row.description,
            row.activated,
            row.created_at,
            row.updated_at,
            row.deleted_at,
        )
    }
}

/// SQL for one `find_all` call.
///
/// With search terms the pattern is `$1` and paging follows as `$2`/`$3`,
/// otherwise paging is `$1`/`$2`.
#[derive(Debug)]
struct SearchSql {
    count: String,
    select: String,
    pattern: Option<String>,
}

fn build_search_sql(query: &SearchCategoryQuery) -> SearchSql {
    let pattern = query.terms_pattern();

    let (where_clause, paging) = if pattern.is_some() {
        ("WHERE name LIKE $1 OR description LIKE $1", "LIMIT $2 OFFSET $3")
    } else {
        ("", "LIMIT $1 OFFSET $2")
    };

    let count = format!("SELECT COUNT(*) FROM categories {}", where_clause);

    let select = format!(
        r#"
        SELECT {}
        FROM categories
        {}
        ORDER BY {} {}
        {}
        "#,
        CATEGORY_COLUMNS,
        where_clause,
        query.sort_field().as_sql(),
        query.sort_direction().as_sql(),
        paging
    );

    SearchSql {
        count,
        select,
        pattern,
    }
}

/// Category gateway backed by PostgreSQL
pub struct PgCategoryGateway {
    pool: PgPool,
}

impl PgCategoryGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryGateway for PgCategoryGateway {
    async fn create_category(&self, category: Category) -> Result<Category> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, activated, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(category.id().as_uuid())
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(category)
    }

    async fn get_category_by_id(&self, id: CategoryId) -> Result<Category> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);

        let row: CategoryRow = sqlx::query_as(&query)
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by id {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(row.into())
    }

    async fn update_category(&self, category: Category) -> Result<Category> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = $1, description = $2, activated = $3, updated_at = $4, deleted_at = $5
            WHERE id = $6
            "#,
        )
        .bind(category.name())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .bind(category.id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", category.id(), e);
            AppError::Database(e)
        })?;

        Ok(category)
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::debug!(
            "Delete category {}: rows_affected={}",
            id,
            result.rows_affected()
        );

        Ok(())
    }

    async fn find_all(&self, query: SearchCategoryQuery) -> Result<Pagination<Category>> {
        let sql = build_search_sql(&query);

        // Total before paging
        let mut count = sqlx::query_scalar::<_, i64>(&sql.count);
        if let Some(ref pattern) = sql.pattern {
            count = count.bind(pattern.clone());
        }
        let total = count.fetch_one(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to count categories: {:?}", e);
            AppError::Database(e)
        })?;

        let mut select = sqlx::query_as::<_, CategoryRow>(&sql.select);
        if let Some(ref pattern) = sql.pattern {
            select = select.bind(pattern.clone());
        }
        let rows = select
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Pagination::new(
            query.page(),
            query.limit(),
            total,
            rows.into_iter().map(Category::from).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(terms: &str, sort: &str, direction: &str) -> SearchCategoryQuery {
        SearchCategoryQuery {
            page: 1,
            per_page: 10,
            terms: terms.to_string(),
            sort: sort.to_string(),
            direction: direction.to_string(),
        }
    }

    fn squash(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_search_sql_without_terms() {
        let sql = build_search_sql(&search("", "", ""));

        assert_eq!(sql.pattern, None);
        assert_eq!(squash(&sql.count), "SELECT COUNT(*) FROM categories");
        assert_eq!(
            squash(&sql.select),
            "SELECT id, name, description, activated, created_at, updated_at, deleted_at \
             FROM categories ORDER BY created_at ASC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_search_sql_with_terms_binds_pattern() {
        let sql = build_search_sql(&search("O'Reilly", "name", "DESC"));

        assert_eq!(sql.pattern.as_deref(), Some("%O'Reilly%"));
        assert_eq!(
            squash(&sql.count),
            "SELECT COUNT(*) FROM categories WHERE name LIKE $1 OR description LIKE $1"
        );
        assert!(squash(&sql.select).ends_with(
            "WHERE name LIKE $1 OR description LIKE $1 ORDER BY name DESC LIMIT $2 OFFSET $3"
        ));
        assert!(!sql.select.contains("O'Reilly"));
        assert!(!sql.count.contains("O'Reilly"));
    }

    #[test]
    fn test_search_sql_rejects_sort_injection() {
        let sql = build_search_sql(&search("", "name; DROP TABLE categories", "asc; --"));

        assert!(squash(&sql.select).contains("ORDER BY created_at ASC LIMIT"));
        assert!(!sql.select.contains("DROP"));
        assert!(!sql.select.contains("--"));
    }

    #[test]
    fn test_search_sql_sort_fields() {
        for (sort, expected) in [
            ("name", "ORDER BY name"),
            ("created_at", "ORDER BY created_at"),
            ("updated_at", "ORDER BY updated_at"),
            ("bogus", "ORDER BY created_at"),
        ] {
            let sql = build_search_sql(&search("", sort, "weird"));
            assert!(squash(&sql.select).contains(&format!("{} ASC", expected)));
        }
    }

    #[test]
    fn test_row_maps_null_deleted_at() {
        let now = Utc::now();
        let row = CategoryRow {
            id: Uuid::now_v7(),
            name: "Movies".to_string(),
            description: "d".to_string(),
            activated: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let category = Category::from(row.clone());

        assert_eq!(category.id().as_uuid(), row.id);
        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
    }

    // PostgreSQL round trips. Run with DATABASE_URL set: `cargo test -- --ignored`

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_round_trip_active_and_inactive(pool: PgPool) {
        let gateway = PgCategoryGateway::new(pool);

        for is_active in [true, false] {
            let category = Category::new("Movies", "some description", is_active);
            gateway.create_category(category.clone()).await.unwrap();

            let loaded = gateway.get_category_by_id(category.id()).await.unwrap();

            assert_eq!(loaded, category);
            assert_eq!(loaded.deleted_at().is_none(), loaded.is_active());
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_get_missing_row_is_storage_error(pool: PgPool) {
        let gateway = PgCategoryGateway::new(pool);

        let err = gateway
            .get_category_by_id(CategoryId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(sqlx::Error::RowNotFound)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_update_and_delete(pool: PgPool) {
        let gateway = PgCategoryGateway::new(pool);
        let mut category = Category::new("Movies", "d", true);
        gateway.create_category(category.clone()).await.unwrap();

        category.update("Series", "shows", false);
        gateway.update_category(category.clone()).await.unwrap();
        let loaded = gateway.get_category_by_id(category.id()).await.unwrap();
        assert_eq!(loaded, category);
        assert!(loaded.deleted_at().is_some());

        gateway.delete_category(category.id()).await.unwrap();
        assert!(gateway.get_category_by_id(category.id()).await.is_err());

        // Unknown ids delete zero rows without error
        gateway.delete_category(CategoryId::new()).await.unwrap();
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_find_all_filters_sorts_and_pages(pool: PgPool) {
        let gateway = PgCategoryGateway::new(pool);
        for (name, description) in [
            ("Movies", "films"),
            ("Series", "tv shows"),
            ("Documentaries", "real films"),
        ] {
            gateway
                .create_category(Category::new(name, description, true))
                .await
                .unwrap();
        }

        let page = gateway
            .find_all(search("films", "name", "desc"))
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        let names: Vec<_> = page.items.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["Movies", "Documentaries"]);

        let page = gateway
            .find_all(SearchCategoryQuery {
                page: 2,
                per_page: 2,
                sort: "name; DROP TABLE categories".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name(), "Documentaries");

        let page = gateway
            .find_all(SearchCategoryQuery {
                page: 0,
                per_page: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 3);
    }
}
