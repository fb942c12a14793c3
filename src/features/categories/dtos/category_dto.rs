use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::categories::models::{Category, CategoryId};
use crate::features::categories::use_cases::ListCategoriesInput;
use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Request body for creating or updating a category.
///
/// Missing fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CategoryRequestDto {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

/// Identifier of a created or updated category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryIdDto {
    pub id: CategoryId,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set while the category is inactive
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id(),
            name: c.name().to_string(),
            description: c.description().to_string(),
            is_active: c.is_active(),
            created_at: c.created_at(),
            updated_at: c.updated_at(),
            deleted_at: c.deleted_at(),
        }
    }
}

/// Query params for listing categories.
///
/// Numbers are kept as text so that unparseable values fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ListCategoriesQuery {
    /// Page number (1-indexed, default: 1)
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,

    /// Items per page (default: 10)
    #[param(value_type = Option<i64>)]
    pub per_page: Option<String>,

    /// Substring to search in name or description
    pub terms: Option<String>,

    /// One of `name`, `created_at`, `updated_at` (default: `created_at`)
    pub sort: Option<String>,

    /// `asc` or `desc` (default: `asc`)
    pub direction: Option<String>,
}

fn parse_or(value: Option<&str>, fallback: i64) -> i64 {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

impl From<ListCategoriesQuery> for ListCategoriesInput {
    fn from(q: ListCategoriesQuery) -> Self {
        Self {
            page: parse_or(q.page.as_deref(), DEFAULT_PAGE),
            per_page: parse_or(q.per_page.as_deref(), DEFAULT_PER_PAGE),
            terms: q.terms.unwrap_or_default(),
            sort: q.sort.unwrap_or_default(),
            direction: q.direction.unwrap_or_default(),
        }
    }
}
