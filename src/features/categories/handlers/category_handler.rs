use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{
    CategoryIdDto, CategoryRequestDto, CategoryResponseDto, ListCategoriesQuery,
};
use crate::features::categories::use_cases::{
    CategoryUseCases, CreateCategoryInput, DeleteCategoryInput, GetCategoryByIdInput,
    UpdateCategoryInput,
};
use crate::shared::types::Pagination;

/// Create a category
///
/// Responds with the new id and a `Location` header pointing at it.
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CategoryRequestDto,
    responses(
        (status = 201, description = "Category created", body = CategoryIdDto,
            headers(("Location" = String, description = "Path of the new category"))),
        (status = 400, description = "Validation or storage error", body = String, content_type = "text/plain")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(use_cases): State<Arc<CategoryUseCases>>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<impl IntoResponse> {
    let output = use_cases
        .create
        .execute(CreateCategoryInput {
            name: dto.name,
            description: dto.description,
            is_active: dto.is_active,
        })
        .await?;

    let location = format!("/categories/{}", output.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CategoryIdDto { id: output.id }),
    ))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = String, Path, description = "Category id (UUID)")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found or id malformed", body = String, content_type = "text/plain")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(use_cases): State<Arc<CategoryUseCases>>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponseDto>> {
    let category = use_cases
        .get_by_id
        .execute(GetCategoryByIdInput { id })
        .await
        .map_err(AppError::into_not_found)?;

    Ok(Json(category.into()))
}

/// Update a category
///
/// `is_active: false` soft-deletes the category, `true` restores it.
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(
        ("id" = String, Path, description = "Category id (UUID)")
    ),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryIdDto),
        (status = 400, description = "Validation, id or storage error", body = String, content_type = "text/plain")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(use_cases): State<Arc<CategoryUseCases>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<Json<CategoryIdDto>> {
    let output = use_cases
        .update
        .execute(UpdateCategoryInput {
            id,
            name: dto.name,
            description: dto.description,
            is_active: dto.is_active,
        })
        .await?;

    Ok(Json(CategoryIdDto { id: output.id }))
}

/// Delete a category permanently
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = String, Path, description = "Category id (UUID)")
    ),
    responses(
        (status = 204, description = "Category deleted (or did not exist)"),
        (status = 400, description = "Id or storage error", body = String, content_type = "text/plain")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(use_cases): State<Arc<CategoryUseCases>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    use_cases
        .delete
        .execute(DeleteCategoryInput { id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List categories with search, sorting and pagination
#[utoipa::path(
    get,
    path = "/categories",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "Page of categories", body = Pagination<CategoryResponseDto>),
        (status = 400, description = "Storage error", body = String, content_type = "text/plain")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(use_cases): State<Arc<CategoryUseCases>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<Pagination<CategoryResponseDto>>> {
    let page = use_cases.list.execute(query.into()).await?;

    Ok(Json(page.map(CategoryResponseDto::from)))
}
