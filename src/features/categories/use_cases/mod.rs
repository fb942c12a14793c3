pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

pub use create::{CreateCategoryInput, CreateCategoryOutput, CreateCategoryUseCase};
pub use delete::{DeleteCategoryInput, DeleteCategoryUseCase};
pub use get::{GetCategoryByIdInput, GetCategoryByIdUseCase};
pub use list::{ListCategoriesInput, ListCategoriesUseCase};
pub use update::{UpdateCategoryInput, UpdateCategoryOutput, UpdateCategoryUseCase};

use crate::features::categories::gateway::CategoryGateway;

/// All category use cases, sharing one gateway
pub struct CategoryUseCases {
    pub create: CreateCategoryUseCase,
    pub get_by_id: GetCategoryByIdUseCase,
    pub update: UpdateCategoryUseCase,
    pub delete: DeleteCategoryUseCase,
    pub list: ListCategoriesUseCase,
}

impl CategoryUseCases {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self {
            create: CreateCategoryUseCase::new(Arc::clone(&gateway)),
            get_by_id: GetCategoryByIdUseCase::new(Arc::clone(&gateway)),
            update: UpdateCategoryUseCase::new(Arc::clone(&gateway)),
            delete: DeleteCategoryUseCase::new(Arc::clone(&gateway)),
            list: ListCategoriesUseCase::new(gateway),
        }
    }
}
