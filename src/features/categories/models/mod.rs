pub mod category;
pub mod category_id;
pub mod search;

pub use category::Category;
pub use category_id::CategoryId;
pub use search::{SearchCategoryQuery, SortDirection, SortField};
