pub mod pg_category_gateway;

pub use pg_category_gateway::PgCategoryGateway;
