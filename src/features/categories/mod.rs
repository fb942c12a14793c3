//! Category catalog.
//!
//! A category is soft-deleted by deactivating it (`deleted_at` is set) and
//! hard-deleted through `DELETE`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/categories` | Create a category |
//! | GET | `/categories` | Search, sort and page categories |
//! | GET | `/categories/{id}` | Get a category |
//! | PUT | `/categories/{id}` | Update name, description and active state |
//! | DELETE | `/categories/{id}` | Delete a category |

pub mod dtos;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod persistence;
pub mod routes;
pub mod use_cases;

pub use gateway::CategoryGateway;
pub use persistence::PgCategoryGateway;
pub use use_cases::CategoryUseCases;
