//! Categories Domain
//!
//! Product categories: a unique code plus a display name.
//!
//! ```text
//! handlers  ← GET/POST /categories
//!    │
//! service   ← validation
//!    │
//! repository (trait) ─ InMemoryCategoryRepository
//!                    └ PgCategoryRepository (SeaORM)
//! ```
//!
//! ```rust,no_run
//! use domain_categories::{handlers, InMemoryCategoryRepository, CategoryService};
//!
//! let service = CategoryService::new(InMemoryCategoryRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use models::{CategoriesFilter, CategoriesResponse, Category, CreateCategory};
pub use postgres::PgCategoryRepository;
pub use repository::{CategoryRepository, InMemoryCategoryRepository};
pub use service::CategoryService;
