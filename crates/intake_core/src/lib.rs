//! Core logic for the intake batch loader.
//! This crate is the single source of truth for record admission rules.

pub mod batch;
pub mod db;
pub mod job;
pub mod logging;
pub mod model;
pub mod repo;
pub mod validate;

pub use batch::{run_batch, BatchReport, RejectedRecord};
pub use db::{open_store, open_store_in_memory, DbError, DbResult, StoreKind};
pub use job::{init_stores, run_load, LoadBatches, LoadReport, StoreOutcome, StorePaths};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::order::Order;
pub use model::product::Product;
pub use model::user::User;
pub use model::ValidationError;
pub use repo::order_repo::{OrderRepository, SqliteOrderRepository};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use validate::{OrderValidator, ProductValidator, RecordValidator, UserValidator, Verdict};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
