//! Concurrent load job over the three entity stores.
//!
//! # Responsibility
//! - Bootstrap the three stores and run one batch per entity.
//! - Run the products batch to completion before users and orders start;
//!   the order validator's referential check must see the populated catalog.
//! - Capture every store's outcome independently; one failed store never
//!   affects the other two.
//!
//! # Invariants
//! - Every worker opens its own connections from explicit paths; there is no
//!   shared or ambient connection state and no inter-worker communication.
//! - Connection lifetime is scoped to the worker's single batch.
//! - Workers are never retried; a failure is reported and the job continues.

use crate::batch::{run_batch, BatchReport};
use crate::db::{open_store, DbResult, StoreKind};
use crate::model::order::Order;
use crate::model::product::Product;
use crate::model::user::User;
use crate::repo::order_repo::{OrderRepository, SqliteOrderRepository};
use crate::repo::product_repo::{ProductRepository, SqliteProductRepository};
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use crate::repo::RepoResult;
use crate::validate::{OrderValidator, ProductValidator, UserValidator};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::thread::{self, ScopedJoinHandle};

/// Locations of the three store files, always passed explicitly to workers.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub users: PathBuf,
    pub products: PathBuf,
    pub orders: PathBuf,
}

impl StorePaths {
    /// Places all three store files under one directory, using the
    /// conventional file names.
    pub fn under(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            users: dir.join(StoreKind::Users.file_name()),
            products: dir.join(StoreKind::Products.file_name()),
            orders: dir.join(StoreKind::Orders.file_name()),
        }
    }
}

/// One in-memory batch per entity, consumed by a single load run.
#[derive(Debug, Clone, Default)]
pub struct LoadBatches {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

/// Outcome of one store's batch within a load run.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOutcome<R> {
    Completed(BatchReport<R>),
    Failed { error: String },
}

impl<R> StoreOutcome<R> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Per-store outcomes of one load run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub users: StoreOutcome<User>,
    pub products: StoreOutcome<Product>,
    pub orders: StoreOutcome<Order>,
}

/// Ensures all three stores exist with their schema applied.
///
/// Idempotent. A failure here is fatal to the load: callers must not proceed
/// to `run_load` without all stores bootstrapped.
pub fn init_stores(paths: &StorePaths) -> DbResult<()> {
    open_store(StoreKind::Users, &paths.users)?;
    open_store(StoreKind::Products, &paths.products)?;
    open_store(StoreKind::Orders, &paths.orders)?;
    Ok(())
}

/// Runs the full load: products synchronously, then users and orders on one
/// worker thread each, joined before returning.
pub fn run_load(paths: &StorePaths, batches: LoadBatches) -> LoadReport {
    let LoadBatches {
        users,
        products,
        orders,
    } = batches;

    info!(
        "event=load_job module=job status=start users={} products={} orders={}",
        users.len(),
        products.len(),
        orders.len()
    );

    // Ordering constraint: the orders validator reads the products store.
    let products_outcome = load_products(paths, products);

    let (users_outcome, orders_outcome) = thread::scope(|scope| {
        let users_handle = scope.spawn(move || load_users(paths, users));
        let orders_handle = scope.spawn(move || load_orders(paths, orders));
        (
            join_worker(StoreKind::Users, users_handle),
            join_worker(StoreKind::Orders, orders_handle),
        )
    });

    info!("event=load_job module=job status=ok");

    LoadReport {
        users: users_outcome,
        products: products_outcome,
        orders: orders_outcome,
    }
}

fn load_users(paths: &StorePaths, users: Vec<User>) -> StoreOutcome<User> {
    capture_outcome(StoreKind::Users, || {
        let conn = open_store(StoreKind::Users, &paths.users)?;
        let repo = SqliteUserRepository::new(&conn);
        let mut validator = UserValidator::new(&repo);
        run_batch(StoreKind::Users.table(), users, &mut validator, |accepted| {
            repo.insert_users(accepted)
        })
    })
}

fn load_products(paths: &StorePaths, products: Vec<Product>) -> StoreOutcome<Product> {
    capture_outcome(StoreKind::Products, || {
        let conn = open_store(StoreKind::Products, &paths.products)?;
        let repo = SqliteProductRepository::new(&conn);
        let mut validator = ProductValidator::new(&repo);
        run_batch(
            StoreKind::Products.table(),
            products,
            &mut validator,
            |accepted| repo.insert_products(accepted),
        )
    })
}

fn load_orders(paths: &StorePaths, orders: Vec<Order>) -> StoreOutcome<Order> {
    capture_outcome(StoreKind::Orders, || {
        let orders_conn = open_store(StoreKind::Orders, &paths.orders)?;
        let products_conn = open_store(StoreKind::Products, &paths.products)?;
        let order_repo = SqliteOrderRepository::new(&orders_conn);
        let product_repo = SqliteProductRepository::new(&products_conn);
        let mut validator = OrderValidator::new(&product_repo);
        run_batch(
            StoreKind::Orders.table(),
            orders,
            &mut validator,
            |accepted| order_repo.insert_orders(accepted),
        )
    })
}

fn capture_outcome<R>(
    kind: StoreKind,
    run: impl FnOnce() -> RepoResult<BatchReport<R>>,
) -> StoreOutcome<R> {
    match run() {
        Ok(report) => StoreOutcome::Completed(report),
        Err(err) => {
            error!("event=store_load module=job status=error store={kind} error={err}");
            StoreOutcome::Failed {
                error: err.to_string(),
            }
        }
    }
}

fn join_worker<R>(
    kind: StoreKind,
    handle: ScopedJoinHandle<'_, StoreOutcome<R>>,
) -> StoreOutcome<R> {
    match handle.join() {
        Ok(outcome) => outcome,
        Err(_) => {
            error!("event=store_load module=job status=error store={kind} error=worker_panicked");
            StoreOutcome::Failed {
                error: format!("{kind} worker thread panicked"),
            }
        }
    }
}
