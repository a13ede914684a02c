//! Order repository contract and SQLite implementation.
//!
//! # Invariants
//! - `insert_orders` commits the whole slice or nothing.
//! - Rows read back are re-checked against the structural rules.

use crate::model::order::Order;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the orders store.
pub trait OrderRepository {
    /// Appends all records in one transaction, returning the count written.
    fn insert_orders(&self, orders: &[Order]) -> RepoResult<usize>;
    fn get_order(&self, id: i64) -> RepoResult<Option<Order>>;
    fn count_orders(&self) -> RepoResult<usize>;
}

/// SQLite-backed order repository.
pub struct SqliteOrderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOrderRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl OrderRepository for SqliteOrderRepository<'_> {
    fn insert_orders(&self, orders: &[Order]) -> RepoResult<usize> {
        if orders.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO orders (id, user_id, product_id, quantity)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            for order in orders {
                stmt.execute(params![
                    order.id,
                    order.user_id,
                    order.product_id,
                    order.quantity
                ])?;
            }
        }
        tx.commit()?;

        Ok(orders.len())
    }

    fn get_order(&self, id: i64) -> RepoResult<Option<Order>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, product_id, quantity FROM orders WHERE id = ?1;",
        )?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_order_row(row)?));
        }
        Ok(None)
    }

    fn count_orders(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM orders;", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn parse_order_row(row: &Row<'_>) -> RepoResult<Order> {
    let order = Order {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        product_id: row.get("product_id")?,
        quantity: row.get("quantity")?,
    };
    order
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("orders row id={}: {err}", order.id)))?;
    Ok(order)
}
