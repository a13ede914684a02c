//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Bulk-append product records to the products store.
//! - Answer the duplicate-pair and id-existence lookups the product and
//!   order validators need.
//!
//! # Invariants
//! - `insert_products` commits the whole slice or nothing.
//! - Rows read back are re-checked against the structural rules.

use crate::model::product::Product;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the products store.
pub trait ProductRepository {
    /// Appends all records in one transaction, returning the count written.
    fn insert_products(&self, products: &[Product]) -> RepoResult<usize>;
    /// Whether a product with this exact `(name, price)` pair is already
    /// stored.
    fn product_exists(&self, name: &str, price: f64) -> RepoResult<bool>;
    /// Whether a product with this id is already stored.
    fn product_id_exists(&self, id: i64) -> RepoResult<bool>;
    fn get_product(&self, id: i64) -> RepoResult<Option<Product>>;
    fn count_products(&self) -> RepoResult<usize>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn insert_products(&self, products: &[Product]) -> RepoResult<usize> {
        if products.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO products (id, name, price) VALUES (?1, ?2, ?3);")?;
            for product in products {
                stmt.execute(params![product.id, product.name.as_str(), product.price])?;
            }
        }
        tx.commit()?;

        Ok(products.len())
    }

    fn product_exists(&self, name: &str, price: f64) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM products WHERE name = ?1 AND price = ?2
            );",
            params![name, price],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn product_id_exists(&self, id: i64) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn get_product(&self, id: i64) -> RepoResult<Option<Product>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, price FROM products WHERE id = ?1;")?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_product_row(row)?));
        }
        Ok(None)
    }

    fn count_products(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM products;", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let product = Product {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
    };
    product
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("products row id={}: {err}", product.id)))?;
    Ok(product)
}
