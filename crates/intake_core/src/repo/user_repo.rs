//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Bulk-append user records to the users store.
//! - Answer the duplicate-pair lookup the user validator needs.
//!
//! # Invariants
//! - `insert_users` commits the whole slice or nothing.
//! - Rows read back are re-checked against the structural rules.

use crate::model::user::User;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

/// Repository interface for the users store.
pub trait UserRepository {
    /// Appends all records in one transaction, returning the count written.
    fn insert_users(&self, users: &[User]) -> RepoResult<usize>;
    /// Whether a user with this exact `(name, email)` pair is already stored.
    fn user_exists(&self, name: &str, email: &str) -> RepoResult<bool>;
    fn get_user(&self, id: i64) -> RepoResult<Option<User>>;
    fn count_users(&self) -> RepoResult<usize>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_users(&self, users: &[User]) -> RepoResult<usize> {
        if users.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare("INSERT INTO users (id, name, email) VALUES (?1, ?2, ?3);")?;
            for user in users {
                stmt.execute(params![user.id, user.name.as_str(), user.email.as_str()])?;
            }
        }
        tx.commit()?;

        Ok(users.len())
    }

    fn user_exists(&self, name: &str, email: &str) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM users WHERE name = ?1 AND email = ?2
            );",
            params![name, email],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn get_user(&self, id: i64) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email FROM users WHERE id = ?1;")?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn count_users(&self) -> RepoResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let user = User {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
    };
    user.validate()
        .map_err(|err| RepoError::InvalidData(format!("users row id={}: {err}", user.id)))?;
    Ok(user)
}
