//! Record validators for the three entity batches.
//!
//! # Responsibility
//! - Decide per record whether it may enter its store, with a reason when it
//!   may not.
//! - Keep the uniqueness and referential rules that need store reads out of
//!   the pure model layer.
//!
//! # Invariants
//! - Structural rules are checked before any store read.
//! - A store read failure during inspection is an error, not a rejection:
//!   the batch engine abandons the whole batch rather than misreporting an
//!   I/O problem as bad data.
//! - Validators are per-batch: each carries the accepted-so-far state of one
//!   run and must not be reused across batches.

use crate::model::ValidationError;
use crate::repo::RepoResult;

pub mod orders;
pub mod products;
pub mod users;

pub use orders::OrderValidator;
pub use products::ProductValidator;
pub use users::UserValidator;

/// Outcome of inspecting a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accept,
    Reject(ValidationError),
}

/// Per-record admission check used by the batch engine.
///
/// `inspect` takes `&mut self` so validators can track records accepted
/// earlier in the same batch; duplicates inside one batch are rejected just
/// like duplicates against the store.
pub trait RecordValidator<R> {
    fn inspect(&mut self, record: &R) -> RepoResult<Verdict>;
}
