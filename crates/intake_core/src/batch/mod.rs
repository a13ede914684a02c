//! Batch engine: partition a record batch and bulk-write the valid subset.
//!
//! # Responsibility
//! - Run every record of a batch through its validator, preserving input
//!   order.
//! - Hand the accepted subset to the store writer as one bulk operation.
//! - Return a structured report instead of printing.
//!
//! # Invariants
//! - `inserted + rejected.len()` equals the input batch size on success.
//! - A validator read error or writer error abandons the whole batch; no
//!   record of a failed batch is committed.

use crate::repo::RepoResult;
use crate::validate::{RecordValidator, Verdict};
use log::{info, warn};

/// One record that did not pass validation, with its operator-facing reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord<R> {
    pub record: R,
    pub reason: String,
}

/// Outcome of one batch against one store.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport<R> {
    /// Table the batch was loaded into.
    pub table: &'static str,
    /// Count of records committed by the bulk write.
    pub inserted: usize,
    /// Rejected records in input order.
    pub rejected: Vec<RejectedRecord<R>>,
}

impl<R> BatchReport<R> {
    /// Input batch size this report accounts for.
    pub fn total(&self) -> usize {
        self.inserted + self.rejected.len()
    }
}

/// Partitions `records` with `validator` and writes the accepted subset via
/// `write` in one batched operation.
///
/// `write` receives the accepted records exactly once, in input order, and
/// must persist them atomically. An empty accepted subset still produces a
/// report; the writer is invoked with an empty slice and is expected to
/// write nothing.
pub fn run_batch<R, V, W>(
    table: &'static str,
    records: Vec<R>,
    validator: &mut V,
    write: W,
) -> RepoResult<BatchReport<R>>
where
    V: RecordValidator<R>,
    W: FnOnce(&[R]) -> RepoResult<usize>,
{
    let total = records.len();
    let mut accepted = Vec::with_capacity(total);
    let mut rejected = Vec::new();

    for record in records {
        match validator.inspect(&record)? {
            Verdict::Accept => accepted.push(record),
            Verdict::Reject(reason) => rejected.push(RejectedRecord {
                record,
                reason: reason.to_string(),
            }),
        }
    }

    let inserted = write(&accepted)?;

    if rejected.is_empty() {
        info!("event=batch_load module=batch status=ok table={table} inserted={inserted} rejected=0");
    } else {
        warn!(
            "event=batch_load module=batch status=ok table={table} inserted={inserted} rejected={}",
            rejected.len()
        );
    }
    debug_assert_eq!(inserted + rejected.len(), total);

    Ok(BatchReport {
        table,
        inserted,
        rejected,
    })
}
