//! User record.
//!
//! # Invariants
//! - `id` is positive and unique within the users store.
//! - `name` is non-empty.
//! - `email` contains `'@'`; no further shape is demanded of it.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One account record headed for the users store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Checks the structural field rules for this record.
    ///
    /// Uniqueness against the store is the validator's concern, not this
    /// method's; a `User` that passes here can still be rejected as a
    /// duplicate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::NonPositiveId(self.id));
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::MalformedEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "user id={} name=`{}` email=`{}`",
            self.id, self.name, self.email
        )
    }
}
