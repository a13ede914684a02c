//! Product record.
//!
//! # Invariants
//! - `id` is positive and unique within the products store.
//! - `name` is non-empty.
//! - `price` is strictly positive.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One catalog record headed for the products store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Checks the structural field rules for this record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::NonPositiveId(self.id));
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice(self.price));
        }
        Ok(())
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "product id={} name=`{}` price={}",
            self.id, self.name, self.price
        )
    }
}
