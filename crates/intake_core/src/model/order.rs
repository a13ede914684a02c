//! Order record.
//!
//! # Invariants
//! - `id` is positive and unique within the orders store.
//! - `user_id`, `product_id` and `quantity` are strictly positive.
//! - `product_id` must reference an existing product at validation time;
//!   that referential check lives in the order validator, which can read
//!   the products store.

use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One purchase record headed for the orders store.
///
/// `user_id` is carried as-is; only the product-side reference is checked
/// before insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl Order {
    pub fn new(id: i64, user_id: i64, product_id: i64, quantity: i64) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
        }
    }

    /// Checks the structural field rules for this record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::NonPositiveId(self.id));
        }
        if self.user_id <= 0 {
            return Err(ValidationError::NonPositiveUserId(self.user_id));
        }
        if self.product_id <= 0 {
            return Err(ValidationError::NonPositiveProductId(self.product_id));
        }
        if self.quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity(self.quantity));
        }
        Ok(())
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "order id={} user_id={} product_id={} quantity={}",
            self.id, self.user_id, self.product_id, self.quantity
        )
    }
}
