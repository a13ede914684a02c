//! Order admission rules.

use crate::model::order::Order;
use crate::model::ValidationError;
use crate::repo::product_repo::ProductRepository;
use crate::repo::RepoResult;
use crate::validate::{RecordValidator, Verdict};

/// Validates orders structurally, then requires `product_id` to reference a
/// product present in the products store at inspection time.
///
/// The load job runs the products batch to completion before orders are
/// inspected, so this check sees the fully populated catalog. The user-side
/// reference is deliberately unchecked.
pub struct OrderValidator<'a, P: ProductRepository> {
    products: &'a P,
}

impl<'a, P: ProductRepository> OrderValidator<'a, P> {
    pub fn new(products: &'a P) -> Self {
        Self { products }
    }
}

impl<P: ProductRepository> RecordValidator<Order> for OrderValidator<'_, P> {
    fn inspect(&mut self, order: &Order) -> RepoResult<Verdict> {
        if let Err(err) = order.validate() {
            return Ok(Verdict::Reject(err));
        }

        if !self.products.product_id_exists(order.product_id)? {
            return Ok(Verdict::Reject(ValidationError::UnknownProduct(
                order.product_id,
            )));
        }

        Ok(Verdict::Accept)
    }
}
