//! Product admission rules.

use crate::model::product::Product;
use crate::model::ValidationError;
use crate::repo::product_repo::ProductRepository;
use crate::repo::RepoResult;
use crate::validate::{RecordValidator, Verdict};
use std::collections::HashSet;

/// Validates products structurally, then rejects `(name, price)` pairs
/// already present in the store or accepted earlier in this batch.
pub struct ProductValidator<'a, R: ProductRepository> {
    repo: &'a R,
    // price keyed by bit pattern: the duplicate rule is exact-value equality,
    // and f64 itself is not hashable.
    accepted: HashSet<(String, u64)>,
}

impl<'a, R: ProductRepository> ProductValidator<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            accepted: HashSet::new(),
        }
    }
}

impl<R: ProductRepository> RecordValidator<Product> for ProductValidator<'_, R> {
    fn inspect(&mut self, product: &Product) -> RepoResult<Verdict> {
        if let Err(err) = product.validate() {
            return Ok(Verdict::Reject(err));
        }

        let key = (product.name.clone(), product.price.to_bits());
        if self.accepted.contains(&key)
            || self.repo.product_exists(&product.name, product.price)?
        {
            return Ok(Verdict::Reject(ValidationError::DuplicateProduct {
                name: product.name.clone(),
                price: product.price,
            }));
        }

        self.accepted.insert(key);
        Ok(Verdict::Accept)
    }
}
