//! User admission rules.

use crate::model::user::User;
use crate::model::ValidationError;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;
use crate::validate::{RecordValidator, Verdict};
use std::collections::HashSet;

/// Validates users structurally, then rejects `(name, email)` pairs already
/// present in the store or accepted earlier in this batch.
pub struct UserValidator<'a, R: UserRepository> {
    repo: &'a R,
    accepted: HashSet<(String, String)>,
}

impl<'a, R: UserRepository> UserValidator<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self {
            repo,
            accepted: HashSet::new(),
        }
    }
}

impl<R: UserRepository> RecordValidator<User> for UserValidator<'_, R> {
    fn inspect(&mut self, user: &User) -> RepoResult<Verdict> {
        if let Err(err) = user.validate() {
            return Ok(Verdict::Reject(err));
        }

        let key = (user.name.clone(), user.email.clone());
        if self.accepted.contains(&key) || self.repo.user_exists(&user.name, &user.email)? {
            return Ok(Verdict::Reject(ValidationError::DuplicateUser {
                name: user.name.clone(),
                email: user.email.clone(),
            }));
        }

        self.accepted.insert(key);
        Ok(Verdict::Accept)
    }
}
