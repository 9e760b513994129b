//! Driving port for user account operations.

use async_trait::async_trait;

use crate::domain::user::{NewUser, User, UserId, UserUpdate};
use crate::domain::Error;

/// Use-case port covering the user lifecycle.
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Register a new user; fails with `DuplicateEmail` when the email is
    /// already registered.
    async fn create(&self, new_user: NewUser) -> Result<User, Error>;

    /// Fetch a user by id.
    async fn get(&self, id: UserId) -> Result<User, Error>;

    /// Return all users in store scan order.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// Apply a partial update; a new email must not collide with a
    /// different user's email.
    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, Error>;

    /// Remove the user unconditionally; referencing enrollments are left
    /// in place.
    async fn delete(&self, id: UserId) -> Result<(), Error>;

    /// Set the user inactive; idempotent.
    async fn deactivate(&self, id: UserId) -> Result<User, Error>;
}
