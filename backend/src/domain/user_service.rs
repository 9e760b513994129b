//! User account service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::UserAccounts;
use crate::domain::user::{NewUser, User, UserId, UserUpdate};
use crate::domain::Error;
use crate::store::Registry;

fn user_not_found() -> Error {
    Error::not_found("User not found")
}

/// Service implementing the [`UserAccounts`] port over the shared registry.
#[derive(Clone)]
pub struct UserService {
    registry: Arc<Registry>,
}

impl UserService {
    /// Create a new service over the shared registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl UserAccounts for UserService {
    async fn create(&self, new_user: NewUser) -> Result<User, Error> {
        let user = self.registry.with(|tables| {
            // Check-then-insert runs inside one critical section so two
            // concurrent creates cannot both pass the uniqueness scan.
            if tables
                .users
                .values()
                .any(|existing| existing.email() == &new_user.email)
            {
                return Err(Error::duplicate_email("Email already registered"));
            }
            let id = tables.next_user_id();
            let user = User::new(id, new_user.name, new_user.email);
            tables.users.insert(id, user.clone());
            Ok(user)
        })?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<User, Error> {
        self.registry
            .with(|tables| tables.users.get(&id).cloned())
            .ok_or_else(user_not_found)
    }

    async fn list(&self) -> Result<Vec<User>, Error> {
        Ok(self
            .registry
            .with(|tables| tables.users.values().cloned().collect()))
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> Result<User, Error> {
        self.registry.with(|tables| {
            if !tables.users.contains_key(&id) {
                return Err(user_not_found());
            }
            if let Some(email) = &update.email {
                let collides = tables
                    .users
                    .iter()
                    .any(|(other_id, other)| *other_id != id && other.email() == email);
                if collides {
                    return Err(Error::duplicate_email("Email already registered"));
                }
            }
            let user = tables.users.get_mut(&id).ok_or_else(user_not_found)?;
            user.apply(update);
            Ok(user.clone())
        })
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        self.registry.with(|tables| {
            // Unconditional removal: referencing enrollments stay behind as
            // orphans rather than cascading.
            tables.users.remove(&id).map(|_| ()).ok_or_else(user_not_found)
        })?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    async fn deactivate(&self, id: UserId) -> Result<User, Error> {
        self.registry.with(|tables| {
            let user = tables.users.get_mut(&id).ok_or_else(user_not_found)?;
            user.deactivate();
            Ok(user.clone())
        })
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
