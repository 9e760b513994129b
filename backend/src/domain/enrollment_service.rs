//! Enrollment service: cross-entity validation and completion transitions.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::course::CourseId;
use crate::domain::enrollment::{Enrollment, EnrollmentId};
use crate::domain::ports::EnrollmentLedger;
use crate::domain::user::UserId;
use crate::domain::Error;
use crate::store::Registry;

fn enrollment_not_found() -> Error {
    Error::not_found("Enrollment not found")
}

/// Service implementing the [`EnrollmentLedger`] port over the shared
/// registry.
///
/// The clock is injected so `enrolled_date` stamping is deterministic under
/// test.
#[derive(Clone)]
pub struct EnrollmentService {
    registry: Arc<Registry>,
    clock: Arc<dyn Clock>,
}

impl EnrollmentService {
    /// Create a new service over the shared registry and clock.
    pub fn new(registry: Arc<Registry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }
}

#[async_trait]
impl EnrollmentLedger for EnrollmentService {
    async fn enroll(&self, user_id: UserId, course_id: CourseId) -> Result<Enrollment, Error> {
        let today = self.clock.utc().date_naive();
        let enrollment = self.registry.with(|tables| {
            // Validation pipeline, short-circuiting on the first failure.
            // The order is part of the contract: user existence, user
            // state, course existence, course state, then pair uniqueness.
            let user = tables
                .users
                .get(&user_id)
                .ok_or_else(|| Error::not_found("User not found"))?;
            if !user.is_active() {
                return Err(Error::invalid_state(
                    "Only active users can enroll in courses",
                ));
            }
            let course = tables
                .courses
                .get(&course_id)
                .ok_or_else(|| Error::not_found("Course not found"))?;
            if !course.is_open() {
                return Err(Error::invalid_state("Course enrollment is closed"));
            }
            let already_enrolled = tables.enrollments.values().any(|enrollment| {
                enrollment.user_id() == user_id && enrollment.course_id() == course_id
            });
            if already_enrolled {
                return Err(Error::conflict("User is already enrolled in this course"));
            }

            let id = tables.next_enrollment_id();
            let enrollment = Enrollment::new(id, user_id, course_id, today);
            tables.enrollments.insert(id, enrollment.clone());
            Ok(enrollment)
        })?;
        info!(
            enrollment_id = %enrollment.id(),
            user_id = %user_id,
            course_id = %course_id,
            "user enrolled"
        );
        Ok(enrollment)
    }

    async fn get(&self, id: EnrollmentId) -> Result<Enrollment, Error> {
        self.registry
            .with(|tables| tables.enrollments.get(&id).cloned())
            .ok_or_else(enrollment_not_found)
    }

    async fn list(&self) -> Result<Vec<Enrollment>, Error> {
        Ok(self
            .registry
            .with(|tables| tables.enrollments.values().cloned().collect()))
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Enrollment>, Error> {
        self.registry.with(|tables| {
            // Unlike the course-side read, this one insists the user still
            // exists before filtering the ledger.
            if !tables.users.contains_key(&user_id) {
                return Err(Error::not_found("User not found"));
            }
            Ok(tables
                .enrollments
                .values()
                .filter(|enrollment| enrollment.user_id() == user_id)
                .cloned()
                .collect())
        })
    }

    async fn complete(&self, id: EnrollmentId) -> Result<Enrollment, Error> {
        let enrollment = self.registry.with(|tables| {
            let enrollment = tables
                .enrollments
                .get_mut(&id)
                .ok_or_else(enrollment_not_found)?;
            enrollment.complete();
            Ok::<_, Error>(enrollment.clone())
        })?;
        info!(enrollment_id = %id, "enrollment completed");
        Ok(enrollment)
    }

    async fn delete(&self, id: EnrollmentId) -> Result<(), Error> {
        self.registry.with(|tables| {
            tables
                .enrollments
                .remove(&id)
                .map(|_| ())
                .ok_or_else(enrollment_not_found)
        })
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
