//! Driving port for enrollment operations.

use async_trait::async_trait;

use crate::domain::course::CourseId;
use crate::domain::enrollment::{Enrollment, EnrollmentId};
use crate::domain::user::UserId;
use crate::domain::Error;

/// Use-case port covering enrollment creation, reads, and completion.
#[async_trait]
pub trait EnrollmentLedger: Send + Sync {
    /// Enroll a user in a course after the full validation pipeline passes.
    async fn enroll(&self, user_id: UserId, course_id: CourseId) -> Result<Enrollment, Error>;

    /// Fetch an enrollment by id.
    async fn get(&self, id: EnrollmentId) -> Result<Enrollment, Error>;

    /// Return all enrollments in store scan order.
    async fn list(&self) -> Result<Vec<Enrollment>, Error>;

    /// Return the user's enrollments; fails with `NotFound` when the user
    /// id does not resolve.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Enrollment>, Error>;

    /// Mark the enrollment completed; idempotent.
    async fn complete(&self, id: EnrollmentId) -> Result<Enrollment, Error>;

    /// Remove the enrollment; no side effects on user or course records.
    async fn delete(&self, id: EnrollmentId) -> Result<(), Error>;
}
