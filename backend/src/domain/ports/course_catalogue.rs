//! Driving port for course catalogue operations.

use async_trait::async_trait;

use crate::domain::course::{Course, CourseId, CourseUpdate, NewCourse};
use crate::domain::user::User;
use crate::domain::Error;

/// Use-case port covering the course lifecycle and its derived reads.
#[async_trait]
pub trait CourseCatalogue: Send + Sync {
    /// Publish a new course; courses start open.
    async fn create(&self, new_course: NewCourse) -> Result<Course, Error>;

    /// Fetch a course by id.
    async fn get(&self, id: CourseId) -> Result<Course, Error>;

    /// Return all courses in store scan order.
    async fn list(&self) -> Result<Vec<Course>, Error>;

    /// Apply a partial update, including an explicit `is_open` override.
    async fn update(&self, id: CourseId, update: CourseUpdate) -> Result<Course, Error>;

    /// Remove the course unconditionally; referencing enrollments are left
    /// in place.
    async fn delete(&self, id: CourseId) -> Result<(), Error>;

    /// Close enrollment; idempotent.
    async fn close(&self, id: CourseId) -> Result<Course, Error>;

    /// Resolve the users enrolled in the course, silently skipping
    /// enrollments whose user record no longer exists.
    async fn enrolled_users(&self, id: CourseId) -> Result<Vec<User>, Error>;
}
