//! Course catalogue service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::course::{Course, CourseId, CourseUpdate, NewCourse};
use crate::domain::ports::CourseCatalogue;
use crate::domain::user::User;
use crate::domain::Error;
use crate::store::Registry;

fn course_not_found() -> Error {
    Error::not_found("Course not found")
}

/// Service implementing the [`CourseCatalogue`] port over the shared
/// registry.
#[derive(Clone)]
pub struct CourseService {
    registry: Arc<Registry>,
}

impl CourseService {
    /// Create a new service over the shared registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl CourseCatalogue for CourseService {
    async fn create(&self, new_course: NewCourse) -> Result<Course, Error> {
        let course = self.registry.with(|tables| {
            let id = tables.next_course_id();
            let course = Course::new(id, new_course.title, new_course.description);
            tables.courses.insert(id, course.clone());
            course
        });
        info!(course_id = %course.id(), "course created");
        Ok(course)
    }

    async fn get(&self, id: CourseId) -> Result<Course, Error> {
        self.registry
            .with(|tables| tables.courses.get(&id).cloned())
            .ok_or_else(course_not_found)
    }

    async fn list(&self) -> Result<Vec<Course>, Error> {
        Ok(self
            .registry
            .with(|tables| tables.courses.values().cloned().collect()))
    }

    async fn update(&self, id: CourseId, update: CourseUpdate) -> Result<Course, Error> {
        self.registry.with(|tables| {
            let course = tables.courses.get_mut(&id).ok_or_else(course_not_found)?;
            course.apply(update);
            Ok(course.clone())
        })
    }

    async fn delete(&self, id: CourseId) -> Result<(), Error> {
        self.registry.with(|tables| {
            // Unconditional removal: referencing enrollments stay behind as
            // orphans rather than cascading.
            tables
                .courses
                .remove(&id)
                .map(|_| ())
                .ok_or_else(course_not_found)
        })?;
        info!(course_id = %id, "course deleted");
        Ok(())
    }

    async fn close(&self, id: CourseId) -> Result<Course, Error> {
        self.registry.with(|tables| {
            let course = tables.courses.get_mut(&id).ok_or_else(course_not_found)?;
            course.close();
            Ok(course.clone())
        })
    }

    async fn enrolled_users(&self, id: CourseId) -> Result<Vec<User>, Error> {
        self.registry.with(|tables| {
            if !tables.courses.contains_key(&id) {
                return Err(course_not_found());
            }
            let users = &tables.users;
            // Dangling user ids are skipped: deleting a user leaves its
            // enrollments orphaned, and this read tolerates them.
            let enrolled = tables
                .enrollments
                .values()
                .filter(|enrollment| enrollment.course_id() == id)
                .filter_map(|enrollment| users.get(&enrollment.user_id()).cloned())
                .collect();
            Ok(enrolled)
        })
    }
}

#[cfg(test)]
#[path = "course_service_tests.rs"]
mod tests;
