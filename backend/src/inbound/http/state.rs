//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without a running
//! server.

use std::sync::Arc;

use crate::domain::ports::{CourseCatalogue, EnrollmentLedger, UserAccounts};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserAccounts>,
    pub courses: Arc<dyn CourseCatalogue>,
    pub enrollments: Arc<dyn EnrollmentLedger>,
}

impl HttpState {
    /// Construct state from the three port implementations.
    pub fn new(
        users: Arc<dyn UserAccounts>,
        courses: Arc<dyn CourseCatalogue>,
        enrollments: Arc<dyn EnrollmentLedger>,
    ) -> Self {
        Self {
            users,
            courses,
            enrollments,
        }
    }
}
