//! Domain entities, services, and ports.
//!
//! Purpose: define the strongly typed entities, the enrollment business
//! rules, and the driving ports the HTTP adapter consumes. Types here are
//! transport agnostic; invariants are documented on each type.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — the failure taxonomy surfaced to adapters.
//! - [`user::User`], [`course::Course`], [`enrollment::Enrollment`] — the
//!   three entities and their validated field newtypes.
//! - [`UserService`], [`CourseService`], [`EnrollmentService`] — the port
//!   implementations over the shared registry.

pub mod course;
mod course_service;
pub mod enrollment;
mod enrollment_service;
pub mod error;
pub mod ports;
pub mod user;
mod user_service;

pub use self::course_service::CourseService;
pub use self::enrollment_service::EnrollmentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user_service::UserService;

/// Convenient result alias for domain operations.
pub type ApiResult<T> = Result<T, Error>;
