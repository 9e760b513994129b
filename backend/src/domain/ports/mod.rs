//! Driving ports for the hexagonal boundary.
//!
//! Inbound adapters (HTTP handlers) depend on these traits rather than on
//! the concrete services, so handlers stay testable against any
//! implementation and the domain keeps its transport-agnostic surface.

mod course_catalogue;
mod enrollment_ledger;
mod user_accounts;

pub use course_catalogue::CourseCatalogue;
pub use enrollment_ledger::EnrollmentLedger;
pub use user_accounts::UserAccounts;
