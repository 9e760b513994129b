//! EduTrack library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod server;
pub mod store;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
