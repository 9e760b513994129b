//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure for documentation purposes and live
//! in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails field validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The referenced id is absent from the relevant store.
    #[schema(rename = "not_found")]
    NotFound,
    /// The email uniqueness invariant would be violated.
    #[schema(rename = "duplicate_email")]
    DuplicateEmail,
    /// The operation targets an entity in a disqualifying state.
    #[schema(rename = "invalid_state")]
    InvalidState,
    /// The enrollment pair already exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "User not found")]
    message: String,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}
