//! Enrollment HTTP handlers.
//!
//! ```text
//! POST   /api/enrollments
//! GET    /api/enrollments
//! GET    /api/enrollments/{id}
//! GET    /api/enrollments/user/{user_id}
//! PATCH  /api/enrollments/{id}/complete
//! DELETE /api/enrollments/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::course::CourseId;
use crate::domain::enrollment::{Enrollment, EnrollmentId};
use crate::domain::ports::EnrollmentLedger;
use crate::domain::user::UserId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Enrollment representation returned by every enrollment endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentBody {
    pub id: u64,
    pub user_id: u64,
    pub course_id: u64,
    /// ISO calendar date the enrollment was created.
    #[schema(format = "date", example = "2025-09-16")]
    pub enrolled_date: String,
    pub completed: bool,
}

impl From<Enrollment> for EnrollmentBody {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id().get(),
            user_id: enrollment.user_id().get(),
            course_id: enrollment.course_id().get(),
            enrolled_date: enrollment.enrolled_date().to_string(),
            completed: enrollment.completed(),
        }
    }
}

/// Request payload for enrolling a user in a course.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEnrollmentRequestBody {
    pub user_id: u64,
    pub course_id: u64,
}

/// Enroll a user in a course.
///
/// Validation short-circuits on the first failure: user existence, user
/// state, course existence, course state, then pair uniqueness.
#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = CreateEnrollmentRequestBody,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentBody),
        (status = 400, description = "Inactive user, closed course, or duplicate pair", body = ErrorSchema),
        (status = 404, description = "Unknown user or course", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "enrollUser"
)]
#[post("/enrollments")]
pub async fn enroll_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEnrollmentRequestBody>,
) -> ApiResult<HttpResponse> {
    let enrollment = state
        .enrollments
        .enroll(
            UserId::new(payload.user_id),
            CourseId::new(payload.course_id),
        )
        .await?;
    Ok(HttpResponse::Created().json(EnrollmentBody::from(enrollment)))
}

/// List all enrollments.
#[utoipa::path(
    get,
    path = "/api/enrollments",
    responses((status = 200, description = "Enrollments", body = [EnrollmentBody])),
    tags = ["enrollments"],
    operation_id = "listEnrollments"
)]
#[get("/enrollments")]
pub async fn get_all_enrollments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EnrollmentBody>>> {
    let enrollments = state.enrollments.list().await?;
    Ok(web::Json(
        enrollments.into_iter().map(EnrollmentBody::from).collect(),
    ))
}

/// Fetch a single enrollment; orphaned records remain retrievable.
#[utoipa::path(
    get,
    path = "/api/enrollments/{id}",
    params(("id" = u64, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment", body = EnrollmentBody),
        (status = 404, description = "Unknown enrollment", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "getEnrollment"
)]
#[get("/enrollments/{id}")]
pub async fn get_enrollment(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<EnrollmentBody>> {
    let enrollment = state
        .enrollments
        .get(EnrollmentId::new(path.into_inner()))
        .await?;
    Ok(web::Json(EnrollmentBody::from(enrollment)))
}

/// List a user's enrollments; the user must still exist.
#[utoipa::path(
    get,
    path = "/api/enrollments/user/{user_id}",
    params(("user_id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's enrollments", body = [EnrollmentBody]),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "getUserEnrollments"
)]
#[get("/enrollments/user/{user_id}")]
pub async fn get_user_enrollments(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<EnrollmentBody>>> {
    let enrollments = state
        .enrollments
        .list_for_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(
        enrollments.into_iter().map(EnrollmentBody::from).collect(),
    ))
}

/// Mark an enrollment completed; idempotent.
#[utoipa::path(
    patch,
    path = "/api/enrollments/{id}/complete",
    params(("id" = u64, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Completed enrollment", body = EnrollmentBody),
        (status = 404, description = "Unknown enrollment", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "markCourseComplete"
)]
#[patch("/enrollments/{id}/complete")]
pub async fn mark_course_complete(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<EnrollmentBody>> {
    let enrollment = state
        .enrollments
        .complete(EnrollmentId::new(path.into_inner()))
        .await?;
    Ok(web::Json(EnrollmentBody::from(enrollment)))
}

/// Delete an enrollment; no side effects on user or course records.
#[utoipa::path(
    delete,
    path = "/api/enrollments/{id}",
    params(("id" = u64, Path, description = "Enrollment id")),
    responses(
        (status = 204, description = "Enrollment deleted"),
        (status = 404, description = "Unknown enrollment", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "deleteEnrollment"
)]
#[delete("/enrollments/{id}")]
pub async fn delete_enrollment(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .enrollments
        .delete(EnrollmentId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "enrollments_tests.rs"]
mod tests;
