//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every resource endpoint from the inbound layer plus the
//! banner and health probes. The generated specification backs Swagger UI
//! in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::courses::{CourseBody, CreateCourseRequestBody, UpdateCourseRequestBody};
use crate::inbound::http::enrollments::{CreateEnrollmentRequestBody, EnrollmentBody};
use crate::inbound::http::index::BannerBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequestBody, UpdateUserRequestBody, UserBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "EduTrack API",
        description = "A course enrollment and tracking system."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_all_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::deactivate_user,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::get_all_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::courses::close_course_enrollment,
        crate::inbound::http::courses::get_course_enrollments,
        crate::inbound::http::enrollments::enroll_user,
        crate::inbound::http::enrollments::get_all_enrollments,
        crate::inbound::http::enrollments::get_enrollment,
        crate::inbound::http::enrollments::get_user_enrollments,
        crate::inbound::http::enrollments::mark_course_complete,
        crate::inbound::http::enrollments::delete_enrollment,
    ),
    components(schemas(
        BannerBody,
        UserBody,
        CreateUserRequestBody,
        UpdateUserRequestBody,
        CourseBody,
        CreateCourseRequestBody,
        UpdateCourseRequestBody,
        EnrollmentBody,
        CreateEnrollmentRequestBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "meta", description = "Service metadata"),
        (name = "health", description = "Orchestration probes"),
        (name = "users", description = "User accounts"),
        (name = "courses", description = "Course catalogue"),
        (name = "enrollments", description = "Enrollment ledger"),
    )
)]
pub struct ApiDoc;
