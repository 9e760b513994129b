//! Server construction and wiring.
//!
//! The composition root: owns the registry, builds the services behind
//! their ports, and assembles the actix `App` shared by the binary and the
//! integration tests.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::course::{CourseDescription, CourseTitle, NewCourse};
use crate::domain::ports::{CourseCatalogue, EnrollmentLedger, UserAccounts};
use crate::domain::user::{EmailAddress, NewUser, UserName};
use crate::domain::{CourseService, EnrollmentService, Error, UserService};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::index::root;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{courses, enrollments, users};
use crate::store::Registry;

/// Build the HTTP state over a fresh in-memory registry.
///
/// The registry is the single mutual-exclusion domain shared by all three
/// services; everything resets when the returned state is dropped.
pub fn build_http_state() -> HttpState {
    let registry = Arc::new(Registry::new());
    HttpState::new(
        Arc::new(UserService::new(registry.clone())),
        Arc::new(CourseService::new(registry.clone())),
        Arc::new(EnrollmentService::new(registry, Arc::new(DefaultClock))),
    )
}

fn seed_invalid(err: impl std::fmt::Display) -> Error {
    Error::internal(format!("invalid example data: {err}"))
}

/// Install the example records: one user, one open course, one enrollment.
///
/// Goes through the services so the usual invariants apply; the enrollment
/// date is stamped with the real clock.
pub async fn seed_example_data(state: &HttpState) -> Result<(), Error> {
    let user = state
        .users
        .create(NewUser {
            name: UserName::new("Alice").map_err(seed_invalid)?,
            email: EmailAddress::new("alice@example.com").map_err(seed_invalid)?,
        })
        .await?;
    let course = state
        .courses
        .create(NewCourse {
            title: CourseTitle::new("Python Basics").map_err(seed_invalid)?,
            description: CourseDescription::new("Learn Python").map_err(seed_invalid)?,
        })
        .await?;
    state.enrollments.enroll(user.id(), course.id()).await?;
    info!("example data installed");
    Ok(())
}

/// Assemble the actix application: banner, health probes, the `/api`
/// resource scopes, and Swagger UI in debug builds.
pub fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(users::create_user)
        .service(users::get_all_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(users::deactivate_user)
        .service(courses::create_course)
        .service(courses::get_all_courses)
        .service(courses::get_course)
        .service(courses::update_course)
        .service(courses::delete_course)
        .service(courses::close_course_enrollment)
        .service(courses::get_course_enrollments)
        .service(enrollments::enroll_user)
        .service(enrollments::get_all_enrollments)
        .service(enrollments::get_user_enrollments)
        .service(enrollments::get_enrollment)
        .service(enrollments::mark_course_complete)
        .service(enrollments::delete_enrollment);

    let app = App::new()
        .app_data(state)
        .app_data(health_state)
        .service(root)
        .service(ready)
        .service(live)
        .service(api);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
