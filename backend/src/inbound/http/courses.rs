//! Course HTTP handlers.
//!
//! ```text
//! POST   /api/courses
//! GET    /api/courses
//! GET    /api/courses/{id}
//! PUT    /api/courses/{id}
//! DELETE /api/courses/{id}
//! PATCH  /api/courses/{id}/close
//! GET    /api/courses/{id}/enrollments
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::course::{
    Course, CourseDescription, CourseId, CourseTitle, CourseUpdate, CourseValidationError,
    NewCourse,
};
use crate::domain::ports::CourseCatalogue;
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::UserBody;

/// Course representation returned by every course endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseBody {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_open: bool,
}

impl From<Course> for CourseBody {
    fn from(course: Course) -> Self {
        Self {
            id: course.id().get(),
            title: course.title().to_string(),
            description: course.description().as_ref().to_owned(),
            is_open: course.is_open(),
        }
    }
}

/// Request payload for creating a course.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseRequestBody {
    pub title: String,
    pub description: String,
}

/// Request payload for partially updating a course.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
}

fn invalid_field(field: &str, err: &CourseValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

fn parse_new_course(payload: CreateCourseRequestBody) -> Result<NewCourse, Error> {
    Ok(NewCourse {
        title: CourseTitle::new(payload.title).map_err(|err| invalid_field("title", &err))?,
        description: CourseDescription::new(payload.description)
            .map_err(|err| invalid_field("description", &err))?,
    })
}

fn parse_course_update(payload: UpdateCourseRequestBody) -> Result<CourseUpdate, Error> {
    Ok(CourseUpdate {
        title: payload
            .title
            .map(|title| CourseTitle::new(title).map_err(|err| invalid_field("title", &err)))
            .transpose()?,
        description: payload
            .description
            .map(|description| {
                CourseDescription::new(description)
                    .map_err(|err| invalid_field("description", &err))
            })
            .transpose()?,
        is_open: payload.is_open,
    })
}

/// Publish a new course.
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseRequestBody,
    responses(
        (status = 201, description = "Course created", body = CourseBody),
        (status = 400, description = "Invalid fields", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "createCourse"
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCourseRequestBody>,
) -> ApiResult<HttpResponse> {
    let new_course = parse_new_course(payload.into_inner())?;
    let course = state.courses.create(new_course).await?;
    Ok(HttpResponse::Created().json(CourseBody::from(course)))
}

/// List all courses.
#[utoipa::path(
    get,
    path = "/api/courses",
    responses((status = 200, description = "Courses", body = [CourseBody])),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn get_all_courses(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CourseBody>>> {
    let courses = state.courses.list().await?;
    Ok(web::Json(
        courses.into_iter().map(CourseBody::from).collect(),
    ))
}

/// Fetch a single course.
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = CourseBody),
        (status = 404, description = "Unknown course", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<CourseBody>> {
    let course = state.courses.get(CourseId::new(path.into_inner())).await?;
    Ok(web::Json(CourseBody::from(course)))
}

/// Partially update a course, including an explicit `is_open` override.
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(("id" = u64, Path, description = "Course id")),
    request_body = UpdateCourseRequestBody,
    responses(
        (status = 200, description = "Updated course", body = CourseBody),
        (status = 400, description = "Invalid fields", body = ErrorSchema),
        (status = 404, description = "Unknown course", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "updateCourse"
)]
#[put("/courses/{id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateCourseRequestBody>,
) -> ApiResult<web::Json<CourseBody>> {
    let update = parse_course_update(payload.into_inner())?;
    let course = state
        .courses
        .update(CourseId::new(path.into_inner()), update)
        .await?;
    Ok(web::Json(CourseBody::from(course)))
}

/// Delete a course. Enrollments referencing the course are left in place.
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Unknown course", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse"
)]
#[delete("/courses/{id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .courses
        .delete(CourseId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Close enrollment for a course; idempotent, no reopen endpoint exists.
#[utoipa::path(
    patch,
    path = "/api/courses/{id}/close",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Closed course", body = CourseBody),
        (status = 404, description = "Unknown course", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "closeCourseEnrollment"
)]
#[patch("/courses/{id}/close")]
pub async fn close_course_enrollment(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<CourseBody>> {
    let course = state
        .courses
        .close(CourseId::new(path.into_inner()))
        .await?;
    Ok(web::Json(CourseBody::from(course)))
}

/// List the users enrolled in a course, skipping dangling user ids.
#[utoipa::path(
    get,
    path = "/api/courses/{id}/enrollments",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Enrolled users", body = [UserBody]),
        (status = 404, description = "Unknown course", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourseEnrollments"
)]
#[get("/courses/{id}/enrollments")]
pub async fn get_course_enrollments(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<UserBody>>> {
    let users = state
        .courses
        .enrolled_users(CourseId::new(path.into_inner()))
        .await?;
    Ok(web::Json(users.into_iter().map(UserBody::from).collect()))
}

#[cfg(test)]
#[path = "courses_tests.rs"]
mod tests;
