//! User HTTP handlers.
//!
//! ```text
//! POST   /api/users
//! GET    /api/users
//! GET    /api/users/{id}
//! PUT    /api/users/{id}
//! DELETE /api/users/{id}
//! PATCH  /api/users/{id}/deactivate
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::UserAccounts;
use crate::domain::user::{
    EmailAddress, NewUser, User, UserId, UserName, UserUpdate, UserValidationError,
};
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// User representation returned by every user endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserBody {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            is_active: user.is_active(),
        }
    }
}

/// Request payload for creating a user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequestBody {
    pub name: String,
    pub email: String,
}

/// Request payload for partially updating a user.
///
/// Only fields present in the body are applied; omitted fields are left
/// untouched.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

fn invalid_field(field: &str, err: &UserValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
}

fn parse_new_user(payload: CreateUserRequestBody) -> Result<NewUser, Error> {
    Ok(NewUser {
        name: UserName::new(payload.name).map_err(|err| invalid_field("name", &err))?,
        email: EmailAddress::new(payload.email).map_err(|err| invalid_field("email", &err))?,
    })
}

fn parse_user_update(payload: UpdateUserRequestBody) -> Result<UserUpdate, Error> {
    Ok(UserUpdate {
        name: payload
            .name
            .map(|name| UserName::new(name).map_err(|err| invalid_field("name", &err)))
            .transpose()?,
        email: payload
            .email
            .map(|email| EmailAddress::new(email).map_err(|err| invalid_field("email", &err)))
            .transpose()?,
        is_active: payload.is_active,
    })
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequestBody,
    responses(
        (status = 201, description = "User created", body = UserBody),
        (status = 400, description = "Invalid fields or duplicate email", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequestBody>,
) -> ApiResult<HttpResponse> {
    let new_user = parse_new_user(payload.into_inner())?;
    let user = state.users.create(new_user).await?;
    Ok(HttpResponse::Created().json(UserBody::from(user)))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "Users", body = [UserBody])),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn get_all_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserBody>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users.into_iter().map(UserBody::from).collect()))
}

/// Fetch a single user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<UserBody>> {
    let user = state.users.get(UserId::new(path.into_inner())).await?;
    Ok(web::Json(UserBody::from(user)))
}

/// Partially update a user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    request_body = UpdateUserRequestBody,
    responses(
        (status = 200, description = "Updated user", body = UserBody),
        (status = 400, description = "Invalid fields or duplicate email", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<UpdateUserRequestBody>,
) -> ApiResult<web::Json<UserBody>> {
    let update = parse_user_update(payload.into_inner())?;
    let user = state
        .users
        .update(UserId::new(path.into_inner()), update)
        .await?;
    Ok(web::Json(UserBody::from(user)))
}

/// Delete a user. Enrollments referencing the user are left in place.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state.users.delete(UserId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Deactivate a user; idempotent.
#[utoipa::path(
    patch,
    path = "/api/users/{id}/deactivate",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "Deactivated user", body = UserBody),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deactivateUser"
)]
#[patch("/users/{id}/deactivate")]
pub async fn deactivate_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<UserBody>> {
    let user = state
        .users
        .deactivate(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(UserBody::from(user)))
}
