//! Service banner served at the root path.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Banner payload pointing clients at the interactive documentation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BannerBody {
    pub message: String,
    pub docs: String,
    pub version: String,
}

/// Service banner.
#[utoipa::path(
    get,
    path = "/",
    tags = ["meta"],
    responses((status = 200, description = "Service banner", body = BannerBody))
)]
#[get("/")]
pub async fn root() -> web::Json<BannerBody> {
    web::Json(BannerBody {
        message: "Welcome to the EduTrack API".to_owned(),
        docs: "/docs".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
