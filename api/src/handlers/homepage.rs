//! Homepage handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HomepageResponse {
    pub title: &'static str,
    pub description: &'static str,
    pub status: &'static str,
}

/// GET /homepage
pub async fn get_homepage() -> Json<HomepageResponse> {
    Json(HomepageResponse {
        title: "Dadarzz FIKSI",
        description: "Trying to make this work",
        status: "ok",
    })
}
