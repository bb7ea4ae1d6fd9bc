// src/handlers/brands.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState, models::brand::Brand};

// GET /api/brands
#[utoipa::path(
    get,
    path = "/api/brands",
    tag = "Brands",
    responses(
        (status = 200, description = "Lista de marcas", body = Vec<Brand>)
    )
)]
pub async fn list_brands(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let brands = app_state.brand_repo.list_all().await?;

    Ok((StatusCode::OK, Json(brands)))
}
