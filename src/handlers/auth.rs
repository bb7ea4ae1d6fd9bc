// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::auth::{CreateAdminPayload, LoginUserPayload, UserExistsResponse, UserInfo},
};

// GET /api/users/check
#[utoipa::path(
    get,
    path = "/api/users/check",
    tag = "Auth",
    responses(
        (status = 200, description = "Indica se algum usuário já foi criado", body = UserExistsResponse)
    )
)]
pub async fn check_users(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let exists = app_state.auth_service.any_user_exists().await?;

    Ok(Json(UserExistsResponse { exists }))
}

// POST /api/admin/create
#[utoipa::path(
    post,
    path = "/api/admin/create",
    tag = "Auth",
    request_body = CreateAdminPayload,
    responses(
        (status = 201, description = "Administrador inicial criado", body = UserInfo),
        (status = 400, description = "Dados inválidos ou administrador já existe")
    )
)]
pub async fn create_admin(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateAdminPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let admin = app_state
        .auth_service
        .bootstrap_admin(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(admin)))
}

// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Credenciais corretas", body = UserInfo),
        (status = 400, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<LoginUserPayload>, AppError>,
) -> Result<Json<UserInfo>, AppError> {
    payload.validate()?;

    let user = app_state
        .auth_service
        .login_user(&payload.email, &payload.password)
        .await?;

    Ok(Json(user))
}
