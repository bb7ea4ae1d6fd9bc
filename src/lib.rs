//! Backend de reclamações de garantia: API JSON, lógica do painel
//! administrativo e hospedagem do frontend (SPA).

use std::path::Path;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod services;

use crate::{config::AppState, docs::ApiDoc};

/// Rotas da API, sem o frontend.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/brands", get(handlers::brands::list_brands))
        .route(
            "/api/claims",
            post(handlers::claims::submit_claim).get(handlers::claims::search_claims),
        )
        .route(
            "/api/claims/{id}",
            get(handlers::claims::get_claim).patch(handlers::claims::update_claim_status),
        )
        .route("/api/admin/claims", get(handlers::dashboard::list_dashboard_claims))
        .route("/api/users/check", get(handlers::auth::check_users))
        .route("/api/admin/create", post(handlers::auth::create_admin))
        .route("/api/login", post(handlers::auth::login))
}

/// Aplicação completa: API, arquivos estáticos e `index.html` para qualquer
/// outra rota (o roteamento do React acontece no navegador).
pub fn app(app_state: AppState, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    api_router()
        .fallback_service(spa)
        // Panic em um handler vira 500 e o servidor continua de pé
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
