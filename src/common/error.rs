use std::collections::HashMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{models::claim::ClaimStatus, services::notification::NotificationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields: {0:?}")]
    MissingFields(Vec<&'static str>),

    #[error("Notification must be acknowledged")]
    NotAcknowledged,

    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Corpo da requisição inválido: {0}")]
    MalformedBody(String),

    #[error("Parâmetros de consulta inválidos: {0}")]
    MalformedQuery(String),

    #[error("Status inválido: {0}")]
    InvalidStatus(String),

    #[error("Filtro de status inválido: {0}")]
    InvalidStatusFilter(String),

    #[error("Ordenação inválida: {0}")]
    InvalidSortOrder(String),

    #[error("Número de pedido já existe")]
    DuplicateOrderNumber,

    #[error("Marca não encontrada")]
    BrandNotFound,

    #[error("Reclamação não encontrada")]
    ClaimNotFound,

    #[error("Administrador já existe")]
    AdminAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro ao enviar notificação: {0}")]
    NotificationError(#[from] NotificationError),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingFields(fields) => {
                let body = Json(json!({
                    "error": "Missing required fields",
                    "missingFields": fields,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidStatus(value) => {
                let allowed: Vec<&str> = ClaimStatus::ALL.iter().map(|s| s.label()).collect();
                let body = Json(json!({
                    "error": "Invalid status",
                    "status": value,
                    "allowed": allowed,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidStatusFilter(value) => {
                let allowed: Vec<&str> = std::iter::once("All")
                    .chain(ClaimStatus::ALL.iter().map(|s| s.label()))
                    .collect();
                let body = Json(json!({
                    "error": "Invalid status filter",
                    "status": value,
                    "allowed": allowed,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MalformedBody(detail) => {
                let body = Json(json!({
                    "error": "Invalid request body",
                    "details": detail,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::MalformedQuery(detail) => {
                let body = Json(json!({
                    "error": "Invalid query parameters",
                    "details": detail,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::InvalidSortOrder(_) => (StatusCode::BAD_REQUEST, "Sort must be 'asc' or 'desc'"),
            AppError::NotAcknowledged => (StatusCode::BAD_REQUEST, "Notification must be acknowledged"),
            AppError::DuplicateOrderNumber => {
                (StatusCode::BAD_REQUEST, "A claim with this order number already exists")
            }
            AppError::BrandNotFound => (StatusCode::BAD_REQUEST, "Brand not found"),
            AppError::ClaimNotFound => (StatusCode::NOT_FOUND, "Claim not found"),
            AppError::AdminAlreadyExists => (StatusCode::BAD_REQUEST, "Admin already exists"),
            // Mesma resposta para e-mail desconhecido e senha errada
            AppError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),

            // Todos os outros erros viram 500, com o detalhe no log e no corpo.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                let body = Json(json!({
                    "error": "An unexpected error occurred",
                    "details": e.to_string(),
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

// Rejeições dos extratores do axum viram respostas JSON como as demais.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::MalformedQuery(rejection.body_text())
    }
}

// O único parâmetro de caminho é o ID da reclamação: se não é um UUID,
// nenhuma reclamação pode ter esse ID.
impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::ClaimNotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(status_of(AppError::MissingFields(vec!["email"])), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::NotAcknowledged), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::DuplicateOrderNumber), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::AdminAlreadyExists), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::InvalidCredentials), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::InvalidStatus("Closed".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::ClaimNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(AppError::MalformedBody("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::MalformedQuery("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AppError::InvalidStatusFilter("Open".into())), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unexpected_errors_map_to_500() {
        assert_eq!(
            status_of(AppError::DatabaseError(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::InternalServerError(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
