// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

// Dados para criar o primeiro administrador
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdminPayload {
    #[validate(email(message = "invalid_email"))]
    #[schema(example = "admin@empresa.com")]
    pub email: String,
    #[validate(length(min = 6, message = "password_too_short"))]
    #[schema(example = "segredo123")]
    pub password: String,
}

// Dados para login.
// Só exige campos preenchidos: formato inválido cai em "credenciais inválidas".
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(length(min = 1, message = "required"))]
    pub email: String,
    #[validate(length(min = 1, message = "required"))]
    pub password: String,
}

// Descritor mínimo devolvido pelo login. Nenhum token é emitido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserExistsResponse {
    pub exists: bool,
}
