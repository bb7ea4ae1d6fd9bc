// src/models/brand.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    #[schema(example = "Acme Eletrônicos")]
    pub name: String,
    // Termos que o cliente precisa confirmar antes de enviar a reclamação
    pub notice: Option<String>,
    pub created_at: DateTime<Utc>,
}
