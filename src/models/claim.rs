// src/models/claim.rs

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

// Mapeia o CREATE TYPE claim_status do banco.
// Os rótulos são os mesmos que o painel exibe ("In Progress" tem espaço).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "claim_status")]
pub enum ClaimStatus {
    #[sqlx(rename = "Pending")]
    #[serde(rename = "Pending")]
    Pending,
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sqlx(rename = "Resolved")]
    #[serde(rename = "Resolved")]
    Resolved,
    #[sqlx(rename = "Rejected")]
    #[serde(rename = "Rejected")]
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Pending,
        ClaimStatus::InProgress,
        ClaimStatus::Resolved,
        ClaimStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::InProgress => "In Progress",
            ClaimStatus::Resolved => "Resolved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Erro de conversão: o texto não é um dos quatro status conhecidos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for ClaimStatus {
    type Err = UnknownStatus;

    // Comparação exata, igual ao filtro do painel
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "ORD-10293")]
    pub order_number: String,
    #[schema(example = "maria@email.com")]
    pub email: String,
    #[schema(example = "Maria da Silva")]
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand_id: Uuid,
    #[schema(example = "A tela parou de ligar depois de duas semanas.")]
    pub problem_description: String,
    pub notification_acknowledged: bool,
    pub status: ClaimStatus,
    pub submission_date: DateTime<Utc>,
}

// Dados já validados para inserir uma reclamação.
// Não existe campo de status: toda reclamação nasce como Pending.
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub order_number: String,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand_id: Uuid,
    pub problem_description: String,
}
