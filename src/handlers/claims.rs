// src/handlers/claims.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    config::AppState,
    models::claim::{Claim, ClaimStatus, NewClaim},
};

// =============================================================================
//  ENVIO DE RECLAMAÇÃO (PÚBLICO)
// =============================================================================

// Todos os campos são opcionais no JSON para podermos listar exatamente
// quais estão faltando, em vez de falhar na desserialização.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClaimPayload {
    #[schema(example = "ORD-10293")]
    pub order_number: Option<String>,
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,
    #[schema(example = "Maria da Silva")]
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    /// ID da marca
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub brand: Option<String>,
    pub problem_description: Option<String>,
    #[schema(example = true)]
    pub notification_acknowledged: Option<bool>,
    /// Ignorado: toda reclamação nasce como Pending
    pub status: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SubmitClaimPayload {
    /// Converte o payload em uma reclamação pronta para inserir.
    ///
    /// Ordem das verificações: campos ausentes, confirmação do aviso,
    /// formato de e-mail e ID da marca.
    pub fn into_new_claim(self) -> Result<NewClaim, AppError> {
        let required = [
            ("orderNumber", present(&self.order_number).is_some()),
            ("email", present(&self.email).is_some()),
            ("name", present(&self.name).is_some()),
            ("address", present(&self.address).is_some()),
            ("phoneNumber", present(&self.phone_number).is_some()),
            ("brand", present(&self.brand).is_some()),
            ("problemDescription", present(&self.problem_description).is_some()),
            ("notificationAcknowledged", self.notification_acknowledged.is_some()),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        if self.notification_acknowledged != Some(true) {
            return Err(AppError::NotAcknowledged);
        }

        let mut errors = ValidationErrors::new();
        let email = present(&self.email).unwrap_or_default().to_string();
        if !email.validate_email() {
            errors.add("email", ValidationError::new("email").with_message("invalid_email".into()));
        }
        let brand_id = present(&self.brand).and_then(|b| Uuid::parse_str(b).ok());
        if brand_id.is_none() {
            errors.add("brand", ValidationError::new("uuid").with_message("invalid_brand".into()));
        }
        if !errors.is_empty() {
            return Err(AppError::ValidationError(errors));
        }

        let text = |value: &Option<String>| present(value).unwrap_or_default().to_string();

        Ok(NewClaim {
            order_number: text(&self.order_number),
            email,
            name: text(&self.name),
            address: text(&self.address),
            phone_number: text(&self.phone_number),
            brand_id: brand_id.unwrap_or_default(),
            problem_description: text(&self.problem_description),
        })
    }
}

// POST /api/claims
#[utoipa::path(
    post,
    path = "/api/claims",
    tag = "Claims",
    request_body = SubmitClaimPayload,
    responses(
        (status = 201, description = "Reclamação criada com status Pending", body = Claim),
        (status = 400, description = "Campos ausentes, aviso não confirmado ou pedido duplicado"),
        (status = 500, description = "Falha ao gravar ou ao enviar o e-mail")
    )
)]
pub async fn submit_claim(
    State(app_state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<SubmitClaimPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let new_claim = payload.into_new_claim()?;

    let claim = app_state.claim_service.submit(new_claim).await?;

    Ok((StatusCode::CREATED, Json(claim)))
}

// =============================================================================
//  CONSULTAS
// =============================================================================

// GET /api/claims/{id}
#[utoipa::path(
    get,
    path = "/api/claims/{id}",
    tag = "Claims",
    responses(
        (status = 200, description = "Reclamação encontrada", body = Claim),
        (status = 404, description = "Reclamação não encontrada (inclusive ID que não é UUID)")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da Reclamação")
    )
)]
pub async fn get_claim(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let claim = app_state.claim_service.get(id).await?;

    Ok((StatusCode::OK, Json(claim)))
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ClaimSearchQuery {
    pub order_number: Option<String>,
    pub email: Option<String>,
}

// GET /api/claims?orderNumber=&email=
// Usado pelo cliente para acompanhar as próprias reclamações, sem login.
#[utoipa::path(
    get,
    path = "/api/claims",
    tag = "Claims",
    params(ClaimSearchQuery),
    responses(
        (status = 200, description = "Reclamações encontradas (pode ser vazia)", body = Vec<Claim>)
    )
)]
pub async fn search_claims(
    State(app_state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ClaimSearchQuery>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let claims = app_state
        .claim_service
        .search(query.order_number.as_deref(), query.email.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(claims)))
}

// =============================================================================
//  MUDANÇA DE STATUS
// =============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusPayload {
    #[schema(example = "In Progress")]
    pub status: String,
}

// PATCH /api/claims/{id}
#[utoipa::path(
    patch,
    path = "/api/claims/{id}",
    tag = "Claims",
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status alterado e cliente notificado", body = Claim),
        (status = 400, description = "Status fora da lista permitida"),
        (status = 404, description = "Reclamação não encontrada")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da Reclamação")
    )
)]
pub async fn update_claim_status(
    State(app_state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateStatusPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let status: ClaimStatus = payload
        .status
        .parse()
        .map_err(|_| AppError::InvalidStatus(payload.status.clone()))?;

    let claim = app_state.claim_service.update_status(id, status).await?;

    Ok((StatusCode::OK, Json(claim)))
}
