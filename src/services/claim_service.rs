// src/services/claim_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ClaimRepository,
    models::claim::{Claim, ClaimStatus, NewClaim},
    services::notification::ClaimNotifier,
};

#[derive(Clone)]
pub struct ClaimService {
    repo: ClaimRepository,
    notifier: Arc<dyn ClaimNotifier>,
}

impl ClaimService {
    pub fn new(repo: ClaimRepository, notifier: Arc<dyn ClaimNotifier>) -> Self {
        Self { repo, notifier }
    }

    /// Persiste a reclamação (sempre Pending) e só então envia a confirmação.
    pub async fn submit(&self, new_claim: NewClaim) -> Result<Claim, AppError> {
        let claim = self.repo.create(&new_claim).await?;

        tracing::info!(claim_id = %claim.id, order_number = %claim.order_number, "Reclamação registrada");

        self.notifier.claim_submitted(&claim).await?;

        Ok(claim)
    }

    /// Muda apenas o status. Este é o único ponto que dispara o e-mail de mudança.
    pub async fn update_status(&self, id: Uuid, status: ClaimStatus) -> Result<Claim, AppError> {
        let claim = self
            .repo
            .update_status(id, status)
            .await?
            .ok_or(AppError::ClaimNotFound)?;

        tracing::info!(claim_id = %claim.id, status = %claim.status, "Status da reclamação alterado");

        self.notifier.claim_status_changed(&claim).await?;

        Ok(claim)
    }

    pub async fn get(&self, id: Uuid) -> Result<Claim, AppError> {
        self.repo.find_by_id(id).await?.ok_or(AppError::ClaimNotFound)
    }

    pub async fn search(
        &self,
        order_number: Option<&str>,
        email: Option<&str>,
    ) -> Result<Vec<Claim>, AppError> {
        self.repo.search(order_number, email).await
    }

    pub async fn list_all(&self) -> Result<Vec<Claim>, AppError> {
        self.repo.list_all().await
    }
}
