// src/db/claim_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::claim::{Claim, ClaimStatus, NewClaim},
};

const CLAIM_COLUMNS: &str = "id, order_number, email, name, address, phone_number, brand_id, \
     problem_description, notification_acknowledged, status, submission_date";

#[derive(Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere a reclamação com status Pending e data de envio do banco.
    pub async fn create(&self, claim: &NewClaim) -> Result<Claim, AppError> {
        let sql = format!(
            "INSERT INTO claims (
                order_number, email, name, address, phone_number,
                brand_id, problem_description, notification_acknowledged, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, $8)
            RETURNING {CLAIM_COLUMNS}"
        );

        sqlx::query_as::<_, Claim>(&sql)
            .bind(&claim.order_number)
            .bind(&claim.email)
            .bind(&claim.name)
            .bind(&claim.address)
            .bind(&claim.phone_number)
            .bind(claim.brand_id)
            .bind(&claim.problem_description)
            .bind(ClaimStatus::Pending)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        if db_err.constraint() == Some("claims_order_number_key") {
                            return AppError::DuplicateOrderNumber;
                        }
                    }
                    if db_err.is_foreign_key_violation() {
                        return AppError::BrandNotFound;
                    }
                }
                e.into()
            })
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Claim>, AppError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE id = $1");

        let claim = sqlx::query_as::<_, Claim>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(claim)
    }

    /// Busca por número de pedido e/ou e-mail. Filtro ausente não restringe.
    pub async fn search(
        &self,
        order_number: Option<&str>,
        email: Option<&str>,
    ) -> Result<Vec<Claim>, AppError> {
        let sql = format!(
            "SELECT {CLAIM_COLUMNS} FROM claims
            WHERE ($1::text IS NULL OR order_number = $1)
              AND ($2::text IS NULL OR email = $2)
            ORDER BY submission_date DESC"
        );

        let claims = sqlx::query_as::<_, Claim>(&sql)
            .bind(order_number)
            .bind(email)
            .fetch_all(&self.pool)
            .await?;

        Ok(claims)
    }

    pub async fn list_all(&self) -> Result<Vec<Claim>, AppError> {
        self.search(None, None).await
    }

    /// Altera somente a coluna de status.
    pub async fn update_status(&self, id: Uuid, status: ClaimStatus) -> Result<Option<Claim>, AppError> {
        let sql = format!("UPDATE claims SET status = $1 WHERE id = $2 RETURNING {CLAIM_COLUMNS}");

        let claim = sqlx::query_as::<_, Claim>(&sql)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(claim)
    }
}
