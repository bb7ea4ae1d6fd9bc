// src/db/brand_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::brand::Brand};

// Marcas são somente leitura para a aplicação
#[derive(Clone)]
pub struct BrandRepository {
    pool: PgPool,
}

impl BrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Brand>, AppError> {
        let brands = sqlx::query_as::<_, Brand>(
            "SELECT id, name, notice, created_at FROM brands ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(brands)
    }
}
