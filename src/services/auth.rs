// src/services/auth.rs

use std::sync::LazyLock;

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{User, UserInfo},
};

// Hash usado quando o e-mail não existe, para o login custar o mesmo bcrypt
// nos dois caminhos de falha.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash("senha-que-ninguem-usa", DEFAULT_COST).ok());

/// Confere a senha contra o hash do usuário, ou contra o hash fictício
/// quando o usuário não existe (sempre falso nesse caso).
fn verify_password(password: &str, stored_hash: Option<&str>) -> Result<bool, AppError> {
    match stored_hash {
        Some(stored) => Ok(verify(password, stored)?),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                verify(password, dummy)?;
            }
            Ok(false)
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    pool: PgPool,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, pool: PgPool) -> Self {
        Self { user_repo, pool }
    }

    pub async fn any_user_exists(&self) -> Result<bool, AppError> {
        self.user_repo.any_exists().await
    }

    /// Cria o primeiro administrador. Recusa se já existir qualquer usuário.
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> Result<UserInfo, AppError> {
        // Recusa cedo, antes do bcrypt
        if self.user_repo.any_exists().await? {
            return Err(AppError::AdminAlreadyExists);
        }

        // 1. Hashing (fora da transação, pois não toca no banco)
        let password_clone = password.to_owned();
        let hashed_password = tokio::task::spawn_blocking(move || {
            hash(&password_clone, bcrypt::DEFAULT_COST)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        // 2. Revalida dentro da transação
        if self.user_repo.count(&mut *tx).await? > 0 {
            return Err(AppError::AdminAlreadyExists);
        }

        // 3. Cria o usuário e reserva o marcador. Se outro bootstrap concorrente
        // chegar primeiro, o marcador falha e o tx sofre rollback ao sair do escopo.
        let admin = self
            .user_repo
            .create_admin(&mut *tx, email, &hashed_password)
            .await?;
        self.user_repo
            .claim_bootstrap_marker(&mut *tx, admin.id)
            .await?;

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        tracing::info!(user_id = %admin.id, "👤 Administrador inicial criado");

        Ok(admin.into())
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<UserInfo, AppError> {
        let user: Option<User> = self.user_repo.find_by_email(email).await?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.as_ref().map(|u| u.password_hash.clone());

        // Executa a verificação em um thread separado, mesmo sem usuário
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify_password(&password_clone, password_hash_clone.as_deref())
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        match user {
            Some(user) if is_password_valid => Ok(user.into()),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
