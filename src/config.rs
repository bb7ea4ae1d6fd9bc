// src/config.rs

use std::{env, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{BrandRepository, ClaimRepository, UserRepository},
    services::{
        auth::AuthService,
        claim_service::ClaimService,
        notification::{ClaimNotifier, LogNotifier, SmtpNotifier},
    },
};

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

// Configuração lida das variáveis de ambiente (e do .env, se existir)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub max_connections: u32,
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let port = parse_var("PORT", DEFAULT_PORT)?;
        let max_connections = parse_var("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        // SMTP só é ativado com todas as variáveis obrigatórias presentes
        let smtp = match (
            env::var("SMTP_HOST"),
            env::var("SMTP_USERNAME"),
            env::var("SMTP_PASSWORD"),
            env::var("MAIL_FROM"),
        ) {
            (Ok(host), Ok(username), Ok(password), Ok(from_address)) => Some(SmtpConfig {
                host,
                port: parse_var("SMTP_PORT", DEFAULT_SMTP_PORT)?,
                username,
                password,
                from_address,
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            port,
            static_dir,
            max_connections,
            smtp,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} inválida: {raw}")),
        Err(_) => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub brand_repo: BrandRepository,
    pub claim_service: ClaimService,
    pub auth_service: AuthService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        let notifier: Arc<dyn ClaimNotifier> = match &config.smtp {
            Some(smtp) => {
                tracing::info!(host = %smtp.host, "📧 Notificações por SMTP habilitadas");
                Arc::new(SmtpNotifier::new(smtp).context("Configuração SMTP inválida")?)
            }
            None => {
                tracing::warn!("SMTP não configurado; notificações serão apenas registradas no log");
                Arc::new(LogNotifier)
            }
        };

        Ok(Self::with_notifier(db_pool, notifier))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_notifier(db_pool: PgPool, notifier: Arc<dyn ClaimNotifier>) -> Self {
        let brand_repo = BrandRepository::new(db_pool.clone());
        let claim_repo = ClaimRepository::new(db_pool.clone());
        let user_repo = UserRepository::new(db_pool.clone());

        Self {
            claim_service: ClaimService::new(claim_repo, notifier),
            auth_service: AuthService::new(user_repo, db_pool.clone()),
            brand_repo,
            db_pool,
        }
    }
}
