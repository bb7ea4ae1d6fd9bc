//! E-mails de notificação enviados ao cliente quando a reclamação é criada
//! e quando o status muda.
//!
//! O envio passa pela trait [`ClaimNotifier`]; em produção usa SMTP via
//! `lettre`, e sem SMTP configurado apenas registra a mensagem no log.

use async_trait::async_trait;
use lettre::{
    message::header::ContentType,
    transport::smtp::{authentication::Credentials, Error as SmtpError},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::{config::SmtpConfig, models::claim::Claim};

/// Erros que podem ocorrer ao enviar e-mail.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Conteúdo de um e-mail já montado, independente do transporte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub body: String,
}

impl EmailContent {
    pub fn submission(claim: &Claim) -> Self {
        Self {
            subject: format!("We received your claim for order {}", claim.order_number),
            body: format!(
                "Hello {},\n\n\
                 Your warranty claim for order {} was received and is now {}.\n\
                 Claim reference: {}\n\n\
                 Problem reported:\n{}\n\n\
                 We will email you again whenever its status changes.\n",
                claim.name, claim.order_number, claim.status, claim.id, claim.problem_description,
            ),
        }
    }

    pub fn status_update(claim: &Claim) -> Self {
        Self {
            subject: format!(
                "Claim for order {} is now {}",
                claim.order_number, claim.status
            ),
            body: format!(
                "Hello {},\n\n\
                 The status of your warranty claim for order {} changed to: {}.\n\
                 Claim reference: {}\n",
                claim.name, claim.order_number, claim.status, claim.id,
            ),
        }
    }
}

/// Ponto único de envio das notificações de reclamação.
#[async_trait]
pub trait ClaimNotifier: Send + Sync {
    async fn send(&self, to: &str, email: EmailContent) -> Result<(), NotificationError>;

    async fn claim_submitted(&self, claim: &Claim) -> Result<(), NotificationError> {
        self.send(&claim.email, EmailContent::submission(claim)).await
    }

    async fn claim_status_changed(&self, claim: &Claim) -> Result<(), NotificationError> {
        self.send(&claim.email, EmailContent::status_update(claim)).await
    }
}

/// Envio real via SMTP (STARTTLS).
#[derive(Clone)]
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl ClaimNotifier for SmtpNotifier {
    async fn send(&self, to: &str, email: EmailContent) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| NotificationError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| NotificationError::InvalidAddress(to.to_string()))?)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.mailer.send(message).await?;

        tracing::info!(to = %to, subject = %email.subject, "📧 E-mail enviado");
        Ok(())
    }
}

/// Usado quando o SMTP não está configurado: só registra o e-mail no log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl ClaimNotifier for LogNotifier {
    async fn send(&self, to: &str, email: EmailContent) -> Result<(), NotificationError> {
        tracing::info!(
            to = %to,
            subject = %email.subject,
            "SMTP não configurado; e-mail apenas registrado no log"
        );
        tracing::debug!(body = %email.body);
        Ok(())
    }
}
