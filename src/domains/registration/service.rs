use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;

use super::model::{RegistrationKind, RegistrationRequest, RegistrationResponse};
use crate::email::{EmailClient, EmailClientError, EmailConfig, EmailMessage};

#[derive(Debug)]
pub enum RegistrationServiceError {
  ValidationError(String),
  ProviderError(String),
  InternalServerError(String),
}

impl Error for RegistrationServiceError {}

impl std::fmt::Display for RegistrationServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RegistrationServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      RegistrationServiceError::ProviderError(msg) => write!(f, "Provider Error: {}", msg),
      RegistrationServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait RegistrationService: Send + Sync {
  async fn register(
    &self,
    kind: RegistrationKind,
    req: RegistrationRequest,
  ) -> Result<RegistrationResponse, RegistrationServiceError>;
}

pub struct RegistrationServiceImpl {
  email_client: Arc<dyn EmailClient>,
  email_config: EmailConfig,
}

impl RegistrationServiceImpl {
  pub fn new(email_client: Arc<dyn EmailClient>, email_config: EmailConfig) -> Self {
    Self {
      email_client,
      email_config,
    }
  }

  fn build_message(&self, kind: RegistrationKind, recipient: &str) -> EmailMessage {
    let from = format!(
      "{} ({}) <{}>",
      kind.sender_name(),
      self.email_config.reply_to,
      self.email_config.from_email
    );

    EmailMessage::new(
      from,
      recipient.to_string(),
      self.email_config.reply_to.clone(),
      kind.subject().to_string(),
      kind.html_body().to_string(),
    )
  }
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
  async fn register(
    &self,
    kind: RegistrationKind,
    req: RegistrationRequest,
  ) -> Result<RegistrationResponse, RegistrationServiceError> {
    let email = match req.email {
      Some(ref email) if !email.is_empty() => email,
      _ => return Err(RegistrationServiceError::ValidationError("Email is required".to_string())),
    };

    tracing::info!("Received {} registration request for: {}", kind, email);

    let message = self.build_message(kind, email);

    match self.email_client.send(&message).await {
      Ok(sent) => {
        tracing::info!("Confirmation email for {} registration sent: {}", kind, sent.id);
        Ok(RegistrationResponse {
          success: true,
          message: kind.success_message().to_string(),
        })
      }
      Err(EmailClientError::Provider(detail)) => {
        tracing::error!("Provider rejected {} confirmation email: {}", kind, detail);
        Err(RegistrationServiceError::ProviderError(detail))
      }
      Err(e) => {
        tracing::error!("Failed to send {} confirmation email: {}", kind, e);
        Err(RegistrationServiceError::InternalServerError(
          "Something went wrong on our end.".to_string(),
        ))
      }
    }
  }
}
