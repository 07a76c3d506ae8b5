use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
  pub api_key: String,
  pub from_email: String,
  pub reply_to: String,
  pub base_url: String,
}

impl Default for EmailConfig {
  fn default() -> Self {
    EmailConfig {
      api_key: "".to_string(),
      from_email: "onboarding@resend.dev".to_string(),
      reply_to: "aagnichain2025@gmail.com".to_string(),
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub reply_to: String,
  pub subject: String,
  pub html: String,
}

impl EmailMessage {
  pub fn new(from: String, to: String, reply_to: String, subject: String, html: String) -> Self {
    EmailMessage {
      from,
      to,
      reply_to,
      subject,
      html,
    }
  }
}

/// Provider message id returned on a successful send.
#[derive(Debug, Clone, Deserialize)]
pub struct SentEmail {
  pub id: String,
}

/// Wire payload for `POST /emails`. Resend expects `to` as a list.
#[derive(Debug, Serialize)]
pub(crate) struct SendEmailRequest<'a> {
  pub from: &'a str,
  pub to: [&'a str; 1],
  pub reply_to: &'a str,
  pub subject: &'a str,
  pub html: &'a str,
}

impl<'a> SendEmailRequest<'a> {
  pub fn from_message(message: &'a EmailMessage) -> Self {
    SendEmailRequest {
      from: &message.from,
      to: [&message.to],
      reply_to: &message.reply_to,
      subject: &message.subject,
      html: &message.html,
    }
  }
}

/// Error body shape Resend uses for rejected sends.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
  pub message: String,
}
