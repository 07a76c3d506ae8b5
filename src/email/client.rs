use async_trait::async_trait;
use thiserror::Error;

use crate::email::types::{EmailConfig, EmailMessage, ProviderErrorBody, SendEmailRequest, SentEmail};

#[derive(Error, Debug)]
pub enum EmailClientError {
  #[error("Provider rejected the send: {0}")]
  Provider(String),

  #[error("Email request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Unexpected email error: {0}")]
  Unexpected(String),
}

#[async_trait]
pub trait EmailClient: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<SentEmail, EmailClientError>;
}

pub struct ResendClient {
  http: reqwest::Client,
  api_key: String,
  base_url: String,
}

impl ResendClient {
  pub fn new(config: &EmailConfig) -> Self {
    ResendClient {
      http: reqwest::Client::new(),
      api_key: config.api_key.clone(),
      base_url: config.base_url.trim_end_matches('/').to_string(),
    }
  }
}

#[async_trait]
impl EmailClient for ResendClient {
  async fn send(&self, message: &EmailMessage) -> Result<SentEmail, EmailClientError> {
    let response = self
      .http
      .post(format!("{}/emails", self.base_url))
      .bearer_auth(&self.api_key)
      .json(&SendEmailRequest::from_message(message))
      .send()
      .await?;

    let status = response.status();
    tracing::debug!("Resend API response status: {}", status);

    if status.is_success() {
      let sent: SentEmail = response.json().await?;
      tracing::info!("Email sent successfully via Resend: {}", sent.id);
      return Ok(sent);
    }

    let body = response.text().await.unwrap_or_default();
    // Prefer the provider's own message; fall back to the raw body.
    let detail = match serde_json::from_str::<ProviderErrorBody>(&body) {
      Ok(parsed) => parsed.message,
      Err(_) if body.is_empty() => format!("Send rejected with status {}", status),
      Err(_) => body,
    };

    tracing::error!("Resend email sending error ({}): {}", status, detail);
    Err(EmailClientError::Provider(detail))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use httpmock::prelude::*;

  fn client_for(server: &MockServer) -> ResendClient {
    let config = EmailConfig {
      api_key: "re_test_key".to_string(),
      base_url: server.url(""),
      ..EmailConfig::default()
    };
    ResendClient::new(&config)
  }

  fn test_message() -> EmailMessage {
    EmailMessage::new(
      "AagniChain <onboarding@resend.dev>".to_string(),
      "farmer@example.com".to_string(),
      "aagnichain2025@gmail.com".to_string(),
      "Test Subject".to_string(),
      "<p>Test Body</p>".to_string(),
    )
  }

  #[tokio::test]
  async fn send_posts_expected_payload_and_parses_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
      when
        .method(POST)
        .path("/emails")
        .header("authorization", "Bearer re_test_key")
        .json_body(serde_json::json!({
          "from": "AagniChain <onboarding@resend.dev>",
          "to": ["farmer@example.com"],
          "reply_to": "aagnichain2025@gmail.com",
          "subject": "Test Subject",
          "html": "<p>Test Body</p>",
        }));
      then
        .status(200)
        .header("Content-Type", "application/json")
        .json_body(serde_json::json!({"id": "msg_123"}));
    });

    let sent = client_for(&server).send(&test_message()).await.expect("send succeeds");

    assert_eq!(sent.id, "msg_123");
    mock.assert();
  }

  #[tokio::test]
  async fn send_surfaces_provider_message_on_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
      when.method(POST).path("/emails");
      then
        .status(403)
        .header("Content-Type", "application/json")
        .json_body(serde_json::json!({"statusCode": 403, "name": "validation_error", "message": "invalid domain"}));
    });

    let result = client_for(&server).send(&test_message()).await;

    match result {
      Err(EmailClientError::Provider(detail)) => assert_eq!(detail, "invalid domain"),
      other => panic!("expected provider error, got {:?}", other.map(|s| s.id)),
    }
  }

  #[tokio::test]
  async fn send_falls_back_to_raw_body_for_non_json_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
      when.method(POST).path("/emails");
      then.status(500).body("upstream exploded");
    });

    let result = client_for(&server).send(&test_message()).await;

    match result {
      Err(EmailClientError::Provider(detail)) => assert!(detail.contains("upstream exploded")),
      other => panic!("expected provider error, got {:?}", other.map(|s| s.id)),
    }
  }

  #[tokio::test]
  async fn send_reports_transport_errors() {
    // Nothing is listening on this port.
    let config = EmailConfig {
      api_key: "re_test_key".to_string(),
      base_url: "http://127.0.0.1:9".to_string(),
      ..EmailConfig::default()
    };
    let client = ResendClient::new(&config);

    let result = client.send(&test_message()).await;

    assert!(matches!(result, Err(EmailClientError::Transport(_))));
  }
}
