use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailClient, EmailClientError, EmailConfig, EmailMessage, SentEmail},
  state::SharedAppState,
};

enum StubOutcome {
  Success(&'static str),
  Rejected(&'static str),
  Failure(&'static str),
}

/// Email client double that records every message it is asked to send.
pub struct StubEmailClient {
  outcome: StubOutcome,
  sent: Mutex<Vec<EmailMessage>>,
}

impl StubEmailClient {
  pub fn success(id: &'static str) -> Self {
    Self::with_outcome(StubOutcome::Success(id))
  }

  pub fn rejected(detail: &'static str) -> Self {
    Self::with_outcome(StubOutcome::Rejected(detail))
  }

  pub fn failing(detail: &'static str) -> Self {
    Self::with_outcome(StubOutcome::Failure(detail))
  }

  fn with_outcome(outcome: StubOutcome) -> Self {
    Self {
      outcome,
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn sent_messages(&self) -> Vec<EmailMessage> {
    self.sent.lock().expect("lock stub messages").clone()
  }
}

#[async_trait]
impl EmailClient for StubEmailClient {
  async fn send(&self, message: &EmailMessage) -> Result<SentEmail, EmailClientError> {
    self.sent.lock().expect("lock stub messages").push(message.clone());

    match self.outcome {
      StubOutcome::Success(id) => Ok(SentEmail { id: id.to_string() }),
      StubOutcome::Rejected(detail) => Err(EmailClientError::Provider(detail.to_string())),
      StubOutcome::Failure(detail) => Err(EmailClientError::Unexpected(detail.to_string())),
    }
  }
}

pub fn app_with_client(client: Arc<StubEmailClient>) -> Router {
  let state = SharedAppState::new(client, EmailConfig::default());
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
