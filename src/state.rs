use std::sync::Arc;

use crate::domains::registration::{
  model::{RegistrationKind, RegistrationRequest, RegistrationResponse},
  service::{RegistrationService, RegistrationServiceError, RegistrationServiceImpl},
};
use crate::email::{EmailClient, EmailConfig};

pub trait AppState: Clone + Send + Sync + 'static {
  fn register(
    &self,
    kind: RegistrationKind,
    req: RegistrationRequest,
  ) -> impl std::future::Future<Output = Result<RegistrationResponse, RegistrationServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub registration_service: Arc<RegistrationServiceImpl>,
}

impl SharedAppState {
  pub fn new(email_client: Arc<dyn EmailClient>, email_config: EmailConfig) -> Self {
    let registration_service = Arc::new(RegistrationServiceImpl::new(email_client, email_config));

    Self { registration_service }
  }
}

impl AppState for SharedAppState {
  async fn register(
    &self,
    kind: RegistrationKind,
    req: RegistrationRequest,
  ) -> Result<RegistrationResponse, RegistrationServiceError> {
    self.registration_service.register(kind, req).await
  }
}
