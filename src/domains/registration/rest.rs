use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{RegistrationKind, RegistrationRequest, RegistrationResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

fn map_registration_service_error(e: super::service::RegistrationServiceError) -> AppError {
  use super::service::RegistrationServiceError;
  match e {
    RegistrationServiceError::ValidationError(msg) => AppError::bad_request(msg),
    RegistrationServiceError::ProviderError(msg) => AppError::bad_request(msg),
    RegistrationServiceError::InternalServerError(msg) => AppError::internal_server_error(msg),
  }
}

pub fn registration_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/register-farmer", post(register_farmer_handler))
    .route("/register-business", post(register_business_handler))
}

async fn register_handler(
  state: SharedAppState,
  kind: RegistrationKind,
  payload: RegistrationRequest,
) -> Result<JsonResponse<RegistrationResponse>, AppError> {
  state
    .register(kind, payload)
    .await
    .map(JsonResponse)
    .map_err(map_registration_service_error)
}

async fn register_farmer_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<RegistrationRequest>,
) -> Result<JsonResponse<RegistrationResponse>, AppError> {
  register_handler(state, RegistrationKind::Farmer, payload).await
}

async fn register_business_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<RegistrationRequest>,
) -> Result<JsonResponse<RegistrationResponse>, AppError> {
  register_handler(state, RegistrationKind::Business, payload).await
}
