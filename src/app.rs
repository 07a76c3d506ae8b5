use axum::{response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{domains::registration::rest::registration_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  // The landing page is served from elsewhere, so every origin may call us.
  let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

  Router::new()
    .route("/", get(hello_handler))
    .merge(registration_routes())
    .layer(cors)
    .with_state(state)
}

pub async fn hello_handler() -> Html<String> {
  Html("<h1>AagniChain backend is running</h1>".to_string())
}
