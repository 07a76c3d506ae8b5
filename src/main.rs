use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;

use aagnichain_api::app::create_app;
use aagnichain_api::email::ResendClient;
use aagnichain_api::state::SharedAppState;
use aagnichain_api::utils::init_email_config;

const PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let email_config = init_email_config()?;
  let email_client = Arc::new(ResendClient::new(&email_config));
  let app_state = SharedAppState::new(email_client, email_config);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(("0.0.0.0", PORT)).await?;

  tracing::info!("AagniChain backend server is running on http://0.0.0.0:{}", PORT);
  tracing::info!("Waiting for registration requests...");

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
