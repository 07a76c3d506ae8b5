pub mod error;

use anyhow::Context;

use crate::email::EmailConfig;

/// Build the email configuration from the environment. The API key must be
/// set; sender and reply-to fall back to the production defaults.
pub fn init_email_config() -> anyhow::Result<EmailConfig> {
  use std::env;

  let defaults = EmailConfig::default();

  Ok(EmailConfig {
    api_key: env::var("RESEND_API_KEY").context("RESEND_API_KEY environment variable must be set")?,
    from_email: env::var("RESEND_FROM_EMAIL").unwrap_or(defaults.from_email),
    reply_to: env::var("RESEND_REPLY_TO").unwrap_or(defaults.reply_to),
    base_url: env::var("RESEND_BASE_URL").unwrap_or(defaults.base_url),
  })
}
