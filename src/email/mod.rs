//! Outbound email via the Resend transactional API.
//!
//! The rest of the crate talks to the [`EmailClient`] trait; the production
//! implementation is [`ResendClient`], which issues one HTTP call per send.

mod client;
mod types;

pub use client::{EmailClient, EmailClientError, ResendClient};
pub use types::{EmailConfig, EmailMessage, SentEmail};
