use serde::{Deserialize, Serialize};

const FARMER_SUBJECT: &str = "Thank You for Registering with AagniChain! 🙏";
const BUSINESS_SUBJECT: &str = "Your Partnership Inquiry with AagniChain";

const FARMER_BODY: &str = r#"
<div style="font-family: Arial, sans-serif; line-height: 1.6;">
    <h2>Hello,</h2>
    <p>Thank you for registering your interest in AagniChain! We're thrilled to have you on board.</p>
    <p>You are now on our exclusive pre-launch list. We will notify you at this email address as soon as we launch in your area.</p>
    <p>Together, we can turn Parali into a goldmine and build a cleaner, wealthier, and healthier India.</p>
    <br>
    <p>Best Regards,</p>
    <p><strong>The AagniChain Team</strong></p>
</div>
"#;

const BUSINESS_BODY: &str = r#"
<div style="font-family: Arial, sans-serif; line-height: 1.6;">
    <h2>Hello,</h2>
    <p>Thank you for your interest in partnering with AagniChain to build a sustainable future.</p>
    <p>We have received your inquiry and a member of our partnership team will reach out to you at this email address within the next 48 hours to discuss potential synergies.</p>
    <p>We look forward to exploring how we can collaborate to meet your ESG goals and empower local communities.</p>
    <br>
    <p>Best Regards,</p>
    <p><strong>The AagniChain Partnership Team</strong></p>
</div>
"#;

/// The two supported submission categories. They share one control flow and
/// differ only in email content and sender display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
  Farmer,
  Business,
}

impl RegistrationKind {
  pub fn subject(&self) -> &'static str {
    match self {
      RegistrationKind::Farmer => FARMER_SUBJECT,
      RegistrationKind::Business => BUSINESS_SUBJECT,
    }
  }

  pub fn html_body(&self) -> &'static str {
    match self {
      RegistrationKind::Farmer => FARMER_BODY,
      RegistrationKind::Business => BUSINESS_BODY,
    }
  }

  pub fn sender_name(&self) -> &'static str {
    match self {
      RegistrationKind::Farmer => "AagniChain",
      RegistrationKind::Business => "AagniChain Partnerships",
    }
  }

  pub fn success_message(&self) -> &'static str {
    match self {
      RegistrationKind::Farmer => "Confirmation email sent successfully!",
      RegistrationKind::Business => "Inquiry confirmation sent successfully!",
    }
  }
}

impl std::fmt::Display for RegistrationKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RegistrationKind::Farmer => write!(f, "farmer"),
      RegistrationKind::Business => write!(f, "business"),
    }
  }
}

/// Incoming payload. `email` stays optional so an empty JSON object decodes
/// and gets the domain's own 400 instead of an extractor rejection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationRequest {
  pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationResponse {
  pub success: bool,
  pub message: String,
}
