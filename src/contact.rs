//! Contact form model and its one-shot delivery to the form relay.
//!
//! A submission is a single POST of the form fields, form-encoded, asking for
//! a JSON answer. Any 2xx status counts as delivered; everything else is a
//! failure and the caller keeps the form as typed.

use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, info};

pub const SUCCESS_NOTICE: &str = "Thank you for your message! I will get back to you soon.";
pub const FAILURE_NOTICE: &str =
    "There was a problem sending your message. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Field pairs in the order the page declares them.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]
    }

    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

/// Post the form once. No retries.
pub async fn submit(endpoint: String, form: ContactForm) -> Result<()> {
    debug!(%endpoint, "Submitting contact form");
    let response = reqwest::Client::new()
        .post(&endpoint)
        .header(ACCEPT, "application/json")
        .form(&form.fields())
        .send()
        .await
        .with_context(|| format!("Failed to reach form relay at {endpoint}"))?;

    let status = response.status();
    if status.is_success() {
        info!(%status, "Contact form delivered");
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(rejection(status, &body))
}

/// Error for a non-success answer, carrying the relay's messages if it sent
/// any.
pub fn rejection(status: StatusCode, body: &str) -> anyhow::Error {
    let messages = relay_error_messages(body);
    if messages.is_empty() {
        anyhow!("Form submission failed with HTTP {status}")
    } else {
        anyhow!(
            "Form submission failed with HTTP {status}: {}",
            messages.join("; ")
        )
    }
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayError>,
}

#[derive(Debug, Deserialize)]
struct RelayError {
    message: String,
}

fn relay_error_messages(body: &str) -> Vec<String> {
    serde_json::from_str::<RelayErrorBody>(body)
        .map(|parsed| parsed.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default()
}
