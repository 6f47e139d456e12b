// Email relay - hands contact form submissions to an external delivery service
use crate::config::RelayConfig;
use crate::model::ContactForm;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Why the relay could not deliver a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    NotConfigured,
    Network(String),
    RateLimited,
    Rejected { status: u16, body: String },
    WorkerUnavailable,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("submission failed: {}", describe(.reason))]
pub struct SubmissionFailed {
    pub reason: FailureReason,
}

impl SubmissionFailed {
    pub fn new(reason: FailureReason) -> Self {
        Self { reason }
    }
}

fn describe(reason: &FailureReason) -> String {
    match reason {
        FailureReason::NotConfigured => "relay credentials are not configured".to_string(),
        FailureReason::Network(e) => format!("network error: {}", e),
        FailureReason::RateLimited => "rate limited by relay".to_string(),
        FailureReason::Rejected { status, body } => {
            format!("relay rejected the message ({}): {}", status, body)
        }
        FailureReason::WorkerUnavailable => "relay worker is not running".to_string(),
    }
}

/// Context attached to every message besides the visitor's own fields.
#[derive(Clone, Debug, PartialEq)]
pub struct SenderContext {
    pub site: String,
    pub sent_at: DateTime<Utc>,
}

impl SenderContext {
    pub fn now(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Trait for message delivery backends
pub trait EmailRelay: Send + Sync {
    /// Name of this relay (for logging)
    fn name(&self) -> &str;

    /// Deliver one message. Blocks until the service answers.
    fn send(&self, form: &ContactForm, context: &SenderContext) -> Result<(), SubmissionFailed>;
}

#[derive(Serialize, Debug)]
struct TemplateParams<'a> {
    user_name: &'a str,
    user_email: &'a str,
    message: &'a str,
    sent_from: &'a str,
    sent_at: String,
}

#[derive(Serialize, Debug)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS REST API relay
pub struct EmailJsRelay {
    config: RelayConfig,
    client: reqwest::blocking::Client,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    fn request_body(&self, form: &ContactForm, context: &SenderContext) -> serde_json::Value {
        build_request(&self.config, form, context)
    }
}

fn build_request(
    config: &RelayConfig,
    form: &ContactForm,
    context: &SenderContext,
) -> serde_json::Value {
    let request = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: TemplateParams {
            user_name: form.user_name.trim(),
            user_email: form.user_email.trim(),
            message: &form.message,
            sent_from: &context.site,
            sent_at: context.sent_at.to_rfc3339(),
        },
    };
    // Plain string fields only, serialization cannot fail
    serde_json::to_value(request).unwrap_or_default()
}

impl EmailRelay for EmailJsRelay {
    fn name(&self) -> &str {
        "emailjs"
    }

    fn send(&self, form: &ContactForm, context: &SenderContext) -> Result<(), SubmissionFailed> {
        if !self.config.is_complete() {
            return Err(SubmissionFailed::new(FailureReason::NotConfigured));
        }

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(form, context))
            .send()
            .map_err(|e| SubmissionFailed::new(FailureReason::Network(e.to_string())))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SubmissionFailed::new(FailureReason::RateLimited));
        }
        let body = response.text().unwrap_or_default();
        Err(SubmissionFailed::new(FailureReason::Rejected {
            status: status.as_u16(),
            body,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> RelayConfig {
        RelayConfig {
            service_id: "service_x".into(),
            template_id: "template_y".into(),
            public_key: "pk_z".into(),
            ..RelayConfig::default()
        }
    }

    #[test]
    fn test_request_shape() {
        let form = ContactForm::new(" Ada ", "ada@example.com", "Hi there");
        let context = SenderContext::now("Portfolio");
        let body = build_request(&configured(), &form, &context);

        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "pk_z");
        assert_eq!(body["template_params"]["user_name"], "Ada");
        assert_eq!(body["template_params"]["user_email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "Hi there");
        assert_eq!(body["template_params"]["sent_from"], "Portfolio");
        assert!(body["template_params"]["sent_at"].is_string());
    }

    #[test]
    fn test_unconfigured_relay_fails_without_network() {
        let relay = EmailJsRelay::new(RelayConfig {
            endpoint: "http://127.0.0.1:9/unreachable".into(),
            ..RelayConfig::default()
        })
        .expect("client");
        let form = ContactForm::new("Ada", "ada@example.com", "Hi");

        let err = relay
            .send(&form, &SenderContext::now("Portfolio"))
            .unwrap_err();
        assert_eq!(err.reason, FailureReason::NotConfigured);
    }

    #[test]
    fn test_error_message() {
        let err = SubmissionFailed::new(FailureReason::Rejected {
            status: 400,
            body: "The public key is required".into(),
        });
        assert_eq!(
            err.to_string(),
            "submission failed: relay rejected the message (400): The public key is required"
        );
    }
}
