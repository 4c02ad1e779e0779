//! Transactional email delivery through the Resend REST API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::SendError;

pub const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Provider credential. Missing or empty means delivery is disabled.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_from_address() -> String {
    "Mystical Beach <onboarding@resend.dev>".to_string()
}

fn default_contact_address() -> String {
    "idresschigeur@gmail.com".to_string()
}

/// A message ready to hand over to the provider. The sender is owned by the
/// service, not by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Whether a provider credential is available.
    fn is_configured(&self) -> bool;

    async fn send(&self, email: Email) -> Result<(), SendError>;
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned);

        if api_key.is_none() {
            tracing::warn!(
                endpoint = %config.endpoint,
                "Email provider api key not configured, inquiries will not be delivered"
            );
        } else {
            tracing::info!(
                endpoint = %config.endpoint,
                from = %config.from_address,
                "Email service initialized"
            );
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.to_owned(),
            api_key,
            from: config.from_address.to_owned(),
        })
    }
}

#[async_trait]
impl Mailer for EmailService {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[tracing::instrument(skip_all, fields(to, subject))]
    async fn send(&self, email: Email) -> Result<(), SendError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SendError::NotConfigured);
        };

        tracing::Span::current()
            .record("to", email.to.join(", ").as_str())
            .record("subject", email.subject.as_str());

        tracing::info!("Sending email");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&SendEmailRequest {
                from: &self.from,
                to: &email.to,
                reply_to: email.reply_to.as_deref(),
                subject: &email.subject,
                html: &email.html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(status = status.as_u16(), "Email accepted by provider");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_is_not_configured() {
        let config = EmailConfig {
            api_key: Some("   ".to_string()),
            ..EmailConfig::default()
        };

        let service = EmailService::new(&config).unwrap();
        assert!(!service.is_configured());
    }

    #[tokio::test]
    async fn test_send_without_api_key() {
        let service = EmailService::new(&EmailConfig::default()).unwrap();
        let result = service
            .send(Email {
                to: vec!["ops@mysticalbeach.localhost".to_string()],
                reply_to: None,
                subject: "subject".to_string(),
                html: "<p>hello</p>".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SendError::NotConfigured)));
    }

    #[test]
    fn test_request_omits_missing_reply_to() {
        let to = vec!["ops@mysticalbeach.localhost".to_string()];
        let body = serde_json::to_value(SendEmailRequest {
            from: "Mystical Beach <onboarding@resend.dev>",
            to: &to,
            reply_to: None,
            subject: "subject",
            html: "<p>hello</p>",
        })
        .unwrap();

        assert!(body.get("reply_to").is_none());
        assert_eq!(body["to"][0], "ops@mysticalbeach.localhost");
    }
}
