//! HTTP mail-API delivery backend.

use async_trait::async_trait;
use serde::Serialize;

use accounthub_core::AppResult;
use accounthub_core::config::mail::MailConfig;
use accounthub_core::error::AppError;

use crate::message::MailJob;
use crate::sender::MailSender;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiEmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiSendBody {
    sender: ApiEmailAddress,
    to: Vec<ApiEmailAddress>,
    subject: String,
    html_content: String,
}

/// Sends mail through a transactional mail HTTP API (Brevo-style JSON
/// contract: `sender`/`to`/`subject`/`htmlContent`, `api-key` header).
#[derive(Debug, Clone)]
pub struct HttpApiMailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: Option<String>,
}

impl HttpApiMailSender {
    /// Create a sender from mail configuration.
    ///
    /// Fails if the endpoint or API key is missing.
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        if config.api_url.trim().is_empty() {
            return Err(AppError::configuration("mail.api_url is required"));
        }
        if config.api_key.trim().is_empty() {
            return Err(AppError::configuration("mail.api_key is required"));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            sender_email: config.sender_email.clone(),
            sender_name: config.sender_name.clone(),
        })
    }
}

#[async_trait]
impl MailSender for HttpApiMailSender {
    async fn send(&self, job: &MailJob) -> AppResult<()> {
        let body = ApiSendBody {
            sender: ApiEmailAddress {
                email: self.sender_email.clone(),
                name: self.sender_name.clone(),
            },
            to: vec![ApiEmailAddress {
                email: job.email.clone(),
                name: None,
            }],
            subject: job.subject.clone(),
            html_content: job.content.clone(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::mail(format!("Mail API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::mail(format!(
                "Mail API returned {status}: {text}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_endpoint_and_key() {
        let config = MailConfig::default();
        assert!(HttpApiMailSender::new(&config).is_err());

        let config = MailConfig {
            api_url: "https://api.example.com/v3/smtp/email".to_string(),
            api_key: "k".to_string(),
            ..MailConfig::default()
        };
        assert!(HttpApiMailSender::new(&config).is_ok());
    }
}
