//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

/// Notification gateway configuration.
///
/// The `provider` selects the delivery backend: `"log"` writes each message
/// to the application log (development default), `"api"` posts to an HTTP
/// mail-delivery API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Delivery backend: `"log"` or `"api"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// HTTP mail API endpoint (for the `api` provider).
    #[serde(default)]
    pub api_url: String,
    /// HTTP mail API key (for the `api` provider).
    #[serde(default)]
    pub api_key: String,
    /// Sender address placed on every outbound message.
    #[serde(default = "default_sender_email")]
    pub sender_email: String,
    /// Optional sender display name.
    #[serde(default)]
    pub sender_name: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: String::new(),
            api_key: String::new(),
            sender_email: default_sender_email(),
            sender_name: None,
        }
    }
}

fn default_provider() -> String {
    "log".to_string()
}

fn default_sender_email() -> String {
    "no-reply@accounthub.local".to_string()
}
