//! Mail delivery abstraction.

use async_trait::async_trait;
use tracing::info;

use accounthub_core::AppResult;

use crate::message::MailJob;

/// Delivery backend for outbound mail.
///
/// Implementations decide how a message leaves the process (HTTP API,
/// SMTP relay, log line). Errors are reported to the dispatcher, which
/// logs them; delivery failure is never surfaced to the flow that
/// requested the mail.
#[async_trait]
pub trait MailSender: Send + Sync + 'static {
    /// Deliver a single message or return an error to have it logged as
    /// failed.
    async fn send(&self, job: &MailJob) -> AppResult<()>;
}

/// Local development sender that logs the message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, job: &MailJob) -> AppResult<()> {
        info!(
            to = %job.email,
            subject = %job.subject,
            body_len = job.content.len(),
            "mail delivery stub"
        );
        Ok(())
    }
}
