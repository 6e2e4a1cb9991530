//! # accounthub-mailer
//!
//! The notification gateway. Exposes a [`MailSender`] delivery trait with
//! log-only and HTTP-API backends, HTML message templates for every
//! account-lifecycle mail, and the [`MailQueue`] used by the auth engine
//! for fire-and-forget submission.

pub mod api_sender;
pub mod message;
pub mod queue;
pub mod sender;

pub use api_sender::HttpApiMailSender;
pub use message::MailJob;
pub use queue::{MailDispatcher, MailQueue};
pub use sender::{LogMailSender, MailSender};
