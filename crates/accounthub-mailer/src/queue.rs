//! Fire-and-forget mail queue.
//!
//! Flows submit one or more [`MailJob`]s and continue immediately; a
//! dispatcher task drains the channel and hands each job to the configured
//! [`MailSender`]. Delivery failures are logged and never propagate back
//! to the submitting flow.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::message::MailJob;
use crate::sender::MailSender;

/// Submission half of the mail queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MailQueue {
    tx: mpsc::UnboundedSender<MailJob>,
}

impl MailQueue {
    /// Create a queue and its paired dispatcher.
    pub fn new(sender: Arc<dyn MailSender>) -> (Self, MailDispatcher) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, MailDispatcher { rx, sender })
    }

    /// Submit a batch of jobs for asynchronous delivery.
    ///
    /// Never fails from the caller's perspective; if the dispatcher is
    /// gone the jobs are dropped with a warning.
    pub fn submit(&self, jobs: Vec<MailJob>) {
        for job in jobs {
            if self.tx.send(job).is_err() {
                warn!("Mail dispatcher is gone; dropping queued mail");
                return;
            }
        }
    }

    /// Submit a single job for asynchronous delivery.
    pub fn submit_one(&self, job: MailJob) {
        self.submit(vec![job]);
    }
}

/// Receiving half: drains the queue and delivers each job.
pub struct MailDispatcher {
    rx: mpsc::UnboundedReceiver<MailJob>,
    sender: Arc<dyn MailSender>,
}

impl MailDispatcher {
    /// Run the dispatch loop until shutdown is signalled and the queue has
    /// been drained of everything already submitted.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!("Mail dispatcher started");

        loop {
            tokio::select! {
                job = self.rx.recv() => {
                    match job {
                        Some(job) => self.deliver(job).await,
                        None => break,
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        // Drain what is already queued, then stop.
                        while let Ok(job) = self.rx.try_recv() {
                            self.deliver(job).await;
                        }
                        break;
                    }
                }
            }
        }

        info!("Mail dispatcher stopped");
    }

    async fn deliver(&self, job: MailJob) {
        if let Err(e) = self.sender.send(&job).await {
            warn!(to = %job.email, subject = %job.subject, error = %e, "Mail delivery failed");
        }
    }
}
