//! Audit sink: operational and moderation records posted to a log channel.

use crate::PlatformClient;
use fccbot_core::{AuditCategory, AuditEntry};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Accepts audit entries without reporting back.
///
/// Implementations must tolerate concurrent calls from overlapping handler
/// tasks. Entries sent from one task keep their order.
pub trait AuditSink: Send + Sync {
    /// Record an entry. Never blocks on delivery.
    fn send(&self, entry: AuditEntry);
}

/// Audit sink that posts entries to a Discord channel.
///
/// Entries are queued on an unbounded channel and delivered one at a time by a
/// background task, so `send` returns immediately. Each entry is also emitted
/// as a tracing event.
#[derive(Debug, Clone)]
pub struct ChannelAuditSink {
    tx: mpsc::UnboundedSender<AuditEntry>,
}

impl ChannelAuditSink {
    /// Start the delivery task for `channel_id`.
    ///
    /// The task exits once every clone of the returned sink is dropped.
    #[instrument(skip(client), fields(channel_id = %channel_id.as_ref()))]
    pub fn spawn(
        client: Arc<dyn PlatformClient>,
        channel_id: impl AsRef<str>,
    ) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<AuditEntry>();
        let channel_id = channel_id.as_ref().to_string();
        info!("Starting audit log delivery");

        let handle = tokio::spawn(async move {
            while let Some(entry) = rx.recv().await {
                if let Err(e) = client.send_message(&channel_id, &entry.render()).await {
                    // Nowhere else to report it
                    error!(
                        channel_id = %channel_id,
                        category = %entry.category(),
                        error = %e,
                        "Failed to deliver audit entry"
                    );
                }
            }
            debug!(channel_id = %channel_id, "Audit log delivery stopped");
        });

        (Self { tx }, handle)
    }
}

impl AuditSink for ChannelAuditSink {
    fn send(&self, entry: AuditEntry) {
        match entry.category() {
            AuditCategory::Error => error!(category = %entry.category(), text = %entry.text(), "Audit"),
            _ => info!(category = %entry.category(), text = %entry.text(), "Audit"),
        }

        if self.tx.send(entry).is_err() {
            warn!("Audit delivery task is gone, entry dropped");
        }
    }
}
