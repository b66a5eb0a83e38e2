use super::actions::Action;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug)]
struct PendingDismiss {
    seq: u64,
    handle: JoinHandle<()>,
    armed_at: Instant,
}

/// Auto-dismiss timer for the on-screen notification.
///
/// At most one timer is pending. When it fires it sends
/// [`Action::NotificationExpired`] with the sequence number it was armed for;
/// the receiver decides whether that notification is still current.
pub struct NotificationTimer {
    pending: Option<PendingDismiss>,
    duration: Duration,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl NotificationTimer {
    pub fn new(duration: Duration) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                pending: None,
                duration,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Start the countdown for notification `seq`, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, seq: u64) {
        self.cancel();

        let action_sender = self.action_sender.clone();
        let duration = self.duration;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = action_sender.send(Action::NotificationExpired(seq));
        });

        self.pending = Some(PendingDismiss {
            seq,
            handle,
            armed_at: Instant::now(),
        });
    }

    /// Drop the pending countdown, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }

    /// Forget a countdown that already fired
    pub fn cleanup_finished(&mut self) {
        if self.pending.as_ref().is_some_and(|pending| pending.handle.is_finished()) {
            self.pending = None;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| !pending.handle.is_finished())
    }

    /// Sequence number of the notification being counted down
    pub fn armed_seq(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.seq)
    }

    /// Time left before the pending countdown fires
    pub fn remaining(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| self.duration.saturating_sub(pending.armed_at.elapsed()))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
