//! User notification channel
//!
//! Fire-and-forget transient messages for the display layer, used to report
//! propagation failures after the toggle has already been applied locally.

use tokio::sync::mpsc;

pub trait Notifier: Send + Sync {
    fn notify(&self, message: String);
}

/// Notifier backed by an unbounded channel; the display layer drains the
/// receiving end.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: String) {
        // Nobody listening is fine; messages are transient
        let _ = self.tx.send(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_reach_receiver() {
        let (notifier, mut rx) = ChannelNotifier::new();

        notifier.notify("remote call failed".to_string());
        assert_eq!(rx.try_recv().unwrap(), "remote call failed");
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);

        notifier.notify("nobody cares".to_string());
    }
}
