use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use tracing::trace;

/// Signals that the camera has a new frame. Safe to call from any thread.
#[derive(Clone)]
pub struct FrameNotifier {
    tx: Sender<()>,
}

/// Update-thread side of the notification channel.
pub struct NotificationSlot {
    rx: Receiver<()>,
}

/// Creates a single-slot notification channel.
///
/// Notifications raised while one is already pending collapse into it, so the
/// update thread sees at most one per poll no matter how many frames arrived.
pub fn notification_slot() -> (FrameNotifier, NotificationSlot) {
    let (tx, rx) = bounded(1);
    (FrameNotifier { tx }, NotificationSlot { rx })
}

impl FrameNotifier {
    pub fn notify(&self) {
        match self.tx.try_send(()) {
            Ok(()) => {}
            Err(TrySendError::Full(())) => trace!("Frame notification already pending"),
            Err(TrySendError::Disconnected(())) => trace!("Notification slot closed"),
        }
    }
}

impl NotificationSlot {
    /// Consumes the pending notification, if any.
    pub fn take_pending(&self) -> bool {
        self.rx.try_recv().is_ok()
    }
}
