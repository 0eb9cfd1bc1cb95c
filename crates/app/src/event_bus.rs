//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use modekit_domain::error::ModeKitError;
use modekit_domain::event::ProfileEvent;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
///
/// Subscribers consume events from their own receiver on their own task;
/// publishing never runs listener code synchronously, so a subscriber that
/// reacts by mutating the registry does so on its next scheduling tick
/// rather than re-entering the emitting operation.
pub struct InProcessEventBus {
    sender: broadcast::Sender<ProfileEvent>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ProfileEvent> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: ProfileEvent) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}

use std::future::Future;
