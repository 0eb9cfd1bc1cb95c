//! Event bus port — publish/subscribe for profile events.

use std::future::Future;

use modekit_domain::error::ModeKitError;
use modekit_domain::event::ProfileEvent;

/// Publishes profile events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: ProfileEvent) -> impl Future<Output = Result<(), ModeKitError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: ProfileEvent) -> impl Future<Output = Result<(), ModeKitError>> + Send {
        (**self).publish(event)
    }
}
