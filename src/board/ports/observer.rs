//! Observer port for transition notifications.

use crate::board::domain::TransitionNotification;

/// Receives a notification after every applied transition.
///
/// Closures taking `&TransitionNotification` are observers too.
#[cfg_attr(test, mockall::automock)]
pub trait TransitionObserver: Send + Sync {
    /// Called once per applied transition, after the card store changed.
    fn on_transition(&self, notification: &TransitionNotification);
}

impl<F> TransitionObserver for F
where
    F: Fn(&TransitionNotification) + Send + Sync,
{
    fn on_transition(&self, notification: &TransitionNotification) {
        self(notification);
    }
}
