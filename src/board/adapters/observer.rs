//! Ready-made transition observers.

use std::sync::{PoisonError, RwLock};

use tracing::info;

use crate::board::{domain::TransitionNotification, ports::TransitionObserver};

/// Observer that logs every transition through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingTransitionObserver;

impl TransitionObserver for LoggingTransitionObserver {
    fn on_transition(&self, notification: &TransitionNotification) {
        info!(
            card_id = %notification.card_id,
            pipeline_id = %notification.pipeline_id,
            from_stage = %notification.from_stage,
            to_stage = %notification.to_stage,
            "{} moved to {}",
            notification.card_title,
            notification.to_stage_label
        );
    }
}

/// Observer that keeps every notification it receives.
///
/// Useful for hosts that batch feedback and for tests.
#[derive(Debug, Default)]
pub struct RecordingTransitionObserver {
    received: RwLock<Vec<TransitionNotification>>,
}

impl RecordingTransitionObserver {
    /// Creates an observer with no recorded notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications received so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<TransitionNotification> {
        self.received
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the recorded notifications.
    #[must_use]
    pub fn drain(&self) -> Vec<TransitionNotification> {
        std::mem::take(
            &mut *self
                .received
                .write()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl TransitionObserver for RecordingTransitionObserver {
    fn on_transition(&self, notification: &TransitionNotification) {
        self.received
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}
