//! Transition notifications and move outcomes.

use super::{Card, CardId, PipelineId, Stage, StageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emitted to observers after a card changes stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionNotification {
    /// Card that moved.
    pub card_id: CardId,
    /// Pipeline the card belongs to.
    pub pipeline_id: PipelineId,
    /// Stage the card left.
    pub from_stage: StageId,
    /// Stage the card entered.
    pub to_stage: StageId,
    /// Label of the stage the card entered.
    pub to_stage_label: String,
    /// Card title at the time of the move.
    pub card_title: String,
    /// When the move was applied.
    pub occurred_at: DateTime<Utc>,
}

impl TransitionNotification {
    /// Builds the notification for `card` leaving its current stage for
    /// `target`.
    #[must_use]
    pub fn new(card: &Card, target: &Stage, occurred_at: DateTime<Utc>) -> Self {
        Self {
            card_id: card.id().clone(),
            pipeline_id: card.pipeline_id().clone(),
            from_stage: card.stage_id().clone(),
            to_stage: target.id().clone(),
            to_stage_label: target.label().to_owned(),
            card_title: card.title().to_owned(),
            occurred_at,
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The card already sat in the target stage; nothing changed and no
    /// notification fired.
    Unchanged(Card),
    /// The card was relocated.
    Moved {
        /// Card as stored after the move.
        card: Card,
        /// Notification delivered to observers.
        notification: TransitionNotification,
    },
}

impl TransitionOutcome {
    /// Returns the card after the request.
    #[must_use]
    pub const fn card(&self) -> &Card {
        match self {
            Self::Unchanged(card) | Self::Moved { card, .. } => card,
        }
    }

    /// Returns the emitted notification, if the card moved.
    #[must_use]
    pub const fn notification(&self) -> Option<&TransitionNotification> {
        match self {
            Self::Unchanged(_) => None,
            Self::Moved { notification, .. } => Some(notification),
        }
    }

    /// Returns whether the card changed stage.
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
