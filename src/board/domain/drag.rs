//! Drag-and-drop intent, reduced to a move request.
//!
//! Hosts translate pointer events into a [`DragIntent`] when a drag starts
//! and call [`DragIntent::drop_on`] with the stage under the pointer when
//! it ends.

use super::{CardId, StageId};
use serde::{Deserialize, Serialize};

/// Request to move a card to another stage of its pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCardRequest {
    /// Card to move.
    pub card_id: CardId,
    /// Destination stage.
    pub target_stage: StageId,
}

impl MoveCardRequest {
    /// Creates a move request.
    #[must_use]
    pub const fn new(card_id: CardId, target_stage: StageId) -> Self {
        Self {
            card_id,
            target_stage,
        }
    }
}

/// First half of a drag gesture: which card was picked up and where from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragIntent {
    card_id: CardId,
    source_stage: StageId,
}

impl DragIntent {
    /// Records the card picked up and its source column.
    #[must_use]
    pub const fn begin(card_id: CardId, source_stage: StageId) -> Self {
        Self {
            card_id,
            source_stage,
        }
    }

    /// Returns the dragged card.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the column the drag started from.
    #[must_use]
    pub const fn source_stage(&self) -> &StageId {
        &self.source_stage
    }

    /// Returns whether dropping on `target` would leave the card in place.
    #[must_use]
    pub fn is_same_stage(&self, target: &StageId) -> bool {
        &self.source_stage == target
    }

    /// Completes the gesture on `target`, yielding the move to execute.
    #[must_use]
    pub fn drop_on(self, target: StageId) -> MoveCardRequest {
        MoveCardRequest::new(self.card_id, target)
    }
}
