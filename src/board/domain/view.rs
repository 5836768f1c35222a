//! Per-stage snapshots of a pipeline's cards.

use super::{Card, CardId, FilterCriteria, PipelineDefinition, PipelineId, Stage, StageId};
use serde::Serialize;

/// One kanban column: a stage and the cards it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageColumn {
    stage: Stage,
    cards: Vec<Card>,
}

impl StageColumn {
    /// Returns the column's stage.
    #[must_use]
    pub const fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Returns the cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the count badge value.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the column restricted to cards matching `criteria`.
    #[must_use]
    pub fn filtered(&self, criteria: &FilterCriteria) -> Self {
        Self {
            stage: self.stage.clone(),
            cards: self
                .cards
                .iter()
                .filter(|card| criteria.matches(card))
                .cloned()
                .collect(),
        }
    }
}

/// Snapshot of a pipeline's cards grouped by stage, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pipeline_id: PipelineId,
    columns: Vec<StageColumn>,
}

impl BoardView {
    /// Groups `cards` into the stages of `definition`.
    ///
    /// Card order within a column follows the order of `cards`. Cards from
    /// other pipelines or unknown stages are ignored.
    #[must_use]
    pub fn group(definition: &PipelineDefinition, cards: Vec<Card>) -> Self {
        let mut columns: Vec<StageColumn> = definition
            .stages()
            .iter()
            .map(|stage| StageColumn {
                stage: stage.clone(),
                cards: Vec::new(),
            })
            .collect();

        for card in cards {
            if card.pipeline_id() != definition.id() {
                continue;
            }
            if let Some(column) = columns
                .iter_mut()
                .find(|column| column.stage.id() == card.stage_id())
            {
                column.cards.push(card);
            }
        }

        Self {
            pipeline_id: definition.id().clone(),
            columns,
        }
    }

    /// Returns the pipeline this view shows.
    #[must_use]
    pub const fn pipeline_id(&self) -> &PipelineId {
        &self.pipeline_id
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[StageColumn] {
        &self.columns
    }

    /// Returns the column for a stage.
    #[must_use]
    pub fn column(&self, stage_id: &StageId) -> Option<&StageColumn> {
        self.columns
            .iter()
            .find(|column| column.stage.id() == stage_id)
    }

    /// Returns the cards of a stage; empty for unknown stages.
    #[must_use]
    pub fn cards_in(&self, stage_id: &StageId) -> &[Card] {
        self.column(stage_id)
            .map(StageColumn::cards)
            .unwrap_or_default()
    }

    /// Returns the number of cards across all columns.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(StageColumn::count).sum()
    }

    /// Returns the stage currently holding a card.
    #[must_use]
    pub fn location_of(&self, card_id: &CardId) -> Option<&StageId> {
        self.columns
            .iter()
            .find(|column| column.cards.iter().any(|card| card.id() == card_id))
            .map(|column| column.stage.id())
    }

    /// Returns the view with every column filtered by `criteria`.
    ///
    /// Count badges of the result reflect the filtered cards.
    #[must_use]
    pub fn filtered(&self, criteria: &FilterCriteria) -> Self {
        Self {
            pipeline_id: self.pipeline_id.clone(),
            columns: self
                .columns
                .iter()
                .map(|column| column.filtered(criteria))
                .collect(),
        }
    }
}
