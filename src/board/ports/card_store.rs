//! Card store port: card records and their pipeline location.

use super::CatalogError;
use crate::board::domain::{Card, CardId, PipelineId, StageId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for card store operations.
pub type CardStoreResult<T> = Result<T, CardStoreError>;

/// Card persistence contract.
///
/// Reads return owned snapshots; callers never hold references into the
/// store's state.
pub trait CardStore: Send + Sync {
    /// Inserts a card or replaces the card with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::InvalidStageForPipeline`] when the card's
    /// stage does not exist in its pipeline, including when the pipeline is
    /// not registered.
    fn put(&self, card: Card) -> CardStoreResult<()>;

    /// Returns a card by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::CardNotFound`] when no card has the
    /// identifier.
    fn get(&self, card_id: &CardId) -> CardStoreResult<Card>;

    /// Returns every card of a pipeline in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::Persistence`] when the backing state is
    /// unavailable.
    fn all_in_pipeline(&self, pipeline_id: &PipelineId) -> CardStoreResult<Vec<Card>>;
}

/// Errors returned by card store implementations.
#[derive(Debug, Clone, Error)]
pub enum CardStoreError {
    /// The card was not found.
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// The stage does not belong to the card's pipeline.
    #[error("stage '{stage_id}' does not belong to pipeline '{pipeline_id}'")]
    InvalidStageForPipeline {
        /// Pipeline named by the card.
        pipeline_id: PipelineId,
        /// Stage named by the card.
        stage_id: StageId,
    },

    /// Catalog lookup failed while validating a location.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Backing-state failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CardStoreError {
    /// Wraps a backing-state error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
