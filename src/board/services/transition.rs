//! Transition engine: validated stage-to-stage moves and notification
//! delivery.
//!
//! Every stage of a pipeline is reachable from every other stage. Moves
//! never cross pipelines.

use crate::board::{
    domain::{
        Card, CardId, MoveCardRequest, PipelineId, Stage, StageId, SubscriptionId,
        TransitionNotification, TransitionOutcome,
    },
    ports::{CardStore, CardStoreError, CatalogError, PipelineCatalog, TransitionObserver},
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by the transition engine.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The card does not exist.
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// The target stage is not part of the card's pipeline.
    #[error("stage '{stage_id}' is not a stage of pipeline '{pipeline_id}' (card '{card_id}')")]
    InvalidTargetStage {
        /// Card that was to be moved.
        card_id: CardId,
        /// Pipeline owning the card.
        pipeline_id: PipelineId,
        /// Requested target stage.
        stage_id: StageId,
    },

    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Card store operation failed.
    #[error(transparent)]
    CardStore(#[from] CardStoreError),
}

/// Result type for transition engine operations.
pub type TransitionResult<T> = Result<T, TransitionError>;

type Subscriptions = Vec<(SubscriptionId, Arc<dyn TransitionObserver>)>;

/// Moves cards between stages of their pipeline and notifies observers.
pub struct TransitionEngine<P, S, C>
where
    P: PipelineCatalog,
    S: CardStore,
    C: Clock + Send + Sync,
{
    catalog: Arc<P>,
    cards: Arc<S>,
    clock: Arc<C>,
    observers: RwLock<Subscriptions>,
}

impl<P, S, C> TransitionEngine<P, S, C>
where
    P: PipelineCatalog,
    S: CardStore,
    C: Clock + Send + Sync,
{
    /// Creates an engine with no observers.
    #[must_use]
    pub fn new(catalog: Arc<P>, cards: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            catalog,
            cards,
            clock,
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Registers an observer for transition notifications.
    #[must_use]
    pub fn subscribe(&self, observer: Arc<dyn TransitionObserver>) -> SubscriptionId {
        let subscription_id = SubscriptionId::new();
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((subscription_id, observer));
        debug!(%subscription_id, "transition observer subscribed");
        subscription_id
    }

    /// Removes an observer. Returns `false` when the id is unknown.
    #[must_use]
    pub fn unsubscribe(&self, subscription_id: SubscriptionId) -> bool {
        let mut observers = self
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(id, _)| *id != subscription_id);
        observers.len() != before
    }

    /// Moves a card to another stage of its pipeline.
    ///
    /// Moving a card to the stage it already occupies is a no-op that
    /// returns [`TransitionOutcome::Unchanged`] without notifying anyone.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::CardNotFound`] when the card is absent and
    /// [`TransitionError::InvalidTargetStage`] when the target is not a stage
    /// of the card's pipeline. The store is unchanged on error.
    pub fn move_card(&self, request: MoveCardRequest) -> TransitionResult<TransitionOutcome> {
        let MoveCardRequest {
            card_id,
            target_stage,
        } = request;
        let card = self.load_card(&card_id)?;

        if card.stage_id() == &target_stage {
            debug!(%card_id, stage_id = %target_stage, "card already in target stage");
            return Ok(TransitionOutcome::Unchanged(card));
        }

        let definition = self.catalog.definition(card.pipeline_id())?;
        let Some(target) = definition.stage(&target_stage) else {
            warn!(
                %card_id,
                pipeline_id = %card.pipeline_id(),
                stage_id = %target_stage,
                "rejected move to unknown stage"
            );
            return Err(TransitionError::InvalidTargetStage {
                card_id,
                pipeline_id: card.pipeline_id().clone(),
                stage_id: target_stage,
            });
        };

        let moved = card.moved_to(target.id().clone());
        self.cards.put(moved.clone())?;

        let notification = TransitionNotification::new(&card, target, self.clock.utc());
        info!(
            %card_id,
            pipeline_id = %notification.pipeline_id,
            from_stage = %notification.from_stage,
            to_stage = %notification.to_stage,
            "card moved"
        );
        self.notify(&notification);

        Ok(TransitionOutcome::Moved {
            card: moved,
            notification,
        })
    }

    /// Lists the stages a card can be moved to from a "move to stage" menu:
    /// every stage of its pipeline except the current one, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::CardNotFound`] when the card is absent.
    pub fn available_targets(&self, card_id: &CardId) -> TransitionResult<Vec<Stage>> {
        let card = self.load_card(card_id)?;
        let definition = self.catalog.definition(card.pipeline_id())?;
        Ok(definition
            .stages()
            .iter()
            .filter(|stage| stage.id() != card.stage_id())
            .cloned()
            .collect())
    }

    fn load_card(&self, card_id: &CardId) -> TransitionResult<Card> {
        self.cards.get(card_id).map_err(|err| match err {
            CardStoreError::CardNotFound(missing) => TransitionError::CardNotFound(missing),
            other => TransitionError::CardStore(other),
        })
    }

    fn notify(&self, notification: &TransitionNotification) {
        // Snapshot so observers may subscribe or unsubscribe re-entrantly.
        let observers: Vec<Arc<dyn TransitionObserver>> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer.on_transition(notification);
        }
    }
}
