//! In-memory card store validated against a pipeline catalog.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Card, CardId, PipelineId},
    ports::{CardStore, CardStoreError, CardStoreResult, PipelineCatalog},
};

/// Thread-safe in-memory card store.
///
/// Cards keep insertion order. A replacement that changes a card's location
/// moves it to the end of that order, so it lands last in its new column.
pub struct InMemoryCardStore<P>
where
    P: PipelineCatalog,
{
    catalog: Arc<P>,
    state: Arc<RwLock<InMemoryCardState>>,
}

#[derive(Debug, Default)]
struct InMemoryCardState {
    cards: HashMap<CardId, Card>,
    insertion_order: Vec<CardId>,
}

impl<P> InMemoryCardStore<P>
where
    P: PipelineCatalog,
{
    /// Creates an empty store validating locations against `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<P>) -> Self {
        Self {
            catalog,
            state: Arc::new(RwLock::new(InMemoryCardState::default())),
        }
    }
}

impl<P> Clone for InMemoryCardStore<P>
where
    P: PipelineCatalog,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            state: Arc::clone(&self.state),
        }
    }
}

fn lock_error(err: &impl std::fmt::Display) -> CardStoreError {
    CardStoreError::persistence(std::io::Error::other(err.to_string()))
}

fn is_relocation(previous: &Card, next: &Card) -> bool {
    previous.pipeline_id() != next.pipeline_id() || previous.stage_id() != next.stage_id()
}

impl<P> CardStore for InMemoryCardStore<P>
where
    P: PipelineCatalog,
{
    fn put(&self, card: Card) -> CardStoreResult<()> {
        if !self
            .catalog
            .is_valid_location(card.pipeline_id(), card.stage_id())?
        {
            return Err(CardStoreError::InvalidStageForPipeline {
                pipeline_id: card.pipeline_id().clone(),
                stage_id: card.stage_id().clone(),
            });
        }

        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let card_id = card.id().clone();
        let relocated = state
            .cards
            .get(&card_id)
            .map(|previous| is_relocation(previous, &card));
        match relocated {
            Some(true) => {
                state.insertion_order.retain(|id| id != &card_id);
                state.insertion_order.push(card_id.clone());
            }
            Some(false) => {}
            None => state.insertion_order.push(card_id.clone()),
        }
        state.cards.insert(card_id, card);
        Ok(())
    }

    fn get(&self, card_id: &CardId) -> CardStoreResult<Card> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        state
            .cards
            .get(card_id)
            .cloned()
            .ok_or_else(|| CardStoreError::CardNotFound(card_id.clone()))
    }

    fn all_in_pipeline(&self, pipeline_id: &PipelineId) -> CardStoreResult<Vec<Card>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.cards.get(id))
            .filter(|card| card.pipeline_id() == pipeline_id)
            .cloned()
            .collect())
    }
}
