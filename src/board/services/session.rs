//! Board session: the active pipeline, its card view and the live filter.

use super::{BoardConfig, CatalogService, CatalogServiceError, TransitionEngine, TransitionError};
use crate::board::{
    domain::{
        BoardView, DragIntent, FilterCriteria, MoveCardRequest, PipelineId, PipelineSummary,
        StageId, TransitionOutcome,
    },
    ports::{CardStore, PipelineCatalog},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by board session operations.
#[derive(Debug, Error)]
pub enum BoardSessionError {
    /// The pipeline is not registered.
    #[error("unknown pipeline: {0}")]
    UnknownPipeline(PipelineId),

    /// No pipeline has been selected yet.
    #[error("no active pipeline")]
    NoActivePipeline,

    /// Catalog operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogServiceError),

    /// Transition failed.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// Per-view state of one board: which pipeline is shown and how it is
/// filtered.
///
/// Sessions are plain values; several may share the same catalog and
/// engine, one per tenant or view. A session holds no card snapshot: every
/// view is read from the card store when requested, so moves made through
/// any session or directly through the engine show up immediately.
pub struct BoardSession<P, S, C>
where
    P: PipelineCatalog,
    S: CardStore,
    C: Clock + Send + Sync,
{
    catalog: CatalogService<P, S>,
    engine: Arc<TransitionEngine<P, S, C>>,
    config: BoardConfig,
    active: Option<PipelineId>,
    criteria: FilterCriteria,
}

impl<P, S, C> BoardSession<P, S, C>
where
    P: PipelineCatalog,
    S: CardStore,
    C: Clock + Send + Sync,
{
    /// Creates a session with no active pipeline and no filter.
    #[must_use]
    pub fn new(
        catalog: CatalogService<P, S>,
        engine: Arc<TransitionEngine<P, S, C>>,
        config: BoardConfig,
    ) -> Self {
        Self {
            catalog,
            engine,
            config,
            active: None,
            criteria: FilterCriteria::default(),
        }
    }

    /// Creates a session showing the configured default pipeline, or the
    /// first registered pipeline when none is configured.
    ///
    /// The session starts without an active pipeline when the catalog is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::UnknownPipeline`] when the configured
    /// default pipeline is not registered.
    pub fn open(
        catalog: CatalogService<P, S>,
        engine: Arc<TransitionEngine<P, S, C>>,
        config: BoardConfig,
    ) -> BoardSessionResult<Self> {
        let initial = match config.default_pipeline.clone() {
            Some(pipeline_id) => Some(pipeline_id),
            None => catalog
                .list_pipelines()?
                .into_iter()
                .next()
                .map(|summary| summary.id),
        };
        let mut session = Self::new(catalog, engine, config);
        if let Some(pipeline_id) = initial {
            session.switch_to(&pipeline_id)?;
        }
        Ok(session)
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the pipeline selector entries.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Catalog`] when the catalog is
    /// unavailable.
    pub fn list_pipelines(&self) -> BoardSessionResult<Vec<PipelineSummary>> {
        Ok(self.catalog.list_pipelines()?)
    }

    /// Returns the active pipeline, if one is selected.
    #[must_use]
    pub const fn active_pipeline(&self) -> Option<&PipelineId> {
        self.active.as_ref()
    }

    /// Reads the unfiltered view of the active pipeline from the card store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::NoActivePipeline`] when no pipeline is
    /// selected.
    pub fn view(&self) -> BoardSessionResult<BoardView> {
        let pipeline_id = self
            .active
            .as_ref()
            .ok_or(BoardSessionError::NoActivePipeline)?;
        self.load_view(pipeline_id)
    }

    /// Makes `pipeline_id` the active pipeline, replacing the whole view.
    ///
    /// The filter criteria stay as they are.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::UnknownPipeline`] when the pipeline is
    /// not registered; the previous pipeline stays active.
    pub fn switch_to(&mut self, pipeline_id: &PipelineId) -> BoardSessionResult<BoardView> {
        let view = self.load_view(pipeline_id).inspect_err(|err| {
            warn!(%pipeline_id, error = %err, "pipeline switch rejected");
        })?;
        debug!(%pipeline_id, cards = view.total_cards(), "switched active pipeline");
        self.active = Some(pipeline_id.clone());
        Ok(view)
    }

    /// Returns the current filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replaces the filter criteria.
    ///
    /// Search text is trimmed, then cut to the configured maximum length.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria.with_search_limit(self.config.max_search_length);
    }

    /// Removes every filter.
    pub fn clear_criteria(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Returns the active pipeline filtered by the current criteria.
    ///
    /// Cards are read and filtered on every call.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::NoActivePipeline`] when no pipeline is
    /// selected.
    pub fn visible(&self) -> BoardSessionResult<BoardView> {
        Ok(self.view()?.filtered(&self.criteria))
    }

    /// Moves a card through the shared engine.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Transition`] when the engine rejects the
    /// move.
    pub fn move_card(&self, request: MoveCardRequest) -> BoardSessionResult<TransitionOutcome> {
        Ok(self.engine.move_card(request)?)
    }

    /// Completes a drag gesture by dropping the card on `target`.
    ///
    /// # Errors
    ///
    /// See [`Self::move_card`].
    pub fn drop_card(
        &self,
        intent: DragIntent,
        target: StageId,
    ) -> BoardSessionResult<TransitionOutcome> {
        self.move_card(intent.drop_on(target))
    }

    fn load_view(&self, pipeline_id: &PipelineId) -> BoardSessionResult<BoardView> {
        self.catalog
            .cards_by_stage(pipeline_id)
            .map_err(|err| {
                if let Some(unknown) = err.unknown_pipeline() {
                    return BoardSessionError::UnknownPipeline(unknown.clone());
                }
                BoardSessionError::Catalog(err)
            })
    }
}
