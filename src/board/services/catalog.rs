//! Service layer for pipeline registration and per-stage card lookup.

use crate::board::{
    domain::{
        BoardDomainError, BoardView, PipelineDefinition, PipelineId, PipelineSummary, Stage,
        StageId,
    },
    ports::{CardStore, CardStoreError, CatalogError, PipelineCatalog},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// One stage of a pipeline registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSpec {
    /// Stage identifier.
    pub id: String,
    /// Stage label.
    pub label: String,
    /// Left-to-right rendering position.
    pub display_order: i32,
}

/// Request payload for registering a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPipelineRequest {
    /// Pipeline identifier.
    pub id: String,
    /// Pipeline label.
    pub label: String,
    /// Stages in display order.
    #[serde(default)]
    pub stages: Vec<StageSpec>,
}

impl RegisterPipelineRequest {
    /// Creates a request with no stages.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            stages: Vec::new(),
        }
    }

    /// Appends a stage.
    #[must_use]
    pub fn with_stage(
        mut self,
        id: impl Into<String>,
        display_order: i32,
        label: impl Into<String>,
    ) -> Self {
        self.stages.push(StageSpec {
            id: id.into(),
            label: label.into(),
            display_order,
        });
        self
    }

    /// Appends stages numbered by position, starting at zero.
    #[must_use]
    pub fn with_sequential_stages<I, S, L>(self, stages: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        stages
            .into_iter()
            .fold((self, 0), |(request, order), (id, label)| {
                (request.with_stage(id, order, label), order + 1)
            })
            .0
    }

    /// Validates the request into a pipeline definition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when an identifier or label is blank or
    /// the stage order is invalid.
    pub fn into_definition(self) -> Result<PipelineDefinition, BoardDomainError> {
        let pipeline_id = PipelineId::new(self.id)?;
        let stages = self
            .stages
            .into_iter()
            .map(|spec| Stage::new(StageId::new(spec.id)?, spec.display_order, spec.label))
            .collect::<Result<Vec<_>, _>>()?;
        PipelineDefinition::new(pipeline_id, self.label, stages)
    }
}

/// Service-level errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Catalog operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Card store operation failed.
    #[error(transparent)]
    CardStore(#[from] CardStoreError),
}

impl CatalogServiceError {
    /// Returns the pipeline identifier when the error is an unknown pipeline.
    #[must_use]
    pub const fn unknown_pipeline(&self) -> Option<&PipelineId> {
        match self {
            Self::Catalog(CatalogError::UnknownPipeline(pipeline_id)) => Some(pipeline_id),
            _ => None,
        }
    }
}

/// Result type for catalog service operations.
pub type CatalogServiceResult<T> = Result<T, CatalogServiceError>;

/// Pipeline catalog orchestration service.
pub struct CatalogService<P, S>
where
    P: PipelineCatalog,
    S: CardStore,
{
    catalog: Arc<P>,
    cards: Arc<S>,
}

impl<P, S> Clone for CatalogService<P, S>
where
    P: PipelineCatalog,
    S: CardStore,
{
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            cards: Arc::clone(&self.cards),
        }
    }
}

impl<P, S> CatalogService<P, S>
where
    P: PipelineCatalog,
    S: CardStore,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(catalog: Arc<P>, cards: Arc<S>) -> Self {
        Self { catalog, cards }
    }

    /// Registers a pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Domain`] with
    /// [`BoardDomainError::InvalidStageOrder`] for a malformed stage list, or
    /// [`CatalogServiceError::Catalog`] with
    /// [`CatalogError::DuplicatePipeline`] when the id is taken.
    pub fn register(
        &self,
        request: RegisterPipelineRequest,
    ) -> CatalogServiceResult<PipelineDefinition> {
        let definition = request.into_definition().inspect_err(|err| {
            warn!(error = %err, "rejected pipeline registration");
        })?;
        self.catalog.register(definition.clone())?;
        debug!(
            pipeline_id = %definition.id(),
            stage_count = definition.stages().len(),
            "registered pipeline"
        );
        Ok(definition)
    }

    /// Returns the stages of a pipeline in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] with
    /// [`CatalogError::UnknownPipeline`] when the id is not registered.
    pub fn stages_of(&self, pipeline_id: &PipelineId) -> CatalogServiceResult<Vec<Stage>> {
        Ok(self.catalog.stages_of(pipeline_id)?)
    }

    /// Returns the pipeline's cards grouped by stage.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] with
    /// [`CatalogError::UnknownPipeline`] when the id is not registered.
    pub fn cards_by_stage(&self, pipeline_id: &PipelineId) -> CatalogServiceResult<BoardView> {
        let definition = self.catalog.definition(pipeline_id)?;
        let cards = self.cards.all_in_pipeline(pipeline_id)?;
        Ok(BoardView::group(&definition, cards))
    }

    /// Returns pipeline summaries for the pipeline selector.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogServiceError::Catalog`] when the catalog state is
    /// unavailable.
    pub fn list_pipelines(&self) -> CatalogServiceResult<Vec<PipelineSummary>> {
        Ok(self.catalog.list_pipelines()?)
    }
}
