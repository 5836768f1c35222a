//! Pipeline catalog port: pipeline definitions keyed by identifier.

use crate::board::domain::{PipelineDefinition, PipelineId, PipelineSummary, Stage, StageId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for pipeline catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Pipeline definition registry contract.
///
/// Definitions are registered once at startup and never change afterwards.
pub trait PipelineCatalog: Send + Sync {
    /// Registers a new pipeline definition.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicatePipeline`] when the identifier is
    /// already registered.
    fn register(&self, definition: PipelineDefinition) -> CatalogResult<()>;

    /// Returns a registered pipeline definition.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPipeline`] when the identifier is not
    /// registered.
    fn definition(&self, pipeline_id: &PipelineId) -> CatalogResult<PipelineDefinition>;

    /// Returns pipeline summaries in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Persistence`] when the backing state is
    /// unavailable.
    fn list_pipelines(&self) -> CatalogResult<Vec<PipelineSummary>>;

    /// Returns the stages of a pipeline in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownPipeline`] when the identifier is not
    /// registered.
    fn stages_of(&self, pipeline_id: &PipelineId) -> CatalogResult<Vec<Stage>> {
        Ok(self.definition(pipeline_id)?.stages().to_vec())
    }

    /// Returns whether `(pipeline_id, stage_id)` names an existing stage.
    ///
    /// An unregistered pipeline is reported as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Persistence`] when the backing state is
    /// unavailable.
    fn is_valid_location(&self, pipeline_id: &PipelineId, stage_id: &StageId) -> CatalogResult<bool> {
        match self.definition(pipeline_id) {
            Ok(definition) => Ok(definition.contains_stage(stage_id)),
            Err(CatalogError::UnknownPipeline(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

/// Errors returned by pipeline catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The pipeline identifier is not registered.
    #[error("unknown pipeline: {0}")]
    UnknownPipeline(PipelineId),

    /// A pipeline with the same identifier already exists.
    #[error("duplicate pipeline identifier: {0}")]
    DuplicatePipeline(PipelineId),

    /// Backing-state failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    /// Wraps a backing-state error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
