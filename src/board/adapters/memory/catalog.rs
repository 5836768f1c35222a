//! In-memory pipeline catalog.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{PipelineDefinition, PipelineId, PipelineSummary},
    ports::{CatalogError, CatalogResult, PipelineCatalog},
};

/// Thread-safe in-memory pipeline catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPipelineCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    definitions: HashMap<PipelineId, PipelineDefinition>,
    registration_order: Vec<PipelineId>,
}

impl InMemoryPipelineCatalog {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: &impl std::fmt::Display) -> CatalogError {
    CatalogError::persistence(std::io::Error::other(err.to_string()))
}

impl PipelineCatalog for InMemoryPipelineCatalog {
    fn register(&self, definition: PipelineDefinition) -> CatalogResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let pipeline_id = definition.id().clone();
        if state.definitions.contains_key(&pipeline_id) {
            return Err(CatalogError::DuplicatePipeline(pipeline_id));
        }
        state.registration_order.push(pipeline_id.clone());
        state.definitions.insert(pipeline_id, definition);
        Ok(())
    }

    fn definition(&self, pipeline_id: &PipelineId) -> CatalogResult<PipelineDefinition> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        state
            .definitions
            .get(pipeline_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownPipeline(pipeline_id.clone()))
    }

    fn list_pipelines(&self) -> CatalogResult<Vec<PipelineSummary>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state
            .registration_order
            .iter()
            .filter_map(|id| state.definitions.get(id))
            .map(PipelineDefinition::summary)
            .collect())
    }
}
