//! Stage descriptors and pipeline definitions.

use super::{BoardDomainError, PipelineId, StageId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One named, ordered column of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    id: StageId,
    display_order: i32,
    label: String,
}

impl Stage {
    /// Creates a stage descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLabel`] when the label is blank.
    pub fn new(
        id: StageId,
        display_order: i32,
        label: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id,
            display_order,
            label: non_empty_label(label.into(), "stage label")?,
        })
    }

    /// Returns the stage identifier.
    #[must_use]
    pub const fn id(&self) -> &StageId {
        &self.id
    }

    /// Returns the left-to-right rendering position.
    #[must_use]
    pub const fn display_order(&self) -> i32 {
        self.display_order
    }

    /// Returns the human-readable stage label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A pipeline: its identity plus the fixed, ordered stage set.
///
/// Stages cannot be added, removed or reordered once the definition exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineDefinition {
    id: PipelineId,
    label: String,
    stages: Vec<Stage>,
}

impl PipelineDefinition {
    /// Creates a validated pipeline definition.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLabel`] for a blank label and
    /// [`BoardDomainError::InvalidStageOrder`] when there are no stages,
    /// `display_order` values are not strictly increasing, or stage ids
    /// repeat.
    pub fn new(
        id: PipelineId,
        label: impl Into<String>,
        stages: Vec<Stage>,
    ) -> Result<Self, BoardDomainError> {
        let checked_label = non_empty_label(label.into(), "pipeline label")?;
        validate_stage_order(&id, &stages)?;
        Ok(Self {
            id,
            label: checked_label,
            stages,
        })
    }

    /// Returns the pipeline identifier.
    #[must_use]
    pub const fn id(&self) -> &PipelineId {
        &self.id
    }

    /// Returns the pipeline label shown in the selector.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the stages in display order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Looks up a stage by identifier.
    #[must_use]
    pub fn stage(&self, stage_id: &StageId) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id() == stage_id)
    }

    /// Returns whether the stage belongs to this pipeline.
    #[must_use]
    pub fn contains_stage(&self, stage_id: &StageId) -> bool {
        self.stage(stage_id).is_some()
    }

    /// Returns the selector entry for this pipeline.
    #[must_use]
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            id: self.id.clone(),
            label: self.label.clone(),
            stage_count: self.stages.len(),
        }
    }
}

/// Pipeline selector entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Pipeline identifier.
    pub id: PipelineId,
    /// Pipeline label.
    pub label: String,
    /// Number of stages in the pipeline.
    pub stage_count: usize,
}

fn non_empty_label(value: String, kind: &'static str) -> Result<String, BoardDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyLabel { kind });
    }
    Ok(trimmed.to_owned())
}

fn validate_stage_order(pipeline_id: &PipelineId, stages: &[Stage]) -> Result<(), BoardDomainError> {
    let invalid = |reason: String| BoardDomainError::InvalidStageOrder {
        pipeline_id: pipeline_id.clone(),
        reason,
    };

    if stages.is_empty() {
        return Err(invalid("pipeline must define at least one stage".to_owned()));
    }

    for (previous, next) in stages.iter().zip(stages.iter().skip(1)) {
        if next.display_order() <= previous.display_order() {
            return Err(invalid(format!(
                "stage '{}' (order {}) does not follow '{}' (order {})",
                next.id(),
                next.display_order(),
                previous.id(),
                previous.display_order()
            )));
        }
    }

    let mut seen = HashSet::with_capacity(stages.len());
    for stage in stages {
        if !seen.insert(stage.id()) {
            return Err(invalid(format!("duplicate stage id '{}'", stage.id())));
        }
    }

    Ok(())
}
