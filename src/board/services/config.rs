//! Board configuration.

use crate::board::domain::PipelineId;
use serde::{Deserialize, Serialize};

/// Template used to render transition notifications for users.
pub const DEFAULT_NOTIFICATION_TEMPLATE: &str = "{{ card_title }} moved to {{ to_stage_label }}";

/// Configuration for a board session.
///
/// # Examples
///
/// ```
/// use pipeboard::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert!(config.default_pipeline.is_none());
/// assert_eq!(config.max_search_length, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Pipeline selected when a session opens. The first registered
    /// pipeline is used when unset.
    pub default_pipeline: Option<PipelineId>,
    /// Maximum search text length in characters; longer input is truncated.
    pub max_search_length: usize,
    /// `minijinja` template for user-facing transition messages.
    pub notification_template: String,
}

impl BoardConfig {
    /// Sets the pipeline selected when a session opens.
    #[must_use]
    pub fn with_default_pipeline(mut self, pipeline_id: PipelineId) -> Self {
        self.default_pipeline = Some(pipeline_id);
        self
    }

    /// Sets the search text cap.
    #[must_use]
    pub const fn with_max_search_length(mut self, max_search_length: usize) -> Self {
        self.max_search_length = max_search_length;
        self
    }

    /// Sets the notification template.
    #[must_use]
    pub fn with_notification_template(mut self, template: impl Into<String>) -> Self {
        self.notification_template = template.into();
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_pipeline: None,
            max_search_length: 200,
            notification_template: DEFAULT_NOTIFICATION_TEMPLATE.to_owned(),
        }
    }
}
