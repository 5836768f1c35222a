//! Rendering of transition notifications into user-facing text.

use super::BoardConfig;
use crate::board::domain::{CardId, TransitionNotification};
use minijinja::Environment;
use thiserror::Error;

/// Errors returned while rendering a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationFormatError {
    /// The template failed to render.
    #[error("failed to render notification for card '{card_id}': {reason}")]
    TemplateRender {
        /// Card the notification refers to.
        card_id: CardId,
        /// Renderer error message.
        reason: String,
    },
}

/// Renders notifications through a `minijinja` template.
///
/// The template sees the notification fields: `card_id`, `card_title`,
/// `pipeline_id`, `from_stage`, `to_stage`, `to_stage_label` and
/// `occurred_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationFormatter {
    template: String,
}

impl NotificationFormatter {
    /// Creates a formatter for the given template.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Creates a formatter using the configured template.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.notification_template.clone())
    }

    /// Returns the template source.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Renders a notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationFormatError::TemplateRender`] when the template
    /// is malformed or fails to evaluate.
    pub fn render(
        &self,
        notification: &TransitionNotification,
    ) -> Result<String, NotificationFormatError> {
        let environment = Environment::new();
        environment
            .render_str(&self.template, notification)
            .map_err(|error| NotificationFormatError::TemplateRender {
                card_id: notification.card_id.clone(),
                reason: error.to_string(),
            })
    }
}

impl Default for NotificationFormatter {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}
