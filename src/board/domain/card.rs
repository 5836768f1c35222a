//! Card aggregate: one counterparty relationship on the board.

use super::{BoardDomainError, CardId, ParsePriorityError, PipelineId, StageId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Priority {
    /// Urgent relationship.
    High,
    /// Regular relationship.
    Medium,
    /// Relationship that can wait.
    Low,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    /// Accepts the canonical labels and the German board labels
    /// (`Hoch`, `Mittel`, `Niedrig`), case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "high" | "hoch" => Ok(Self::High),
            "medium" | "mittel" => Ok(Self::Medium),
            "low" | "niedrig" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter object for constructing a [`Card`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardParams {
    /// Card identifier.
    pub id: CardId,
    /// Owning pipeline.
    pub pipeline_id: PipelineId,
    /// Current stage within the owning pipeline.
    pub stage_id: StageId,
    /// Card title, usually the counterparty name.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Priority tier, if assigned.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Free-text contact details.
    #[serde(default)]
    pub contact: String,
    /// Calendar date used for filtering.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl CardParams {
    /// Creates parameters with the required card fields.
    #[must_use]
    pub fn new(
        id: CardId,
        pipeline_id: PipelineId,
        stage_id: StageId,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            pipeline_id,
            stage_id,
            title: title.into(),
            description: String::new(),
            priority: None,
            contact: String::new(),
            date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority tier.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the contact details.
    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    /// Sets the filter date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// A relationship record located in exactly one stage of one pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardParams")]
pub struct Card {
    id: CardId,
    pipeline_id: PipelineId,
    stage_id: StageId,
    title: String,
    description: String,
    priority: Option<Priority>,
    contact: String,
    date: Option<NaiveDate>,
}

impl Card {
    /// Creates a card from its parameters.
    ///
    /// Location validity is checked by the card store, not here.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLabel`] when the title is blank.
    pub fn new(params: CardParams) -> Result<Self, BoardDomainError> {
        let CardParams {
            id,
            pipeline_id,
            stage_id,
            title,
            description,
            priority,
            contact,
            date,
        } = params;

        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(BoardDomainError::EmptyLabel { kind: "card title" });
        }

        Ok(Self {
            id,
            pipeline_id,
            stage_id,
            title: trimmed_title.to_owned(),
            description,
            priority,
            contact,
            date,
        })
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the owning pipeline.
    #[must_use]
    pub const fn pipeline_id(&self) -> &PipelineId {
        &self.pipeline_id
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage_id(&self) -> &StageId {
        &self.stage_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority tier, if assigned.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the contact details.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the filter date, if set.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns a copy of this card located in another stage of the same
    /// pipeline.
    #[must_use]
    pub(crate) fn moved_to(&self, stage_id: StageId) -> Self {
        Self {
            stage_id,
            ..self.clone()
        }
    }
}

impl TryFrom<CardParams> for Card {
    type Error = BoardDomainError;

    fn try_from(params: CardParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}
