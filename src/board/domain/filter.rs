//! Filter evaluation for the visible board.
//!
//! Criteria are ephemeral view state. Evaluating them never touches a card,
//! and nothing is cached between evaluations.

use super::{Card, ParsePriorityError, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Priority predicate of a filter.
///
/// Serialised as the selector value: `"any"` or a priority label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityFilter {
    /// Every priority passes, including cards without one.
    #[default]
    Any,
    /// Only cards with exactly this priority pass.
    Only(Priority),
}

impl PriorityFilter {
    /// Parses a selector value; empty, `all` and `any` mean [`Self::Any`].
    ///
    /// # Errors
    ///
    /// Returns [`ParsePriorityError`] for an unrecognised priority label.
    pub fn parse(value: &str) -> Result<Self, ParsePriorityError> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "" | "all" | "any" | "alle" => Ok(Self::Any),
            _ => Priority::try_from(value).map(Self::Only),
        }
    }

    /// Returns whether a card priority passes this predicate.
    ///
    /// A card without a priority fails any concrete priority filter.
    #[must_use]
    pub fn admits(self, priority: Option<Priority>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => priority == Some(wanted),
        }
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = ParsePriorityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PriorityFilter> for String {
    fn from(value: PriorityFilter) -> Self {
        match value {
            PriorityFilter::Any => "any".to_owned(),
            PriorityFilter::Only(priority) => priority.as_str().to_owned(),
        }
    }
}

/// Search, priority and date criteria narrowing the visible cards.
///
/// Missing fields deserialise to their unfiltered defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    search_text: String,
    priority: PriorityFilter,
    date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Creates criteria that admit every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    /// Sets the priority predicate.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Restricts visible cards to one calendar day.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns the raw search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Returns the priority predicate.
    #[must_use]
    pub const fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Returns the date predicate.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns whether these criteria admit every card.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.priority == PriorityFilter::Any
            && self.date.is_none()
    }

    /// Evaluates the criteria against a card.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        matches(card, self)
    }

    /// Trims the search text, then caps it at `max_chars` characters.
    #[must_use]
    pub(crate) fn with_search_limit(mut self, max_chars: usize) -> Self {
        self.search_text = self.search_text.trim().chars().take(max_chars).collect();
        self
    }
}

/// Returns whether a card is visible under the criteria.
///
/// All three predicates must pass. The search text passes when it is blank
/// or when it occurs, ignoring case, in the title, description or contact.
#[must_use]
pub fn matches(card: &Card, criteria: &FilterCriteria) -> bool {
    matches_search(card, &criteria.search_text)
        && criteria.priority.admits(card.priority())
        && matches_date(card, criteria.date)
}

fn matches_search(card: &Card, search_text: &str) -> bool {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [card.title(), card.description(), card.contact()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_date(card: &Card, date: Option<NaiveDate>) -> bool {
    date.is_none_or(|wanted| card.date() == Some(wanted))
}
