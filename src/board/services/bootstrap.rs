//! Initial catalog contents supplied by the host application.

use super::{BoardConfig, RegisterPipelineRequest};
use crate::board::{
    domain::{BoardDomainError, Card, CardParams},
    ports::{CardStore, CardStoreError, CatalogError, PipelineCatalog},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors returned while loading a bootstrap document.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The document is not valid JSON for a bootstrap.
    #[error("invalid bootstrap document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A pipeline or card failed domain validation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Pipeline registration failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Card insertion failed.
    #[error(transparent)]
    CardStore(#[from] CardStoreError),
}

/// Pipelines, cards and configuration to seed a board with.
///
/// # Examples
///
/// ```
/// use pipeboard::board::services::BoardBootstrap;
///
/// let bootstrap = BoardBootstrap::from_json_str(
///     r#"{
///         "pipelines": [{
///             "id": "standard",
///             "label": "Standard",
///             "stages": [
///                 { "id": "lead", "label": "Lead", "display_order": 0 },
///                 { "id": "discovery", "label": "Discovery", "display_order": 1 }
///             ]
///         }],
///         "cards": [{
///             "id": "1",
///             "pipeline_id": "standard",
///             "stage_id": "lead",
///             "title": "Spedition Nord",
///             "priority": "Hoch"
///         }]
///     }"#,
/// ).expect("valid bootstrap");
/// assert_eq!(bootstrap.pipelines.len(), 1);
/// assert_eq!(bootstrap.cards.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardBootstrap {
    /// Session configuration.
    #[serde(default)]
    pub config: BoardConfig,
    /// Pipelines to register, in selector order.
    #[serde(default)]
    pub pipelines: Vec<RegisterPipelineRequest>,
    /// Cards to place, in insertion order.
    #[serde(default)]
    pub cards: Vec<CardParams>,
}

impl BoardBootstrap {
    /// Parses a bootstrap document from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Parse`] for malformed JSON or invalid field
    /// values.
    pub fn from_json_str(json: &str) -> Result<Self, BootstrapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Registers every pipeline, then puts every card, stopping at the
    /// first failure. Returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError`] for the first pipeline or card that is
    /// rejected.
    pub fn apply<P, S>(self, catalog: &P, cards: &S) -> Result<BoardConfig, BootstrapError>
    where
        P: PipelineCatalog,
        S: CardStore,
    {
        let pipeline_count = self.pipelines.len();
        let card_count = self.cards.len();

        for request in self.pipelines {
            catalog.register(request.into_definition()?)?;
        }
        for params in self.cards {
            cards.put(Card::new(params)?)?;
        }

        info!(pipeline_count, card_count, "board bootstrapped");
        Ok(self.config)
    }
}
