//! Shared world state for card transition BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use pipeboard::board::{
    adapters::{
        memory::{InMemoryCardStore, InMemoryPipelineCatalog},
        observer::RecordingTransitionObserver,
    },
    domain::{CardId, PipelineId, StageId, TransitionOutcome},
    services::{
        BoardSession, BoardSessionError, CatalogService, TransitionEngine, TransitionError,
    },
};
use rstest::fixture;

/// Card store type used by the BDD world.
pub type TestStore = InMemoryCardStore<InMemoryPipelineCatalog>;

/// Session type used by the BDD world.
pub type TestSession = BoardSession<InMemoryPipelineCatalog, TestStore, DefaultClock>;

/// Scenario world for card transition behaviour tests.
pub struct BoardWorld {
    pub cards: Arc<TestStore>,
    pub service: CatalogService<InMemoryPipelineCatalog, TestStore>,
    pub engine: Arc<TransitionEngine<InMemoryPipelineCatalog, TestStore, DefaultClock>>,
    pub recorder: Arc<RecordingTransitionObserver>,
    pub session: Option<TestSession>,
    pub last_move_result: Option<Result<TransitionOutcome, TransitionError>>,
    pub last_switch_result: Option<Result<(), BoardSessionError>>,
}

impl BoardWorld {
    /// Creates a world with an empty catalog and a recording observer.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Arc::new(InMemoryPipelineCatalog::new());
        let cards = Arc::new(InMemoryCardStore::new(Arc::clone(&catalog)));
        let service = CatalogService::new(Arc::clone(&catalog), Arc::clone(&cards));
        let engine = Arc::new(TransitionEngine::new(
            Arc::clone(&catalog),
            Arc::clone(&cards),
            Arc::new(DefaultClock),
        ));
        let recorder = Arc::new(RecordingTransitionObserver::new());
        let _subscription = engine.subscribe(recorder.clone());

        Self {
            cards,
            service,
            engine,
            recorder,
            session: None,
            last_move_result: None,
            last_switch_result: None,
        }
    }

    /// Returns the open session or fails the step.
    pub fn session_mut(&mut self) -> Result<&mut TestSession, eyre::Report> {
        self.session
            .as_mut()
            .ok_or_else(|| eyre::eyre!("no board session opened in scenario world"))
    }

    /// Returns the open session or fails the step.
    pub fn session(&self) -> Result<&TestSession, eyre::Report> {
        self.session
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no board session opened in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a pipeline identifier from scenario text.
pub fn pipeline_id(value: &str) -> Result<PipelineId, eyre::Report> {
    PipelineId::new(value).map_err(|err| eyre::eyre!("invalid pipeline id in scenario: {err}"))
}

/// Parses a stage identifier from scenario text.
pub fn stage_id(value: &str) -> Result<StageId, eyre::Report> {
    StageId::new(value).map_err(|err| eyre::eyre!("invalid stage id in scenario: {err}"))
}

/// Parses a card identifier from scenario text.
pub fn card_id(value: &str) -> Result<CardId, eyre::Report> {
    CardId::new(value).map_err(|err| eyre::eyre!("invalid card id in scenario: {err}"))
}

/// Splits a comma-separated list from scenario text.
pub fn list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
