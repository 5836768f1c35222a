//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use pipeboard::board::{
    adapters::{
        memory::{InMemoryCardStore, InMemoryPipelineCatalog},
        observer::RecordingTransitionObserver,
    },
    domain::{CardId, PipelineId, StageId},
    services::{BoardBootstrap, BoardConfig, BoardSession, CatalogService, TransitionEngine},
};
use rstest::fixture;

/// Card store over the in-memory catalog.
pub type Store = InMemoryCardStore<InMemoryPipelineCatalog>;

/// Session over the in-memory adapters.
pub type Session = BoardSession<InMemoryPipelineCatalog, Store, DefaultClock>;

/// Engine over the in-memory adapters.
pub type Engine = TransitionEngine<InMemoryPipelineCatalog, Store, DefaultClock>;

/// Subcontractor CRM board with two pipelines and five contacts.
pub const CRM_BOOTSTRAP: &str = r#"{
    "config": { "default_pipeline": "subcontractors" },
    "pipelines": [
        {
            "id": "subcontractors",
            "label": "Subcontractors",
            "stages": [
                { "id": "lead", "label": "Lead", "display_order": 10 },
                { "id": "discovery", "label": "Discovery", "display_order": 20 },
                { "id": "applied", "label": "Applied", "display_order": 30 },
                { "id": "review", "label": "Review", "display_order": 40 },
                { "id": "negotiation", "label": "Negotiation", "display_order": 50 },
                { "id": "on_hold", "label": "On hold", "display_order": 60 },
                { "id": "contracted", "label": "Contracted", "display_order": 70 }
            ]
        },
        {
            "id": "shippers",
            "label": "Shippers",
            "stages": [
                { "id": "lead", "label": "Lead", "display_order": 0 },
                { "id": "tendering", "label": "Tendering", "display_order": 1 },
                { "id": "won", "label": "Won", "display_order": 2 }
            ]
        }
    ],
    "cards": [
        { "id": "c-1", "pipeline_id": "subcontractors", "stage_id": "lead",
          "title": "Spedition Nord", "priority": "Hoch",
          "contact": "Jana Petersen", "date": "2024-05-14" },
        { "id": "c-2", "pipeline_id": "subcontractors", "stage_id": "lead",
          "title": "Kühltransporte Süd", "priority": "Mittel",
          "description": "Reefer fleet", "date": "2024-05-15" },
        { "id": "c-3", "pipeline_id": "subcontractors", "stage_id": "review",
          "title": "Baltic Freight", "priority": "Niedrig" },
        { "id": "c-4", "pipeline_id": "subcontractors", "stage_id": "on_hold",
          "title": "Rhein Cargo" },
        { "id": "s-1", "pipeline_id": "shippers", "stage_id": "tendering",
          "title": "Nordic Steel AG", "priority": "Hoch", "date": "2024-05-14" }
    ]
}"#;

/// A bootstrapped board with a recording observer attached.
pub struct Board {
    /// Catalog service over the in-memory adapters.
    pub service: CatalogService<InMemoryPipelineCatalog, Store>,
    /// Shared transition engine.
    pub engine: Arc<Engine>,
    /// Observer collecting every transition.
    pub recorder: Arc<RecordingTransitionObserver>,
    /// Configuration loaded from the bootstrap document.
    pub config: BoardConfig,
}

impl Board {
    /// Bootstraps a board from a JSON document.
    ///
    /// # Panics
    ///
    /// Panics when the document is rejected.
    #[must_use]
    pub fn from_json(document: &str) -> Self {
        let catalog = Arc::new(InMemoryPipelineCatalog::new());
        let cards = Arc::new(InMemoryCardStore::new(Arc::clone(&catalog)));
        let config = BoardBootstrap::from_json_str(document)
            .expect("parse bootstrap document")
            .apply(catalog.as_ref(), cards.as_ref())
            .expect("apply bootstrap document");
        let service = CatalogService::new(Arc::clone(&catalog), Arc::clone(&cards));
        let engine = Arc::new(TransitionEngine::new(catalog, cards, Arc::new(DefaultClock)));
        let recorder = Arc::new(RecordingTransitionObserver::new());
        let _subscription = engine.subscribe(recorder.clone());
        Self {
            service,
            engine,
            recorder,
            config,
        }
    }

    /// Opens a session with the bootstrapped configuration.
    ///
    /// # Panics
    ///
    /// Panics when the configured default pipeline is missing.
    #[must_use]
    pub fn open_session(&self) -> Session {
        BoardSession::open(
            self.service.clone(),
            Arc::clone(&self.engine),
            self.config.clone(),
        )
        .expect("open board session")
    }
}

/// Provides the bootstrapped CRM board.
#[fixture]
pub fn crm_board() -> Board {
    Board::from_json(CRM_BOOTSTRAP)
}

/// Builds a pipeline identifier.
#[must_use]
pub fn pipeline(value: &str) -> PipelineId {
    PipelineId::new(value).expect("valid pipeline id")
}

/// Builds a stage identifier.
#[must_use]
pub fn stage(value: &str) -> StageId {
    StageId::new(value).expect("valid stage id")
}

/// Builds a card identifier.
#[must_use]
pub fn card(value: &str) -> CardId {
    CardId::new(value).expect("valid card id")
}
