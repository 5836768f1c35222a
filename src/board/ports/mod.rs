//! Port contracts for the relationship pipeline engine.
//!
//! Ports define storage-agnostic interfaces used by board services.

pub mod card_store;
pub mod catalog;
pub mod observer;

pub use card_store::{CardStore, CardStoreError, CardStoreResult};
pub use catalog::{CatalogError, CatalogResult, PipelineCatalog};
pub use observer::TransitionObserver;
#[cfg(test)]
pub use observer::MockTransitionObserver;
