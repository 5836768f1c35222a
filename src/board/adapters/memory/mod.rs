//! In-memory adapters backing the board ports.

mod card_store;
mod catalog;

pub use card_store::InMemoryCardStore;
pub use catalog::InMemoryPipelineCatalog;
