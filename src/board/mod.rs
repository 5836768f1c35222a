//! Relationship pipeline engine behind the subcontractor CRM board.
//!
//! Contacts ("cards") move through the ordered stages of independently
//! configured pipelines, and a live filter narrows the visible cards per
//! stage without mutating them. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
