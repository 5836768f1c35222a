//! Pipeboard: relationship pipeline engine for a logistics marketplace.
//!
//! This crate provides the state manager behind the subcontractor
//! relationship board, where contacts move through the ordered stages of
//! independently configured pipelines and a live filter narrows what each
//! stage shows.
//!
//! # Architecture
//!
//! Pipeboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   observers)
//!
//! The engine is synchronous and storage-agnostic; hosts feed it through
//! [`board::services::BoardBootstrap`] and read it through
//! [`board::services::BoardSession`].
//!
//! # Modules
//!
//! - [`board`]: Pipelines, cards, transitions and filtering

pub mod board;
