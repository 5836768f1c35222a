//! Domain model for relationship pipelines.
//!
//! Stages, pipeline definitions, cards and filter criteria are plain values;
//! storage and notification delivery stay outside the domain boundary.

mod card;
mod drag;
mod error;
pub mod filter;
mod ids;
mod notification;
mod stage;
mod view;

pub use card::{Card, CardParams, Priority};
pub use drag::{DragIntent, MoveCardRequest};
pub use error::{BoardDomainError, ParsePriorityError};
pub use filter::{FilterCriteria, PriorityFilter, matches};
pub use ids::{CardId, PipelineId, StageId, SubscriptionId};
pub use notification::{TransitionNotification, TransitionOutcome};
pub use stage::{PipelineDefinition, PipelineSummary, Stage};
pub use view::{BoardView, StageColumn};
