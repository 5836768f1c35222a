//! Application services for the relationship pipeline engine.

mod bootstrap;
mod catalog;
mod config;
mod notification;
mod session;
mod transition;

pub use bootstrap::{BoardBootstrap, BootstrapError};
pub use catalog::{
    CatalogService, CatalogServiceError, CatalogServiceResult, RegisterPipelineRequest, StageSpec,
};
pub use config::{BoardConfig, DEFAULT_NOTIFICATION_TEMPLATE};
pub use notification::{NotificationFormatError, NotificationFormatter};
pub use session::{BoardSession, BoardSessionError, BoardSessionResult};
pub use transition::{TransitionEngine, TransitionError, TransitionResult};
