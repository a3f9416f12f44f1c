//! Warden Core
//!
//! Central coordination layer: holds the hook catalog source, the per-app
//! group indexes, and the toggle coordinator behind one facade.

mod config;
mod error;
mod warden;

pub use config::Config;
pub use error::CoreError;
pub use warden::Warden;

// Re-export core components
pub use warden_assign::{
    AssignRequest, AssignmentService, ChannelNotifier, Notifier, ServiceError, ToggleCoordinator,
};
pub use warden_groups::{
    exception_report, fallback_label, ExceptionEntry, GroupError, GroupIndex, GroupState,
    LabelResolver,
};
pub use warden_hooks::{
    App, AppObserver, Assignment, CatalogProvider, Hook, HookError, StaticCatalog,
};

pub type Result<T> = std::result::Result<T, CoreError>;
