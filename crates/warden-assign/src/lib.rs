//! Warden Assignment Propagation
//!
//! Executes group toggles: synchronous local mutation of the app's
//! assignment set, then best-effort asynchronous propagation to the remote
//! assignment service, with failures surfaced through a notification
//! channel rather than return values.

mod coordinator;
mod error;
mod notify;
mod service;

pub use coordinator::ToggleCoordinator;
pub use error::ServiceError;
pub use notify::{ChannelNotifier, Notifier};
pub use service::{AssignRequest, AssignmentService};

pub type Result<T> = std::result::Result<T, ServiceError>;
