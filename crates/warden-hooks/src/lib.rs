//! Warden Hook Model
//!
//! Hooks, per-app assignments, and the App aggregate that owns them.
//! Hooks are immutable catalog entries; assignments are the mutable record
//! that a hook is currently enabled for an app, keyed by hook identity.

mod app;
mod assignment;
mod error;
mod hook;

pub use app::{App, AppObserver};
pub use assignment::Assignment;
pub use error::HookError;
pub use hook::{CatalogProvider, Hook, StaticCatalog};

pub type Result<T> = std::result::Result<T, HookError>;
