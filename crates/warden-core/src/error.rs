//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Hook error: {0}")]
    Hook(#[from] warden_hooks::HookError),

    #[error("Group error: {0}")]
    Group(#[from] warden_groups::GroupError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("App not registered: {0}")]
    AppNotFound(String),

    #[error("Unknown group: {0}")]
    GroupNotFound(String),
}
