//! Hook model error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Catalog unavailable: {0}")]
    Catalog(String),

    #[error("Unknown package: {0}")]
    UnknownPackage(String),
}
