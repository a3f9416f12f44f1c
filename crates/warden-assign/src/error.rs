//! Assignment service error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Assignment service unreachable: {0}")]
    Unreachable(String),

    #[error("Assignment rejected: {0}")]
    Rejected(String),
}
