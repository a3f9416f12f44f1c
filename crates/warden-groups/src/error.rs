//! Group view error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Collation unavailable for locale: {0}")]
    Collation(String),
}
