//! Warden Group Views
//!
//! Derived, per-group views over the hook catalog and assignment set:
//! collated group ordering, group membership, aggregated display state, and
//! group labels. Nothing here is stored; every view is recomputed from the
//! catalog and the live assignment set.

mod aggregate;
mod error;
mod index;
mod label;

pub use aggregate::{exception_report, ExceptionEntry, GroupState};
pub use error::GroupError;
pub use index::GroupIndex;
pub use label::{fallback_label, LabelResolver};

pub type Result<T> = std::result::Result<T, GroupError>;
