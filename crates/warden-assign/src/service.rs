//! Assignment service interface
//!
//! The remote authority that durably records which hooks are active for
//! which application. The transport is the implementor's concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// One propagation call, captured at toggle time.
///
/// `remove` means "unassign these hooks"; `ephemeral` means "do not persist
/// beyond the current session".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRequest {
    pub hook_ids: Vec<String>,
    pub package_name: String,
    pub uid: u32,
    pub remove: bool,
    pub ephemeral: bool,
}

#[async_trait]
pub trait AssignmentService: Send + Sync {
    async fn assign_hooks(&self, request: AssignRequest) -> Result<()>;
}
