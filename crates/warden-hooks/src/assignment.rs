//! Assignment records
//!
//! An assignment says "this hook is currently enabled for the app" and
//! carries the runtime telemetry reported back by the enforcement side.

use serde::{Deserialize, Serialize};

use crate::hook::Hook;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    hook: Hook,
    /// Last error seen while the hook was active, if any
    pub exception: Option<String>,
    /// Negative means not installed on the target; non-negative is neutral
    pub installed: i64,
    /// Whether usage tracking applies to this hook
    pub restricted: bool,
    /// Last-used time in epoch millis; meaningful only when `restricted`
    pub used: i64,
}

impl Assignment {
    /// A fresh assignment with neutral telemetry, as created by a toggle.
    pub fn new(hook: Hook) -> Self {
        Self {
            hook,
            exception: None,
            installed: 0,
            restricted: false,
            used: -1,
        }
    }

    pub fn hook(&self) -> &Hook {
        &self.hook
    }

    pub fn hook_id(&self) -> &str {
        self.hook.id()
    }
}

// Assignment equality is hook-identity equality, not deep equality;
// telemetry never participates.
impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.hook == other.hook
    }
}

impl Eq for Assignment {}
