//! Group state aggregation
//!
//! Computes the display/enforcement state of a group from the assignments of
//! its member hooks. The state is recomputed fresh on every query; toggles
//! can mutate the assignment set at any time, so nothing here is cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warden_hooks::{App, Hook};

/// Aggregated state of one group for one app.
///
/// `has_exception` and `all_installed` are only meaningful when `assigned`
/// is true; use the indicator helpers when deciding what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    /// At least one member hook is currently enabled
    pub assigned: bool,
    /// Some member assignment carries a non-empty exception
    pub has_exception: bool,
    /// No member assignment reported `installed < 0`
    pub all_installed: bool,
    /// Max used time (epoch millis) over restricted members, -1 if none
    pub last_used: i64,
}

impl GroupState {
    /// Aggregate over the assignments of the given member hooks.
    pub fn compute(app: &App, hooks: &[Hook]) -> Self {
        let mut state = GroupState {
            assigned: false,
            has_exception: false,
            all_installed: true,
            last_used: -1,
        };

        for hook in hooks {
            let Some(assignment) = app.assignment(hook.id()) else {
                continue;
            };
            if assignment
                .exception
                .as_deref()
                .is_some_and(|e| !e.is_empty())
            {
                state.has_exception = true;
            }
            if assignment.installed < 0 {
                state.all_installed = false;
            }
            if assignment.restricted {
                state.last_used = state.last_used.max(assignment.used);
            }
            state.assigned = true;
        }

        state
    }

    /// Whether an exception indicator should be shown for the group
    pub fn exception_indicator(&self) -> bool {
        self.assigned && self.has_exception
    }

    /// Whether an installed indicator should be shown for the group
    pub fn installed_indicator(&self) -> bool {
        self.assigned && self.all_installed
    }

    /// Last-used time as a timestamp, if any restricted member was used
    pub fn last_used_at(&self) -> Option<DateTime<Utc>> {
        if self.last_used < 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.last_used)
    }
}

/// One hook's exception within a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub hook_id: String,
    pub message: String,
}

/// Collect the exceptions of a group's members, in member order.
pub fn exception_report(app: &App, hooks: &[Hook]) -> Vec<ExceptionEntry> {
    let mut entries = Vec::new();
    for hook in hooks {
        let Some(assignment) = app.assignment(hook.id()) else {
            continue;
        };
        if let Some(message) = assignment.exception {
            if !message.is_empty() {
                entries.push(ExceptionEntry {
                    hook_id: hook.id().to_string(),
                    message,
                });
            }
        }
    }
    entries
}
