//! App aggregate
//!
//! Owns the set of currently enabled hooks for one application. The set is
//! keyed by hook id, so there is at most one assignment per hook identity.
//! All mutation happens on the caller's thread; background work only ever
//! receives values copied out of the aggregate.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::assignment::Assignment;
use crate::hook::Hook;

/// Receives a synchronous signal whenever the app's assignment set changed.
pub trait AppObserver: Send + Sync {
    fn assignments_changed(&self, package_name: &str);
}

pub struct App {
    pub package_name: String,
    pub uid: u32,
    /// Whether assignments should outlive the current session
    pub persistent: bool,
    /// Enabled hooks, keyed by hook id
    assignments: Arc<RwLock<HashMap<String, Assignment>>>,
    observers: Arc<RwLock<Vec<Arc<dyn AppObserver>>>>,
}

impl App {
    pub fn new(package_name: impl Into<String>, uid: u32, persistent: bool) -> Self {
        Self {
            package_name: package_name.into(),
            uid,
            persistent,
            assignments: Arc::new(RwLock::new(HashMap::new())),
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the assignment for a hook, if the hook is enabled
    pub fn assignment(&self, hook_id: &str) -> Option<Assignment> {
        self.assignments.read().get(hook_id).cloned()
    }

    pub fn is_assigned(&self, hook_id: &str) -> bool {
        self.assignments.read().contains_key(hook_id)
    }

    /// Snapshot of all current assignments (unordered)
    pub fn assignments(&self) -> Vec<Assignment> {
        self.assignments.read().values().cloned().collect()
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.read().len()
    }

    /// Insert or replace the assignment for its hook
    pub fn insert_assignment(&self, assignment: Assignment) {
        self.assignments
            .write()
            .insert(assignment.hook_id().to_string(), assignment);
    }

    pub fn remove_assignment(&self, hook_id: &str) -> Option<Assignment> {
        self.assignments.write().remove(hook_id)
    }

    /// Apply a group toggle as one atomic local transition.
    ///
    /// Every member hook's assignment is removed by key first, then fresh
    /// neutral assignments are added when enabling. Repeating the call with
    /// the same target state is a no-op after the first application.
    pub fn apply_toggle(&self, hooks: &[Hook], enable: bool) {
        let mut assignments = self.assignments.write();
        for hook in hooks {
            assignments.remove(hook.id());
        }
        if enable {
            for hook in hooks {
                assignments.insert(hook.id().to_string(), Assignment::new(hook.clone()));
            }
        }
        drop(assignments);

        tracing::debug!(
            package = %self.package_name,
            hooks = hooks.len(),
            enable,
            "Applied group toggle"
        );
    }

    /// Record an error reported while the hook was active
    pub fn record_exception(&self, hook_id: &str, message: impl Into<String>) -> bool {
        let mut assignments = self.assignments.write();
        match assignments.get_mut(hook_id) {
            Some(assignment) => {
                assignment.exception = Some(message.into());
                true
            }
            None => false,
        }
    }

    /// Record the install status reported by the enforcement side
    pub fn record_installed(&self, hook_id: &str, installed: i64) -> bool {
        let mut assignments = self.assignments.write();
        match assignments.get_mut(hook_id) {
            Some(assignment) => {
                assignment.installed = installed;
                true
            }
            None => false,
        }
    }

    /// Mark whether usage tracking applies to the hook
    pub fn set_restricted(&self, hook_id: &str, restricted: bool) -> bool {
        let mut assignments = self.assignments.write();
        match assignments.get_mut(hook_id) {
            Some(assignment) => {
                assignment.restricted = restricted;
                true
            }
            None => false,
        }
    }

    /// Record a use of the hook at the given time
    pub fn record_usage(&self, hook_id: &str, at: DateTime<Utc>) -> bool {
        let mut assignments = self.assignments.write();
        match assignments.get_mut(hook_id) {
            Some(assignment) => {
                assignment.used = at.timestamp_millis();
                true
            }
            None => false,
        }
    }

    pub fn subscribe(&self, observer: Arc<dyn AppObserver>) {
        self.observers.write().push(observer);
    }

    /// Tell every subscriber that derived state must be recomputed.
    ///
    /// Called on the foreground sequence after a mutation; no locks are held
    /// while observers run.
    pub fn notify_changed(&self) {
        let observers = self.observers.read().clone();
        for observer in observers {
            observer.assignments_changed(&self.package_name);
        }
    }
}

impl Clone for App {
    fn clone(&self) -> Self {
        Self {
            package_name: self.package_name.clone(),
            uid: self.uid,
            persistent: self.persistent,
            assignments: Arc::clone(&self.assignments),
            observers: Arc::clone(&self.observers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn contacts_hooks() -> Vec<Hook> {
        vec![Hook::new("h1", "Contacts"), Hook::new("h2", "Contacts")]
    }

    #[test]
    fn test_toggle_idempotent() {
        let app = App::new("com.example.app", 10001, true);
        let hooks = contacts_hooks();

        app.apply_toggle(&hooks, true);
        app.apply_toggle(&hooks, true);

        assert_eq!(app.assignment_count(), 2);
        assert!(app.is_assigned("h1"));
        assert!(app.is_assigned("h2"));
    }

    #[test]
    fn test_toggle_inverse() {
        let app = App::new("com.example.app", 10001, true);
        let hooks = contacts_hooks();

        app.apply_toggle(&hooks, true);
        app.apply_toggle(&hooks, false);

        assert_eq!(app.assignment_count(), 0);
    }

    #[test]
    fn test_enable_resets_telemetry() {
        let app = App::new("com.example.app", 10001, true);
        let hooks = contacts_hooks();

        app.apply_toggle(&hooks, true);
        app.record_exception("h1", "NPE");
        app.record_installed("h1", -1);

        // Re-enabling replaces the assignment with a neutral one
        app.apply_toggle(&hooks, true);
        let assignment = app.assignment("h1").unwrap();
        assert!(assignment.exception.is_none());
        assert_eq!(assignment.installed, 0);
    }

    #[test]
    fn test_telemetry_recording() {
        let app = App::new("com.example.app", 10001, true);
        app.apply_toggle(&contacts_hooks(), true);

        assert!(app.record_exception("h1", "NPE"));
        assert!(app.set_restricted("h1", true));
        assert!(app.record_usage("h1", Utc::now()));
        assert!(!app.record_exception("unknown", "NPE"));

        let assignment = app.assignment("h1").unwrap();
        assert_eq!(assignment.exception.as_deref(), Some("NPE"));
        assert!(assignment.restricted);
        assert!(assignment.used > 0);
    }

    #[test]
    fn test_observer_fan_out() {
        struct Counter(AtomicUsize);

        impl AppObserver for Counter {
            fn assignments_changed(&self, package_name: &str) {
                assert_eq!(package_name, "com.example.app");
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let app = App::new("com.example.app", 10001, true);
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        app.subscribe(counter.clone());

        app.notify_changed();
        app.notify_changed();

        assert_eq!(counter.0.load(Ordering::SeqCst), 2);
    }
}
