//! Toggle coordinator
//!
//! Applies a group enable/disable locally first, then propagates the change
//! to the assignment service on a background task. Local state is
//! authoritative for the UI; a failed propagation is logged and surfaced as
//! a notification, never rolled back.

use std::sync::Arc;

use tokio::task::JoinHandle;

use warden_hooks::{App, Hook};

use crate::notify::Notifier;
use crate::service::{AssignRequest, AssignmentService};

pub struct ToggleCoordinator {
    service: Arc<dyn AssignmentService>,
    notifier: Arc<dyn Notifier>,
}

impl ToggleCoordinator {
    pub fn new(service: Arc<dyn AssignmentService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { service, notifier }
    }

    /// Enable or disable every hook of a group for the app.
    ///
    /// The local assignment set is updated synchronously and observers are
    /// notified before this returns. The remote call runs on its own task
    /// over values captured here; rapid re-toggles may propagate out of
    /// order, which the service's last-write-wins semantics absorb. The
    /// returned handle can be awaited but no caller has to.
    pub fn set_group_enabled(&self, app: &App, hooks: &[Hook], enable: bool) -> JoinHandle<()> {
        app.apply_toggle(hooks, enable);
        app.notify_changed();

        let request = AssignRequest {
            hook_ids: hooks.iter().map(|h| h.id().to_string()).collect(),
            package_name: app.package_name.clone(),
            uid: app.uid,
            remove: !enable,
            ephemeral: !app.persistent,
        };
        let service = Arc::clone(&self.service);
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(async move {
            tracing::debug!(
                package = %request.package_name,
                hooks = request.hook_ids.len(),
                remove = request.remove,
                "Propagating assignment change"
            );
            if let Err(e) = service.assign_hooks(request).await {
                tracing::error!(error = %e, "Assignment propagation failed");
                notifier.notify(e.to_string());
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::Result;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingService {
        requests: Mutex<Vec<AssignRequest>>,
    }

    #[async_trait]
    impl AssignmentService for RecordingService {
        async fn assign_hooks(&self, request: AssignRequest) -> Result<()> {
            self.requests.lock().push(request);
            Ok(())
        }
    }

    struct FailingService;

    #[async_trait]
    impl AssignmentService for FailingService {
        async fn assign_hooks(&self, _request: AssignRequest) -> Result<()> {
            Err(ServiceError::Unreachable("network error".to_string()))
        }
    }

    #[derive(Default)]
    struct CollectingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for CollectingNotifier {
        fn notify(&self, message: String) {
            self.messages.lock().push(message);
        }
    }

    fn contacts_hooks() -> Vec<Hook> {
        vec![Hook::new("h1", "Contacts"), Hook::new("h2", "Contacts")]
    }

    #[tokio::test]
    async fn test_enable_assigns_and_propagates() {
        let service = Arc::new(RecordingService::default());
        let notifier = Arc::new(CollectingNotifier::default());
        let coordinator = ToggleCoordinator::new(service.clone(), notifier.clone());

        let app = App::new("com.example.app", 10001, false);
        let hooks = contacts_hooks();

        coordinator
            .set_group_enabled(&app, &hooks, true)
            .await
            .unwrap();

        assert!(app.is_assigned("h1"));
        assert!(app.is_assigned("h2"));

        let requests = service.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].hook_ids, ["h1", "h2"]);
        assert_eq!(requests[0].package_name, "com.example.app");
        assert_eq!(requests[0].uid, 10001);
        assert!(!requests[0].remove);
        // App is not persistent, so the assignment is session-only
        assert!(requests[0].ephemeral);

        assert!(notifier.messages.lock().is_empty());
    }

    #[tokio::test]
    async fn test_disable_is_a_remove() {
        let service = Arc::new(RecordingService::default());
        let notifier = Arc::new(CollectingNotifier::default());
        let coordinator = ToggleCoordinator::new(service.clone(), notifier.clone());

        let app = App::new("com.example.app", 10001, true);
        let hooks = contacts_hooks();

        coordinator
            .set_group_enabled(&app, &hooks, true)
            .await
            .unwrap();
        coordinator
            .set_group_enabled(&app, &hooks, false)
            .await
            .unwrap();

        assert_eq!(app.assignment_count(), 0);

        let requests = service.requests.lock();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].remove);
        assert!(!requests[1].ephemeral);
    }

    #[tokio::test]
    async fn test_toggle_idempotent() {
        let service = Arc::new(RecordingService::default());
        let notifier = Arc::new(CollectingNotifier::default());
        let coordinator = ToggleCoordinator::new(service, notifier);

        let app = App::new("com.example.app", 10001, true);
        let hooks = contacts_hooks();

        coordinator
            .set_group_enabled(&app, &hooks, true)
            .await
            .unwrap();
        coordinator
            .set_group_enabled(&app, &hooks, true)
            .await
            .unwrap();

        assert_eq!(app.assignment_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_notifies_and_keeps_local_state() {
        let notifier = Arc::new(CollectingNotifier::default());
        let coordinator = ToggleCoordinator::new(Arc::new(FailingService), notifier.clone());

        let app = App::new("com.example.app", 10001, true);
        let hooks = contacts_hooks();

        coordinator
            .set_group_enabled(&app, &hooks, true)
            .await
            .unwrap();

        // Local state survives the failed remote call
        assert!(app.is_assigned("h1"));
        assert!(app.is_assigned("h2"));

        let messages = notifier.messages.lock();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("network error"));
    }

    #[tokio::test]
    async fn test_observers_fire_before_propagation_completes() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use warden_hooks::AppObserver;

        struct Counter(AtomicUsize);

        impl AppObserver for Counter {
            fn assignments_changed(&self, _package_name: &str) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let notifier = Arc::new(CollectingNotifier::default());
        let coordinator =
            ToggleCoordinator::new(Arc::new(RecordingService::default()), notifier);

        let app = App::new("com.example.app", 10001, true);
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        app.subscribe(counter.clone());

        let handle = coordinator.set_group_enabled(&app, &contacts_hooks(), true);

        // Synchronous: observer already ran, without awaiting the handle
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        handle.await.unwrap();
    }
}
