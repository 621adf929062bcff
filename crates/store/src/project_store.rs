//! ProjectStore - the authoritative project list with observer fan-out
//!
//! The store is an explicitly constructed handle: cloning it shares the same
//! underlying list, so collaborators receive the handle instead of reaching
//! for a global. Every mutation appends under one lock and then notifies all
//! registered observers synchronously, in registration order, each with its
//! own snapshot copy of the full list.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use crate::project::{Project, ProjectStatus};

/// Handle returned by [`ProjectStore::subscribe`], used to remove the
/// subscription later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer callback, invoked with an owned snapshot of the full list
type Observer = Box<dyn FnMut(Vec<Project>) + Send>;

struct Subscriber {
    id: SubscriptionId,
    observer: Observer,
}

#[derive(Default)]
struct StoreInner {
    projects: Vec<Project>,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

/// Observable in-memory project store
///
/// The list is append-only: projects are added through [`add_project`] and
/// never removed or updated. The mutate-then-notify sequence runs under a
/// single lock, so observers of a store shared across threads always see
/// consistent snapshots, delivered in registration order.
///
/// [`add_project`]: ProjectStore::add_project
#[derive(Clone, Default)]
pub struct ProjectStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ProjectStore {
    /// Create an empty store with no subscribers
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        // A poisoned lock still holds a structurally valid list: the append
        // completes before any observer runs, and observer panics are caught.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an observer for list changes
    ///
    /// The observer receives an owned snapshot copy of the full project list
    /// every time the list changes, starting with the next change (there is
    /// no replay of the current state at registration). Observers run in
    /// registration order, while the store lock is held: an observer must
    /// not call back into the same store.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(Vec<Project>) + Send + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.subscribers.push(Subscriber {
            id,
            observer: Box::new(observer),
        });
        id
    }

    /// Remove a subscription
    ///
    /// Returns whether the subscription was registered. Remaining observers
    /// keep their relative registration order.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|s| s.id != id);
        inner.subscribers.len() != before
    }

    /// Add a new project and notify every observer
    ///
    /// The project gets a freshly generated unique id and starts Active. The
    /// append and the synchronous fan-out happen under one lock acquisition;
    /// each observer receives its own snapshot copy. A panicking observer is
    /// logged and skipped without aborting the fan-out.
    ///
    /// This call never fails. The store does not validate: callers are
    /// expected to run the validation engine over the fields first.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Project {
        let project = Project::new(title, description, people);

        let mut inner = self.lock();
        inner.projects.push(project.clone());
        debug!(project_id = %project.id(), total = inner.projects.len(), "project added");

        let StoreInner {
            projects,
            subscribers,
            ..
        } = &mut *inner;
        for subscriber in subscribers.iter_mut() {
            let snapshot = projects.clone();
            let delivery = panic::catch_unwind(AssertUnwindSafe(|| {
                (subscriber.observer)(snapshot);
            }));
            if delivery.is_err() {
                error!(
                    subscription = subscriber.id.0,
                    "observer panicked during notification"
                );
            }
        }

        project
    }

    /// Copy of the current project list
    pub fn snapshot(&self) -> Vec<Project> {
        self.lock().projects.clone()
    }

    /// Copy of the current project list, filtered to one status
    pub fn snapshot_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.lock()
            .projects
            .iter()
            .filter(|p| p.status() == status)
            .cloned()
            .collect()
    }

    /// Number of projects in the store
    pub fn len(&self) -> usize {
        self.lock().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().projects.is_empty()
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}
