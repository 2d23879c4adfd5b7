//! In-flight request tracking
//!
//! Every request the console starts is wrapped so it can be cancelled when
//! the owning view is torn down.

use futures::future::{AbortHandle, Abortable, Aborted};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

/// Returned by a tracked future that was cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("task aborted")]
pub struct TaskAborted;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

/// Set of abortable futures, all cancelled on [`abort_all`](Self::abort_all)
/// or drop
#[derive(Default)]
pub struct TaskSet {
    registry: Rc<RefCell<Registry>>,
}

impl TaskSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `future` so it can be aborted. The wrapper removes itself from
    /// the set when it completes.
    pub fn track<F>(&self, future: F) -> impl Future<Output = Result<F::Output, TaskAborted>> + use<F>
    where
        F: Future,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handles.insert(id, handle);
            id
        };
        let registry = Rc::downgrade(&self.registry);

        async move {
            let result = Abortable::new(future, registration).await;
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().handles.remove(&id);
            }
            result.map_err(|Aborted| TaskAborted)
        }
    }

    /// Number of tracked futures that have not finished yet
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.registry.borrow().handles.len()
    }

    pub fn abort_all(&self) {
        let handles: Vec<_> = self.registry.borrow_mut().handles.drain().collect();
        if !handles.is_empty() {
            tracing::debug!(count = handles.len(), "Aborting in-flight requests");
        }
        for (_, handle) in handles {
            handle.abort();
        }
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completed_tasks_leave_the_set() {
        let tasks = TaskSet::new();
        let tracked = tasks.track(async { 7 });
        assert_eq!(tasks.in_flight(), 1);

        assert_eq!(tracked.await, Ok(7));
        assert_eq!(tasks.in_flight(), 0);
    }

    #[tokio::test]
    async fn abort_all_cancels_pending_work() {
        let tasks = TaskSet::new();
        let tracked = tasks.track(futures::future::pending::<()>());

        tasks.abort_all();

        assert_eq!(tracked.await, Err(TaskAborted));
        assert_eq!(tasks.in_flight(), 0);
    }

    #[tokio::test]
    async fn dropping_the_set_cancels_work() {
        let tasks = TaskSet::new();
        let tracked = tasks.track(futures::future::pending::<()>());
        drop(tasks);

        assert_eq!(tracked.await, Err(TaskAborted));
    }
}
