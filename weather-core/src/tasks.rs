//! Task manager for async work started by effects
//!
//! - Spawning with a key that is already running aborts the old task
//! - Every task is tied to a scope token; cancelling the scope (screen
//!   teardown) stops all of them
//! - A task's output is an [`Action`] sent back to the runtime loop
//!
//! A task aborted after it already queued its action cannot take the action
//! back. The reducer's request-id check covers that window.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::action::Action;

/// Identifies a task for cancellation and replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

/// Manages async task lifecycle with automatic cancellation.
pub struct TaskManager {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<Action>,
    scope: CancellationToken,
}

impl TaskManager {
    /// Tasks report to `action_tx` and live no longer than `scope`.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, scope: CancellationToken) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
            scope,
        }
    }

    /// Spawn a task, cancelling any existing task with the same key.
    ///
    /// If the task is cancelled before completion, no action is sent.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);
        self.tasks.retain(|_, handle| !handle.is_finished());

        let tx = self.action_tx.clone();
        let scope = self.scope.child_token();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = scope.cancelled() => {}
                action = future => {
                    let _ = tx.send(action);
                }
            }
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key. No-op if nothing runs under that key.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            if !handle.is_finished() {
                debug!(task = key.name(), "Cancelling task");
            }
            handle.abort();
        }
    }

    /// Cancel all running tasks and the scope itself.
    pub fn cancel_all(&mut self) {
        self.scope.cancel();
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Whether a task with `key` was spawned and has not finished
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
