use super::actions::Action;
use crate::model::{ActionKind, ServerId};
use crate::ui::components::action_dispatcher::PendingAction;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub server_id: ServerId,
}

/// Runs pending card actions on the local task set and reports their outcome
/// back to the UI loop as [`Action::ActionSettled`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn an action handler. Must be called from within a `LocalSet`.
    pub fn spawn_action(
        &mut self,
        server_id: ServerId,
        server_name: String,
        kind: ActionKind,
        pending: PendingAction,
    ) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let settled_id = server_id.clone();

        let handle = tokio::task::spawn_local(async move {
            // The busy slot is already released once `pending` resolves
            let error = pending.await.err().map(|e| format!("{e:#}"));
            let _ = action_sender.send(Action::ActionSettled {
                server_id: settled_id,
                server_name,
                kind,
                error,
            });
        });

        let task = BackgroundTask { handle, server_id };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Drop bookkeeping for finished tasks, returning their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }
        finished
    }

    /// Whether any action for `server_id` is still running
    pub fn is_running_for(&self, server_id: &ServerId) -> bool {
        self.tasks
            .values()
            .any(|task| &task.server_id == server_id && !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
