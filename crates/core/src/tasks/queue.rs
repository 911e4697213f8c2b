//! Main thread task queue
//!
//! Work that must run on the game's main thread (animation graph calls,
//! script dispatches) is queued here and drained once per frame.

use std::sync::LazyLock;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// A task to execute on the main thread
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Capacity of the task queue per frame
const QUEUE_CAPACITY: usize = 256;

/// Task queue errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("task queue full")]
    Full,

    #[error("task queue disconnected")]
    Disconnected,
}

#[derive(Clone)]
struct TaskQueue {
    sender: Sender<Task>,
    receiver: Receiver<Task>,
}

impl TaskQueue {
    fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    fn push(&self, task: Task) -> Result<(), QueueError> {
        match self.sender.try_send(task) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Task queue full, dropping task");
                Err(QueueError::Full)
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Task queue disconnected");
                Err(QueueError::Disconnected)
            }
        }
    }

    /// Run the tasks pending when the drain starts
    fn drain(&self) -> usize {
        let pending = self.receiver.len();
        let mut count = 0;

        while count < pending {
            let Ok(task) = self.receiver.try_recv() else {
                break;
            };
            task();
            count += 1;
        }

        count
    }
}

static TASK_QUEUE: LazyLock<TaskQueue> = LazyLock::new(|| TaskQueue::new(QUEUE_CAPACITY));

/// Queue a task to execute on the next frame
///
/// Safe to call from any thread. A full queue drops the task.
pub fn queue_task<F>(task: F) -> Result<(), QueueError>
where
    F: FnOnce() + Send + 'static,
{
    TASK_QUEUE.push(Box::new(task))
}

/// Queue a task, blocking if the queue is full
///
/// # Warning
/// Only call from background threads, never from the main thread
/// (would deadlock if queue is full and waiting for frame to process)
pub fn queue_task_blocking<F>(task: F)
where
    F: FnOnce() + Send + 'static,
{
    if let Err(e) = TASK_QUEUE.sender.send(Box::new(task)) {
        tracing::error!("Failed to queue task (blocking): {}", e);
    }
}

/// Run every queued task
///
/// Called once per frame on the main thread. Tasks queued while draining
/// wait for the next frame. Returns the number of tasks processed.
pub fn process_queued_tasks() -> usize {
    TASK_QUEUE.drain()
}
