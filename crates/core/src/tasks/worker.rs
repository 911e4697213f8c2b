//! Background workers
//!
//! Workers never touch engine state. They wait off the main thread and hand
//! their continuation back through the task queue.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::queue::queue_task_blocking;

/// After `delay`, queue `task` for the main thread
pub fn spawn_delayed<F>(delay: Duration, task: F) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name("skyparkour-worker".into())
        .spawn(move || {
            thread::sleep(delay);
            queue_task_blocking(task);
        })
}
