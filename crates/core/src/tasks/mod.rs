//! Main-thread scheduling
//!
//! Deferred tasks run on the next frame; workers sleep on their own thread
//! and re-enter through the queue.

pub mod queue;
pub mod worker;

pub use queue::*;
pub use worker::spawn_delayed;
