//! Per-frame pump
//!
//! Driven by the loader shim once per rendered frame on the main thread.
//! Drains the task queue, then fires registered frame callbacks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use parking_lot::RwLock;
use slotmap::{new_key_type, SlotMap};

use crate::tasks;

new_key_type! {
    /// Key for registered frame callbacks
    pub struct FrameKey;
}

/// Frame callback, called with the seconds since the previous frame
pub type FrameCallback = Box<dyn Fn(f32) + Send + Sync>;

static CALLBACKS: LazyLock<RwLock<SlotMap<FrameKey, FrameCallback>>> =
    LazyLock::new(|| RwLock::new(SlotMap::with_key()));

static FRAME_COUNT: AtomicU64 = AtomicU64::new(0);

/// Register a callback to be called every frame
pub fn register_frame_callback<F>(callback: F) -> FrameKey
where
    F: Fn(f32) + Send + Sync + 'static,
{
    CALLBACKS.write().insert(Box::new(callback))
}

/// Unregister a frame callback
///
/// # Returns
/// `true` if the callback was found and removed
pub fn unregister_frame_callback(key: FrameKey) -> bool {
    CALLBACKS.write().remove(key).is_some()
}

pub fn frame_count() -> u64 {
    FRAME_COUNT.load(Ordering::Relaxed)
}

/// Run one frame
///
/// Callbacks must not register or unregister callbacks.
pub fn on_frame(frame_delta: f32) {
    FRAME_COUNT.fetch_add(1, Ordering::Relaxed);

    let processed = tasks::process_queued_tasks();
    if processed > 0 {
        tracing::trace!("Processed {} queued tasks", processed);
    }

    let callbacks = CALLBACKS.read();
    for (_, callback) in callbacks.iter() {
        callback(frame_delta);
    }
}
