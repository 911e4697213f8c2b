//! Global host API storage
//!
//! The host API table is acquired once during plugin load and stored here.
//! Access is thread-safe via OnceLock.

use std::ptr::NonNull;
use std::sync::OnceLock;
use std::thread::ThreadId;

use skyparkour_sdk::HostApi;

use crate::error::HostError;

/// Global host state
pub struct HostGlobals {
    /// Host API table (owned by the loader shim, lives for the process)
    api: NonNull<HostApi>,

    /// Main game thread ID for thread safety checks
    pub main_thread_id: ThreadId,
}

// SAFETY: The table is immutable after load and lives for the entire plugin lifetime.
// Engine objects reached through it are only touched from the main thread.
unsafe impl Send for HostGlobals {}
unsafe impl Sync for HostGlobals {}

/// Global host state storage
static HOST: OnceLock<HostGlobals> = OnceLock::new();

/// Initialize host globals
///
/// Called once during plugin load. Returns error if already initialized.
pub fn init_host(globals: HostGlobals) -> Result<(), HostError> {
    HOST.set(globals).map_err(|_| HostError::AlreadyInitialized)
}

/// Host globals, if the plugin finished loading
pub fn try_host() -> Option<&'static HostGlobals> {
    HOST.get()
}

/// Check if current thread is the main game thread
pub fn is_main_thread() -> bool {
    HOST.get()
        .map(|g| std::thread::current().id() == g.main_thread_id)
        .unwrap_or(false)
}

impl HostGlobals {
    /// Create new HostGlobals, recording the calling thread as the main thread
    pub fn new(api: NonNull<HostApi>) -> Self {
        Self {
            api,
            main_thread_id: std::thread::current().id(),
        }
    }

    /// Get the host API table
    pub fn api(&self) -> &'static HostApi {
        // SAFETY: validated non-null at load, owned by the shim for the process lifetime
        unsafe { &*self.api.as_ptr() }
    }

    /// Seconds elapsed since the previous rendered frame
    pub fn seconds_since_last_frame(&self) -> f32 {
        unsafe { (self.api().seconds_since_last_frame)() }
    }
}
