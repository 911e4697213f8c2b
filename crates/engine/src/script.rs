//! Scripting VM bridge
//!
//! Thin wrapper over the host's method dispatch for the player's bound
//! `ObjectReference` script object.

use skyparkour_sdk::{HostApi, NiPoint3, TranslateArgs};

use crate::globals::HostGlobals;

/// Translate/stop requests against the player's script object
///
/// Implementations must be cheap to clone and sendable: the stop request is
/// scheduled from a worker thread (and then executed on the main thread).
pub trait ScriptBridge: Clone + Send + 'static {
    /// `ObjectReference.TranslateTo(x, y, z, rx, ry, rz, speed, maxRotSpeed)`
    fn translate_to(
        &self,
        position: NiPoint3,
        rotation: NiPoint3,
        speed: f32,
        max_rotation_speed: f32,
    ) -> bool;

    /// `ObjectReference.StopTranslation()`
    fn stop_translation(&self) -> bool;
}

/// Bridge bound to the player's VM handle
#[derive(Clone, Copy)]
pub struct HostScriptBridge {
    api: &'static HostApi,
    handle: u64,
}

// SAFETY: The table is immutable and process-lived; the handle is a plain integer.
// Dispatch calls are only made from the main thread (via the task queue).
unsafe impl Send for HostScriptBridge {}

impl HostScriptBridge {
    /// Bind to the player's script handle
    ///
    /// Returns `None` when the VM has no handle for the player.
    pub fn for_player(globals: &HostGlobals) -> Option<Self> {
        let api = globals.api();
        let handle = unsafe { (api.player_script_handle)() };
        if handle == 0 {
            return None;
        }
        Some(Self { api, handle })
    }
}

impl ScriptBridge for HostScriptBridge {
    fn translate_to(
        &self,
        position: NiPoint3,
        rotation: NiPoint3,
        speed: f32,
        max_rotation_speed: f32,
    ) -> bool {
        let args = TranslateArgs {
            position,
            rotation,
            speed,
            max_rotation_speed,
        };
        unsafe { (self.api.dispatch_translate_to)(self.handle, &args) }
    }

    fn stop_translation(&self) -> bool {
        unsafe { (self.api.dispatch_stop_translation)(self.handle) }
    }
}
