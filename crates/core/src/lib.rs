//! SkyParkour - Core Logic
//!
//! Hook installation, animation-synchronized motion, the camera and clip
//! callbacks, and the parkour orchestration built on top of them.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Host types, vtable slots and the host API table
//! - [`engine`] - Host API storage and safe facades over host objects

use tracing::info;

pub use skyparkour_engine as engine;
pub use skyparkour_sdk as sdk;

pub mod camera;
pub mod clip;
pub mod config;
pub mod context;
pub mod frame;
pub mod hooks;
pub mod motion;
pub mod parkour;
pub mod runtime;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, ConfigResult, ParkourSettings};
pub use context::{try_with_context, with_context, ParkourContext};
pub use frame::{frame_count, on_frame, register_frame_callback, unregister_frame_callback, FrameKey};
pub use hooks::{install_hooks, HookError};
pub use motion::{InterpolationState, MotionTimeline};
pub use parkour::LedgeType;
pub use tasks::queue_task;

use skyparkour_engine::{init_host, HostError, HostGlobals};

/// Bring the runtime up against a validated host
///
/// Stores the host globals, installs the hooks and starts the per-frame
/// ledge refresh. Returns whether every hook installed; the plugin keeps
/// running either way.
#[tracing::instrument(skip_all)]
pub fn startup(globals: HostGlobals) -> Result<bool, HostError> {
    init_host(globals)?;

    let installed = install_hooks();
    if installed {
        info!("All hooks installed");
    } else {
        tracing::error!(critical = true, "Some hooks failed to install, parkour motion may misbehave");
    }

    runtime::register_frame_update();
    runtime::set_parkour_enabled(config::settings().mod_enabled);
    Ok(installed)
}

/// Shutdown the plugin
///
/// Hooks stay installed for the life of the process; this only releases the
/// player and stops listening.
pub fn shutdown() {
    info!("SkyParkour shutting down...");
    runtime::set_parkour_enabled(false);
}
