//! C-compatible exports called by the native loader shim

use std::ffi::{c_char, CStr};

use tracing::instrument;

use skyparkour_core::config::{self, ConfigError, ConfigResult, ParkourSettings};
use skyparkour_core::{frame, runtime};
use skyparkour_engine::load_host;
use skyparkour_sdk::HostApi;

// Plugin metadata - static strings with null terminators for C compatibility
static AUTHOR: &[u8] = b"dollan\0";
static NAME: &[u8] = b"SkyParkour\0";
static DESCRIPTION: &[u8] = b"Animation-synchronized parkour for Skyrim\0";
static VERSION: &[u8] = b"0.1.0\0";

/// Called once when the loader shim loads the plugin
///
/// Returns `false` only if the host API table is unusable. A failed hook
/// install is logged as critical but the plugin stays loaded.
///
/// # Safety
/// - `host` must point to a fully initialized `HostApi` that outlives the process
/// - `error` must be a valid pointer to a buffer of at least `maxlen` bytes, or null
#[no_mangle]
#[instrument(skip_all)]
pub unsafe extern "C" fn skyparkour_plugin_load(
    host: *const HostApi,
    error: *mut c_char,
    maxlen: usize,
) -> bool {
    let (settings, load_error) = settings_or_default(ParkourSettings::load());
    crate::logging::init(settings.debug);
    tracing::info!("SkyParkour loading...");
    // No subscriber existed while loading
    if let Some(e) = load_error {
        tracing::warn!("Failed to load settings, using defaults: {}", e);
    }
    config::replace_settings(settings);

    let globals = match load_host(host) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!("Failed to load host API: {}", e);
            write_error(error, maxlen, &format!("Host API error: {}", e));
            return false;
        }
    };

    match skyparkour_core::startup(globals) {
        Ok(true) => tracing::info!("SkyParkour loaded successfully!"),
        Ok(false) => tracing::warn!("SkyParkour loaded with missing hooks"),
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            write_error(error, maxlen, &e.to_string());
            return false;
        }
    }
    tracing::info!("Main thread ID: {:?}", std::thread::current().id());

    true
}

/// Called when the plugin is unloaded
///
/// # Safety
/// - `error` must be a valid pointer to a buffer of at least `maxlen` bytes, or null
#[no_mangle]
#[instrument(skip_all)]
pub unsafe extern "C" fn skyparkour_plugin_unload(error: *mut c_char, maxlen: usize) -> bool {
    tracing::info!("SkyParkour unloading...");

    match std::panic::catch_unwind(crate::shutdown) {
        Ok(()) => true,
        Err(_) => {
            write_error(error, maxlen, "Panic during shutdown");
            false
        }
    }
}

#[no_mangle]
pub extern "C" fn skyparkour_get_author() -> *const c_char {
    AUTHOR.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn skyparkour_get_name() -> *const c_char {
    NAME.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn skyparkour_get_description() -> *const c_char {
    DESCRIPTION.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn skyparkour_get_version() -> *const c_char {
    VERSION.as_ptr() as *const c_char
}

/// Called by the shim once per rendered frame, on the main thread
#[no_mangle]
pub extern "C" fn skyparkour_on_frame(frame_delta: f32) {
    frame::on_frame(frame_delta);
}

/// Called for every animation graph event on the player
///
/// # Safety
/// - `tag` must be a valid null-terminated C string or null
#[no_mangle]
pub unsafe extern "C" fn skyparkour_on_animation_event(tag: *const c_char) {
    if tag.is_null() {
        return;
    }
    let Ok(tag) = CStr::from_ptr(tag).to_str() else {
        return;
    };
    if let Some(event) = runtime::animation_event(tag) {
        tracing::debug!(?event, "Animation event {}", tag);
    }
}

/// Called when the player's race switch completes
#[no_mangle]
pub extern "C" fn skyparkour_on_race_switch(beast_form: bool) {
    runtime::race_switch(beast_form);
}

/// Called when the parkour button is pressed
///
/// Returns `true` if a parkour action was started.
#[no_mangle]
pub extern "C" fn skyparkour_on_parkour_button() -> bool {
    runtime::parkour_button_pressed()
}

/// Called from the in-game menu when the mod is toggled or the settings
/// file changes
#[no_mangle]
pub extern "C" fn skyparkour_reload_settings() -> bool {
    let mut settings = config::settings().clone();
    if let Err(e) = settings.reload() {
        tracing::warn!("Failed to reload settings: {}", e);
        return false;
    }
    let enabled = settings.mod_enabled;
    config::replace_settings(settings);
    runtime::set_parkour_enabled(enabled);
    tracing::info!(enabled, "Settings reloaded");
    true
}

/// Helper to write an error message to a C buffer
///
/// # Safety
/// - `error` must be a valid pointer or null
/// - `maxlen` must accurately reflect the buffer size
unsafe fn write_error(error: *mut c_char, maxlen: usize, msg: &str) {
    if !error.is_null() && maxlen > 0 {
        let bytes = msg.as_bytes();
        let len = bytes.len().min(maxlen - 1);
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), error as *mut u8, len);
        *error.add(len) = 0;
    }
}

/// Fall back to defaults, keeping the error to report once logging is up
fn settings_or_default(loaded: ConfigResult<ParkourSettings>) -> (ParkourSettings, Option<ConfigError>) {
    match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (ParkourSettings::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_truncates() {
        let mut buf = [0x7f as c_char; 8];
        unsafe { write_error(buf.as_mut_ptr(), buf.len(), "a long error message") };
        let msg = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(msg.to_str().unwrap(), "a long ");
    }

    #[test]
    fn test_null_host_rejected() {
        let mut buf = [0 as c_char; 64];
        let ok = unsafe { skyparkour_plugin_load(std::ptr::null(), buf.as_mut_ptr(), buf.len()) };
        assert!(!ok);
        let msg = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert!(msg.to_str().unwrap().starts_with("Host API error"));
    }

    #[test]
    fn test_bad_settings_fall_back_and_keep_error() {
        let (settings, error) = settings_or_default(ParkourSettings::parse("mod_enabled = 3"));
        assert!(settings.mod_enabled);
        assert!(matches!(error, Some(ConfigError::ParseError(_))));

        let (settings, error) = settings_or_default(ParkourSettings::parse("debug = true"));
        assert!(settings.debug);
        assert!(error.is_none());
    }

    #[test]
    fn test_metadata_is_nul_terminated() {
        let name = unsafe { CStr::from_ptr(skyparkour_get_name()) };
        assert_eq!(name.to_str().unwrap(), "SkyParkour");
    }
}
