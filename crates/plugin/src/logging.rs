//! Tracing subscriber setup

use std::fs::File;
use std::sync::Mutex;

use skyparkour_core::config;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Logs go to `SkyParkour.log` in the plugin directory, or stderr if that
/// can't be created. `RUST_LOG` overrides the configured level.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = config::log_path().ok().and_then(|path| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        File::create(path).ok()
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let _ = match log_file {
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}
