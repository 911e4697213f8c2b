//! Config path resolution
//!
//! Handles resolving paths for configuration and log files based on the host
//! executable's location.

use std::path::PathBuf;

use super::{ConfigError, ConfigResult};

/// Plugin directory name under `Data/SKSE/Plugins/`
pub const PLUGIN_DIR_NAME: &str = "SkyParkour";

/// Returns the SKSE plugins directory by navigating from the host executable.
///
/// The host is launched from:
/// `<game>/SkyrimSE.exe`
///
/// Plugins live in:
/// `<game>/Data/SKSE/Plugins/`
pub fn skse_plugins_dir() -> ConfigResult<PathBuf> {
    let exe = std::env::current_exe().map_err(ConfigError::IoError)?;

    exe.parent() // <game>/
        .map(|game| game.join("Data").join("SKSE").join("Plugins"))
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the plugin's own directory.
///
/// Path: `Data/SKSE/Plugins/SkyParkour/`
pub fn plugin_dir() -> ConfigResult<PathBuf> {
    Ok(skse_plugins_dir()?.join(PLUGIN_DIR_NAME))
}

/// Returns the settings file path.
///
/// Path: `Data/SKSE/Plugins/SkyParkour/SkyParkour.toml`
pub fn settings_path() -> ConfigResult<PathBuf> {
    Ok(plugin_dir()?.join(format!("{}.toml", PLUGIN_DIR_NAME)))
}

/// Returns the log file path.
///
/// Path: `Data/SKSE/Plugins/SkyParkour/SkyParkour.log`
pub fn log_path() -> ConfigResult<PathBuf> {
    Ok(plugin_dir()?.join(format!("{}.log", PLUGIN_DIR_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_format() {
        // Only the tail is stable; the head depends on the test runner location
        let path = settings_path().unwrap();
        assert!(path.ends_with("Data/SKSE/Plugins/SkyParkour/SkyParkour.toml"));
    }

    #[test]
    fn test_log_next_to_settings() {
        assert_eq!(log_path().unwrap().parent(), settings_path().unwrap().parent());
    }
}
