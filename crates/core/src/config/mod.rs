//! Configuration system for SkyParkour
//!
//! Settings are a serde struct stored as TOML:
//! - Auto-generation of the default file when missing
//! - Manual reload capability
//! - A process-wide current copy read by the hooks
//!
//! # Example
//!
//! ```ignore
//! use skyparkour_core::config::{self, ParkourSettings};
//!
//! let loaded = ParkourSettings::load().unwrap_or_default();
//! config::replace_settings(loaded);
//!
//! if config::settings().mod_enabled {
//!     // ...
//! }
//! ```

mod loader;

use std::sync::LazyLock;

use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};

pub use loader::{log_path, plugin_dir, settings_path, skse_plugins_dir, PLUGIN_DIR_NAME};

use crate::parkour::LedgeType;

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Could not determine config directory from the host location
    #[error("Config directory not available - could not resolve host base path")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Compatibility switches for other mods
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilitySettings {
    /// True Directional Movement is installed (pitches the controller while swimming)
    pub true_directional_movement: bool,
}

/// Camera clamps applied while a parkour motion plays (radians)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Third person controller pitch clamp (TDM compatibility only)
    pub tdm_pitch_clamp: f32,
    /// First person look pitch clamp
    pub vertical_clamp_angle: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            tdm_pitch_clamp: 0.4,
            vertical_clamp_angle: 1.0,
        }
    }
}

impl CameraSettings {
    /// Clamps are magnitudes; a sign typo or a non-finite value falls back
    /// so the camera callbacks never see an inverted range
    fn sanitize(&mut self) {
        let defaults = Self::default();
        self.tdm_pitch_clamp = clamp_magnitude(self.tdm_pitch_clamp, defaults.tdm_pitch_clamp);
        self.vertical_clamp_angle =
            clamp_magnitude(self.vertical_clamp_angle, defaults.vertical_clamp_angle);
    }
}

fn clamp_magnitude(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.abs()
    } else {
        tracing::warn!("Invalid camera clamp {}, using {}", value, fallback);
        fallback
    }
}

/// Scripted motion parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Annotation name marking a movement segment boundary in parkour clips
    pub movement_marker: String,
    /// Animation event that starts the scripted motion
    pub start_event: String,
    /// Animation event that ends the scripted motion
    pub stop_event: String,
    /// `TranslateTo` speed (units per second)
    pub translate_speed: f32,
    /// Delay before `StopTranslation` is issued
    pub translate_timeout_ms: u64,
    /// How far behind the ledge point the player is placed (scaled)
    pub backward_offset: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            movement_marker: "SPPF_Move".to_string(),
            start_event: "SkyParkour_Start".to_string(),
            stop_event: "SkyParkour_Stop".to_string(),
            translate_speed: 500.0,
            translate_timeout_ms: 500,
            backward_offset: 55.0,
        }
    }
}

/// Height windows handed to the geometry probes (unscaled units)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionSettings {
    pub vault_length: f32,
    pub vault_max_elevation_increase: f32,
    pub vault_min_height: f32,
    pub vault_max_height: f32,
    pub climb_min_height: f32,
    pub climb_max_height: f32,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            vault_length: 85.0,
            vault_max_elevation_increase: 70.0,
            vault_min_height: 50.0,
            vault_max_height: 120.0,
            climb_min_height: 40.0,
            climb_max_height: 250.0,
        }
    }
}

/// Animation root elevation per ledge type (unscaled units)
///
/// The player is lowered by `elevation - 3` (`- 5` for steps) so the
/// animation lands on the ledge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationSettings {
    pub highest: f32,
    pub high: f32,
    pub medium: f32,
    pub low: f32,
    pub step_high: f32,
    pub step_low: f32,
    pub vault: f32,
    pub grab: f32,
}

impl Default for ElevationSettings {
    fn default() -> Self {
        Self {
            highest: 250.0,
            high: 200.0,
            medium: 150.0,
            low: 100.0,
            step_high: 70.0,
            step_low: 40.0,
            vault: 70.0,
            grab: 120.0,
        }
    }
}

impl ElevationSettings {
    /// Elevation for a ledge type that moves the player
    pub fn for_ledge(&self, ledge: LedgeType) -> Option<f32> {
        match ledge {
            LedgeType::Highest => Some(self.highest),
            LedgeType::High => Some(self.high),
            LedgeType::Medium => Some(self.medium),
            LedgeType::Low => Some(self.low),
            LedgeType::StepHigh => Some(self.step_high),
            LedgeType::StepLow => Some(self.step_low),
            LedgeType::Vault => Some(self.vault),
            LedgeType::Grab => Some(self.grab),
            LedgeType::Failed | LedgeType::NoLedge => None,
        }
    }
}

/// Stamina cost of a parkour action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaSettings {
    /// Full cost; vault-type actions pay half
    pub base_cost: f32,
}

impl Default for StaminaSettings {
    fn default() -> Self {
        Self { base_cost: 20.0 }
    }
}

/// Plugin settings.
///
/// Loaded from `Data/SKSE/Plugins/SkyParkour/SkyParkour.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkourSettings {
    /// Config version for future migration support
    pub version: u32,

    pub mod_enabled: bool,

    /// Only vault-type actions while moving; full parkour from standstill
    pub smart_parkour_enabled: bool,

    pub enable_stamina_consumption: bool,

    /// Show the ledge marker while a parkour point is selected
    pub use_indicators: bool,

    /// Enable debug logging
    pub debug: bool,

    pub compatibility: CompatibilitySettings,
    pub camera: CameraSettings,
    pub motion: MotionSettings,
    pub detection: DetectionSettings,
    pub elevations: ElevationSettings,
    pub stamina: StaminaSettings,
}

impl Default for ParkourSettings {
    fn default() -> Self {
        Self {
            version: 1,
            mod_enabled: true,
            smart_parkour_enabled: true,
            enable_stamina_consumption: true,
            use_indicators: true,
            debug: false,
            compatibility: CompatibilitySettings::default(),
            camera: CameraSettings::default(),
            motion: MotionSettings::default(),
            detection: DetectionSettings::default(),
            elevations: ElevationSettings::default(),
            stamina: StaminaSettings::default(),
        }
    }
}

impl ParkourSettings {
    /// Load settings from file, creating default if missing.
    pub fn load() -> ConfigResult<Self> {
        let path = settings_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config = Self::parse(&content)?;
            tracing::debug!("Loaded settings from {:?}", path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save()?;
            tracing::info!("Created default settings at {:?}", path);
            Ok(default)
        }
    }

    /// Parse settings from TOML, normalizing values the hooks rely on.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.camera.sanitize();
        Ok(config)
    }

    /// Save settings to file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let path = settings_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Reload settings from file.
    pub fn reload(&mut self) -> ConfigResult<()> {
        let path = settings_path()?;
        let content = std::fs::read_to_string(&path)?;
        *self = Self::parse(&content)?;
        tracing::debug!("Reloaded settings from {:?}", path);
        Ok(())
    }
}

static SETTINGS: LazyLock<RwLock<ParkourSettings>> =
    LazyLock::new(|| RwLock::new(ParkourSettings::default()));

/// Current settings
pub fn settings() -> RwLockReadGuard<'static, ParkourSettings> {
    SETTINGS.read()
}

/// Replace the current settings
pub fn replace_settings(settings: ParkourSettings) {
    *SETTINGS.write() = settings;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let config = ParkourSettings::default();
        assert_eq!(config.version, 1);
        assert!(config.mod_enabled);
        assert!(!config.compatibility.true_directional_movement);
        assert_eq!(config.camera.tdm_pitch_clamp, 0.4);
        assert_eq!(config.camera.vertical_clamp_angle, 1.0);
        assert_eq!(config.motion.movement_marker, "SPPF_Move");
        assert!(config.use_indicators);
    }

    #[test]
    fn test_settings_serialize() {
        let mut config = ParkourSettings::default();
        config.camera.tdm_pitch_clamp = 0.25;
        config.compatibility.true_directional_movement = true;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("tdm_pitch_clamp = 0.25"));
        assert!(toml_str.contains("true_directional_movement = true"));

        let parsed: ParkourSettings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.camera.tdm_pitch_clamp, 0.25);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: ParkourSettings = toml::from_str(
            r#"
            mod_enabled = false

            [motion]
            translate_timeout_ms = 750
            "#,
        )
        .unwrap();

        assert!(!parsed.mod_enabled);
        assert_eq!(parsed.motion.translate_timeout_ms, 750);
        assert_eq!(parsed.motion.movement_marker, "SPPF_Move");
        assert_eq!(parsed.camera.vertical_clamp_angle, 1.0);
    }

    #[test]
    fn test_negative_camera_clamp_is_magnitude() {
        let parsed = ParkourSettings::parse(
            r#"
            [camera]
            vertical_clamp_angle = -1.0
            tdm_pitch_clamp = -0.3
            "#,
        )
        .unwrap();

        assert_eq!(parsed.camera.vertical_clamp_angle, 1.0);
        assert_eq!(parsed.camera.tdm_pitch_clamp, 0.3);
    }

    #[test]
    fn test_non_finite_camera_clamp_uses_default() {
        let parsed = ParkourSettings::parse(
            r#"
            [camera]
            vertical_clamp_angle = nan
            tdm_pitch_clamp = inf
            "#,
        )
        .unwrap();

        assert_eq!(parsed.camera.vertical_clamp_angle, 1.0);
        assert_eq!(parsed.camera.tdm_pitch_clamp, 0.4);
    }

    #[test]
    fn test_elevation_lookup() {
        let elevations = ElevationSettings::default();
        assert_eq!(elevations.for_ledge(LedgeType::High), Some(elevations.high));
        assert_eq!(elevations.for_ledge(LedgeType::Failed), None);
        assert_eq!(elevations.for_ledge(LedgeType::NoLedge), None);
    }
}
