//! SkyParkour Engine - Host API Loading and Global Storage
//!
//! This crate handles:
//! - Validating the host API table handed over by the native loader shim
//! - Storing it in a thread-safe global static
//! - Safe facades over host objects ([`PlayerActor`], [`ClipSource`],
//!   [`ScriptBridge`], [`LedgeProbe`], [`LedgeIndicator`]) so the core logic can be driven by
//!   in-memory fakes in tests
//!
//! # Architecture
//!
//! The table is validated once during plugin load via [`loader::load_host`]
//! and stored in [`globals::HostGlobals`]. Access is provided via the
//! [`try_host()`] function.
//!
//! # Thread Safety
//!
//! The host table is valid for the plugin's lifetime. Engine objects are not:
//! they may only be touched from the main thread, whose ID is recorded for
//! runtime checks via [`is_main_thread()`].

pub mod clip;
pub mod error;
pub mod globals;
pub mod indicator;
pub mod loader;
pub mod player;
pub mod probe;
pub mod script;

pub use clip::{ClipSource, HostClip};
pub use error::HostError;
pub use globals::{init_host, is_main_thread, try_host, HostGlobals};
pub use indicator::{HostIndicator, LedgeIndicator};
pub use loader::load_host;
pub use player::{HostPlayer, PlayerActor};
pub use probe::{HostLedgeProbe, LedgeProbe};
pub use script::{HostScriptBridge, ScriptBridge};
