//! SkyParkour SDK - Host Engine Type Definitions
//!
//! This crate contains the types shared between the Rust plugin and the
//! native loader shim that lives inside the host process. It has no
//! dependencies and compiles quickly, allowing parallel compilation of
//! dependent crates.
//!
//! # Modules
//!
//! - [`interfaces`] - Opaque C++ engine object types
//! - [`math`] - `NiPoint3` and vector helpers
//! - [`offsets`] - Virtual table identities and slot indices for the targeted host build
//! - [`host`] - The `#[repr(C)]` host API table handed over at load time
//! - [`signatures`] - Native signatures of the intercepted virtual functions

pub mod host;
pub mod interfaces;
pub mod math;
pub mod offsets;
pub mod signatures;

pub use host::*;
pub use interfaces::*;
pub use math::NiPoint3;
pub use offsets::VTableId;
pub use signatures::*;
