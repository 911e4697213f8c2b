//! SkyParkour Plugin - FFI Layer
//!
//! The boundary between the native loader shim and the Rust core. The shim
//! resolves the host's virtual tables and engine functions, fills a
//! [`HostApi`](skyparkour_sdk::HostApi) table and calls the exports here.
//! Compiles to a cdylib.

pub mod ffi;
mod logging;

pub use skyparkour_core::shutdown;
