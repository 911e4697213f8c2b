//! Hook system
//!
//! Virtual table hooks for the seven intercepted host functions:
//! - [`vtable`] - slot patching behind the [`VTableMemory`] capability
//! - [`relocation`] - typed storage for the preserved original pointers
//! - [`site`] - the hardcoded (table, slot) contracts with the host build
//! - [`registry`] - the one-shot install sequence
//! - [`detours`] - the `extern "system"` replacements the engine calls
//!
//! Every detour forwards to the preserved original, whether or not the
//! parkour logic intervened.

pub mod detours;
pub mod dispatch;
pub mod registry;
pub mod relocation;
pub mod site;
pub mod vtable;

pub use detours::{install_hooks, ORIGINALS};
pub use dispatch::Dispatch;
pub use registry::{Detours, HookTables, Originals};
pub use relocation::{FnPointer, Relocation};
pub use site::HookSite;
pub use vtable::{patch_slot, HookError, RawVTable, VTableMemory};
