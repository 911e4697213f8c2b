//! Native signatures of the intercepted virtual functions
//!
//! The host is x64 Windows, where member functions share the platform
//! calling convention, so `extern "system"` matches `this`-first C++ calls.

use crate::interfaces::{CameraStatePtr, HkbClipGenerator, HkbContext, InputEvent};

/// `bool PlayerInputHandler::CanProcess(InputEvent*)`
pub type CanProcessFn<S> = unsafe extern "system" fn(this: *mut S, event: *mut InputEvent) -> bool;

/// `void TESCameraState::Update(BSTSmartPointer<TESCameraState>&)`
pub type CameraUpdateFn<S> = unsafe extern "system" fn(this: *mut S, next_state: *mut CameraStatePtr);

/// `void hkbClipGenerator::Activate(const hkbContext&)`
pub type ClipActivateFn =
    unsafe extern "system" fn(this: *mut HkbClipGenerator, context: *const HkbContext);

/// `void hkbClipGenerator::Update(const hkbContext&, float)`
pub type ClipUpdateFn =
    unsafe extern "system" fn(this: *mut HkbClipGenerator, context: *const HkbContext, timestep: f32);

/// `void hkbClipGenerator::Deactivate(const hkbContext&)`
pub type ClipDeactivateFn =
    unsafe extern "system" fn(this: *mut HkbClipGenerator, context: *const HkbContext);
