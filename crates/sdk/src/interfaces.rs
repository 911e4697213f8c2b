//! Host engine object type definitions
//!
//! These are opaque types representing C++ engine objects.
//! We don't need their internal structure - just pointers.
//! Field access goes through the host API table (see [`crate::host`]).

/// Opaque type for ThirdPersonState
/// Third person camera state (TESCameraState + PlayerInputHandler)
#[repr(C)]
pub struct ThirdPersonState {
    _opaque: [u8; 0],
}

/// Opaque type for FirstPersonState
/// First person camera state (TESCameraState + PlayerInputHandler)
#[repr(C)]
pub struct FirstPersonState {
    _opaque: [u8; 0],
}

/// Opaque type for InputEvent
#[repr(C)]
pub struct InputEvent {
    _opaque: [u8; 0],
}

/// Opaque type for BSTSmartPointer<TESCameraState>
/// Passed by reference to camera state Update as the "next state" out-param
#[repr(C)]
pub struct CameraStatePtr {
    _opaque: [u8; 0],
}

/// Opaque type for hkbClipGenerator
/// Animation-playback node advancing a single clip
#[repr(C)]
pub struct HkbClipGenerator {
    _opaque: [u8; 0],
}

/// Opaque type for hkbContext
/// Behavior context passed to every generator callback (owns the behavior graph)
#[repr(C)]
pub struct HkbContext {
    _opaque: [u8; 0],
}

/// Opaque type for PlayerCharacter
#[repr(C)]
pub struct PlayerCharacter {
    _opaque: [u8; 0],
}

/// Opaque type for bhkCharacterController
#[repr(C)]
pub struct CharController {
    _opaque: [u8; 0],
}
