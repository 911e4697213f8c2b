//! Virtual table identities and slot indices
//!
//! These are ABI facts about the single host build this plugin targets.
//! A host update that moves any of these breaks installation, which is
//! detected and logged at install time rather than crashing.

/// Identifies one of the host virtual tables the plugin patches.
///
/// Camera states use multiple inheritance: table 0 belongs to the
/// `TESCameraState` base and table 1 to the `PlayerInputHandler` base.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VTableId {
    /// `VTABLE_ThirdPersonState[0]` (TESCameraState)
    ThirdPersonState = 0,
    /// `VTABLE_ThirdPersonState[1]` (PlayerInputHandler)
    ThirdPersonInput = 1,
    /// `VTABLE_FirstPersonState[0]` (TESCameraState)
    FirstPersonState = 2,
    /// `VTABLE_FirstPersonState[1]` (PlayerInputHandler)
    FirstPersonInput = 3,
    /// `VTABLE_hkbClipGenerator[0]`
    ClipGenerator = 4,
}

impl VTableId {
    pub const ALL: [VTableId; 5] = [
        VTableId::ThirdPersonState,
        VTableId::ThirdPersonInput,
        VTableId::FirstPersonState,
        VTableId::FirstPersonInput,
        VTableId::ClipGenerator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VTableId::ThirdPersonState => "ThirdPersonState[0]",
            VTableId::ThirdPersonInput => "ThirdPersonState[1]",
            VTableId::FirstPersonState => "FirstPersonState[0]",
            VTableId::FirstPersonInput => "FirstPersonState[1]",
            VTableId::ClipGenerator => "hkbClipGenerator[0]",
        }
    }
}

/// PlayerInputHandler::CanProcess
pub const CAMERA_CAN_PROCESS: usize = 0x1;

/// TESCameraState::Update
pub const CAMERA_UPDATE: usize = 0x3;

/// hkbClipGenerator::Activate
pub const CLIP_ACTIVATE: usize = 0x4;

/// hkbClipGenerator::Update
pub const CLIP_UPDATE: usize = 0x5;

/// hkbClipGenerator::Deactivate
pub const CLIP_DEACTIVATE: usize = 0x7;
