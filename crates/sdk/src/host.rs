//! Host API table
//!
//! The native loader shim fills a [`HostApi`] and passes a pointer to it into
//! `skyparkour_plugin_load`. Every function pointer must be set; the table
//! itself must outlive the plugin.

use std::ffi::c_char;

use crate::interfaces::{CharController, HkbClipGenerator, HkbContext, PlayerCharacter};
use crate::math::NiPoint3;

/// Version of the [`HostApi`] layout. Bumped on any field change.
pub const HOST_API_VERSION: u32 = 2;

/// Raw virtual table pointer
pub type VTablePtr = *mut *const ();

/// Resolved virtual table addresses for the targeted host build
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HostVTables {
    /// `[TESCameraState, PlayerInputHandler]`
    pub third_person_state: [VTablePtr; 2],
    /// `[TESCameraState, PlayerInputHandler]`
    pub first_person_state: [VTablePtr; 2],
    pub clip_generator: VTablePtr,
}

/// One entry of a clip's trigger array
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipTrigger {
    /// Seconds since clip start
    pub local_time: f32,
    /// Index into the behavior graph's event name table
    pub event_id: u32,
    pub is_annotation: bool,
}

/// Arguments for `ObjectReference.TranslateTo`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TranslateArgs {
    pub position: NiPoint3,
    pub rotation: NiPoint3,
    pub speed: f32,
    pub max_rotation_speed: f32,
}

/// Function table provided by the native loader shim
#[repr(C)]
pub struct HostApi {
    /// Must equal [`HOST_API_VERSION`]
    pub version: u32,
    /// `size_of::<HostApi>()` as seen by the shim
    pub size: u32,

    pub vtables: HostVTables,

    // === Frame ===
    pub seconds_since_last_frame: unsafe extern "C" fn() -> f32,

    // === Player ===
    pub player: unsafe extern "C" fn() -> *mut PlayerCharacter,
    pub get_position: unsafe extern "C" fn(player: *mut PlayerCharacter, out: *mut NiPoint3),
    /// Absolute teleport-style set (updates the character controller too)
    pub set_position: unsafe extern "C" fn(player: *mut PlayerCharacter, pos: *const NiPoint3),
    pub get_angle: unsafe extern "C" fn(player: *mut PlayerCharacter, out: *mut NiPoint3),
    pub set_angle_x: unsafe extern "C" fn(player: *mut PlayerCharacter, pitch: f32),
    pub get_scale: unsafe extern "C" fn(player: *mut PlayerCharacter) -> f32,
    pub is_moving: unsafe extern "C" fn(player: *mut PlayerCharacter) -> bool,
    pub is_swimming: unsafe extern "C" fn(player: *mut PlayerCharacter) -> bool,
    pub is_third_person: unsafe extern "C" fn() -> bool,
    pub set_graph_variable_int:
        unsafe extern "C" fn(player: *mut PlayerCharacter, name: *const c_char, value: i32) -> bool,
    pub notify_animation_graph:
        unsafe extern "C" fn(player: *mut PlayerCharacter, event: *const c_char) -> bool,
    pub toggle_controls: unsafe extern "C" fn(controls: u32, enable: bool),
    pub get_stamina: unsafe extern "C" fn(player: *mut PlayerCharacter) -> f32,
    pub damage_stamina: unsafe extern "C" fn(player: *mut PlayerCharacter, amount: f32),
    pub flash_stamina_meter: unsafe extern "C" fn(player: *mut PlayerCharacter),

    // === Character controller ===
    pub char_controller: unsafe extern "C" fn(player: *mut PlayerCharacter) -> *mut CharController,
    /// Resets `CHARACTER_FLAGS::kSupport`
    pub controller_clear_support: unsafe extern "C" fn(ctrl: *mut CharController),
    pub controller_pitch: unsafe extern "C" fn(ctrl: *mut CharController) -> f32,
    pub controller_set_pitch: unsafe extern "C" fn(ctrl: *mut CharController, pitch: f32),
    /// Sets `context.currentState = kInAir`
    pub controller_set_in_air: unsafe extern "C" fn(ctrl: *mut CharController),
    pub controller_fall_time: unsafe extern "C" fn(ctrl: *mut CharController) -> f32,

    // === Behavior graph ===
    pub clip_animation_name: unsafe extern "C" fn(clip: *mut HkbClipGenerator) -> *const c_char,
    /// Returns 0 when the clip has no trigger array
    pub clip_trigger_count: unsafe extern "C" fn(clip: *mut HkbClipGenerator) -> u32,
    pub clip_trigger:
        unsafe extern "C" fn(clip: *mut HkbClipGenerator, index: u32, out: *mut ClipTrigger) -> bool,
    /// Returns null when the behavior graph or its string data is unavailable
    pub context_event_name:
        unsafe extern "C" fn(context: *const HkbContext, event_id: u32) -> *const c_char,

    // === Scripting VM ===
    /// Returns 0 (the empty handle) when the player has no bound handle
    pub player_script_handle: unsafe extern "C" fn() -> u64,
    pub dispatch_translate_to: unsafe extern "C" fn(handle: u64, args: *const TranslateArgs) -> bool,
    pub dispatch_stop_translation: unsafe extern "C" fn(handle: u64) -> bool,

    // === Geometry probes ===
    /// Returns a ledge type code, writes the ledge point on success
    pub ledge_check: unsafe extern "C" fn(
        ledge_point: *mut NiPoint3,
        check_dir: *const NiPoint3,
        min_ledge_height: f32,
        max_ledge_height: f32,
    ) -> i32,
    /// Returns a ledge type code, writes the vault point on success
    pub vault_check: unsafe extern "C" fn(
        ledge_point: *mut NiPoint3,
        check_dir: *const NiPoint3,
        vault_length: f32,
        max_elevation_increase: f32,
        min_vault_height: f32,
        max_vault_height: f32,
    ) -> i32,
    pub water_height: unsafe extern "C" fn(at: *const NiPoint3, out: *mut f32) -> bool,
    pub player_dir_flat: unsafe extern "C" fn(player: *mut PlayerCharacter, out: *mut NiPoint3),
    /// Whether the player is in a state that allows parkour at all
    /// (not in menus, furniture, combat animations, ...)
    pub is_parkour_allowed: unsafe extern "C" fn() -> bool,

    // === Ledge indicator ===
    /// Moves the marker of the given style to `at` (into the player's cell
    /// if needed) and turns it to `yaw`. The marker of the other style is
    /// disabled.
    pub indicator_place: unsafe extern "C" fn(style: IndicatorStyle, at: *const NiPoint3, yaw: f32),
    /// Enables or disables the marker placed last
    pub indicator_set_enabled: unsafe extern "C" fn(enabled: bool),
}

/// Which ledge marker to show
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorStyle {
    /// Parkour is possible
    Ready = 0,
    /// Not enough stamina for the selected action
    LowStamina = 1,
}
