//! Hook sites
//!
//! Each site is a fixed (table, slot) contract with the targeted host build.

use skyparkour_sdk::offsets::{
    CAMERA_CAN_PROCESS, CAMERA_UPDATE, CLIP_ACTIVATE, CLIP_DEACTIVATE, CLIP_UPDATE,
};
use skyparkour_sdk::VTableId;

/// One interceptable virtual function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookSite {
    /// Name used in diagnostics
    pub name: &'static str,
    pub table: VTableId,
    pub slot: usize,
}

pub const TPP_CAN_PROCESS: HookSite = HookSite {
    name: "TPP CanProcess",
    table: VTableId::ThirdPersonInput,
    slot: CAMERA_CAN_PROCESS,
};

pub const TPP_UPDATE: HookSite = HookSite {
    name: "TPP Update",
    table: VTableId::ThirdPersonState,
    slot: CAMERA_UPDATE,
};

pub const FPP_CAN_PROCESS: HookSite = HookSite {
    name: "FPP CanProcess",
    table: VTableId::FirstPersonInput,
    slot: CAMERA_CAN_PROCESS,
};

pub const FPP_UPDATE: HookSite = HookSite {
    name: "FPP Update",
    table: VTableId::FirstPersonState,
    slot: CAMERA_UPDATE,
};

pub const CLIP_GENERATOR_ACTIVATE: HookSite = HookSite {
    name: "ClipGenerator Activate",
    table: VTableId::ClipGenerator,
    slot: CLIP_ACTIVATE,
};

pub const CLIP_GENERATOR_UPDATE: HookSite = HookSite {
    name: "ClipGenerator Update",
    table: VTableId::ClipGenerator,
    slot: CLIP_UPDATE,
};

pub const CLIP_GENERATOR_DEACTIVATE: HookSite = HookSite {
    name: "ClipGenerator Deactivate",
    table: VTableId::ClipGenerator,
    slot: CLIP_DEACTIVATE,
};

/// All sites in install order
pub const ALL_SITES: [HookSite; 7] = [
    TPP_CAN_PROCESS,
    TPP_UPDATE,
    FPP_CAN_PROCESS,
    FPP_UPDATE,
    CLIP_GENERATOR_ACTIVATE,
    CLIP_GENERATOR_UPDATE,
    CLIP_GENERATOR_DEACTIVATE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sites_are_distinct() {
        for (i, a) in ALL_SITES.iter().enumerate() {
            for b in &ALL_SITES[i + 1..] {
                assert!(
                    a.table != b.table || a.slot != b.slot,
                    "{} and {} share a slot",
                    a.name,
                    b.name
                );
            }
        }
    }
}
