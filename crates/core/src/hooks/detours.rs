//! The replacement functions written into the host virtual tables
//!
//! Each detour computes its decision with the shared context borrowed, drops
//! the borrow, then forwards to the preserved original. When the context is
//! already held (the engine re-entered a hook), the enhancement is skipped.

use skyparkour_engine::{loader::vtable_address, try_host, HostClip, HostPlayer};
use skyparkour_sdk::{
    CameraStatePtr, FirstPersonState, HkbClipGenerator, HkbContext, InputEvent, ThirdPersonState,
    VTableId,
};

use super::dispatch::Dispatch;
use super::registry::{Detours, HookTables, Originals};
use super::vtable::{RawVTable, VTableMemory};
use crate::camera::{self, CameraView};
use crate::clip;
use crate::config;
use crate::context::try_with_context;

/// Preserved originals for every hook site
pub static ORIGINALS: Originals = Originals::new();

pub const DETOURS: Detours = Detours {
    tpp_can_process,
    tpp_update,
    fpp_can_process,
    fpp_update,
    clip_activate,
    clip_update,
    clip_deactivate,
};

fn can_process_decision() -> Dispatch<bool> {
    let settings = config::settings();
    try_with_context(|ctx| camera::can_process(ctx, &settings)).unwrap_or(Dispatch::Forward)
}

fn camera_update(view: CameraView) {
    let Some(host) = try_host() else {
        return;
    };
    let Some(mut player) = HostPlayer::current(host) else {
        return;
    };
    let frame_delta = host.seconds_since_last_frame();
    let settings = config::settings();
    try_with_context(|ctx| camera::update(ctx, &settings, view, &mut player, frame_delta));
}

unsafe extern "system" fn tpp_can_process(this: *mut ThirdPersonState, event: *mut InputEvent) -> bool {
    can_process_decision().resolve(|| match ORIGINALS.tpp_can_process.get() {
        Some(original) => original(this, event),
        None => false,
    })
}

unsafe extern "system" fn tpp_update(this: *mut ThirdPersonState, next_state: *mut CameraStatePtr) {
    camera_update(CameraView::ThirdPerson);
    if let Some(original) = ORIGINALS.tpp_update.get() {
        original(this, next_state);
    }
}

unsafe extern "system" fn fpp_can_process(this: *mut FirstPersonState, event: *mut InputEvent) -> bool {
    can_process_decision().resolve(|| match ORIGINALS.fpp_can_process.get() {
        Some(original) => original(this, event),
        None => false,
    })
}

unsafe extern "system" fn fpp_update(this: *mut FirstPersonState, next_state: *mut CameraStatePtr) {
    camera_update(CameraView::FirstPerson);
    if let Some(original) = ORIGINALS.fpp_update.get() {
        original(this, next_state);
    }
}

unsafe extern "system" fn clip_activate(this: *mut HkbClipGenerator, context: *const HkbContext) {
    // The trigger array is only populated once the original has run
    if let Some(original) = ORIGINALS.clip_activate.get() {
        original(this, context);
    }

    let Some(host) = try_host() else {
        return;
    };
    let Some(source) = HostClip::new(host, this, context) else {
        return;
    };
    let settings = config::settings();
    try_with_context(|ctx| clip::activate(ctx, &settings, &source));
}

unsafe extern "system" fn clip_update(
    this: *mut HkbClipGenerator,
    context: *const HkbContext,
    timestep: f32,
) {
    if let Some(host) = try_host() {
        if let Some(mut player) = HostPlayer::current(host) {
            try_with_context(|ctx| clip::update(ctx, &mut player, timestep));
        }
    }

    if let Some(original) = ORIGINALS.clip_update.get() {
        original(this, context, timestep);
    }
}

unsafe extern "system" fn clip_deactivate(this: *mut HkbClipGenerator, context: *const HkbContext) {
    try_with_context(clip::deactivate);

    if let Some(original) = ORIGINALS.clip_deactivate.get() {
        original(this, context);
    }
}

/// Live host tables, resolved from the host API
struct HostTables {
    tables: Vec<(VTableId, RawVTable)>,
}

impl HookTables for HostTables {
    fn table(&mut self, id: VTableId) -> Option<&mut dyn VTableMemory> {
        self.tables
            .iter_mut()
            .find(|(table_id, _)| *table_id == id)
            .map(|(_, table)| table as &mut dyn VTableMemory)
    }
}

/// Install all seven hooks into the live host tables
///
/// Requires the host API to be initialized. Returns `false` if any site
/// failed; the sites that did install stay installed.
#[tracing::instrument]
pub fn install_hooks() -> bool {
    let Some(host) = try_host() else {
        tracing::error!("Host API not initialized, cannot install hooks");
        return false;
    };

    let api = host.api();
    let tables = VTableId::ALL
        .into_iter()
        .filter_map(|id| {
            // SAFETY: non-null addresses are the host's resolved vtables, validated at load
            unsafe { RawVTable::from_raw(vtable_address(api, id)) }.map(|table| (id, table))
        })
        .collect();

    ORIGINALS.install_all(&mut HostTables { tables }, &DETOURS)
}
