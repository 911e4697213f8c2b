//! Hook install sequence
//!
//! Installs every site once, at plugin load, before any gameplay frame runs.
//! Failures are independent per site; the aggregate is the logical AND of
//! every site's result. There is no uninstall path.

use std::sync::atomic::{AtomicBool, Ordering};

use skyparkour_sdk::{
    CameraUpdateFn, CanProcessFn, ClipActivateFn, ClipDeactivateFn, ClipUpdateFn,
    FirstPersonState, ThirdPersonState, VTableId,
};

use super::relocation::{FnPointer, Relocation};
use super::site::{self, HookSite};
use super::vtable::{patch_slot, HookError, VTableMemory};

/// Resolves a table identity to patchable memory
pub trait HookTables {
    fn table(&mut self, id: VTableId) -> Option<&mut dyn VTableMemory>;
}

/// Replacement functions, one per site
#[derive(Clone, Copy)]
pub struct Detours {
    pub tpp_can_process: CanProcessFn<ThirdPersonState>,
    pub tpp_update: CameraUpdateFn<ThirdPersonState>,
    pub fpp_can_process: CanProcessFn<FirstPersonState>,
    pub fpp_update: CameraUpdateFn<FirstPersonState>,
    pub clip_activate: ClipActivateFn,
    pub clip_update: ClipUpdateFn,
    pub clip_deactivate: ClipDeactivateFn,
}

/// Preserved originals, one relocation per site
pub struct Originals {
    pub tpp_can_process: Relocation<CanProcessFn<ThirdPersonState>>,
    pub tpp_update: Relocation<CameraUpdateFn<ThirdPersonState>>,
    pub fpp_can_process: Relocation<CanProcessFn<FirstPersonState>>,
    pub fpp_update: Relocation<CameraUpdateFn<FirstPersonState>>,
    pub clip_activate: Relocation<ClipActivateFn>,
    pub clip_update: Relocation<ClipUpdateFn>,
    pub clip_deactivate: Relocation<ClipDeactivateFn>,
    attempted: AtomicBool,
}

impl Default for Originals {
    fn default() -> Self {
        Self::new()
    }
}

impl Originals {
    pub const fn new() -> Self {
        Self {
            tpp_can_process: Relocation::new(site::TPP_CAN_PROCESS.name),
            tpp_update: Relocation::new(site::TPP_UPDATE.name),
            fpp_can_process: Relocation::new(site::FPP_CAN_PROCESS.name),
            fpp_update: Relocation::new(site::FPP_UPDATE.name),
            clip_activate: Relocation::new(site::CLIP_GENERATOR_ACTIVATE.name),
            clip_update: Relocation::new(site::CLIP_GENERATOR_UPDATE.name),
            clip_deactivate: Relocation::new(site::CLIP_GENERATOR_DEACTIVATE.name),
            attempted: AtomicBool::new(false),
        }
    }

    /// Whether `install_all` has already run
    pub fn install_attempted(&self) -> bool {
        self.attempted.load(Ordering::Acquire)
    }

    /// Install every site
    ///
    /// Returns `true` only if all seven sites installed. May be called once;
    /// later calls are rejected without touching any table.
    #[tracing::instrument(skip_all)]
    pub fn install_all(&self, tables: &mut dyn HookTables, detours: &Detours) -> bool {
        if self.attempted.swap(true, Ordering::AcqRel) {
            tracing::error!("Hooks already installed, refusing to patch twice");
            return false;
        }

        self.install_camera_hooks(tables, detours) & self.install_clip_hooks(tables, detours)
    }

    fn install_camera_hooks(&self, tables: &mut dyn HookTables, detours: &Detours) -> bool {
        let mut res = true;

        res &= install_site(tables, &site::TPP_CAN_PROCESS, detours.tpp_can_process, &self.tpp_can_process);
        res &= install_site(tables, &site::TPP_UPDATE, detours.tpp_update, &self.tpp_update);

        res &= install_site(tables, &site::FPP_CAN_PROCESS, detours.fpp_can_process, &self.fpp_can_process);
        res &= install_site(tables, &site::FPP_UPDATE, detours.fpp_update, &self.fpp_update);

        res
    }

    fn install_clip_hooks(&self, tables: &mut dyn HookTables, detours: &Detours) -> bool {
        let mut res = true;

        res &= install_site(tables, &site::CLIP_GENERATOR_ACTIVATE, detours.clip_activate, &self.clip_activate);
        res &= install_site(tables, &site::CLIP_GENERATOR_UPDATE, detours.clip_update, &self.clip_update);
        res &= install_site(tables, &site::CLIP_GENERATOR_DEACTIVATE, detours.clip_deactivate, &self.clip_deactivate);

        res
    }
}

/// Patch one site and record its original
fn install_site<F: FnPointer>(
    tables: &mut dyn HookTables,
    site: &HookSite,
    detour: F,
    relocation: &Relocation<F>,
) -> bool {
    let result = match tables.table(site.table) {
        Some(table) => unsafe { patch_slot(table, site.slot, detour.addr()) },
        None => Err(HookError::TableUnavailable(site.table.name())),
    };

    let installed = result.and_then(|original| relocation.set(unsafe { F::from_addr(original) }));

    match installed {
        Ok(()) => {
            tracing::info!("{} hook installed at {}[{:#x}]", site.name, site.table.name(), site.slot);
            true
        }
        Err(e) => {
            tracing::error!(critical = true, hook = site.name, "{} Hook Not Installed: {}", site.name, e);
            false
        }
    }
}
