//! Host API validation

use std::ptr::NonNull;

use skyparkour_sdk::{HostApi, VTableId, HOST_API_VERSION};

use crate::error::HostError;
use crate::globals::HostGlobals;

/// Validate the host API table handed over by the loader shim
///
/// Checks the layout version and size, and that every virtual table the
/// plugin patches was resolved.
///
/// # Safety
/// `api` must be null or point to a fully initialized `HostApi` that lives
/// for the rest of the process.
#[tracing::instrument(skip_all)]
pub unsafe fn load_host(api: *const HostApi) -> Result<HostGlobals, HostError> {
    let api_nn = NonNull::new(api as *mut HostApi).ok_or(HostError::NullTable)?;
    let table = &*api;

    if table.version != HOST_API_VERSION {
        return Err(HostError::VersionMismatch {
            expected: HOST_API_VERSION,
            found: table.version,
        });
    }

    let expected_size = std::mem::size_of::<HostApi>() as u32;
    if table.size != expected_size {
        return Err(HostError::SizeMismatch {
            expected: expected_size,
            found: table.size,
        });
    }

    for id in VTableId::ALL {
        let vtable = vtable_address(table, id);
        if vtable.is_null() {
            return Err(HostError::MissingVTable(id.name()));
        }
        tracing::info!("{}: {:p}", id.name(), vtable);
    }

    Ok(HostGlobals::new(api_nn))
}

/// Look up a resolved virtual table by identity
pub fn vtable_address(api: &HostApi, id: VTableId) -> *mut *const () {
    let tables = &api.vtables;
    match id {
        VTableId::ThirdPersonState => tables.third_person_state[0],
        VTableId::ThirdPersonInput => tables.third_person_state[1],
        VTableId::FirstPersonState => tables.first_person_state[0],
        VTableId::FirstPersonInput => tables.first_person_state[1],
        VTableId::ClipGenerator => tables.clip_generator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_table_rejected() {
        let result = unsafe { load_host(std::ptr::null()) };
        assert!(matches!(result, Err(HostError::NullTable)));
    }
}
