//! VTable hooks via pointer replacement
//!
//! Slot memory is reached through [`VTableMemory`] so the patch logic can be
//! exercised against an in-memory table in tests.

use std::ptr::NonNull;

/// Error type for hook operations
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Memory protection failed: {0}")]
    MemoryProtection(String),

    #[error("Virtual table not available: {0}")]
    TableUnavailable(&'static str),

    #[error("Original function at slot {0:#x} is null")]
    NullOriginal(usize),

    #[error("Write to slot {0:#x} did not take effect")]
    WriteNotApplied(usize),

    #[error("Hook already installed: {0}")]
    AlreadyInstalled(&'static str),
}

/// Raw access to the function pointer slots of one virtual table
pub trait VTableMemory {
    /// Read the pointer stored at `index`
    ///
    /// # Safety
    /// `index` must be within the table
    unsafe fn read_slot(&self, index: usize) -> *const ();

    /// Store `value` at `index`
    ///
    /// # Safety
    /// `index` must be within the table, and `value` must have the signature
    /// the host expects at that slot
    unsafe fn write_slot(&mut self, index: usize, value: *const ()) -> Result<(), HookError>;
}

/// A live virtual table in host memory
pub struct RawVTable {
    base: NonNull<*const ()>,
}

impl RawVTable {
    /// Wrap a host virtual table address
    ///
    /// # Safety
    /// `base` must be null or a valid virtual table for the rest of the process
    pub unsafe fn from_raw(base: *mut *const ()) -> Option<Self> {
        NonNull::new(base).map(|base| Self { base })
    }

    pub fn as_ptr(&self) -> *mut *const () {
        self.base.as_ptr()
    }
}

impl VTableMemory for RawVTable {
    unsafe fn read_slot(&self, index: usize) -> *const () {
        *self.base.as_ptr().add(index)
    }

    unsafe fn write_slot(&mut self, index: usize, value: *const ()) -> Result<(), HookError> {
        let slot = self.base.as_ptr().add(index);

        // Make the vtable slot writable
        let slot_addr = slot as *const u8;
        region::protect(
            slot_addr,
            std::mem::size_of::<usize>(),
            region::Protection::READ_WRITE,
        )
        .map_err(|e| HookError::MemoryProtection(e.to_string()))?;

        *slot = value;

        // Restore protection (vtables live in .rdata)
        let _ = region::protect(
            slot_addr,
            std::mem::size_of::<usize>(),
            region::Protection::READ,
        );

        Ok(())
    }
}

/// Replace the function pointer at `index` with `new_fn`
///
/// Returns the previous pointer for forwarding. Fails without writing when
/// the current slot is null, and fails when the write is not visible on
/// read-back; both mean the assumed layout does not match the running host.
///
/// # Safety
/// See [`VTableMemory::write_slot`]
pub unsafe fn patch_slot<T: VTableMemory + ?Sized>(
    table: &mut T,
    index: usize,
    new_fn: *const (),
) -> Result<*const (), HookError> {
    let original = table.read_slot(index);
    if original.is_null() {
        return Err(HookError::NullOriginal(index));
    }

    table.write_slot(index, new_fn)?;

    if table.read_slot(index) != new_fn {
        return Err(HookError::WriteNotApplied(index));
    }

    tracing::debug!(
        "Patched slot[{:#x}]: original={:x}, replacement={:x}",
        index,
        original as usize,
        new_fn as usize
    );

    Ok(original)
}
