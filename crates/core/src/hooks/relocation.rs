//! Preserved original function pointers
//!
//! One [`Relocation`] per intercepted site. Written once at install time,
//! read on every detour invocation to forward the call.

use std::sync::OnceLock;

use super::vtable::HookError;

/// Function pointer types that can live in a virtual table slot
///
/// # Safety
/// Implementors must be plain pointer-sized function pointers.
pub unsafe trait FnPointer: Copy + Send + Sync + 'static {
    fn addr(self) -> *const ();

    /// # Safety
    /// `addr` must point to a function with exactly this signature
    unsafe fn from_addr(addr: *const ()) -> Self;
}

macro_rules! impl_fn_pointer {
    ($($arg:ident),*) => {
        unsafe impl<R: 'static, $($arg: 'static),*> FnPointer for unsafe extern "system" fn($($arg),*) -> R {
            fn addr(self) -> *const () {
                self as *const ()
            }

            unsafe fn from_addr(addr: *const ()) -> Self {
                std::mem::transmute_copy::<*const (), Self>(&addr)
            }
        }
    };
}

impl_fn_pointer!(A, B);
impl_fn_pointer!(A, B, C);

/// Slot holding the original implementation of one hooked function
pub struct Relocation<F> {
    name: &'static str,
    original: OnceLock<F>,
}

impl<F: FnPointer> Relocation<F> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            original: OnceLock::new(),
        }
    }

    /// Record the original pointer. Only the first call succeeds.
    pub fn set(&self, original: F) -> Result<(), HookError> {
        self.original
            .set(original)
            .map_err(|_| HookError::AlreadyInstalled(self.name))
    }

    /// The original implementation, if the hook was installed
    pub fn get(&self) -> Option<F> {
        self.original.get().copied()
    }

    pub fn is_installed(&self) -> bool {
        self.original.get().is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
