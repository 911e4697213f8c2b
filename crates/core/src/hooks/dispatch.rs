//! Per-call interception decision

/// What a detour does with the original implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch<R> {
    /// Call the original and return its result unmodified
    Forward,
    /// Return this value without calling the original
    Override(R),
}

impl<R> Dispatch<R> {
    /// Resolve the decision, calling `original` only for [`Dispatch::Forward`]
    pub fn resolve(self, original: impl FnOnce() -> R) -> R {
        match self {
            Dispatch::Forward => original(),
            Dispatch::Override(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_calls_original() {
        let mut called = false;
        let result = Dispatch::Forward.resolve(|| {
            called = true;
            7
        });
        assert!(called);
        assert_eq!(result, 7);
    }

    #[test]
    fn test_override_skips_original() {
        let result = Dispatch::Override(false).resolve(|| -> bool { panic!("original must not run") });
        assert!(!result);
    }
}
