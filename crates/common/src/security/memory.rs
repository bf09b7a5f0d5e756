//! Memory erasure and ordering utilities

use zeroize::Zeroize;

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Insert a full memory fence
    #[inline(always)]
    pub fn memory_fence_seq_cst() {
        fence(Ordering::SeqCst);
    }

    /// Execute a closure with memory barriers before and after
    #[inline(always)]
    pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
        compiler_fence_seq_cst();
        let result = f();
        compiler_fence_seq_cst();
        result
    }
}

/// Overwrite `bytes` with zeros in a way the optimizer cannot elide
///
/// `zeroize` performs volatile writes; the surrounding fences keep later
/// reads or frees from being reordered before the erasure.
#[inline]
pub fn secure_wipe(bytes: &mut [u8]) {
    barrier::with_barriers(|| bytes.zeroize());
    barrier::memory_fence_seq_cst();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_wipe() {
        let mut secret = [0xA5u8; 64];
        secure_wipe(&mut secret);
        assert!(secret.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_memory_barriers() {
        use barrier::*;

        let result = with_barriers(|| {
            let mut x = 42;
            x += 1;
            x
        });

        assert_eq!(result, 43);
    }
}
