//! TEAM_423: Interrupt state save/restore with mock support.
//!
//! The saved state is an opaque `u64` flags word: callers pass it back to
//! [`restore`] and never inspect it. The `std` build swaps the inline asm
//! for an atomic mock so lock and cache code can be unit tested in
//! user space.

// =============================================================================
// Real implementation for bare metal (no_std)
// =============================================================================

#[cfg(not(feature = "std"))]
mod real_impl {
    #[cfg(target_arch = "x86_64")]
    pub fn disable() -> u64 {
        let flags: u64;
        // SAFETY: reading RFLAGS and clearing IF is always permitted at CPL0
        unsafe {
            core::arch::asm!("pushfq", "pop {}", "cli", out(reg) flags, options(nomem));
        }
        flags
    }

    #[cfg(target_arch = "x86_64")]
    pub fn restore(flags: u64) {
        // Only re-enable if IF was set when the state was saved
        if flags & 0x200 != 0 {
            // SAFETY: caller obtained `flags` from `disable`, so enabling
            // returns the CPU to its prior state
            unsafe { core::arch::asm!("sti", options(nomem, nostack)) };
        }
    }

    #[cfg(target_arch = "x86_64")]
    pub fn is_enabled() -> bool {
        let flags: u64;
        // SAFETY: reading RFLAGS has no side effects
        unsafe {
            core::arch::asm!("pushfq", "pop {}", out(reg) flags, options(nomem, preserves_flags));
        }
        flags & 0x200 != 0
    }

    #[cfg(target_arch = "aarch64")]
    pub fn disable() -> u64 {
        let daif: u64;
        // SAFETY: DAIF reads and IRQ masking are EL1 operations
        unsafe {
            core::arch::asm!("mrs {}, daif", "msr daifset, #2", out(reg) daif, options(nomem, nostack));
        }
        daif
    }

    #[cfg(target_arch = "aarch64")]
    pub fn restore(daif: u64) {
        // SAFETY: caller obtained `daif` from `disable`
        unsafe { core::arch::asm!("msr daif, {}", in(reg) daif, options(nomem, nostack)) };
    }

    #[cfg(target_arch = "aarch64")]
    pub fn is_enabled() -> bool {
        let daif: u64;
        // SAFETY: DAIF reads have no side effects
        unsafe {
            core::arch::asm!("mrs {}, daif", out(reg) daif, options(nomem, nostack, preserves_flags));
        }
        daif & (1 << 7) == 0
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub fn disable() -> u64 {
        0
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub fn restore(state: u64) {
        let _ = state;
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    pub fn is_enabled() -> bool {
        true
    }
}

// =============================================================================
// Mock implementation for std feature (user-space tests)
// =============================================================================

#[cfg(feature = "std")]
mod mock_impl {
    use std::sync::atomic::{AtomicBool, Ordering};

    static ENABLED: AtomicBool = AtomicBool::new(true);

    pub fn disable() -> u64 {
        u64::from(ENABLED.swap(false, Ordering::SeqCst))
    }

    pub fn restore(state: u64) {
        ENABLED.store(state != 0, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        ENABLED.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Public API
// =============================================================================

#[cfg(not(feature = "std"))]
pub use real_impl::{disable, is_enabled, restore};

#[cfg(feature = "std")]
pub use mock_impl::{disable, is_enabled, restore};

// ============================================================================
// Unit Tests
// ============================================================================
