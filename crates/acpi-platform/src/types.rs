//! Concrete bindings for the interpreter's abstract host primitives.
//!
//! Each binding is total for one compilation: a target the table does not
//! cover fails to compile here, never at runtime. The bound lock and cache
//! types are owned by whichever host subsystem creates them; this module
//! only names them.

use static_assertions::const_assert;

/// Native machine word width in bits, matching the host pointer size.
///
/// Width-dependent arithmetic in the interpreter core keys off this value;
/// nothing may hard-code a width.
#[cfg(target_pointer_width = "64")]
pub const MACHINE_WIDTH: u32 = 64;
#[cfg(target_pointer_width = "32")]
pub const MACHINE_WIDTH: u32 = 32;
#[cfg(not(any(target_pointer_width = "64", target_pointer_width = "32")))]
core::compile_error!("no machine-width binding for this target's pointer width");

/// Unsigned integer of exactly [`MACHINE_WIDTH`] bits.
#[cfg(target_pointer_width = "64")]
pub type MachineWord = u64;
#[cfg(target_pointer_width = "32")]
pub type MachineWord = u32;

/// The toolchain performs 64-bit arithmetic in hardware.
///
/// Must track [`MACHINE_WIDTH`]: claiming native 64-bit math on a 32-bit
/// host makes the core drop its software fallback and miscompute silently,
/// while denying it on a 64-bit host buys pointless emulation. Both
/// derive from `target_pointer_width` here, and the assertion below keeps
/// any future decoupling honest.
pub const NATIVE_MATH64: bool = MACHINE_WIDTH == 64;

const_assert!(MACHINE_WIDTH == usize::BITS);
const_assert!(NATIVE_MATH64 == (MACHINE_WIDTH == 64));
const_assert!(core::mem::size_of::<MachineWord>() as u32 * 8 == MACHINE_WIDTH);

/// Saved interrupt state, as produced by [`lum_hal::interrupts::disable`].
pub type CpuFlags = u64;

/// Host spinlock the interpreter synchronizes with.
pub type OsSpinLock = lum_utils::Mutex<()>;

/// Borrowed lock handle; the creating subsystem owns the lock itself.
pub type OsLockHandle = &'static OsSpinLock;

/// Host slab cache backing interpreter object allocation.
pub type OsCache = lum_hal::ObjectCache;

/// Pointer-to-integer conversion.
///
/// Bit-identical to reading the address out of the pointer; no shortcuts.
#[inline]
pub fn to_integer<T>(ptr: *const T) -> usize {
    ptr as usize
}

/// Struct-field-offset binding.
pub use core::mem::offset_of;

/// String-to-integer binding, C `strtoul` rules.
pub use lum_utils::parse::{ParseError, parse_u64 as parse_integer};

/// Symbol-export binding.
///
/// This host has no module loader and places no visibility restriction on
/// kernel symbols, so the binding is empty; the invocation documents which
/// entry points cross the adaptation boundary.
#[macro_export]
macro_rules! export_symbol {
    ($name:path) => {};
}

// ============================================================================
// Unit Tests
// ============================================================================
