//! Stub realization: the subsystem is compiled out.
//!
//! Same signatures as the real module, bodies reduced to the sentinel
//! recorded in [`crate::registry`]. No stub touches the host backend,
//! allocates, or formats a diagnostic; a caller that checks status sees
//! `NotConfigured` where the service is load-bearing and success where
//! absence is harmless.

use core::ptr::NonNull;

use lum_acpi_platform::types::{OsCache, OsLockHandle};

use crate::status::{OslError, OslResult};
use crate::types::{DirCursor, OutputTarget, TableLocation, TableSignature};

// --- core runtime ---

pub fn initialize() -> OslResult<()> {
    Ok(()) // nothing to bring up
}

pub fn terminate() -> OslResult<()> {
    Ok(()) // nothing to tear down
}

pub fn allocate(_size: usize) -> Option<NonNull<u8>> {
    None
}

pub fn allocate_zeroed(_size: usize) -> Option<NonNull<u8>> {
    None
}

/// # Safety
/// Trivially safe: the stub ignores `ptr`. The contract matches the real
/// realization so call sites compile identically against either.
pub unsafe fn free(_ptr: NonNull<u8>) {}

pub fn acquire_object(_cache: &'static OsCache) -> Option<NonNull<u8>> {
    None
}

pub fn thread_id() -> u64 {
    0
}

pub fn create_lock() -> OslResult<OsLockHandle> {
    Err(OslError::NotConfigured)
}

// --- debugger/disassembler ---

pub fn readable(_start: *const u8, _len: usize) -> bool {
    false
}

pub fn writable(_start: *mut u8, _len: usize) -> bool {
    false
}

pub fn initialize_debugger() -> OslResult<()> {
    Err(OslError::NotConfigured)
}

pub fn terminate_debugger() {}

// --- utilities ---

pub fn redirect_output(_target: OutputTarget) {}

pub fn table_by_name(_signature: TableSignature, _instance: u32) -> OslResult<TableLocation> {
    Err(OslError::NotConfigured)
}

pub fn table_by_index(_index: u32) -> OslResult<TableLocation> {
    Err(OslError::NotConfigured)
}

pub fn table_by_address(_physical: u64) -> OslResult<TableLocation> {
    Err(OslError::NotConfigured)
}

pub fn open_directory(_path: &str, _pattern: &str) -> Option<DirCursor> {
    None
}

pub fn next_filename(_cursor: DirCursor) -> Option<&'static str> {
    None
}

pub fn close_directory(_cursor: DirCursor) {}
