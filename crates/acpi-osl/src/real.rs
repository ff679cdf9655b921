//! Real realization: thin delegation to the host backend.
//!
//! Nothing here has behavior of its own; each entry point forwards to the
//! [`HostOs`] implementation the kernel registered by defining the
//! `lum_acpi_host` symbol. Enabling the subsystem without defining it
//! fails at link time: a host that enables the subsystem supplies all
//! of it.

use core::ptr::NonNull;

use lum_acpi_platform::export_symbol;
use lum_acpi_platform::types::{OsCache, OsLockHandle};

use crate::host::HostOs;
use crate::status::OslResult;
use crate::types::{DirCursor, OutputTarget, TableLocation, TableSignature};

unsafe extern "Rust" {
    /// Defined by the host kernel; returns its backend.
    safe fn lum_acpi_host() -> &'static dyn HostOs;
}

#[inline]
fn host() -> &'static dyn HostOs {
    lum_acpi_host()
}

pub fn initialize() -> OslResult<()> {
    host().initialize()
}

pub fn terminate() -> OslResult<()> {
    host().terminate()
}

pub fn allocate(size: usize) -> Option<NonNull<u8>> {
    host().allocate(size)
}

pub fn allocate_zeroed(size: usize) -> Option<NonNull<u8>> {
    host().allocate_zeroed(size)
}

/// # Safety
/// `ptr` must come from [`allocate`]/[`allocate_zeroed`] and must not be
/// freed twice or used afterwards.
pub unsafe fn free(ptr: NonNull<u8>) {
    unsafe { host().free(ptr) }
}

pub fn acquire_object(cache: &'static OsCache) -> Option<NonNull<u8>> {
    host().acquire_object(cache)
}

pub fn thread_id() -> u64 {
    host().thread_id()
}

pub fn create_lock() -> OslResult<OsLockHandle> {
    host().create_lock()
}

pub fn readable(start: *const u8, len: usize) -> bool {
    host().readable(start, len)
}

pub fn writable(start: *mut u8, len: usize) -> bool {
    host().writable(start, len)
}

pub fn initialize_debugger() -> OslResult<()> {
    host().initialize_debugger()
}

pub fn terminate_debugger() {
    host().terminate_debugger();
}

pub fn redirect_output(target: OutputTarget) {
    host().redirect_output(target);
}

pub fn table_by_name(signature: TableSignature, instance: u32) -> OslResult<TableLocation> {
    host().table_by_name(signature, instance)
}

pub fn table_by_index(index: u32) -> OslResult<TableLocation> {
    host().table_by_index(index)
}

pub fn table_by_address(physical: u64) -> OslResult<TableLocation> {
    host().table_by_address(physical)
}

pub fn open_directory(path: &str, pattern: &str) -> Option<DirCursor> {
    host().open_directory(path, pattern)
}

pub fn next_filename(cursor: DirCursor) -> Option<&'static str> {
    host().next_filename(cursor)
}

pub fn close_directory(cursor: DirCursor) {
    host().close_directory(cursor);
}

export_symbol!(initialize);
export_symbol!(terminate);
export_symbol!(allocate);
export_symbol!(allocate_zeroed);
export_symbol!(free);
export_symbol!(acquire_object);
export_symbol!(thread_id);
export_symbol!(create_lock);
