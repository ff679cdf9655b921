//! The host backend interface for an enabled subsystem.

use core::ptr::NonNull;

use lum_acpi_platform::types::{OsCache, OsLockHandle};

use crate::status::OslResult;
use crate::types::{DirCursor, OutputTarget, TableLocation, TableSignature};

/// OS services the kernel supplies to the interpreter core.
///
/// The implementation is handed over through the `lum_acpi_host` symbol
/// (see the crate docs); every method mirrors one entry point and carries
/// the same contract. All resources handed out (allocations, lock handles,
/// directory cursors, table mappings) remain owned by the host subsystem
/// that produced them.
pub trait HostOs: Sync {
    /// One-time bring-up before the core touches any other service.
    fn initialize(&self) -> OslResult<()>;

    /// Teardown counterpart of [`Self::initialize`].
    fn terminate(&self) -> OslResult<()>;

    /// Allocate `size` bytes from the kernel heap.
    fn allocate(&self, size: usize) -> Option<NonNull<u8>>;

    /// Allocate `size` zeroed bytes from the kernel heap.
    fn allocate_zeroed(&self, size: usize) -> Option<NonNull<u8>>;

    /// Return an allocation to the kernel heap.
    ///
    /// # Safety
    /// `ptr` must come from [`Self::allocate`]/[`Self::allocate_zeroed`] on
    /// this host and must not be freed twice or used afterwards.
    unsafe fn free(&self, ptr: NonNull<u8>);

    /// Take a zeroed object from a host slab cache.
    fn acquire_object(&self, cache: &'static OsCache) -> Option<NonNull<u8>>;

    /// Identity of the executing thread, for interpreter mutex tracking and
    /// diagnostics.
    fn thread_id(&self) -> u64;

    /// Create a spinlock for the core. The host owns the lock storage.
    fn create_lock(&self) -> OslResult<OsLockHandle>;

    /// Whether `len` bytes at `start` are safe to read.
    fn readable(&self, start: *const u8, len: usize) -> bool;

    /// Whether `len` bytes at `start` are safe to write.
    fn writable(&self, start: *mut u8, len: usize) -> bool;

    /// Bring up the debugger console session.
    fn initialize_debugger(&self) -> OslResult<()>;

    /// Tear down the debugger console session.
    fn terminate_debugger(&self);

    /// Switch interpreter console output to another sink.
    fn redirect_output(&self, target: OutputTarget);

    /// Find the `instance`-th table with the given signature.
    fn table_by_name(&self, signature: TableSignature, instance: u32) -> OslResult<TableLocation>;

    /// Find a table by its load order index.
    fn table_by_index(&self, index: u32) -> OslResult<TableLocation>;

    /// Find the table mapped at a physical address.
    fn table_by_address(&self, physical: u64) -> OslResult<TableLocation>;

    /// Start a directory walk over `path` entries matching `pattern`.
    fn open_directory(&self, path: &str, pattern: &str) -> Option<DirCursor>;

    /// Next matching name, or `None` when the walk is done. The name is
    /// host-owned and stays valid until the cursor is closed.
    fn next_filename(&self, cursor: DirCursor) -> Option<&'static str>;

    /// Finish a directory walk and release the cursor.
    fn close_directory(&self, cursor: DirCursor);
}
