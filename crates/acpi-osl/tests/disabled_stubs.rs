//! Disabled-build contract: every entry point resolves to its sentinel.
//!
//! Run with `--no-default-features`. No host backend exists here and none
//! is needed: linking this harness at all proves the stubs resolve the
//! core's imports without one.

#![cfg(not(feature = "acpi"))]

use core::ptr::NonNull;

use lum_acpi_osl as osl;
use lum_acpi_osl::registry::{ENTRY_POINTS, Sentinel};
use lum_acpi_osl::status::{OslError, OslResult};
use lum_acpi_osl::types::{DirCursor, OutputTarget, TableLocation, TableSignature};
use lum_acpi_platform::types::{OsCache, OsLockHandle};

static SEEDED_CACHE: OsCache = OsCache::new("stub-contract", 64);

fn cursor() -> DirCursor {
    DirCursor::new(NonNull::dangling())
}

fn classify<T>(result: OslResult<T>) -> Sentinel {
    match result {
        Ok(_) => Sentinel::Success,
        Err(OslError::NotConfigured) => Sentinel::NotConfigured,
        Err(other) => panic!("stub returned a non-sentinel status {other}"),
    }
}

/// The same fn-pointer bindings compile in the enabled harness; signatures
/// are the contract, not the realization.
#[test]
fn test_signatures_match_contract() {
    let _: fn() -> OslResult<()> = osl::initialize;
    let _: fn() -> OslResult<()> = osl::terminate;
    let _: fn(usize) -> Option<NonNull<u8>> = osl::allocate;
    let _: fn(usize) -> Option<NonNull<u8>> = osl::allocate_zeroed;
    let _: unsafe fn(NonNull<u8>) = osl::free;
    let _: fn(&'static OsCache) -> Option<NonNull<u8>> = osl::acquire_object;
    let _: fn() -> u64 = osl::thread_id;
    let _: fn() -> OslResult<OsLockHandle> = osl::create_lock;
    let _: fn(*const u8, usize) -> bool = osl::readable;
    let _: fn(*mut u8, usize) -> bool = osl::writable;
    let _: fn() -> OslResult<()> = osl::initialize_debugger;
    let _: fn() = osl::terminate_debugger;
    let _: fn(OutputTarget) = osl::redirect_output;
    let _: fn(TableSignature, u32) -> OslResult<TableLocation> = osl::table_by_name;
    let _: fn(u32) -> OslResult<TableLocation> = osl::table_by_index;
    let _: fn(u64) -> OslResult<TableLocation> = osl::table_by_address;
    let _: fn(&str, &str) -> Option<DirCursor> = osl::open_directory;
    let _: fn(DirCursor) -> Option<&'static str> = osl::next_filename;
    let _: fn(DirCursor) = osl::close_directory;
}

/// Call every stub and check the observed behavior against the registry
/// row by row; nothing may drift from the declared classification.
#[test]
fn test_every_stub_matches_registry() {
    let mut byte = 0u8;
    for entry in &ENTRY_POINTS {
        let observed = match entry.name {
            "initialize" => classify(osl::initialize()),
            "terminate" => classify(osl::terminate()),
            "allocate" => match osl::allocate(64) {
                None => Sentinel::Null,
                Some(_) => panic!("stub allocate produced memory"),
            },
            "allocate_zeroed" => match osl::allocate_zeroed(64) {
                None => Sentinel::Null,
                Some(_) => panic!("stub allocate_zeroed produced memory"),
            },
            "free" => {
                // the stub ignores the pointer; dangling is fine
                unsafe { osl::free(NonNull::dangling()) };
                Sentinel::Void
            }
            "acquire_object" => match osl::acquire_object(&SEEDED_CACHE) {
                None => Sentinel::Null,
                Some(_) => panic!("stub acquire_object produced an object"),
            },
            "thread_id" => {
                assert_eq!(osl::thread_id(), 0);
                Sentinel::Zero
            }
            "create_lock" => classify(osl::create_lock()),
            "readable" => {
                assert!(!osl::readable(&byte, 1));
                Sentinel::Zero
            }
            "writable" => {
                assert!(!osl::writable(&mut byte, 1));
                Sentinel::Zero
            }
            "initialize_debugger" => classify(osl::initialize_debugger()),
            "terminate_debugger" => {
                osl::terminate_debugger();
                Sentinel::Void
            }
            "redirect_output" => {
                osl::redirect_output(OutputTarget::Null);
                Sentinel::Void
            }
            "table_by_name" => classify(osl::table_by_name(*b"DSDT", 0)),
            "table_by_index" => classify(osl::table_by_index(0)),
            "table_by_address" => classify(osl::table_by_address(0x000F_EE00)),
            "open_directory" => match osl::open_directory("/", "*") {
                None => Sentinel::Null,
                Some(_) => panic!("stub open_directory produced a cursor"),
            },
            "next_filename" => match osl::next_filename(cursor()) {
                None => Sentinel::Null,
                Some(_) => panic!("stub next_filename produced a name"),
            },
            "close_directory" => {
                osl::close_directory(cursor());
                Sentinel::Void
            }
            other => panic!("registry names an entry point without a stub: {other}"),
        };
        assert_eq!(
            observed, entry.sentinel,
            "stub {} deviates from the registry",
            entry.name
        );
    }
}

/// Benign no-ops succeed, load-bearing services refuse: the partition must
/// not collapse to one uniform sentinel.
#[test]
fn test_benign_vs_not_configured() {
    assert_eq!(osl::initialize(), Ok(()));
    assert_eq!(osl::terminate(), Ok(()));
    assert_eq!(osl::thread_id(), 0);

    assert_eq!(osl::create_lock().map(|_| ()), Err(OslError::NotConfigured));
    assert_eq!(osl::initialize_debugger(), Err(OslError::NotConfigured));
    assert_eq!(
        osl::table_by_name(*b"DSDT", 0).map(|_| ()),
        Err(OslError::NotConfigured)
    );
}

/// Even a seeded, working cache yields nothing through the stub: the path
/// is severed, not failing.
#[test]
fn test_seeded_cache_still_refused() {
    let region = Box::leak(vec![0u8; 1024].into_boxed_slice());
    let added = unsafe {
        SEEDED_CACHE.grow(
            NonNull::new(region.as_mut_ptr()).expect("leaked region"),
            1024,
        )
    };
    assert!(added > 0);

    assert!(osl::acquire_object(&SEEDED_CACHE).is_none());
    assert_eq!(SEEDED_CACHE.in_use(), 0);
}
