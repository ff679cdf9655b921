#![cfg_attr(not(feature = "std"), no_std)]

//! Shared kernel utilities: the lock API and small pure helpers.

pub mod parse;

// TEAM_422: Re-export spin lock types as the kernel lock API
pub use spin::{Lazy, Once};
pub use spin::{Mutex, MutexGuard};
pub use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

// ============================================================================
// Unit Tests
// ============================================================================
