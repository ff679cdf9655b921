#![cfg_attr(not(feature = "std"), no_std)]

//! Host-native hardware primitives.
//!
//! Root contains the pieces other subsystems bind against: interrupt-state
//! save/restore and the slab object cache. Anything architecture-specific
//! stays behind the module boundary so callers never branch on target.

pub mod cache;
pub mod interrupts;

pub use cache::ObjectCache;
