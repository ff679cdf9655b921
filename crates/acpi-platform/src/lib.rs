#![cfg_attr(not(feature = "std"), no_std)]

//! TEAM_424: Host adaptation for the portable ACPI interpreter core.
//!
//! Everything here resolves at compile time: feature selection
//! ([`config::BUILD`]), bindings from the core's abstract primitives to
//! LumenOS-native types ([`types`]), and the mapping from interpreter
//! message classes onto the kernel log pipeline ([`severity`], [`acpi_msg!`]).
//! The interpreter's OS-service entry points live in the companion OSL
//! crate; this crate only names types and facts, it never owns a lock,
//! cache, or allocation.

pub mod config;
pub mod diag;
pub mod severity;
pub mod types;

pub use config::{BUILD, BuildConfig, DEBUG_DEFAULT, DebugLevel};
pub use severity::Severity;

#[doc(hidden)]
pub use log as _log;
