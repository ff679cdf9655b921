#![cfg_attr(not(feature = "std"), no_std)]

//! TEAM_425: OS-service layer for the portable ACPI interpreter core.
//!
//! The core calls a fixed set of entry points for host services: eight it
//! needs at runtime, four for the debugger/disassembler, seven for table
//! and namespace utilities. Each entry point has exactly two realizations
//! and this crate compiles exactly one of them, chosen by the `acpi`
//! feature:
//!
//! - `real`: thin delegation to the host backend behind the `HostOs`
//!   trait, reached through a link-time hook. A host that enables the
//!   subsystem must supply the whole backend; a missing hook is a link
//!   error, not a runtime one.
//! - `stub`: sentinel bodies for builds without the subsystem.
//!   Signatures are identical, so callers cannot tell the realizations
//!   apart except by return value; the sentinel per entry point is recorded
//!   in [`registry::ENTRY_POINTS`].
//!
//! Neither realization owns resources. In a disabled build the crate
//! contains no allocation path at all (the `mem` module is compiled out
//! with the subsystem) and emits no diagnostics.

pub mod registry;
pub mod status;
pub mod types;

#[cfg(feature = "acpi")]
pub mod host;
#[cfg(feature = "acpi")]
pub mod mem;

#[cfg(feature = "acpi")]
mod real;
#[cfg(feature = "acpi")]
pub use real::*;

#[cfg(not(feature = "acpi"))]
mod stub;
#[cfg(not(feature = "acpi"))]
pub use stub::*;
