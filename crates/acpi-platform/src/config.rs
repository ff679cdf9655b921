//! Build-time configuration surface.
//!
//! The host build system sets Cargo features; this module mirrors them as
//! one `const` struct so everything downstream reads a single resolved
//! fact instead of sprinkling `cfg!` checks. No field changes after
//! compilation.

use bitflags::bitflags;

/// Interpreter build facts for the current compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Interpreter subsystem compiled in. Off: the OSL crate resolves every
    /// entry point to a stub and no diagnostic or allocation path exists.
    pub subsystem: bool,
    /// Hardware-reduced platform: no fixed-hardware (PM1/GPE block)
    /// programming model.
    pub reduced_hardware: bool,
    /// Debugger/disassembler entry points are part of the build artifacts.
    pub debugger: bool,
    /// Extra mutex diagnostics in the interpreter.
    pub mutex_debug: bool,
    /// Poll general-purpose events instead of relying on the SCI.
    pub gpe_polling: bool,
    /// Keep loading tables whose package elements fail to resolve.
    pub ignore_package_resolution_errors: bool,
}

/// The one configuration this compilation was built with.
pub const BUILD: BuildConfig = BuildConfig {
    subsystem: cfg!(feature = "acpi"),
    reduced_hardware: cfg!(feature = "reduced-hardware"),
    debugger: cfg!(feature = "debugger"),
    mutex_debug: cfg!(feature = "debug"),
    // Firmware on supported boards signals GPEs unreliably; poll them.
    gpe_polling: true,
    // Vendor tables ship dangling package elements; a load must survive them.
    ignore_package_resolution_errors: true,
};

bitflags! {
    /// Interpreter diagnostic verbosity classes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DebugLevel: u32 {
        const INIT = 0x0000_0001;
        const DEBUG_OBJECT = 0x0000_0002;
        const INFO = 0x0000_0004;
        const REPAIR = 0x0000_0008;
        const TRACE_POINT = 0x0000_0010;
    }
}

/// Verbosity when the host does not override it: progress notes plus
/// firmware repairs, nothing chattier.
pub const DEBUG_DEFAULT: DebugLevel = DebugLevel::INFO.union(DebugLevel::REPAIR);

// ============================================================================
// Unit Tests
// ============================================================================
