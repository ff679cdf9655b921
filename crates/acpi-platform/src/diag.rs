//! Diagnostic emission for the interpreter subsystem.
//!
//! [`acpi_msg!`] prepends the class prefix from [`crate::Severity`] and
//! routes the message through the kernel `log` facade. When the subsystem
//! is compiled out the macro expands to nothing at all: arguments are never
//! evaluated and no message is formatted or stored.

/// Emit one interpreter diagnostic at its mapped log level.
///
/// First argument is a [`crate::Severity`]; the rest is a format string and
/// arguments as for `log!`.
#[cfg(feature = "acpi")]
#[macro_export]
macro_rules! acpi_msg {
    ($sev:expr, $($arg:tt)*) => {{
        let sev: $crate::Severity = $sev;
        $crate::_log::log!(
            sev.level(),
            "{}{}",
            sev.prefix(),
            ::core::format_args!($($arg)*)
        );
    }};
}

/// Subsystem compiled out: diagnostics are removed, not filtered.
#[cfg(not(feature = "acpi"))]
#[macro_export]
macro_rules! acpi_msg {
    ($sev:expr, $($arg:tt)*) => {{}};
}
