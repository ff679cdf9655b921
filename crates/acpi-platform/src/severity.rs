//! Interpreter message classes mapped onto the host log pipeline.

use log::Level;

/// Severity of a diagnostic coming out of the interpreter core.
///
/// The firmware-bug classes exist so board problems are attributed to the
/// firmware in the log rather than to the kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    /// An interpreter exception surfaced to the host.
    Exception,
    Warning,
    Info,
    /// Firmware shipped broken tables or AML (error grade).
    FirmwareError,
    /// Firmware shipped broken tables or AML (warning grade).
    FirmwareWarning,
}

impl Severity {
    /// Every message class, for totality checks.
    pub const ALL: [Severity; 6] = [
        Severity::Error,
        Severity::Exception,
        Severity::Warning,
        Severity::Info,
        Severity::FirmwareError,
        Severity::FirmwareWarning,
    ];

    /// Prefix prepended verbatim to every emitted message.
    pub const fn prefix(self) -> &'static str {
        match self {
            Severity::Error => "ACPI Error: ",
            Severity::Exception => "ACPI Exception: ",
            Severity::Warning => "ACPI Warning: ",
            Severity::Info => "ACPI: ",
            Severity::FirmwareError => "ACPI BIOS Error (bug): ",
            Severity::FirmwareWarning => "ACPI BIOS Warning (bug): ",
        }
    }

    /// Host log level the class lands on.
    pub const fn level(self) -> Level {
        match self {
            Severity::Error | Severity::Exception | Severity::FirmwareError => Level::Error,
            Severity::Warning | Severity::FirmwareWarning => Level::Warn,
            Severity::Info => Level::Info,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests: all six classes map to a non-empty prefix; none falls through.
    #[test]
    fn test_prefix_mapping_total() {
        for sev in Severity::ALL {
            assert!(!sev.prefix().is_empty(), "{sev:?} has an empty prefix");
        }
    }

    /// Tests: prefixes are distinct, so classes stay tellable apart in logs.
    #[test]
    fn test_prefixes_distinct() {
        let all = Severity::ALL;
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.prefix(), b.prefix());
            }
        }
    }

    #[test]
    fn test_level_routing() {
        assert_eq!(Severity::Error.level(), Level::Error);
        assert_eq!(Severity::Exception.level(), Level::Error);
        assert_eq!(Severity::FirmwareError.level(), Level::Error);
        assert_eq!(Severity::Warning.level(), Level::Warn);
        assert_eq!(Severity::FirmwareWarning.level(), Level::Warn);
        assert_eq!(Severity::Info.level(), Level::Info);
    }
}
