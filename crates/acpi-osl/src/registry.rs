//! Declarative entry-point registry.
//!
//! One row per OS-service entry point: which part of the core calls it and
//! which sentinel its stub realization answers with. Keeping the
//! benign-versus-failure split in one table instead of scattered literals
//! makes it auditable; the disabled-build tests assert the stub bodies
//! against these rows.

/// Which consumer inside the portable core calls the entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// The interpreter itself, at runtime.
    Core,
    /// Debugger/disassembler.
    Debugger,
    /// Table and namespace utilities.
    Utility,
}

/// What a stub body answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentinel {
    /// `Ok(())`: absence of the subsystem is a harmless no-op here.
    Success,
    /// `Err(NotConfigured)`: the caller asked for something load-bearing.
    NotConfigured,
    /// Plain return.
    Void,
    /// Zero or `false`.
    Zero,
    /// `None`.
    Null,
}

#[derive(Clone, Copy, Debug)]
pub struct EntryPoint {
    pub name: &'static str,
    pub tier: Tier,
    pub sentinel: Sentinel,
}

const fn ep(name: &'static str, tier: Tier, sentinel: Sentinel) -> EntryPoint {
    EntryPoint {
        name,
        tier,
        sentinel,
    }
}

/// Every OS-service entry point the core links against.
///
/// Success versus NotConfigured is decided per entry point by its semantic
/// role: lifecycle brackets have nothing to do without a subsystem and must
/// not poison callers, while constructors and lookups must refuse rather
/// than fabricate.
pub const ENTRY_POINTS: [EntryPoint; 19] = [
    // --- core runtime ---
    ep("initialize", Tier::Core, Sentinel::Success),
    ep("terminate", Tier::Core, Sentinel::Success),
    ep("allocate", Tier::Core, Sentinel::Null),
    ep("allocate_zeroed", Tier::Core, Sentinel::Null),
    ep("free", Tier::Core, Sentinel::Void),
    ep("acquire_object", Tier::Core, Sentinel::Null),
    ep("thread_id", Tier::Core, Sentinel::Zero),
    ep("create_lock", Tier::Core, Sentinel::NotConfigured),
    // --- debugger/disassembler ---
    ep("readable", Tier::Debugger, Sentinel::Zero),
    ep("writable", Tier::Debugger, Sentinel::Zero),
    ep("initialize_debugger", Tier::Debugger, Sentinel::NotConfigured),
    ep("terminate_debugger", Tier::Debugger, Sentinel::Void),
    // --- utilities ---
    ep("redirect_output", Tier::Utility, Sentinel::Void),
    ep("table_by_name", Tier::Utility, Sentinel::NotConfigured),
    ep("table_by_index", Tier::Utility, Sentinel::NotConfigured),
    ep("table_by_address", Tier::Utility, Sentinel::NotConfigured),
    ep("open_directory", Tier::Utility, Sentinel::Null),
    ep("next_filename", Tier::Utility, Sentinel::Null),
    ep("close_directory", Tier::Utility, Sentinel::Void),
];

/// Look up one entry point by name.
pub fn find(name: &str) -> Option<&'static EntryPoint> {
    ENTRY_POINTS.iter().find(|entry| entry.name == name)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_counts() {
        let count = |tier| {
            ENTRY_POINTS
                .iter()
                .filter(|entry| entry.tier == tier)
                .count()
        };
        assert_eq!(count(Tier::Core), 8);
        assert_eq!(count(Tier::Debugger), 4);
        assert_eq!(count(Tier::Utility), 7);
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in ENTRY_POINTS.iter().enumerate() {
            for b in &ENTRY_POINTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    /// The benign partition is exactly the two lifecycle brackets; every
    /// other status-returning entry point refuses with NotConfigured.
    #[test]
    fn test_benign_partition_exact() {
        let benign: [&str; 2] = ["initialize", "terminate"];
        for entry in &ENTRY_POINTS {
            let expected_benign = benign.contains(&entry.name);
            assert_eq!(
                entry.sentinel == Sentinel::Success,
                expected_benign,
                "misclassified entry point {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_sentinel_population() {
        let count = |sentinel| {
            ENTRY_POINTS
                .iter()
                .filter(|entry| entry.sentinel == sentinel)
                .count()
        };
        assert_eq!(count(Sentinel::Success), 2);
        assert_eq!(count(Sentinel::NotConfigured), 5);
        assert_eq!(count(Sentinel::Void), 4);
        assert_eq!(count(Sentinel::Zero), 3);
        assert_eq!(count(Sentinel::Null), 5);
    }

    #[test]
    fn test_find() {
        let entry = find("create_lock").expect("registered entry point");
        assert_eq!(entry.sentinel, Sentinel::NotConfigured);
        assert!(find("reboot").is_none());
    }
}
