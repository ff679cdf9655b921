//! Interface types shared by both entry-point realizations.

use core::ptr::NonNull;

/// Four-byte firmware table signature ("DSDT", "SSDT", ...).
pub type TableSignature = [u8; 4];

/// Where a firmware table was found: mapped header plus physical origin.
///
/// The mapping is owned by the host table manager; holders must not free
/// or outlive it.
#[derive(Clone, Copy, Debug)]
pub struct TableLocation {
    pub header: NonNull<u8>,
    pub physical: u64,
}

/// Destination for interpreter console output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Main kernel console.
    Console,
    /// Early/serial console.
    Serial,
    /// Drop output.
    Null,
}

/// Opaque host cookie for an in-progress directory walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirCursor(NonNull<()>);

impl DirCursor {
    pub const fn new(raw: NonNull<()>) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> NonNull<()> {
        self.0
    }
}
