//! Status codes crossing the OS-service boundary.
//!
//! Codes mirror the interpreter core's exception space so a status travels
//! through the core unchanged; this layer only ever produces the subset
//! below.

use lum_error::define_status;

define_status! {
    /// OS-service failures.
    pub enum OslError {
        Failure = (0x0001, "AE_ERROR", "Unspecified error"),
        NoMemory = (0x0004, "AE_NO_MEMORY", "Insufficient dynamic memory"),
        NotFound = (0x0005, "AE_NOT_FOUND", "Requested entity not found"),
        Support = (0x000F, "AE_SUPPORT", "Feature not supported"),
        Limit = (0x0010, "AE_LIMIT", "Predefined limit exceeded"),
        /// The fixed answer of every load-bearing stub entry point.
        NotConfigured = (0x001C, "AE_NOT_CONFIGURED", "Subsystem not configured"),
    }
}

/// Result alias used by every status-returning entry point.
pub type OslResult<T> = Result<T, OslError>;

// ============================================================================
// Unit Tests
// ============================================================================
