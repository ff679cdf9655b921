//! Kernel status-code infrastructure.
//!
//! Provides the `define_status!` macro for error types that carry a fixed
//! numeric code, a symbolic name, and a human-readable message.
//!
//! ```ignore
//! define_status! {
//!     pub enum NetStatus {
//!         LinkDown = (0x0001, "NET_LINK_DOWN", "No carrier on interface"),
//!         TxFull = (0x0002, "NET_TX_FULL", "Transmit queue full"),
//!     }
//! }
//! ```

#![no_std]

/// Define a status enum with per-variant code, symbolic name, and message.
///
/// Codes are caller-chosen so a type can mirror an externally defined code
/// space (firmware status tables, errno, wire protocols) exactly.
#[macro_export]
macro_rules! define_status {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = ($code:literal, $symbol:literal, $msg:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Numeric status code.
            pub const fn code(&self) -> u16 {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Symbolic name, suitable for terse diagnostics.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)*
                }
            }

            /// Human-readable description.
            pub const fn message(&self) -> &'static str {
                match self {
                    $(Self::$variant => $msg,)*
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{} ({})", self.message(), self.name())
            }
        }

        impl core::error::Error for $name {}
    };
}
