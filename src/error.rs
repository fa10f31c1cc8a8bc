//! Unified error types for the roomctl firmware.
//!
//! The room-control engine itself has no recoverable errors — stray
//! bytes and redundant commands are silent no-ops. These types cover the
//! fallible edges that remain: peripheral bring-up and the UART
//! transport. All variants are `Copy` so they can be passed around
//! without allocation.

use core::fmt;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// A serial transport operation failed.
    Serial(SerialError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Serial(e) => write!(f, "serial: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Serial transport errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// UART driver install or configuration failed.
    DriverInstallFailed(i32),
    /// A transmit call returned an error or wrote a short count.
    TxFailed,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriverInstallFailed(rc) => write!(f, "UART driver install failed (rc={rc})"),
            Self::TxFailed => write!(f, "UART transmit failed"),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
