//! Inbound serial commands.
//!
//! The console speaks single-byte commands, case-insensitive on letters.
//! Digits are *not* commands: they only carry meaning while the engine
//! is waiting for one after `B`, so the stateful digit handling lives in
//! [`RoomControl`](super::service::RoomControl) and this parser covers
//! the stateless alphabet only.

/// Commands the serial console can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialCommand {
    /// `B` — arm brightness entry; the next digit sets duty = digit × 10.
    ArmBrightnessDigit,
    /// `H` — indicator to full brightness (duty 100).
    BrightnessHigh,
    /// `L` — indicator dark (duty 0).
    BrightnessLow,
    /// `O` — force the room Occupied, indicator full.
    ForceOccupied,
    /// `I` — force the room Idle, indicator dark.
    ForceIdle,
}

impl SerialCommand {
    /// Map a received byte to a command. Unknown bytes are no-ops for
    /// the engine and return `None`.
    pub fn parse(byte: u8) -> Option<Self> {
        match byte.to_ascii_lowercase() {
            b'b' => Some(Self::ArmBrightnessDigit),
            b'h' => Some(Self::BrightnessHigh),
            b'l' => Some(Self::BrightnessLow),
            b'o' => Some(Self::ForceOccupied),
            b'i' => Some(Self::ForceIdle),
            _ => None,
        }
    }
}
