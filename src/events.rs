//! Interrupt-driven pending-event latches.
//!
//! Events are produced by:
//! - the button GPIO ISR (raw falling-edge, not debounced)
//! - the UART RX poll (one latch per received character)
//!
//! Each producer owns exactly one single-slot latch. A second edge or
//! character arriving before the main loop drains the slot **overwrites**
//! the previous one — bursts are lossy by design, matching the board's
//! interrupt-flag discipline. The main loop consumes each latch at most
//! once per iteration.
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Button ISR  │────▶│ BUTTON_EDGE latch │────▶│              │
//! └─────────────┘     └───────────────────┘     │  Main Loop   │
//! ┌─────────────┐     ┌───────────────────┐     │  (consumer)  │
//! │ UART RX     │────▶│ RX_CHAR latch     │────▶│              │
//! └─────────────┘     └───────────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

/// Sentinel meaning "no character pending". Any real byte is <= 0xFF.
const RX_EMPTY: u16 = 0x0100;

static BUTTON_EDGE: AtomicBool = AtomicBool::new(false);
static RX_CHAR: AtomicU16 = AtomicU16::new(RX_EMPTY);

/// Latch a raw button edge. Safe to call from ISR context (lock-free
/// atomic store). An undrained previous edge is absorbed, not queued.
pub fn post_button_edge() {
    BUTTON_EDGE.store(true, Ordering::Release);
}

/// Consume the pending button edge, if any. Called from the main loop
/// (single consumer); clears the latch.
pub fn take_button_edge() -> bool {
    BUTTON_EDGE.swap(false, Ordering::AcqRel)
}

/// Latch a received character. Safe to call from ISR context. An
/// undrained previous character is overwritten (lossy by design).
pub fn post_rx_char(byte: u8) {
    RX_CHAR.store(u16::from(byte), Ordering::Release);
}

/// Consume the pending character, if any. Called from the main loop
/// (single consumer); clears the latch.
pub fn take_rx_char() -> Option<u8> {
    let raw = RX_CHAR.swap(RX_EMPTY, Ordering::AcqRel);
    if raw == RX_EMPTY { None } else { Some(raw as u8) }
}
