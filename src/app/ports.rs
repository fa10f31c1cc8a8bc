//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RoomControl (domain)
//! ```
//!
//! Driven adapters (the indicator PWM stage, the UART console) implement
//! these traits. [`RoomControl`](super::service::RoomControl) consumes
//! them via generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the indicator.
pub trait IndicatorPort {
    /// Apply a brightness duty cycle (0–100). Duty 0 is "off", 100 is
    /// full brightness; implementations clamp out-of-range values.
    fn set_duty(&mut self, duty: u8);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → serial console / log)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. The production adapter renders each event as one
/// status line on the UART console; tests collect them directly.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
