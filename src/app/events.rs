//! Outbound application events.
//!
//! [`RoomControl`](super::service::RoomControl) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — the production sink renders each
//! event as exactly one status line on the UART console.

use super::service::OccupancyState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The engine finished initialisation (room Idle, indicator dark).
    Initialized,

    /// The occupancy state machine transitioned. `from == to` is
    /// possible for the force commands, which are idempotent.
    StateChanged {
        from: OccupancyState,
        to: OccupancyState,
        cause: TransitionCause,
    },

    /// The indicator brightness was changed and applied.
    BrightnessChanged { duty: u8 },

    /// A brightness command was armed; the console expects one digit.
    BrightnessPrompt,
}

/// What drove a state transition. Distinguishes the status line emitted
/// and, for diagnostics, why the room changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCause {
    /// Accepted (debounced) button press toggled the state.
    ButtonToggle,
    /// An explicit serial command forced the state.
    Command,
    /// The auto-idle window elapsed while Occupied.
    AutoIdleTimeout,
}
