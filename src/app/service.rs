//! Room-control engine — the hexagonal core.
//!
//! [`RoomControl`] owns all mutable state: the occupancy state machine,
//! the debounce timer, the indicator brightness mirror, and the serial
//! interpreter's pending-digit flag. It exposes three synchronous entry
//! points the event loop drives — button press, received character,
//! periodic tick — plus one-shot `init`. All I/O flows through port
//! traits injected at call sites, making the engine testable with mocks.
//!
//! ```text
//!  button edge ──▶ ┌──────────────────────────┐ ──▶ IndicatorPort
//!  rx char     ──▶ │        RoomControl        │
//!  tick        ──▶ │  state · debounce · cmds  │ ──▶ EventSink
//!                  └──────────────────────────┘
//! ```
//!
//! Timestamps are `u32` milliseconds from a monotonic counter; all
//! elapsed-time math uses `wrapping_sub` so a wrapped counter neither
//! suppresses the debounce nor falsely fires the auto-idle timeout.

use log::info;

use crate::config::RoomConfig;

use super::commands::SerialCommand;
use super::events::{AppEvent, TransitionCause};
use super::ports::{EventSink, IndicatorPort};

/// Occupancy state of the room. Idle is the rest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyState {
    Idle,
    Occupied,
}

/// The room-control engine.
pub struct RoomControl {
    state: OccupancyState,
    /// Mirror of the duty last applied to the indicator (0–100).
    brightness: u8,
    /// Timestamp (ms) of the last *accepted* button press.
    last_press_ms: u32,
    /// Timestamp (ms) recorded by the explicit occupy command; the
    /// auto-idle window is measured from here.
    occupied_since_ms: u32,
    /// Interpreter is waiting for a single decimal digit after `B`.
    awaiting_digit: bool,
    config: RoomConfig,
}

impl RoomControl {
    pub fn new(config: RoomConfig) -> Self {
        Self {
            state: OccupancyState::Idle,
            brightness: config.initial_duty_percent.min(100),
            last_press_ms: 0,
            occupied_since_ms: 0,
            awaiting_digit: false,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the indicator dark, settle in Idle, announce readiness.
    /// Call once before the event loop starts.
    pub fn init(&mut self, indicator: &mut impl IndicatorPort, sink: &mut impl EventSink) {
        self.state = OccupancyState::Idle;
        indicator.set_duty(0);
        sink.emit(&AppEvent::Initialized);
        info!("room control initialised (idle, indicator dark)");
    }

    // ── Entry points ──────────────────────────────────────────

    /// Handle a raw button edge at `now_ms`. Presses inside the debounce
    /// window are dropped silently; an accepted press toggles occupancy.
    pub fn on_button_press(
        &mut self,
        now_ms: u32,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) {
        if now_ms.wrapping_sub(self.last_press_ms) < self.config.debounce_ms {
            return;
        }
        self.last_press_ms = now_ms;

        match self.state {
            OccupancyState::Idle => {
                // Button occupancy re-applies the stored brightness; only
                // the explicit occupy command forces full duty.
                self.transition(
                    OccupancyState::Occupied,
                    self.brightness,
                    TransitionCause::ButtonToggle,
                    indicator,
                    sink,
                );
            }
            OccupancyState::Occupied => {
                self.brightness = 0;
                self.transition(
                    OccupancyState::Idle,
                    0,
                    TransitionCause::ButtonToggle,
                    indicator,
                    sink,
                );
            }
        }
    }

    /// Handle one received console byte at `now_ms`. Stray bytes are
    /// silent no-ops; an armed digit prompt survives them.
    pub fn on_serial_char(
        &mut self,
        now_ms: u32,
        byte: u8,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) {
        // A pending digit consumes the byte before command dispatch.
        if self.awaiting_digit && byte.is_ascii_digit() {
            let duty = (byte - b'0') * 10;
            self.awaiting_digit = false;
            self.apply_brightness(duty, indicator, sink);
            return;
        }

        match SerialCommand::parse(byte) {
            Some(SerialCommand::ArmBrightnessDigit) => {
                self.awaiting_digit = true;
                sink.emit(&AppEvent::BrightnessPrompt);
            }
            Some(SerialCommand::BrightnessHigh) => {
                self.apply_brightness(100, indicator, sink);
            }
            Some(SerialCommand::BrightnessLow) => {
                self.apply_brightness(0, indicator, sink);
            }
            Some(SerialCommand::ForceOccupied) => {
                self.brightness = 100;
                self.occupied_since_ms = now_ms;
                self.transition(
                    OccupancyState::Occupied,
                    100,
                    TransitionCause::Command,
                    indicator,
                    sink,
                );
            }
            Some(SerialCommand::ForceIdle) => {
                self.brightness = 0;
                self.transition(
                    OccupancyState::Idle,
                    0,
                    TransitionCause::Command,
                    indicator,
                    sink,
                );
            }
            None => {}
        }
    }

    /// Periodic auto-idle check. Cheap no-op unless the room is Occupied
    /// and the window has elapsed; idempotent after firing because the
    /// state is Idle from then on.
    pub fn on_tick(
        &mut self,
        now_ms: u32,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) {
        if self.state != OccupancyState::Occupied {
            return;
        }
        if now_ms.wrapping_sub(self.occupied_since_ms) >= self.config.occupancy_timeout_ms {
            self.brightness = 0;
            self.transition(
                OccupancyState::Idle,
                0,
                TransitionCause::AutoIdleTimeout,
                indicator,
                sink,
            );
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current occupancy state.
    pub fn state(&self) -> OccupancyState {
        self.state
    }

    /// Duty last applied to the indicator (0–100).
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Whether the interpreter is waiting for a brightness digit.
    pub fn is_awaiting_digit(&self) -> bool {
        self.awaiting_digit
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_brightness(
        &mut self,
        duty: u8,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) {
        self.brightness = duty;
        indicator.set_duty(duty);
        sink.emit(&AppEvent::BrightnessChanged { duty });
    }

    fn transition(
        &mut self,
        to: OccupancyState,
        duty: u8,
        cause: TransitionCause,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) {
        let from = self.state;
        self.state = to;
        indicator.set_duty(duty);
        sink.emit(&AppEvent::StateChanged { from, to, cause });
        info!("room {:?} -> {:?} ({:?})", from, to, cause);
    }
}
