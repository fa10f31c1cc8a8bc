//! UART status-line event sink adapter.
//!
//! Implements [`EventSink`] by rendering every structured [`AppEvent`]
//! into exactly one CRLF-terminated ASCII line and writing it to the
//! UART console. Lines are built in a fixed-capacity buffer — no heap.
//! TX failures are logged and dropped: status output is best-effort.

use core::fmt::Write as _;

use heapless::String;
use log::{info, warn};

use crate::app::events::{AppEvent, TransitionCause};
use crate::app::ports::EventSink;
use crate::app::service::OccupancyState;
use crate::drivers::uart::UartConsole;

/// Maximum rendered line length, CRLF included.
const LINE_CAP: usize = 96;

/// Adapter that prints every [`AppEvent`] as a console status line.
pub struct UartEventSink {
    uart: UartConsole,
}

impl UartEventSink {
    pub fn new(uart: UartConsole) -> Self {
        Self { uart }
    }

    /// Drain pending RX bytes into the character latch (passthrough to
    /// the owned console, so the main loop needs no second handle).
    pub fn poll_rx(&mut self) -> usize {
        self.uart.poll_rx()
    }
}

impl EventSink for UartEventSink {
    fn emit(&mut self, event: &AppEvent) {
        let line = status_line(event);
        info!("console: {}", line.trim_end());
        if let Err(e) = self.uart.write(line.as_bytes()) {
            warn!("console line dropped: {}", e);
        }
    }
}

/// Render one event as one CRLF-terminated status line.
///
/// The write into the fixed buffer cannot fail: every variant renders
/// well under [`LINE_CAP`] bytes, and `heapless::String` truncates
/// rather than panics if that ever stopped holding.
pub fn status_line(event: &AppEvent) -> String<LINE_CAP> {
    let mut line = String::new();
    let _ = match event {
        AppEvent::Initialized => write!(line, "room control ready"),
        AppEvent::StateChanged { to, cause, .. } => match (to, cause) {
            (OccupancyState::Idle, TransitionCause::AutoIdleTimeout) => {
                write!(line, "timeout: room vacant")
            }
            (OccupancyState::Occupied, TransitionCause::Command) => {
                write!(line, "room occupied")
            }
            (OccupancyState::Idle, TransitionCause::Command) => {
                write!(line, "room vacant")
            }
            (state, _) => write!(line, "state: {:?}", state),
        },
        AppEvent::BrightnessChanged { duty } => {
            write!(line, "indicator duty: {}%", duty)
        }
        AppEvent::BrightnessPrompt => {
            write!(line, "set brightness: send a digit (0-9)")
        }
    };
    let _ = line.push_str("\r\n");
    line
}
