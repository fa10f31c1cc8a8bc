//! RoomCtl Firmware — Main Entry Point
//!
//! Hexagonal architecture with a single-slot event-latch control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  IndicatorAdapter      UartEventSink        TimeAdapter      │
//! │  (IndicatorPort)       (EventSink + RX)     (monotonic ms)   │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │            RoomControl (pure logic)                │      │
//! │  │  occupancy FSM · debounce · commands · auto-idle   │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Loop discipline: drain at most one button edge, then at most one
//! received character, then always run the periodic auto-idle check —
//! in that priority order, every iteration.
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod events;
mod pins;

pub mod app;
mod adapters;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use anyhow::{Result, anyhow};
use log::info;

use adapters::hardware::IndicatorAdapter;
use adapters::serial::UartEventSink;
use adapters::time::TimeAdapter;
use app::service::RoomControl;
use config::RoomConfig;
use drivers::indicator::IndicatorDriver;
use drivers::uart::UartConsole;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("roomctl v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (fixed at boot — no persistence) ─────
    let config = RoomConfig::default();

    // ── 3. Peripheral bring-up ────────────────────────────────
    drivers::hw_init::init_peripherals().map_err(|e| anyhow!("hw init: {e}"))?;
    let uart = UartConsole::init(&config).map_err(|e| anyhow!("uart init: {e}"))?;
    drivers::hw_init::init_isr_service().map_err(|e| anyhow!("isr init: {e}"))?;

    // ── 4. Adapters + engine ──────────────────────────────────
    let time = TimeAdapter::new();
    let mut indicator = IndicatorAdapter::new(IndicatorDriver::new());
    let mut console = UartEventSink::new(uart);

    let mut room = RoomControl::new(config.clone());
    room.init(&mut indicator, &mut console);

    info!("System ready. Entering event loop.");

    // ── 5. Event loop ─────────────────────────────────────────
    loop {
        // Pull whatever the RX FIFO holds into the character latch.
        console.poll_rx();

        let now_ms = time.uptime_ms();

        // Drain each pending-event latch at most once per iteration,
        // button first, then serial.
        if events::take_button_edge() {
            room.on_button_press(now_ms, &mut indicator, &mut console);
        }
        if let Some(byte) = events::take_rx_char() {
            room.on_serial_char(now_ms, byte, &mut indicator, &mut console);
        }

        // The auto-idle check runs unconditionally; its precision is
        // bounded by the loop interval, not a hardware timer.
        room.on_tick(time.uptime_ms(), &mut indicator, &mut console);

        // Yield to the scheduler and pace the loop.
        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(config.control_loop_interval_ms);

        #[cfg(not(target_os = "espidf"))]
        std::thread::sleep(std::time::Duration::from_millis(
            config.control_loop_interval_ms as u64,
        ));
    }
}
