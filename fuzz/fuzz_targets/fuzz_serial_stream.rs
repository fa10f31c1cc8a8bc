//! Fuzz target: `RoomControl::on_serial_char`
//!
//! Drives arbitrary byte sequences into the serial command interpreter
//! and asserts that it never panics, never pushes an out-of-range duty
//! to the indicator, and never leaves the brightness mirror outside
//! [0, 100].
//!
//! cargo fuzz run fuzz_serial_stream

#![no_main]

use libfuzzer_sys::fuzz_target;
use roomctl::app::events::AppEvent;
use roomctl::app::ports::{EventSink, IndicatorPort};
use roomctl::app::service::RoomControl;
use roomctl::config::RoomConfig;

struct Indicator;

impl IndicatorPort for Indicator {
    fn set_duty(&mut self, duty: u8) {
        assert!(duty <= 100, "indicator saw duty > 100");
    }
}

struct Sink;

impl EventSink for Sink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut room = RoomControl::new(RoomConfig::default());
    let mut ind = Indicator;
    let mut sink = Sink;
    room.init(&mut ind, &mut sink);

    // Feed the raw bytes; advance time a little per byte so the
    // debounce/timeout arithmetic is exercised too.
    let mut now = 0u32;
    for (i, &byte) in data.iter().enumerate() {
        now = now.wrapping_add(u32::from(byte) + i as u32);
        room.on_serial_char(now, byte, &mut ind, &mut sink);
        room.on_tick(now, &mut ind, &mut sink);
        assert!(room.brightness() <= 100);
    }
});
