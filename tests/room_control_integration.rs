//! Integration tests: RoomControl → ports, full command/button/timeout flows.

use roomctl::app::events::{AppEvent, TransitionCause};
use roomctl::app::ports::{EventSink, IndicatorPort};
use roomctl::app::service::{OccupancyState, RoomControl};
use roomctl::config::RoomConfig;

// ── Mock implementations ──────────────────────────────────────

/// Records every duty applied, so tests can assert on the full history.
struct MockIndicator {
    duties: Vec<u8>,
}

impl MockIndicator {
    fn new() -> Self {
        Self { duties: Vec::new() }
    }

    fn last_duty(&self) -> Option<u8> {
        self.duties.last().copied()
    }
}

impl IndicatorPort for MockIndicator {
    fn set_duty(&mut self, duty: u8) {
        self.duties.push(duty);
    }
}

struct MockSink {
    events: Vec<AppEvent>,
}

impl MockSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }

    fn transitions(&self) -> Vec<(OccupancyState, OccupancyState, TransitionCause)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::StateChanged { from, to, cause } => Some((*from, *to, *cause)),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for MockSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}

fn boot() -> (RoomControl, MockIndicator, MockSink) {
    let mut room = RoomControl::new(RoomConfig::default());
    let mut ind = MockIndicator::new();
    let mut sink = MockSink::new();
    room.init(&mut ind, &mut sink);
    (room, ind, sink)
}

const DEBOUNCE: u32 = 200;
const TIMEOUT: u32 = 3_000;

// ── Button flows ──────────────────────────────────────────────

#[test]
fn rapid_press_burst_yields_single_toggle() {
    let (mut room, mut ind, mut sink) = boot();
    // Contact bounce: five edges within 40 ms.
    for jitter in [0, 5, 14, 27, 39] {
        room.on_button_press(1_000 + jitter, &mut ind, &mut sink);
    }
    assert_eq!(room.state(), OccupancyState::Occupied);
    assert_eq!(sink.transitions().len(), 1);
}

#[test]
fn presses_spaced_past_the_window_all_count() {
    let (mut room, mut ind, mut sink) = boot();
    for i in 0..4u32 {
        room.on_button_press(1_000 + i * DEBOUNCE, &mut ind, &mut sink);
    }
    // Four accepted toggles: net state back to Idle, four emissions.
    assert_eq!(room.state(), OccupancyState::Idle);
    assert_eq!(sink.transitions().len(), 4);
}

#[test]
fn button_occupancy_keeps_console_brightness() {
    let (mut room, mut ind, mut sink) = boot();
    // Operator dims the indicator from the console, then the room
    // empties and someone walks back in.
    room.on_serial_char(0, b'b', &mut ind, &mut sink);
    room.on_serial_char(0, b'3', &mut ind, &mut sink);
    room.on_button_press(1_000, &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Occupied);
    assert_eq!(ind.last_duty(), Some(30));
}

// ── Console flows ─────────────────────────────────────────────

#[test]
fn brightness_digit_flow_end_to_end() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(0, b'B', &mut ind, &mut sink);
    assert!(sink.events.contains(&AppEvent::BrightnessPrompt));
    room.on_serial_char(0, b'7', &mut ind, &mut sink);
    assert_eq!(ind.last_duty(), Some(70));
    assert!(
        sink.events
            .contains(&AppEvent::BrightnessChanged { duty: 70 })
    );
}

#[test]
fn garbage_between_arm_and_digit_is_harmless() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(0, b'b', &mut ind, &mut sink);
    for byte in [b'x', b'?', 0xFF, b' ', b'\r'] {
        room.on_serial_char(0, byte, &mut ind, &mut sink);
    }
    room.on_serial_char(0, b'4', &mut ind, &mut sink);
    assert_eq!(ind.last_duty(), Some(40));
}

#[test]
fn high_low_commands_do_not_touch_state() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(0, b'h', &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Idle);
    room.on_serial_char(0, b'l', &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Idle);
    assert!(sink.transitions().is_empty());
    assert_eq!(ind.last_duty(), Some(0));
}

#[test]
fn occupy_and_vacate_force_state_from_anywhere() {
    let (mut room, mut ind, mut sink) = boot();
    // Occupy from Idle.
    room.on_serial_char(100, b'o', &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Occupied);
    assert_eq!(ind.last_duty(), Some(100));
    // Occupy again while Occupied: idempotent, re-emits.
    room.on_serial_char(200, b'O', &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Occupied);
    // Vacate.
    room.on_serial_char(300, b'i', &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Idle);
    assert_eq!(ind.last_duty(), Some(0));
    assert_eq!(sink.transitions().len(), 3);
}

// ── Auto-idle flows ───────────────────────────────────────────

#[test]
fn occupied_room_times_out_and_goes_dark() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(500, b'o', &mut ind, &mut sink);

    // Sweep the window the way the control loop would.
    let mut now = 500;
    while room.state() == OccupancyState::Occupied {
        now += 10;
        room.on_tick(now, &mut ind, &mut sink);
        assert!(now <= 500 + TIMEOUT, "timeout never fired");
    }

    assert_eq!(now, 500 + TIMEOUT);
    assert_eq!(ind.last_duty(), Some(0));
    assert_eq!(
        sink.transitions().last(),
        Some(&(
            OccupancyState::Occupied,
            OccupancyState::Idle,
            TransitionCause::AutoIdleTimeout,
        ))
    );
}

#[test]
fn vacated_room_never_times_out() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(0, b'o', &mut ind, &mut sink);
    room.on_serial_char(100, b'i', &mut ind, &mut sink);
    let emitted = sink.events.len();
    for now in (200..2 * TIMEOUT).step_by(100) {
        room.on_tick(now, &mut ind, &mut sink);
    }
    assert_eq!(sink.events.len(), emitted);
    assert_eq!(room.state(), OccupancyState::Idle);
}

#[test]
fn timeout_fires_once_then_stays_quiet() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(0, b'o', &mut ind, &mut sink);
    for now in (0..=3 * TIMEOUT).step_by(50) {
        room.on_tick(now, &mut ind, &mut sink);
    }
    let timeouts = sink
        .transitions()
        .iter()
        .filter(|(_, _, cause)| *cause == TransitionCause::AutoIdleTimeout)
        .count();
    assert_eq!(timeouts, 1);
}

#[test]
fn reoccupying_after_timeout_restarts_the_window() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(0, b'o', &mut ind, &mut sink);
    room.on_tick(TIMEOUT, &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Idle);

    room.on_serial_char(TIMEOUT + 100, b'o', &mut ind, &mut sink);
    room.on_tick(2 * TIMEOUT, &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Occupied);
    room.on_tick(2 * TIMEOUT + 100, &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Idle);
}

// ── Mixed flows ───────────────────────────────────────────────

#[test]
fn brightness_commands_while_occupied_do_not_reset_the_window() {
    let (mut room, mut ind, mut sink) = boot();
    room.on_serial_char(0, b'o', &mut ind, &mut sink);
    room.on_serial_char(TIMEOUT - 100, b'h', &mut ind, &mut sink);
    room.on_tick(TIMEOUT, &mut ind, &mut sink);
    assert_eq!(room.state(), OccupancyState::Idle);
}

#[test]
fn every_state_or_brightness_change_emits_exactly_one_event() {
    let (mut room, mut ind, mut sink) = boot();
    let baseline = sink.events.len();
    room.on_serial_char(0, b'h', &mut ind, &mut sink);
    assert_eq!(sink.events.len(), baseline + 1);
    room.on_serial_char(0, b'o', &mut ind, &mut sink);
    assert_eq!(sink.events.len(), baseline + 2);
    room.on_button_press(1_000, &mut ind, &mut sink);
    assert_eq!(sink.events.len(), baseline + 3);
}
