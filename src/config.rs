//! System configuration parameters
//!
//! All tunable parameters for the room controller. Values are fixed at
//! boot; there is no persistent storage on this board revision.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    // --- Button ---
    /// Minimum interval between accepted button presses (milliseconds).
    /// Filters mechanical contact bounce.
    pub debounce_ms: u32,

    // --- Occupancy ---
    /// Auto-idle window: an unattended Occupied room reverts to Idle
    /// this long after the last explicit occupy command (milliseconds).
    pub occupancy_timeout_ms: u32,

    // --- Indicator ---
    /// Indicator duty cycle seeded at boot (0-100%). Re-applied when a
    /// button press occupies the room.
    pub initial_duty_percent: u8,

    // --- Serial ---
    /// UART baud rate for the command console.
    pub uart_baud: u32,

    // --- Timing ---
    /// Control loop interval (milliseconds). Bounds the latency of the
    /// auto-idle check.
    pub control_loop_interval_ms: u32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            occupancy_timeout_ms: 3_000,
            initial_duty_percent: 50,
            uart_baud: 115_200,
            control_loop_interval_ms: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = RoomConfig::default();
        assert!(c.debounce_ms > 0);
        assert!(c.occupancy_timeout_ms > c.debounce_ms);
        assert!(c.initial_duty_percent <= 100);
        assert!(c.uart_baud > 0);
        assert!(c.control_loop_interval_ms > 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = RoomConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: RoomConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.debounce_ms, c2.debounce_ms);
        assert_eq!(c.occupancy_timeout_ms, c2.occupancy_timeout_ms);
        assert_eq!(c.initial_duty_percent, c2.initial_duty_percent);
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = RoomConfig::default();
        assert!(
            c.control_loop_interval_ms < c.debounce_ms,
            "loop must cycle faster than the debounce window to drain presses"
        );
        assert!(
            c.control_loop_interval_ms < c.occupancy_timeout_ms,
            "loop must cycle faster than the auto-idle window"
        );
    }
}
