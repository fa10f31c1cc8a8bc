//! Monotonic time adapter.
//!
//! Provides the millisecond counter the engine's entry points are
//! stamped with.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` for
//!   host-side testing and simulation.
//!
//! The counter is truncated to `u32` milliseconds (wraps after ~49.7
//! days); the engine's elapsed-time math is wraparound-safe.

/// Monotonic clock for the room controller.
pub struct TimeAdapter {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for TimeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeAdapter {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot, truncated to `u32`.
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> u32 {
        // SAFETY: esp_timer_get_time is a monotonic counter read with no
        // preconditions; safe from any context.
        ((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1_000) as u32
    }

    /// Milliseconds since construction, truncated to `u32`.
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
