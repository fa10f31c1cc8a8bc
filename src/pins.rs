//! GPIO / peripheral pin assignments for the room controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Indicator LED (LEDC PWM, open-drain driver stage)
// ---------------------------------------------------------------------------

/// LEDC PWM output for indicator brightness control.
pub const INDICATOR_PWM_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// User button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button toggling room occupancy.
pub const BUTTON_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// UART command console
// ---------------------------------------------------------------------------

/// UART controller used for the command console.
pub const UART_PORT: i32 = 1;
pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits). 8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the indicator (1 kHz — flicker-free).
pub const INDICATOR_PWM_FREQ_HZ: u32 = 1_000;
