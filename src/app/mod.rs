//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the room controller:
//! the occupancy state machine, button debounce, the serial command
//! interpreter, and the auto-idle timeout. All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
