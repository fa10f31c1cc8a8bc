//! UART command-console driver.
//!
//! Thin wrapper over the ESP-IDF UART driver: one-shot bring-up, a
//! non-blocking RX poll the main loop calls each iteration, and a
//! best-effort blocking TX for status lines.
//!
//! RX bytes are not buffered here — each byte read from the FIFO is
//! latched into the single-slot pending-character latch
//! ([`crate::events::post_rx_char`]). If several bytes arrive within one
//! loop iteration only the last survives; the console protocol is
//! single-character commands typed by a human, so bursts carry no
//! meaning.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real UART controller.
//! On host/test: bring-up succeeds, RX never yields, TX is discarded.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::config::RoomConfig;
use crate::error::SerialError;
#[cfg(target_os = "espidf")]
use crate::events;
#[cfg(target_os = "espidf")]
use crate::pins;

/// Size of the driver-internal RX ring buffer (bytes).
#[cfg(target_os = "espidf")]
const RX_BUFFER_SIZE: i32 = 256;

pub struct UartConsole {
    #[cfg(target_os = "espidf")]
    port: i32,
}

impl UartConsole {
    /// Configure and install the UART driver.
    #[cfg(target_os = "espidf")]
    pub fn init(config: &RoomConfig) -> Result<Self, SerialError> {
        let port = pins::UART_PORT;

        let uart_cfg = uart_config_t {
            baud_rate: config.uart_baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };

        // SAFETY: Called once from main() before the event loop;
        // single-threaded access to the UART controller from then on.
        unsafe {
            let ret = uart_param_config(port, &uart_cfg);
            if ret != ESP_OK {
                return Err(SerialError::DriverInstallFailed(ret));
            }
            let ret = uart_set_pin(
                port,
                pins::UART_TX_GPIO,
                pins::UART_RX_GPIO,
                -1, // RTS unused
                -1, // CTS unused
            );
            if ret != ESP_OK {
                return Err(SerialError::DriverInstallFailed(ret));
            }
            let ret = uart_driver_install(
                port,
                RX_BUFFER_SIZE,
                0, // TX unbuffered: write calls block until queued
                0,
                core::ptr::null_mut(),
                0,
            );
            if ret != ESP_OK {
                return Err(SerialError::DriverInstallFailed(ret));
            }
        }

        log::info!("uart: console ready on UART{} @ {} baud", port, config.uart_baud);
        Ok(Self { port })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn init(config: &RoomConfig) -> Result<Self, SerialError> {
        log::info!("uart(sim): console ready @ {} baud", config.uart_baud);
        Ok(Self {})
    }

    /// Drain whatever the RX FIFO holds into the pending-character
    /// latch without blocking. Returns the number of bytes read.
    #[cfg(target_os = "espidf")]
    pub fn poll_rx(&mut self) -> usize {
        let mut buf = [0u8; 16];
        // SAFETY: buffer pointer/length are valid for the call duration;
        // zero-tick timeout makes this a non-blocking FIFO drain.
        let n = unsafe {
            uart_read_bytes(
                self.port,
                buf.as_mut_ptr().cast(),
                buf.len() as u32,
                0,
            )
        };
        if n <= 0 {
            return 0;
        }
        for &byte in &buf[..n as usize] {
            events::post_rx_char(byte);
        }
        n as usize
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn poll_rx(&mut self) -> usize {
        0
    }

    /// Write raw bytes to the console. Best effort: short writes are
    /// reported as errors and the caller decides whether to care.
    #[cfg(target_os = "espidf")]
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        // SAFETY: source pointer/length are valid for the call duration.
        let n = unsafe { uart_write_bytes(self.port, bytes.as_ptr().cast(), bytes.len()) };
        if n as usize == bytes.len() {
            Ok(())
        } else {
            Err(SerialError::TxFailed)
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn write(&mut self, _bytes: &[u8]) -> Result<(), SerialError> {
        Ok(())
    }
}
