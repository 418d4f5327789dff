//! ST7735S command definitions
//!
//! This module defines the command bytes used to control the ST7735S
//! TFT controller. Commands are sent over SPI with the DC pin low for
//! commands and high for parameters and pixel data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735s::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Turn the panel on
//! let _ = interface.send_command(command::DISPLAY_ON);
//!
//! // Select 16-bit color
//! let _ = interface.send_command(command::COLOR_MODE);
//! let _ = interface.send_data(&[command::COLOR_MODE_16BIT]);
//! ```

// System control commands

/// Software reset command (0x01)
///
/// Resets registers to their defaults. Wait before issuing the next command.
pub const SOFT_RESET: u8 = 0x01;

/// Sleep out command (0x11)
///
/// Wakes the controller from sleep. The booster needs time to settle.
pub const SLEEP_OUT: u8 = 0x11;

/// Normal display mode on (0x13)
///
/// Leaves partial/idle mode.
pub const NORMAL_MODE_ON: u8 = 0x13;

/// Display on command (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// Panel and power setup

/// Frame rate control, normal mode (0xB1)
///
/// Requires 2 bytes for this panel.
pub const FRAME_RATE_CONTROL: u8 = 0xB1;

/// Source output direction (0xB7)
///
/// Requires 1 byte.
pub const SOURCE_OUTPUT_DIRECTION: u8 = 0xB7;

/// Power control 1 (0xC0)
///
/// Requires 2 bytes (GVDD level, AVDD/VCL).
pub const POWER_CONTROL_1: u8 = 0xC0;

/// Power control 2 (0xC1)
///
/// Requires 1 byte (VGH/VGL supply).
pub const POWER_CONTROL_2: u8 = 0xC1;

/// Charge pump frequency (0xEC)
///
/// Requires 1 byte.
pub const PUMP_FREQUENCY: u8 = 0xEC;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte, see [`COLOR_MODE_16BIT`].
pub const COLOR_MODE: u8 = 0x3A;

/// 16 bits per pixel (RGB565) parameter for [`COLOR_MODE`]
pub const COLOR_MODE_16BIT: u8 = 0x55;

/// Memory data access control, MADCTL (0x36)
///
/// Requires 1 byte selecting scan direction, row/column exchange and
/// RGB/BGR order. See [`crate::config::Rotation`].
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

// Gamma

/// Gamma curve adjustment enable (0xF2)
///
/// Requires 1 byte.
pub const GAMMA_ENABLE: u8 = 0xF2;

/// Positive gamma correction table (0xE0)
///
/// Requires 16 bytes.
pub const GAMMA_POSITIVE: u8 = 0xE0;

/// Negative gamma correction table (0xE1)
///
/// Requires 16 bytes.
pub const GAMMA_NEGATIVE: u8 = 0xE1;

// RAM access

/// Column address set, CASET (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Row address set, RASET (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const ROW_ADDRESS_SET: u8 = 0x2B;

/// Memory write, RAMWR (0x2C)
///
/// Followed by big-endian RGB565 pixel data filling the current address
/// window row by row.
pub const MEMORY_WRITE: u8 = 0x2C;
