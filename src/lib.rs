//! ST7735S TFT Display Driver
//!
//! A driver for the ST7735S display controller on 160x128 SPI TFT panels
//! (the common 1.8" modules), running in 16-bit RGB565 mode.
//!
//! ## Features
//!
//! - `no_std` compatible, no heap
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Filled rectangles streamed row by row, without a framebuffer
//! - Landscape rotation selected at init
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735s::{Builder, Color, Display, Interface, Rotation};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = Builder::new().rotation(Rotation::Landscape).build();
//!
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//! let _ = display.fill_screen(Color::BLACK);
//! let _ = display.fill_rect(10, 10, 20, 15, Color::RED);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// RGB565 color type
pub mod color;
/// ST7735S command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Power-on register sequence
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// Rectangle clipping and address windows
pub mod rect;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{BITS_PER_PIXEL, Builder, ColorOrder, Config, HEIGHT, Rotation, WIDTH};
pub use display::Display;
pub use error::Error;
pub use init::{INIT_SEQUENCE, InitCommand};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, RESET_HOLD_MS, SPI_FREQUENCY_HZ};
pub use rect::{AddressWindow, Rect};
