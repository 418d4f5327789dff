//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::Color;
use crate::command::{COLUMN_ADDRESS_SET, MEMORY_ACCESS_CONTROL, MEMORY_WRITE, ROW_ADDRESS_SET};
use crate::config::{Config, ROW_BUFFER_LEN};
use crate::error::Error;
use crate::init::{INIT_SEQUENCE, InitCommand};
use crate::interface::DisplayInterface;
use crate::rect::{AddressWindow, Rect};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the ST7735S
///
/// Owns the interface for its whole lifetime, so every bus transaction goes
/// through `&mut self` and an address window can never be separated from the
/// pixel stream that follows it.
///
/// [`init`](Self::init) (or [`reset`](Self::reset) followed by
/// [`initialize`](Self::initialize)) must complete before drawing.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Perform hardware reset and run the initialization sequence
    ///
    /// Blocks for three [`RESET_HOLD_MS`](crate::interface::RESET_HOLD_MS)
    /// holds plus [`total_delay_ms`](crate::init::total_delay_ms) of settle time.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.reset(delay)?;
        self.initialize(delay)
    }

    /// Toggle the reset line
    ///
    /// Safe to call at any time; the controller must be initialized again
    /// afterwards.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay).map_err(Error::Interface)?;
        debug!("ST7735S hardware reset done");
        Ok(())
    }

    /// Send the register initialization sequence
    ///
    /// Walks [`INIT_SEQUENCE`] in order, then writes MADCTL with the
    /// configured rotation. The settle delays are not optional; the panel
    /// does not report a failed init, it just misbehaves later.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        for step in &INIT_SEQUENCE {
            self.write_step(step, delay)?;
        }

        let madctl = self.config.madctl();
        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[madctl])?;

        debug!("ST7735S initialized, MADCTL={madctl:#04x}");
        Ok(())
    }

    fn write_step<D: DelayNs>(&mut self, step: &InitCommand, delay: &mut D) -> DisplayResult<I> {
        self.send_command(step.command)?;
        if !step.params.is_empty() {
            self.send_data(step.params)?;
        }
        if step.delay_ms > 0 {
            delay.delay_ms(step.delay_ms);
        }
        Ok(())
    }

    /// Fill a rectangle with a solid color
    ///
    /// Corners are inclusive and may be given in any order. Anything outside
    /// the panel is clipped; a rectangle that clips to nothing writes nothing
    /// and returns `Ok`.
    ///
    /// Pixels are streamed one row at a time from a single row-sized stack
    /// buffer, so memory use does not depend on the rectangle's height.
    pub fn fill_rect(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        color: impl Into<Color>,
    ) -> DisplayResult<I> {
        let Some(window) = Rect::new(left, top, right, bottom).clipped() else {
            trace!("fill ({left},{top})-({right},{bottom}) clipped away");
            return Ok(());
        };
        self.fill_window(window, color.into())
    }

    /// Fill the whole panel with one color
    pub fn fill_screen(&mut self, color: impl Into<Color>) -> DisplayResult<I> {
        self.fill_window(AddressWindow::full(), color.into())
    }

    fn fill_window(&mut self, window: AddressWindow, color: Color) -> DisplayResult<I> {
        trace!(
            "fill ({},{})-({},{}) with {:#06x}",
            window.x0, window.y0, window.x1, window.y1, color.0
        );
        self.set_address_window(window)?;
        self.send_command(MEMORY_WRITE)?;

        let len = window.width() * 2;
        let [hi, lo] = color.to_be_bytes();
        let mut row = [0u8; ROW_BUFFER_LEN];
        for pixel in row[..len].chunks_exact_mut(2) {
            pixel[0] = hi;
            pixel[1] = lo;
        }

        self.interface.start_data().map_err(Error::Interface)?;
        for _ in 0..window.height() {
            self.interface
                .write_data(&row[..len])
                .map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Program the column and row range for the next memory write
    fn set_address_window(&mut self, window: AddressWindow) -> DisplayResult<I> {
        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data(&window.column_params())?;
        self.send_command(ROW_ADDRESS_SET)?;
        self.send_data(&window.row_params())?;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}
