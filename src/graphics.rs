//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] directly. There is no framebuffer:
//! solid fills become a single [`Display::fill_rect`] and individual pixels
//! become 1x1 fills, so drawing shapes made of many pixels is slow. Prefer
//! filled rectangles where you can.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use st7735s::{Builder, Display, Interface};
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
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! let mut display = Display::new(interface, Builder::new().build());
//!
//! let _ = display.clear(Rgb565::BLACK);
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::config::{HEIGHT, WIDTH};
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= i32::from(WIDTH) || y >= i32::from(HEIGHT) {
                continue;
            }
            self.fill_rect(x, y, x, y, color)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        // Intersect first: fill_rect shrinks rather than crops on negative origins
        let area = area.intersection(&self.bounding_box());
        match area.bottom_right() {
            Some(bottom_right) => self.fill_rect(
                area.top_left.x,
                area.top_left.y,
                bottom_right.x,
                bottom_right.y,
                color,
            ),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color)
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{COLUMN_ADDRESS_SET, ROW_ADDRESS_SET};
    use crate::config::Config;
    use crate::display::tests::{Event, Log, MockInterface};
    use alloc::vec::Vec;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    fn test_display() -> (Display<MockInterface>, Log) {
        let interface = MockInterface::default();
        let log = interface.log.clone();
        (Display::new(interface, Config::default()), log)
    }

    fn windows(log: &Log) -> Vec<(Vec<u8>, Vec<u8>)> {
        let log = log.borrow();
        let mut out = Vec::new();
        for (i, event) in log.iter().enumerate() {
            if *event != Event::Command(COLUMN_ADDRESS_SET) {
                continue;
            }
            if let (
                Some(Event::Data(cols)),
                Some(Event::Command(ROW_ADDRESS_SET)),
                Some(Event::Data(rows)),
            ) = (log.get(i + 1), log.get(i + 2), log.get(i + 3))
            {
                out.push((cols.clone(), rows.clone()));
            }
        }
        out
    }

    #[test]
    fn test_size_is_panel_geometry() {
        let (display, _) = test_display();
        assert_eq!(OriginDimensions::size(&display), Size::new(160, 128));
    }

    #[test]
    fn test_fill_solid_crops_negative_origin() {
        let (mut display, log) = test_display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(-5, -5), Size::new(10, 10)),
                Rgb565::RED,
            )
            .unwrap();
        assert_eq!(
            windows(&log),
            alloc::vec![(alloc::vec![0, 0, 0, 4], alloc::vec![0, 0, 0, 4])]
        );
    }

    #[test]
    fn test_fill_solid_outside_writes_nothing() {
        let (mut display, log) = test_display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(200, 0), Size::new(10, 10)),
                Rgb565::RED,
            )
            .unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_styled_rectangle_draws() {
        let (mut display, log) = test_display();
        Rectangle::new(Point::new(10, 10), Size::new(11, 6))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut display)
            .unwrap();

        let log = log.borrow();
        let rows = log
            .iter()
            .filter(|e| matches!(e, Event::Write(bytes) if bytes.len() == 22))
            .count();
        assert_eq!(rows, 6);
    }

    #[test]
    fn test_pixels_skip_out_of_bounds() {
        let (mut display, log) = test_display();
        let pixels = [
            Pixel(Point::new(3, 4), Rgb565::GREEN),
            Pixel(Point::new(-1, 4), Rgb565::GREEN),
            Pixel(Point::new(160, 0), Rgb565::GREEN),
        ];
        display.draw_iter(pixels).unwrap();
        assert_eq!(
            windows(&log),
            alloc::vec![(alloc::vec![0, 3, 0, 3], alloc::vec![0, 4, 0, 4])]
        );
        assert!(log.borrow().contains(&Event::Write(alloc::vec![0x07, 0xE0])));
    }

    #[test]
    fn test_clear_fills_whole_panel() {
        let (mut display, log) = test_display();
        DrawTarget::clear(&mut display, Rgb565::BLUE).unwrap();
        assert_eq!(
            windows(&log),
            alloc::vec![(alloc::vec![0, 0, 0, 159], alloc::vec![0, 0, 0, 127])]
        );
    }
}
