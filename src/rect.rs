//! Rectangle normalization, clipping and address-window encoding
//!
//! Callers hand [`Display::fill_rect`](crate::Display::fill_rect) inclusive
//! corner coordinates in any order and any range. [`Rect::clipped`] reduces
//! them to an [`AddressWindow`] inside the panel, or to nothing.
//!
//! ## Example
//!
//! ```
//! use st7735s::{AddressWindow, Rect};
//!
//! // Corners may be given in either order
//! let window = Rect::new(20, 15, 10, 10).clipped();
//! assert_eq!(window, Some(AddressWindow::new(10, 10, 20, 15)));
//!
//! // Entirely right of the panel
//! assert_eq!(Rect::new(200, 0, 250, 10).clipped(), None);
//! ```

use crate::config::{HEIGHT, WIDTH};

/// Inclusive rectangle in panel pixel coordinates
///
/// Signed so that out-of-range input can be clipped instead of rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left column
    pub left: i32,
    /// Top row
    pub top: i32,
    /// Right column (inclusive)
    pub right: i32,
    /// Bottom row (inclusive)
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from two corners
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Swap corners so that `left <= right` and `top <= bottom`
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    /// Normalize and clip to the panel
    ///
    /// A negative start coordinate is moved to 0 and the opposite edge is
    /// pulled in by the same amount. The right and bottom edges are then
    /// capped to the last column and row.
    ///
    /// Returns `None` when nothing is left to draw.
    pub fn clipped(self) -> Option<AddressWindow> {
        let Self {
            mut left,
            mut top,
            mut right,
            mut bottom,
        } = self.normalized();

        if left < 0 {
            right = right.saturating_add(left);
            left = 0;
        }
        if top < 0 {
            bottom = bottom.saturating_add(top);
            top = 0;
        }
        right = right.min(i32::from(WIDTH) - 1);
        bottom = bottom.min(i32::from(HEIGHT) - 1);

        if left > right || top > bottom {
            return None;
        }

        // 0 <= left <= right < WIDTH and 0 <= top <= bottom < HEIGHT here
        Some(AddressWindow {
            x0: left as u16,
            y0: top as u16,
            x1: right as u16,
            y1: bottom as u16,
        })
    }
}

impl From<AddressWindow> for Rect {
    fn from(window: AddressWindow) -> Self {
        Self::new(
            i32::from(window.x0),
            i32::from(window.y0),
            i32::from(window.x1),
            i32::from(window.y1),
        )
    }
}

/// Column and row range the controller writes pixel data into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressWindow {
    /// First column
    pub x0: u16,
    /// First row
    pub y0: u16,
    /// Last column (inclusive)
    pub x1: u16,
    /// Last row (inclusive)
    pub y1: u16,
}

impl AddressWindow {
    /// Create a window from inclusive bounds
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Window covering the whole panel
    pub const fn full() -> Self {
        Self::new(0, 0, WIDTH - 1, HEIGHT - 1)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        usize::from(self.x1 - self.x0) + 1
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        usize::from(self.y1 - self.y0) + 1
    }

    /// CASET parameters: start and end column, big-endian
    pub fn column_params(&self) -> [u8; 4] {
        encode_span(self.x0, self.x1)
    }

    /// RASET parameters: start and end row, big-endian
    pub fn row_params(&self) -> [u8; 4] {
        encode_span(self.y0, self.y1)
    }

    /// Rebuild a window from CASET and RASET parameter blocks
    pub fn from_params(columns: [u8; 4], rows: [u8; 4]) -> Self {
        let (x0, x1) = decode_span(columns);
        let (y0, y1) = decode_span(rows);
        Self { x0, y0, x1, y1 }
    }
}

fn encode_span(start: u16, end: u16) -> [u8; 4] {
    let [start_hi, start_lo] = start.to_be_bytes();
    let [end_hi, end_lo] = end.to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}

fn decode_span(bytes: [u8; 4]) -> (u16, u16) {
    (
        u16::from_be_bytes([bytes[0], bytes[1]]),
        u16::from_be_bytes([bytes[2], bytes[3]]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small xorshift so the property tests stay deterministic
    struct XorShift(u32);

    impl XorShift {
        fn next(&mut self) -> u32 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x
        }

        fn coord(&mut self) -> i32 {
            (self.next() % 600) as i32 - 200
        }
    }

    #[test]
    fn test_normalized_orders_corners() {
        let mut rng = XorShift(0x1234_5678);
        for _ in 0..10_000 {
            let rect = Rect::new(rng.coord(), rng.coord(), rng.coord(), rng.coord());
            let n = rect.normalized();
            assert!(n.left <= n.right);
            assert!(n.top <= n.bottom);
        }
    }

    #[test]
    fn test_clipping_is_idempotent() {
        let mut rng = XorShift(0xDEAD_BEEF);
        for _ in 0..10_000 {
            let rect = Rect::new(rng.coord(), rng.coord(), rng.coord(), rng.coord());
            if let Some(window) = rect.clipped() {
                assert_eq!(Rect::from(window).clipped(), Some(window));
                assert!(window.x1 < WIDTH && window.y1 < HEIGHT);
            }
        }
    }

    #[test]
    fn test_inside_rect_is_unchanged() {
        assert_eq!(
            Rect::new(10, 10, 20, 15).clipped(),
            Some(AddressWindow::new(10, 10, 20, 15))
        );
    }

    #[test]
    fn test_right_and_bottom_are_capped() {
        assert_eq!(
            Rect::new(150, 120, 400, 300).clipped(),
            Some(AddressWindow::new(150, 120, 159, 127))
        );
    }

    #[test]
    fn test_outside_panel_is_none() {
        assert_eq!(Rect::new(200, 0, 250, 10).clipped(), None);
        assert_eq!(Rect::new(0, 128, 10, 200).clipped(), None);
    }

    #[test]
    fn test_negative_start_shrinks_by_clamped_amount() {
        // left is pulled in by 5, right follows
        assert_eq!(
            Rect::new(-5, 0, 20, 10).clipped(),
            Some(AddressWindow::new(0, 0, 15, 10))
        );
        assert_eq!(
            Rect::new(0, -3, 20, 10).clipped(),
            Some(AddressWindow::new(0, 0, 20, 7))
        );
    }

    #[test]
    fn test_negative_start_can_collapse_rect() {
        assert_eq!(Rect::new(-10, 0, 5, 10).clipped(), None);
        assert_eq!(Rect::new(-10, -10, -1, -1).clipped(), None);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        assert_eq!(Rect::new(i32::MIN, 0, i32::MIN, 10).clipped(), None);
        assert_eq!(
            Rect::new(0, 0, i32::MAX, i32::MAX).clipped(),
            Some(AddressWindow::full())
        );
    }

    #[test]
    fn test_window_dimensions() {
        let window = AddressWindow::new(10, 10, 20, 15);
        assert_eq!(window.width(), 11);
        assert_eq!(window.height(), 6);
        assert_eq!(AddressWindow::full().width(), 160);
        assert_eq!(AddressWindow::full().height(), 128);
    }

    #[test]
    fn test_params_are_big_endian() {
        let window = AddressWindow::new(10, 10, 20, 15);
        assert_eq!(window.column_params(), [0x00, 0x0A, 0x00, 0x14]);
        assert_eq!(window.row_params(), [0x00, 0x0A, 0x00, 0x0F]);
    }

    #[test]
    fn test_params_decode_every_column() {
        for x in 0..WIDTH {
            let window = AddressWindow::new(x, x % HEIGHT, WIDTH - 1, HEIGHT - 1);
            let decoded = AddressWindow::from_params(window.column_params(), window.row_params());
            assert_eq!(decoded, window);
        }
    }
}
