//! RGB565 color type
//!
//! The panel is run in 16-bit mode: 5 bits red, 6 bits green, 5 bits blue,
//! sent most significant byte first.
//!
//! ## Example
//!
//! ```
//! use st7735s::Color;
//!
//! assert_eq!(Color::RED, Color(0xF800));
//! assert_eq!(Color::from_rgb(255, 255, 255), Color::WHITE);
//! assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
//! ```

/// A packed RGB565 color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    /// Black
    pub const BLACK: Self = Self(0x0000);
    /// White
    pub const WHITE: Self = Self(0xFFFF);
    /// Red
    pub const RED: Self = Self(0xF800);
    /// Green
    pub const GREEN: Self = Self(0x07E0);
    /// Blue
    pub const BLUE: Self = Self(0x001F);

    /// Pack 8-bit channels into RGB565, dropping the low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Wire encoding of one pixel
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}
