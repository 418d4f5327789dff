//! Panel geometry, orientation and the configuration builder

/// Panel width in pixels, after rotation
pub const WIDTH: u16 = 160;

/// Panel height in pixels, after rotation
pub const HEIGHT: u16 = 128;

/// Color depth on the wire (RGB565)
pub const BITS_PER_PIXEL: u8 = 16;

/// Bytes in one full-width row of pixel data
pub const ROW_BUFFER_LEN: usize = WIDTH as usize * (BITS_PER_PIXEL as usize / 8);

/// Display rotation relative to the controller's native portrait scan
///
/// Both variants keep the panel at [`WIDTH`] x [`HEIGHT`]; the driver does
/// not support portrait geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Landscape, row address order inverted (MY | MV)
    #[default]
    Landscape,
    /// Landscape turned 180 degrees (MX | MV)
    LandscapeFlipped,
}

impl Rotation {
    /// MADCTL scan-direction bits for this rotation
    pub fn madctl_bits(self) -> u8 {
        match self {
            Self::Landscape => 0xA0,
            Self::LandscapeFlipped => 0x60,
        }
    }
}

/// Subpixel order of the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Blue-green-red (MADCTL BGR bit set)
    #[default]
    Bgr,
    /// Red-green-blue
    Rgb,
}

impl ColorOrder {
    fn madctl_bits(self) -> u8 {
        match self {
            Self::Bgr => 0x08,
            Self::Rgb => 0x00,
        }
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Display rotation, applied once at the end of initialization
    pub rotation: Rotation,
    /// Panel subpixel order
    pub color_order: ColorOrder,
}

impl Config {
    /// MADCTL byte written as the last step of initialization
    pub fn madctl(&self) -> u8 {
        self.rotation.madctl_bits() | self.color_order.madctl_bits()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use st7735s::{Builder, ColorOrder, Rotation};
///
/// let config = Builder::new()
///     .rotation(Rotation::LandscapeFlipped)
///     .color_order(ColorOrder::Rgb)
///     .build();
/// assert_eq!(config.madctl(), 0x60);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Display rotation
    rotation: Rotation,
    /// Panel subpixel order
    color_order: ColorOrder,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the panel's subpixel order
    pub fn color_order(mut self, color_order: ColorOrder) -> Self {
        self.color_order = color_order;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            rotation: self.rotation,
            color_order: self.color_order,
        }
    }
}
