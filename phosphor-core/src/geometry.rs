//! Display geometry configuration.
//!
//! Panel dimensions are a runtime value validated once at construction, so
//! one binary can drive any supported panel and host tests can pick small
//! geometries. Exactly one geometry is active per framebuffer/controller
//! pair.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported frame: a 128x128 panel packs into 2 KiB.
pub const MAX_FRAME_BYTES: usize = 128 * 128 / 8;

/// Errors from geometry validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Width or height is zero
    ZeroDimension,
    /// Height is not a whole number of 8-pixel pages
    HeightNotPaged,
    /// Frame would exceed [`MAX_FRAME_BYTES`]
    FrameTooLarge,
    /// Column window runs past the controller's byte-valued column space
    WindowOutOfRange,
}

/// The panel variants with built-in geometry and init sequences.
///
/// Modules narrower than the controller's native column count sit centered
/// in its RAM, hence the nonzero column offsets on the small SSD1306s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayVariant {
    /// 64x32 SSD1306 module
    Ssd1306Size64x32,
    /// 72x40 SSD1306 module (common on 0.42" boards)
    Ssd1306Size72x40,
    /// 128x32 SSD1306 module
    Ssd1306Size128x32,
    /// 128x64 SSD1306 module
    Ssd1306Size128x64,
    /// 128x128 SH1107 module
    Sh1107Size128x128,
}

impl DisplayVariant {
    /// Geometry of this variant.
    pub const fn geometry(self) -> Geometry {
        let (width, height, column_offset) = match self {
            DisplayVariant::Ssd1306Size64x32 => (64, 32, 32),
            DisplayVariant::Ssd1306Size72x40 => (72, 40, 28),
            DisplayVariant::Ssd1306Size128x32 => (128, 32, 0),
            DisplayVariant::Ssd1306Size128x64 => (128, 64, 0),
            DisplayVariant::Sh1107Size128x128 => (128, 128, 0),
        };
        Geometry {
            width,
            height,
            column_offset,
        }
    }
}

/// Validated panel geometry.
///
/// Immutable after construction; all buffer addressing and the flush
/// addressing window derive from these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    /// Panel width in pixels
    width: u32,
    /// Panel height in pixels
    height: u32,
    /// First controller RAM column the panel is wired to
    column_offset: u8,
}

impl Geometry {
    /// Escape hatch for panels outside the [`DisplayVariant`] presets.
    ///
    /// Height must be a whole number of 8-pixel pages and the column
    /// window `offset ..= offset + width - 1` must stay within the
    /// controller's byte-valued column space.
    pub const fn custom(
        width: u32,
        height: u32,
        column_offset: u8,
    ) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroDimension);
        }
        if height % 8 != 0 {
            return Err(GeometryError::HeightNotPaged);
        }
        if width as u64 * height as u64 / 8 > MAX_FRAME_BYTES as u64 {
            return Err(GeometryError::FrameTooLarge);
        }
        if column_offset as u32 + width - 1 > 0xFF {
            return Err(GeometryError::WindowOutOfRange);
        }
        Ok(Self {
            width,
            height,
            column_offset,
        })
    }

    /// Panel width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Panel height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// First controller RAM column of the panel.
    pub const fn column_offset(&self) -> u8 {
        self.column_offset
    }

    /// Number of 8-pixel-tall pages.
    pub const fn pages(&self) -> u32 {
        self.height / 8
    }

    /// Packed frame length in bytes.
    pub const fn frame_bytes(&self) -> usize {
        (self.width * self.height / 8) as usize
    }
}
