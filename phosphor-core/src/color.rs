//! Color and raster-mode types shared by the drawing primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single monochrome pixel value.
///
/// The panel is one bit per pixel: lit or dark. Drawing primitives take an
/// explicit `Color` instead of an integer truthiness flag; XOR operations
/// are colorless by nature and take none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

impl Color {
    /// The opposite color.
    pub const fn inverted(self) -> Self {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }

    /// True when the pixel is lit.
    pub const fn is_on(self) -> bool {
        matches!(self, Color::On)
    }

    /// Byte value that fills one whole page byte with this color.
    pub(crate) const fn fill_byte(self) -> u8 {
        match self {
            Color::Off => 0x00,
            Color::On => 0xFF,
        }
    }
}

/// Combination rule between a source bitmap bit and the destination pixel
/// during an image blit.
///
/// The overwrite modes replace the destination; the set/clear modes leave
/// the destination alone for one of the two source values, which allows
/// layering sprites over existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlitMode {
    /// Destination becomes the source bit
    Overwrite = 0,
    /// Destination becomes the inverted source bit
    OverwriteInverted = 1,
    /// Source 0 clears the destination, source 1 leaves it unchanged
    AndClear = 2,
    /// Source 1 sets the destination, source 0 leaves it unchanged
    OrSet = 3,
    /// Source 0 sets the destination, source 1 leaves it unchanged
    OrSetInverted = 4,
    /// Source 1 clears the destination, source 0 leaves it unchanged
    AndClearInverted = 5,
}

/// Integer scale factor for glyph rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontScale {
    /// 8x8 glyph cells
    #[default]
    X1 = 1,
    /// 16x16 glyph cells
    X2 = 2,
    /// 32x32 glyph cells
    X4 = 4,
    /// 64x64 glyph cells
    X8 = 8,
}

impl FontScale {
    /// Scale factor as a coordinate delta.
    pub const fn factor(self) -> i32 {
        self as i32
    }
}
