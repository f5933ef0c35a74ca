//! Glyph lookup contract and text rendering.
//!
//! The font itself lives outside this crate: anything from a `const`
//! table in flash to generated data can implement [`Font`]. Rendering
//! walks glyph cells left to right and stops at the right margin of the
//! active geometry.

use crate::color::{Color, FontScale};
use crate::framebuffer::Framebuffer;

/// Glyph cell width and height in pixels.
const GLYPH_SIZE: i32 = 8;

/// An 8x8 bitmap font table.
///
/// One glyph per byte value (256 codes), 8 rows per glyph, each row 8
/// horizontal pixels read most-significant-bit first.
pub trait Font {
    /// One row of the glyph for `code`; `row` runs 0..8 top to bottom.
    fn glyph_row(&self, code: u8, row: u8) -> u8;
}

impl<F: Font + ?Sized> Font for &F {
    fn glyph_row(&self, code: u8, row: u8) -> u8 {
        (**self).glyph_row(code, row)
    }
}

impl Framebuffer {
    /// Draw one 8x8 glyph cell.
    ///
    /// The whole cell is overwritten: glyph bits render in `color` and
    /// background bits in its inverse, never transparently. Use
    /// [`xor_rect`](Self::xor_rect) afterwards for highlighting.
    pub fn draw_char<F: Font>(&mut self, x: i32, y: i32, code: u8, color: Color, font: &F) {
        for row in 0..GLYPH_SIZE {
            let mut bits = font.glyph_row(code, row as u8);
            for col in 0..GLYPH_SIZE {
                let px = if bits & 0x80 != 0 {
                    color
                } else {
                    color.inverted()
                };
                self.set_pixel(x + col, y + row, px);
                bits <<= 1;
            }
        }
    }

    /// Draw one glyph cell with each source pixel expanded to a
    /// `scale x scale` block.
    pub fn draw_char_scaled<F: Font>(
        &mut self,
        x: i32,
        y: i32,
        code: u8,
        color: Color,
        scale: FontScale,
        font: &F,
    ) {
        let s = scale.factor();
        for row in 0..GLYPH_SIZE {
            let mut bits = font.glyph_row(code, row as u8);
            for col in 0..GLYPH_SIZE {
                let px = if bits & 0x80 != 0 {
                    color
                } else {
                    color.inverted()
                };
                for dx in 0..s {
                    for dy in 0..s {
                        self.set_pixel(x + col * s + dx, y + row * s + dy, px);
                    }
                }
                bits <<= 1;
            }
        }
    }

    /// Draw a string, advancing one glyph cell per byte.
    ///
    /// Rendering stops once the cursor passes `width - 8`; the rest of
    /// the string is silently dropped. Bytes index the font table
    /// directly, so multi-byte UTF-8 sequences render as their raw bytes.
    pub fn draw_str<F: Font>(&mut self, x: i32, y: i32, text: &str, color: Color, font: &F) {
        let margin = self.geometry().width() as i32 - GLYPH_SIZE;
        let mut x = x;
        for &code in text.as_bytes() {
            self.draw_char(x, y, code, color, font);
            x += GLYPH_SIZE;
            if x > margin {
                break;
            }
        }
    }

    /// Draw a string at a scale, advancing `8 * scale` columns per byte.
    ///
    /// Stops once the cursor passes `width - 8 * scale`, like
    /// [`draw_str`](Self::draw_str) does at scale 1.
    pub fn draw_str_scaled<F: Font>(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        color: Color,
        scale: FontScale,
        font: &F,
    ) {
        let advance = GLYPH_SIZE * scale.factor();
        let margin = self.geometry().width() as i32 - advance;
        let mut x = x;
        for &code in text.as_bytes() {
            self.draw_char_scaled(x, y, code, color, scale, font);
            x += advance;
            if x > margin {
                break;
            }
        }
    }
}
