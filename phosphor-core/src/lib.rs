//! Board-agnostic framebuffer model and rasterizer for monochrome OLED panels
//!
//! This crate contains everything in the display stack that never touches
//! a bus:
//!
//! - Display geometry configuration (preset variants + custom escape hatch)
//! - The packed bit-per-pixel page-layout framebuffer
//! - Drawing primitives (pixels, lines, circles, rectangles, image blit)
//! - Text rendering over an externally supplied 8x8 font table
//!
//! The framebuffer is a plain owned value: construct one per panel, draw
//! into it, then hand it to the transfer controller in `phosphor-driver`
//! to push it over the wire. Host tests drive the whole rasterizer with no
//! hardware attached.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod draw;
pub mod framebuffer;
pub mod geometry;
pub mod text;

pub use color::{BlitMode, Color, FontScale};
pub use framebuffer::Framebuffer;
pub use geometry::{DisplayVariant, Geometry, GeometryError, MAX_FRAME_BYTES};
pub use text::Font;
