//! SSD1306/SH1107 transfer controller over embedded-hal I2C
//!
//! This crate owns the bus-facing half of the display stack:
//!
//! - The controller command set and per-variant init sequences
//! - The Uninitialized -> Active controller lifecycle
//! - The addressing-window + chunked-data flush protocol
//!
//! Framebuffer contents and rasterization live in `phosphor-core`; this
//! crate only moves finished frames over the wire. Every transfer blocks
//! until the bus transaction completes or its timeout elapses.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod driver;

pub use driver::{Error, Oled, DEFAULT_ADDRESS};
