//! SSD1306/SH1107 transfer controller.
//!
//! Owns the I2C peripheral and pushes a caller-owned [`Framebuffer`] to
//! the panel: a one-shot initialization command stream, then per-frame
//! addressing-window commands followed by the buffer in fixed-size data
//! chunks. There is no read-back path; the only failure signal is the
//! bus transaction's own result.

use embedded_hal::i2c::I2c;

use phosphor_core::{Color, DisplayVariant, Framebuffer, Geometry};

use crate::command::{cmd, init_sequence, CONTROL_COMMAND, CONTROL_DATA, PACKET_SIZE};

/// I2C address most modules strap the controller to.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Errors from controller operations.
///
/// Drawing never fails; only bus transfers do. The two transport variants
/// tell callers whether the panel still shows the previous frame or a
/// partial one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A command write failed. The command stream stopped there and no
    /// frame data followed, so the panel content is unchanged (though the
    /// controller configuration may be half-applied during `init`).
    Command(E),
    /// A frame data chunk failed after `bytes_sent` buffer bytes were
    /// already written; the panel keeps showing a partially updated frame.
    Data {
        /// Frame bytes that reached the panel before the failure
        bytes_sent: usize,
        /// The underlying bus error
        source: E,
    },
    /// Operation requires a completed [`Oled::init`].
    NotInitialized,
}

/// Transfer controller for one panel.
///
/// Two states: Uninitialized (fresh from [`Oled::new`]) and Active (after
/// a successful [`Oled::init`]). Flush and the panel tweaks below refuse
/// to run while Uninitialized. Exactly one geometry is active per
/// controller instance; build the matching [`Framebuffer`] from the same
/// [`Geometry`].
pub struct Oled<I2C> {
    i2c: I2C,
    address: u8,
    geometry: Geometry,
    init_commands: &'static [u8],
    initialized: bool,
}

impl<I2C: I2c> Oled<I2C> {
    /// Controller for one of the known display variants.
    pub fn new(i2c: I2C, address: u8, variant: DisplayVariant) -> Self {
        Self {
            i2c,
            address,
            geometry: variant.geometry(),
            init_commands: init_sequence(variant),
            initialized: false,
        }
    }

    /// Escape hatch for panels outside the preset list: the caller
    /// supplies a validated geometry and the full init command stream.
    pub fn with_custom(
        i2c: I2C,
        address: u8,
        geometry: Geometry,
        init_commands: &'static [u8],
    ) -> Self {
        Self {
            i2c,
            address,
            geometry,
            init_commands,
            initialized: false,
        }
    }

    /// Geometry this controller addresses.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Hardware reset.
    ///
    /// The reset line is not wired on the I2C interface, so this does
    /// nothing; it exists to keep bring-up call sites uniform with
    /// transports that do pulse a pin.
    pub fn reset(&mut self) {}

    /// Initialize the controller and show a cleared framebuffer.
    ///
    /// Clears `fb`, writes the init stream one command at a time, then
    /// flushes the cleared frame. The first failed write aborts the rest
    /// of the stream without retry or rollback; the controller may be
    /// left half-configured, and a later `init` starts over from the
    /// top. The controller becomes Active only when everything succeeded.
    pub fn init(&mut self, fb: &mut Framebuffer) -> Result<(), Error<I2C::Error>> {
        debug_assert_eq!(
            fb.geometry(),
            self.geometry,
            "framebuffer was built for a different panel"
        );
        self.initialized = false;
        self.reset();
        fb.fill(Color::Off);

        let stream = self.init_commands;
        for &byte in stream {
            self.command(byte)?;
        }

        self.flush_frame(fb)?;
        self.initialized = true;
        Ok(())
    }

    /// Push the framebuffer to the panel (Active only).
    ///
    /// Sets the addressing window to the panel's column range and full
    /// page range, then streams the buffer in ascending order. A
    /// mid-stream failure is reported, not retried; the panel then shows
    /// a mix of the old and new frame until the next successful flush.
    pub fn flush(&mut self, fb: &Framebuffer) -> Result<(), Error<I2C::Error>> {
        self.ensure_active()?;
        debug_assert_eq!(
            fb.geometry(),
            self.geometry,
            "framebuffer was built for a different panel"
        );
        self.flush_frame(fb)
    }

    /// Set panel contrast, 0 (dimmest) to 255 (Active only).
    pub fn set_contrast(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.ensure_active()?;
        self.command(cmd::SET_CONTRAST)?;
        self.command(value)
    }

    /// Blank or restore the panel without touching its RAM (Active only).
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        self.ensure_active()?;
        self.command(if on {
            cmd::DISPLAY_ON
        } else {
            cmd::DISPLAY_OFF
        })
    }

    /// Invert panel colors without redrawing the buffer (Active only).
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        self.ensure_active()?;
        self.command(if inverted {
            cmd::INVERT_DISPLAY
        } else {
            cmd::NORMAL_DISPLAY
        })
    }

    /// Tear the controller down and hand the bus peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn ensure_active(&self) -> Result<(), Error<I2C::Error>> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Addressing window plus the full buffer in `PACKET_SIZE` chunks.
    fn flush_frame(&mut self, fb: &Framebuffer) -> Result<(), Error<I2C::Error>> {
        let col_start = self.geometry.column_offset();
        // validated at geometry construction to fit a command byte
        let col_end = (col_start as u32 + self.geometry.width() - 1) as u8;
        let page_end = (self.geometry.pages() - 1) as u8;

        self.command(cmd::COLUMN_ADDR)?;
        self.command(col_start)?;
        self.command(col_end)?;
        self.command(cmd::PAGE_ADDR)?;
        self.command(0x00)?;
        self.command(page_end)?;

        let mut bytes_sent = 0;
        for chunk in fb.as_bytes().chunks(PACKET_SIZE) {
            self.data(chunk).map_err(|source| Error::Data {
                bytes_sent,
                source,
            })?;
            bytes_sent += chunk.len();
        }
        Ok(())
    }

    /// Send one command byte behind the command control byte.
    fn command(&mut self, byte: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, byte])
            .map_err(Error::Command)
    }

    /// Send up to [`PACKET_SIZE`] frame bytes behind the data control
    /// byte. Longer input is silently truncated; `flush_frame` chunks the
    /// buffer so nothing is dropped on that path.
    fn data(&mut self, chunk: &[u8]) -> Result<(), I2C::Error> {
        let len = chunk.len().min(PACKET_SIZE);
        let mut pkt = [0u8; PACKET_SIZE + 1];
        pkt[0] = CONTROL_DATA;
        pkt[1..=len].copy_from_slice(&chunk[..len]);
        self.i2c.write(self.address, &pkt[..len + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, Operation};
    use phosphor_core::BlitMode;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    impl embedded_hal::i2c::Error for BusFault {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    /// Records every write; optionally fails the Nth one.
    struct MockI2c {
        writes: Vec<Vec<u8>>,
        fail_at: Option<usize>,
    }

    impl MockI2c {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail_at: None,
            }
        }

        fn failing_at(n: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_at: Some(n),
            }
        }
    }

    impl ErrorType for MockI2c {
        type Error = BusFault;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if self.fail_at == Some(self.writes.len()) {
                            return Err(BusFault);
                        }
                        self.writes.push(bytes.to_vec());
                    }
                    Operation::Read(_) => unimplemented!("driver never reads"),
                }
            }
            Ok(())
        }
    }

    fn new_oled(i2c: MockI2c) -> (Oled<MockI2c>, Framebuffer) {
        let variant = DisplayVariant::Ssd1306Size128x64;
        let oled = Oled::new(i2c, DEFAULT_ADDRESS, variant);
        let fb = Framebuffer::new(variant.geometry());
        (oled, fb)
    }

    fn init_len() -> usize {
        crate::command::INIT_SSD1306_128X64.len()
    }

    #[test]
    fn test_init_sends_stream_then_window_then_frame() {
        let (mut oled, mut fb) = new_oled(MockI2c::new());
        oled.init(&mut fb).unwrap();

        let writes = &oled.i2c.writes;
        // init commands + 6 window commands + 1024/32 data chunks
        assert_eq!(writes.len(), init_len() + 6 + 32);

        // every init command is a 2-byte [0x00, cmd] write
        for (i, &byte) in crate::command::INIT_SSD1306_128X64.iter().enumerate() {
            assert_eq!(writes[i], [CONTROL_COMMAND, byte]);
        }
        // first data chunk is 0x40 + 32 zero bytes
        let first_chunk = &writes[init_len() + 6];
        assert_eq!(first_chunk.len(), PACKET_SIZE + 1);
        assert_eq!(first_chunk[0], CONTROL_DATA);
        assert!(first_chunk[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_init_clears_framebuffer() {
        let (mut oled, mut fb) = new_oled(MockI2c::new());
        fb.fill(Color::On);
        oled.init(&mut fb).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_init_fails_fast_on_command_error() {
        let (mut oled, mut fb) = new_oled(MockI2c::failing_at(3));
        assert_eq!(oled.init(&mut fb), Err(Error::Command(BusFault)));
        // commands 0..3 were written, nothing after the failure
        assert_eq!(oled.i2c.writes.len(), 3);
        // still refuses to flush
        assert_eq!(oled.flush(&fb), Err(Error::NotInitialized));
    }

    #[test]
    fn test_flush_window_and_chunking() {
        let (mut oled, mut fb) = new_oled(MockI2c::new());
        oled.init(&mut fb).unwrap();
        oled.i2c.writes.clear();

        fb.fill(Color::On);
        oled.flush(&fb).unwrap();

        let writes = &oled.i2c.writes;
        assert_eq!(writes.len(), 6 + 32);

        // addressing window: columns offset..offset+127, pages 0..7
        assert_eq!(writes[0], [CONTROL_COMMAND, cmd::COLUMN_ADDR]);
        assert_eq!(writes[1], [CONTROL_COMMAND, 0]);
        assert_eq!(writes[2], [CONTROL_COMMAND, 127]);
        assert_eq!(writes[3], [CONTROL_COMMAND, cmd::PAGE_ADDR]);
        assert_eq!(writes[4], [CONTROL_COMMAND, 0]);
        assert_eq!(writes[5], [CONTROL_COMMAND, 7]);

        // data packets: 0x40 prefix, payload <= PACKET_SIZE, buffer order
        let mut streamed = Vec::new();
        for pkt in &writes[6..] {
            assert_eq!(pkt[0], CONTROL_DATA);
            assert!(pkt.len() <= PACKET_SIZE + 1);
            streamed.extend_from_slice(&pkt[1..]);
        }
        assert_eq!(streamed, fb.as_bytes());
    }

    #[test]
    fn test_flush_window_uses_column_offset() {
        let variant = DisplayVariant::Ssd1306Size64x32;
        let mut oled = Oled::new(MockI2c::new(), DEFAULT_ADDRESS, variant);
        let mut fb = Framebuffer::new(variant.geometry());
        oled.init(&mut fb).unwrap();
        oled.i2c.writes.clear();

        oled.flush(&fb).unwrap();
        let writes = &oled.i2c.writes;
        // 64-wide panel sits at controller columns 32..=95
        assert_eq!(writes[1], [CONTROL_COMMAND, 32]);
        assert_eq!(writes[2], [CONTROL_COMMAND, 95]);
        assert_eq!(writes[5], [CONTROL_COMMAND, 3]);
        // 256-byte frame in 8 chunks
        assert_eq!(writes.len(), 6 + 8);
    }

    #[test]
    fn test_flush_short_tail_chunk() {
        // 72x40 frame is 360 bytes: 11 full chunks and one 8-byte tail
        let variant = DisplayVariant::Ssd1306Size72x40;
        let mut oled = Oled::new(MockI2c::new(), DEFAULT_ADDRESS, variant);
        let mut fb = Framebuffer::new(variant.geometry());
        oled.init(&mut fb).unwrap();
        oled.i2c.writes.clear();

        oled.flush(&fb).unwrap();
        let data_pkts = &oled.i2c.writes[6..];
        assert_eq!(data_pkts.len(), 12);
        assert!(data_pkts[..11].iter().all(|p| p.len() == PACKET_SIZE + 1));
        assert_eq!(data_pkts[11].len(), 8 + 1);
    }

    #[test]
    fn test_flush_reports_partial_progress() {
        let (mut oled, mut fb) = new_oled(MockI2c::new());
        oled.init(&mut fb).unwrap();

        // fail on the 11th write of the next flush: 6 commands, then
        // 4 good chunks, failing on the 5th
        let sent = oled.i2c.writes.len();
        oled.i2c.fail_at = Some(sent + 6 + 4);

        assert_eq!(
            oled.flush(&fb),
            Err(Error::Data {
                bytes_sent: 4 * PACKET_SIZE,
                source: BusFault,
            })
        );
    }

    #[test]
    fn test_flush_refused_before_init() {
        let (mut oled, fb) = new_oled(MockI2c::new());
        assert_eq!(oled.flush(&fb), Err(Error::NotInitialized));
        assert!(oled.i2c.writes.is_empty());
    }

    #[test]
    fn test_panel_tweaks_refused_before_init() {
        let (mut oled, _fb) = new_oled(MockI2c::new());
        assert_eq!(oled.set_contrast(0x7F), Err(Error::NotInitialized));
        assert_eq!(oled.set_display_on(true), Err(Error::NotInitialized));
        assert_eq!(oled.set_inverted(true), Err(Error::NotInitialized));
    }

    #[test]
    fn test_panel_tweaks_send_expected_commands() {
        let (mut oled, mut fb) = new_oled(MockI2c::new());
        oled.init(&mut fb).unwrap();
        oled.i2c.writes.clear();

        oled.set_contrast(0xC0).unwrap();
        oled.set_display_on(false).unwrap();
        oled.set_inverted(true).unwrap();
        oled.set_inverted(false).unwrap();

        let writes = &oled.i2c.writes;
        assert_eq!(writes[0], [CONTROL_COMMAND, cmd::SET_CONTRAST]);
        assert_eq!(writes[1], [CONTROL_COMMAND, 0xC0]);
        assert_eq!(writes[2], [CONTROL_COMMAND, cmd::DISPLAY_OFF]);
        assert_eq!(writes[3], [CONTROL_COMMAND, cmd::INVERT_DISPLAY]);
        assert_eq!(writes[4], [CONTROL_COMMAND, cmd::NORMAL_DISPLAY]);
    }

    #[test]
    fn test_flush_carries_drawn_content() {
        let (mut oled, mut fb) = new_oled(MockI2c::new());
        oled.init(&mut fb).unwrap();
        oled.i2c.writes.clear();

        fb.draw_rect(0, 0, 128, 64, Color::On);
        fb.draw_image(10, 16, &[0xFF; 4], 16, 2, BlitMode::OrSet);
        oled.flush(&fb).unwrap();

        let mut streamed = Vec::new();
        for pkt in &oled.i2c.writes[6..] {
            streamed.extend_from_slice(&pkt[1..]);
        }
        assert_eq!(streamed, fb.as_bytes());
        assert_ne!(streamed.iter().filter(|&&b| b != 0).count(), 0);
    }

    #[test]
    fn test_release_returns_bus() {
        let (oled, _fb) = new_oled(MockI2c::new());
        let i2c = oled.release();
        assert!(i2c.writes.is_empty());
    }
}
