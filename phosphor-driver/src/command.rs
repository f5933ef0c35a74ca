//! SSD1306/SH1107 command set and per-variant initialization sequences.
//!
//! Every bus write starts with a control byte telling the controller how
//! to interpret what follows: one command byte, or a run of frame data.
//! Init sequences are plain command streams sent one byte at a time; the
//! slice length bounds them, so no terminator byte exists.

use phosphor_core::DisplayVariant;

/// Control byte: the next byte is a command.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: the following bytes are frame data.
pub const CONTROL_DATA: u8 = 0x40;

/// Frame data payload bytes per bus write during a flush.
pub const PACKET_SIZE: usize = 32;

/// SSD1306/SH1107 command bytes
pub mod cmd {
    /// Turn display off
    pub const DISPLAY_OFF: u8 = 0xAE;
    /// Turn display on
    pub const DISPLAY_ON: u8 = 0xAF;
    /// Normal display mode
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    /// Inverted display mode
    pub const INVERT_DISPLAY: u8 = 0xA7;
    /// Resume display from RAM contents
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    /// Set contrast control
    pub const SET_CONTRAST: u8 = 0x81;
    /// Set memory addressing mode
    pub const MEMORY_MODE: u8 = 0x20;
    /// Set column address range
    pub const COLUMN_ADDR: u8 = 0x21;
    /// Set page address range
    pub const PAGE_ADDR: u8 = 0x22;
    /// Set display start line
    pub const SET_START_LINE: u8 = 0x40;
    /// Set segment re-map
    pub const SEG_REMAP: u8 = 0xA0;
    /// Set multiplex ratio
    pub const SET_MULTIPLEX: u8 = 0xA8;
    /// Set display offset
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    /// Set COM pins hardware configuration
    pub const SET_COM_PINS: u8 = 0xDA;
    /// Set COM output scan direction (remapped)
    pub const COM_SCAN_DEC: u8 = 0xC8;
    /// Set display clock divide ratio
    pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
    /// Set pre-charge period
    pub const SET_PRECHARGE: u8 = 0xD9;
    /// Set VCOMH deselect level
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    /// Charge pump setting
    pub const CHARGE_PUMP: u8 = 0x8D;
    /// Set lower column start address (page addressing)
    pub const SET_LOW_COLUMN: u8 = 0x00;
    /// Set higher column start address (page addressing)
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    /// Set page start address (page addressing)
    pub const SET_PAGE_START: u8 = 0xB0;
    /// SH1107: set display start line (two-byte form)
    pub const SH1107_START_LINE: u8 = 0xDC;
    /// SH1107: DC-DC charge pump control
    pub const SH1107_CHARGE_PUMP: u8 = 0xAD;
}

/// Init stream for 64x32 SSD1306 modules.
pub const INIT_SSD1306_64X32: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0x80, // suggested ratio
    cmd::SET_MULTIPLEX,
    0x1F, // 32 rows
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14, // internal charge pump enabled
    cmd::MEMORY_MODE,
    0x00, // horizontal addressing
    cmd::SEG_REMAP | 0x01,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0x8F,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

/// Init stream for 72x40 SSD1306 modules.
pub const INIT_SSD1306_72X40: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0x80,
    cmd::SET_MULTIPLEX,
    0x27, // 40 rows
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::MEMORY_MODE,
    0x00,
    cmd::SEG_REMAP | 0x01,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0xAF, // these panels run dim at the default drive
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

/// Init stream for 128x32 SSD1306 modules.
pub const INIT_SSD1306_128X32: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0x80,
    cmd::SET_MULTIPLEX,
    0x3F,
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::MEMORY_MODE,
    0x00,
    cmd::SEG_REMAP | 0x01,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x22, // sequential COM, left/right remap
    cmd::SET_CONTRAST,
    0x8F,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

/// Init stream for 128x64 SSD1306 modules.
pub const INIT_SSD1306_128X64: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0x80,
    cmd::SET_MULTIPLEX,
    0x3F, // 64 rows
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::MEMORY_MODE,
    0x00,
    cmd::SEG_REMAP | 0x01,
    cmd::COM_SCAN_DEC,
    cmd::SET_COM_PINS,
    0x12,
    cmd::SET_CONTRAST,
    0x8F,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

/// Init stream for 128x128 SH1107 modules.
///
/// The SH1107 speaks a close dialect of the SSD1306 command set but wants
/// its own drive levels; the double contrast/VCOM writes match the panel
/// vendor's bring-up order.
pub const INIT_SH1107_128X128: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_LOW_COLUMN,
    cmd::SET_HIGH_COLUMN,
    cmd::SET_PAGE_START,
    cmd::SH1107_START_LINE,
    0x00,
    cmd::SET_CONTRAST,
    0x6F,
    cmd::COLUMN_ADDR,
    cmd::DISPLAY_ALL_ON_RESUME,
    cmd::SET_MULTIPLEX,
    0x7F, // 128 rows
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_DISPLAY_CLOCK_DIV,
    0xF0,
    cmd::SET_PRECHARGE,
    0x1D,
    cmd::SET_VCOM_DETECT,
    0x35,
    cmd::SET_START_LINE,
    cmd::SH1107_CHARGE_PUMP,
    0x80,
    cmd::SEG_REMAP,
    0x01,
    cmd::SET_PRECHARGE,
    0x06,
    cmd::SET_CONTRAST,
    0xFE,
    cmd::SET_VCOM_DETECT,
    0xFE,
    cmd::SET_MULTIPLEX,
    0x7F,
    cmd::DISPLAY_ON,
];

/// Built-in init stream for a display variant.
pub const fn init_sequence(variant: DisplayVariant) -> &'static [u8] {
    match variant {
        DisplayVariant::Ssd1306Size64x32 => INIT_SSD1306_64X32,
        DisplayVariant::Ssd1306Size72x40 => INIT_SSD1306_72X40,
        DisplayVariant::Ssd1306Size128x32 => INIT_SSD1306_128X32,
        DisplayVariant::Ssd1306Size128x64 => INIT_SSD1306_128X64,
        DisplayVariant::Sh1107Size128x128 => INIT_SH1107_128X128,
    }
}
