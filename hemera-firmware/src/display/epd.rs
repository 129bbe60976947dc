//! Pico Inky Pack e-paper glue
//!
//! Command-level interface to the UC8151 controller behind the 296x128
//! panel: a 1-bpp frame buffer, scaled 6x8 text, and the documented
//! command sequence for init and refresh. The waveform tables live in
//! the controller's OTP; this module never touches them.
//!
//! All operations are blocking. A full refresh takes on the order of a
//! second or two, which is fine for a display that changes once a
//! minute at most.

use embassy_rp::gpio::{Input, Output};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{block_for, Duration, Instant};

use hemera_display::{DisplayError, EpdBackend};

use super::font::glyph;

/// Panel dimensions as the user sees them
pub const WIDTH: u16 = 296;
pub const HEIGHT: u16 = 128;

const BUF_LEN: usize = (WIDTH as usize) * (HEIGHT as usize) / 8;

/// Longest plausible refresh; past this the panel is assumed wedged
const BUSY_TIMEOUT: Duration = Duration::from_secs(15);

/// UC8151 commands
#[allow(dead_code)]
mod cmd {
    pub const PSR: u8 = 0x00; // Panel setting
    pub const PWR: u8 = 0x01; // Power setting
    pub const POF: u8 = 0x02; // Power off
    pub const PON: u8 = 0x04; // Power on
    pub const BTST: u8 = 0x06; // Booster soft start
    pub const DSLP: u8 = 0x07; // Deep sleep
    pub const DTM1: u8 = 0x10; // Data transmission 1 (old frame)
    pub const DSP: u8 = 0x11; // Data stop
    pub const DRF: u8 = 0x12; // Display refresh
    pub const DTM2: u8 = 0x13; // Data transmission 2 (new frame)
    pub const PLL: u8 = 0x30; // PLL control (frame rate)
    pub const CDI: u8 = 0x50; // Vcom and data interval
    pub const TCON: u8 = 0x60; // TCON setting
    pub const TRES: u8 = 0x61; // Resolution setting
}

/// Pico Inky Pack backend
///
/// Owns the SPI bus and control pins. Drawing goes into the frame
/// buffer; `update` powers the panel, ships the buffer and triggers a
/// refresh.
pub struct InkyPack<'d> {
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
    reset: Output<'d>,
    busy: Input<'d>,
    /// Frame buffer, 1 = white. Column-strip layout: each display
    /// column is 16 vertical bytes, top bit first.
    buffer: [u8; BUF_LEN],
    initialized: bool,
}

impl<'d> InkyPack<'d> {
    pub fn new(
        spi: Spi<'d, SPI0, Blocking>,
        cs: Output<'d>,
        dc: Output<'d>,
        reset: Output<'d>,
        busy: Input<'d>,
    ) -> Self {
        Self {
            spi,
            cs,
            dc,
            reset,
            busy,
            buffer: [0xFF; BUF_LEN],
            initialized: false,
        }
    }

    /// Hardware reset and controller setup
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.reset.set_low();
        block_for(Duration::from_millis(10));
        self.reset.set_high();
        block_for(Duration::from_millis(10));
        self.busy_wait()?;

        // Panel setting: 128x296, OTP LUTs, B/W, scan right/down, booster on
        self.command(cmd::PSR, &[0b1001_1111])?;
        // Power: internal VDH/VDL generation, default voltages
        self.command(cmd::PWR, &[0x03, 0x00, 0x2B, 0x2B, 0x2B])?;
        // Booster soft start, datasheet defaults
        self.command(cmd::BTST, &[0x17, 0x17, 0x17])?;
        // PLL: 100 Hz frame rate
        self.command(cmd::PLL, &[0x3A])?;
        // Vcom/data interval: white border, default interval
        self.command(cmd::CDI, &[0x97])?;
        // TCON: source/gate non-overlap defaults
        self.command(cmd::TCON, &[0x22])?;

        self.initialized = true;
        Ok(())
    }

    /// Set a single pixel; `dark` is ink-on-paper
    fn set_pixel(&mut self, x: u16, y: u16, dark: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        // One display column is HEIGHT/8 vertical bytes
        let idx = (x as usize) * (HEIGHT as usize / 8) + (y as usize / 8);
        let bit = 0x80 >> (y % 8);
        if dark {
            self.buffer[idx] &= !bit;
        } else {
            self.buffer[idx] |= bit;
        }
    }

    /// Draw one glyph cell at (`x`, `y`) scaled by `scale`
    fn draw_glyph(&mut self, x: u16, y: u16, scale: u8, ch: char) {
        let columns = glyph(ch);
        let scale = scale.max(1) as u16;

        for (col, &bits) in columns.iter().enumerate() {
            for row in 0..8u16 {
                if bits & (1u8 << row) == 0 {
                    continue;
                }
                // Replicate the pixel into a scale x scale block
                let base_x = x + col as u16 * scale;
                let base_y = y + row * scale;
                for dx in 0..scale {
                    for dy in 0..scale {
                        self.set_pixel(base_x + dx, base_y + dy, true);
                    }
                }
            }
        }
    }

    /// Send a command byte followed by its data bytes
    fn command(&mut self, command: u8, data: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_low();
        self.dc.set_low();
        let mut result = self
            .spi
            .blocking_write(&[command])
            .map_err(|_| DisplayError::Communication);
        if result.is_ok() && !data.is_empty() {
            self.dc.set_high();
            result = self
                .spi
                .blocking_write(data)
                .map_err(|_| DisplayError::Communication);
        }
        self.cs.set_high();
        result
    }

    /// Wait for the controller to release BUSY (active low)
    fn busy_wait(&mut self) -> Result<(), DisplayError> {
        let deadline = Instant::now() + BUSY_TIMEOUT;
        while self.busy.is_low() {
            if Instant::now() > deadline {
                return Err(DisplayError::Communication);
            }
        }
        Ok(())
    }
}

impl EpdBackend for InkyPack<'_> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.buffer.fill(0xFF);
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, scale: u8, text: &str) -> Result<(), DisplayError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        let advance = 6 * scale.max(1) as u16;
        let mut pen_x = x;
        for ch in text.chars() {
            if pen_x + advance > WIDTH {
                break;
            }
            self.draw_glyph(pen_x, y, scale, ch);
            pen_x += advance;
        }
        Ok(())
    }

    fn update(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        self.command(cmd::PON, &[])?;
        self.busy_wait()?;

        // Ship the new frame
        self.command(cmd::DTM2, &[])?;
        self.cs.set_low();
        self.dc.set_high();
        let sent = self.spi.blocking_write(&self.buffer);
        self.cs.set_high();
        sent.map_err(|_| DisplayError::Communication)?;
        self.command(cmd::DSP, &[])?;

        // Refresh, then power off until the next update
        self.command(cmd::DRF, &[])?;
        self.busy_wait()?;
        self.command(cmd::POF, &[])?;
        self.busy_wait()
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }
}
