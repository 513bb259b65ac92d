//! Low-level HD44780 driver interface.
//!
//! [HD44780Driver] encodes the controller's instruction set into opcodes. The implementation only
//! has to provide the transport ([HD44780Driver::send_command], [HD44780Driver::send_data]), the
//! power-on handshake and a delay. See [GpioHD44780Driver] for the 4-bit GPIO implementation.
//!
//! Most users want [HD44780Display](super::HD44780Display) instead, which keeps track of the
//! cursor and the display state.

mod gpio;
#[cfg(test)]
pub(crate) mod recording;

use crate::{GpioError, GpioResult};
pub use gpio::*;
use std::fmt::Debug;

pub const CLEAR_DISPLAY: u8 = 0b00000001;
pub const RETURN_HOME: u8 = 0b00000010;
pub const ENTRY_MODE_SET: u8 = 0b00000100;
pub const DISPLAY_CONTROL: u8 = 0b00001000;
pub const FUNCTION_SET: u8 = 0b00100000;
pub const SET_CGRAM_ADDRESS: u8 = 0b01000000;
pub const SET_DDRAM_ADDRESS: u8 = 0b10000000;

/// Time the controller needs to execute clear display and return home, in microseconds.
pub const LONG_COMMAND_DELAY_US: u32 = 2000;

pub trait HD44780Driver: Debug {
    /// Puts the controller into 4-bit mode from an unknown power-on state.
    ///
    /// Only the electrical part of the initialization: configuring the pins, waiting for the supply
    /// to settle and the mode-switch handshake. Function set and the rest is up to the caller.
    fn init_4bit(&mut self) -> GpioResult<()>;

    /// Clears the display and sets the cursor to the home position.
    ///
    /// Command: `00000001`.
    fn clear_display(&mut self) -> GpioResult<()> {
        self.send_command(CLEAR_DISPLAY)?;
        self.delay_us(LONG_COMMAND_DELAY_US);
        Ok(())
    }

    /// Sets the cursor to the home position and undoes any display shift.
    ///
    /// Command: `0000001?`.
    fn return_home(&mut self) -> GpioResult<()> {
        self.send_command(RETURN_HOME)?;
        self.delay_us(LONG_COMMAND_DELAY_US);
        Ok(())
    }

    /// Sets the entry mode.
    ///
    /// Command: `000001IS`.
    /// `I` is `1` for moving the cursor right after each write, `0` for left.
    /// `S` is `1` for shifting the display along with the cursor.
    fn set_entry_mode(&mut self, cursor_direction: CursorDirection, shift: bool) -> GpioResult<()> {
        let mut command = ENTRY_MODE_SET;
        if cursor_direction == CursorDirection::Right {
            command |= 0b00000010;
        }
        if shift {
            command |= 0b00000001;
        }
        self.send_command(command)
    }

    /// Turns the display on or off, and controls the cursor and its blinking.
    ///
    /// Command: `00001DCB`.
    fn set_display_control(&mut self, control: DisplayControl) -> GpioResult<()> {
        self.send_command(DISPLAY_CONTROL | control.bits())
    }

    /// Sets the number of lines and the font. The data length bit is always `0` (4-bit bus).
    ///
    /// Command: `0010NF??`.
    /// `N` is `1` for two-line mode (also used by 4-line modules).
    /// `F` is `1` for the 5x11 font, only valid in one-line mode.
    fn function_set(&mut self, two_lines: bool, font: Font) -> GpioResult<()> {
        let mut command = FUNCTION_SET;
        if two_lines {
            command |= 0b00001000;
        }
        if font == Font::Font5x11 {
            command |= 0b00000100;
        }
        self.send_command(command)
    }

    /// Sets the CGRAM address. Following data writes go to the glyph memory.
    ///
    /// # Errors
    /// - `GpioError::InvalidArgument` if the address doesn't fit in 6 bits.
    fn set_cgram_address(&mut self, address: u8) -> GpioResult<()> {
        if address > 0b00111111 {
            return Err(GpioError::InvalidArgument);
        }
        self.send_command(SET_CGRAM_ADDRESS | address)
    }

    /// Sets the DDRAM address. Following data writes go to the display memory.
    ///
    /// # Errors
    /// - `GpioError::InvalidArgument` if the address doesn't fit in 7 bits.
    fn set_ddram_address(&mut self, address: u8) -> GpioResult<()> {
        if address > 0b01111111 {
            return Err(GpioError::InvalidArgument);
        }
        self.send_command(SET_DDRAM_ADDRESS | address)
    }

    // Low-level commands
    // Implemented by the transport, used by the high-level functions above.

    /// Sends a command to the HD44780 controller.
    /// Sets the RS pin to 0 (command).
    fn send_command(&mut self, command: u8) -> GpioResult<()>;

    /// Sends data to the HD44780 controller.
    /// Sets the RS pin to 1 (data).
    fn send_data(&mut self, data: u8) -> GpioResult<()>;

    /// Blocks for at least the given amount of microseconds.
    fn delay_us(&mut self, us: u32);
}

impl<D: HD44780Driver + ?Sized> HD44780Driver for Box<D> {
    fn init_4bit(&mut self) -> GpioResult<()> {
        (**self).init_4bit()
    }

    fn send_command(&mut self, command: u8) -> GpioResult<()> {
        (**self).send_command(command)
    }

    fn send_data(&mut self, data: u8) -> GpioResult<()> {
        (**self).send_data(data)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CursorDirection {
    /// Moves the cursor to the left after writing data.
    Left,
    /// Moves the cursor to the right after writing data.
    Right,
}

/// Contents of the display control register.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DisplayControl {
    pub display_on: bool,
    pub cursor_visible: bool,
    pub cursor_blink: bool,
}

impl DisplayControl {
    pub fn new(display_on: bool, cursor_visible: bool, cursor_blink: bool) -> Self {
        DisplayControl {
            display_on,
            cursor_visible,
            cursor_blink,
        }
    }

    /// The `DCB` bits of the display control command.
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.display_on {
            bits |= 0b00000100;
        }
        if self.cursor_visible {
            bits |= 0b00000010;
        }
        if self.cursor_blink {
            bits |= 0b00000001;
        }
        bits
    }
}

/// Character font of the controller.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Font {
    /// 5x8 dots, 8 custom glyphs.
    #[default]
    Font5x8,
    /// 5x11 dots, 4 custom glyphs. Only available on single-line displays.
    Font5x11,
}

impl Font {
    /// Picks the font for the given geometry: single-line displays wider than 10 columns use the
    /// 5x11 font.
    pub fn for_geometry(lines: u8, cols: u8) -> Self {
        if lines == 1 && cols > 10 {
            Font::Font5x11
        } else {
            Font::Font5x8
        }
    }

    /// Rows in a single glyph.
    pub fn glyph_rows(&self) -> usize {
        match self {
            Font::Font5x8 => 8,
            Font::Font5x11 => 11,
        }
    }

    /// Number of custom glyph slots in CGRAM.
    pub fn glyph_slots(&self) -> u8 {
        match self {
            Font::Font5x8 => 8,
            Font::Font5x11 => 4,
        }
    }
}
