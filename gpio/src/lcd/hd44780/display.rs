use crate::lcd::hd44780::driver::{CursorDirection, DisplayControl, Font, HD44780Driver};
use crate::lcd::hd44780::{LcdError, LcdResult};
use log::{debug, warn};

/// Largest DDRAM address.
const MAX_DDRAM_ADDRESS: u16 = 0x7F;

/// Which memory the controller's address counter currently points into.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AddressingMode {
    /// Display data, regular text output.
    #[default]
    Ddram,
    /// Character generator, custom glyph upload.
    Cgram,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    Uninitialized,
    Ready,
}

/// DDRAM address of the first column of a row.
///
/// Odd rows start at `0x40`, and every pair of rows continues where the previous pair ended, which
/// is how 2- and 4-line modules lay out their memory.
pub fn row_address(cols: u8, row: u8) -> u16 {
    cols as u16 * (row as u16 / 2) + 0x40 * (row as u16 % 2)
}

/// HD44780 display with cursor tracking.
///
/// Keeps a shadow of the controller state, since the controller can't be read back: the cursor
/// position, the display control register and whether the last address set was a glyph (CGRAM) or
/// a text (DDRAM) one.
///
/// Writing past the end of a row continues at the start of the next one, and past the last row at
/// the top-left corner. The tracking assumes left-to-right entry mode, which is the default.
///
/// All operations take `&mut self`. The multi-nibble transfers aren't atomic, so sharing a display
/// between threads needs a `Mutex` around it.
#[derive(Debug)]
pub struct HD44780Display<D: HD44780Driver> {
    driver: D,
    lines: u8,
    cols: u8,
    row_addresses: Vec<u8>,
    col: u8,
    row: u8,
    display_control: DisplayControl,
    addressing_mode: AddressingMode,
    font: Font,
    state: State,
}

impl<D: HD44780Driver> HD44780Display<D> {
    /// Creates a display of `lines` rows and `cols` columns. Nothing is sent until [Self::init].
    ///
    /// # Errors
    /// - `LcdError::InvalidGeometry` if either dimension is zero, or a row wouldn't fit in the
    ///   DDRAM address space.
    pub fn new(driver: D, lines: u8, cols: u8) -> LcdResult<Self> {
        let fits = |row| row_address(cols, row) + cols as u16 - 1 <= MAX_DDRAM_ADDRESS;
        if lines == 0 || cols == 0 || !(0..lines).all(fits) {
            return Err(LcdError::InvalidGeometry { lines, cols });
        }

        Ok(HD44780Display {
            driver,
            lines,
            cols,
            row_addresses: Vec::new(),
            col: 0,
            row: 0,
            display_control: DisplayControl::default(),
            addressing_mode: AddressingMode::Ddram,
            font: Font::default(),
            state: State::Uninitialized,
        })
    }

    /// Runs the power-on initialization.
    ///
    /// Blocks for well over half a second, most of it waiting for the supply to settle. Leaves the
    /// display cleared, on, with the cursor hidden and text going left to right.
    ///
    /// Has to be called again after the display loses power.
    pub fn init(&mut self) -> LcdResult<()> {
        debug!("Initializing {}x{} HD44780 display", self.cols, self.lines);
        self.state = State::Uninitialized;

        self.driver.init_4bit()?;

        self.font = Font::for_geometry(self.lines, self.cols);
        // Geometry was checked in `new`, every address fits.
        self.row_addresses = (0..self.lines)
            .map(|row| row_address(self.cols, row) as u8)
            .collect();

        self.driver.function_set(self.lines > 1, self.font)?;
        self.driver.clear_display()?;
        self.reset_cursor();
        self.driver.set_entry_mode(CursorDirection::Right, false)?;
        let control = DisplayControl::new(true, false, false);
        self.driver.set_display_control(control)?;
        self.display_control = control;
        self.state = State::Ready;

        debug!("HD44780 ready, font {:?}, rows at {:02X?}", self.font, self.row_addresses);
        Ok(())
    }

    fn ensure_ready(&self) -> LcdResult<()> {
        match self.state {
            State::Ready => Ok(()),
            State::Uninitialized => Err(LcdError::NotInitialized),
        }
    }

    /// Sets all three display control flags at once.
    pub fn set_display(
        &mut self,
        display_on: bool,
        cursor_visible: bool,
        cursor_blink: bool,
    ) -> LcdResult<()> {
        self.update_display_control(DisplayControl::new(display_on, cursor_visible, cursor_blink))
    }

    fn update_display_control(&mut self, control: DisplayControl) -> LcdResult<()> {
        self.ensure_ready()?;
        self.driver.set_display_control(control)?;
        self.display_control = control;
        Ok(())
    }

    pub fn show_text(&mut self) -> LcdResult<()> {
        self.update_display_control(DisplayControl { display_on: true, ..self.display_control })
    }

    pub fn hide_text(&mut self) -> LcdResult<()> {
        self.update_display_control(DisplayControl { display_on: false, ..self.display_control })
    }

    pub fn show_cursor(&mut self) -> LcdResult<()> {
        self.update_display_control(DisplayControl {
            cursor_visible: true,
            ..self.display_control
        })
    }

    pub fn hide_cursor(&mut self) -> LcdResult<()> {
        self.update_display_control(DisplayControl {
            cursor_visible: false,
            ..self.display_control
        })
    }

    pub fn blink_cursor(&mut self) -> LcdResult<()> {
        self.update_display_control(DisplayControl { cursor_blink: true, ..self.display_control })
    }

    pub fn static_cursor(&mut self) -> LcdResult<()> {
        self.update_display_control(DisplayControl { cursor_blink: false, ..self.display_control })
    }

    /// Clears the display and moves the cursor to (0, 0).
    pub fn clear(&mut self) -> LcdResult<()> {
        self.ensure_ready()?;
        self.driver.clear_display()?;
        self.reset_cursor();
        Ok(())
    }

    /// Moves the cursor to (0, 0) and undoes any display shift, keeping the contents.
    pub fn home(&mut self) -> LcdResult<()> {
        self.ensure_ready()?;
        self.driver.return_home()?;
        self.reset_cursor();
        Ok(())
    }

    fn reset_cursor(&mut self) {
        self.col = 0;
        self.row = 0;
        self.addressing_mode = AddressingMode::Ddram;
    }

    /// Sets the entry mode: cursor moving right (or left) after each character, and whether the
    /// whole display shifts along.
    pub fn set_direction(&mut self, write_right: bool, shift_display: bool) -> LcdResult<()> {
        self.ensure_ready()?;
        let direction = if write_right {
            CursorDirection::Right
        } else {
            CursorDirection::Left
        };
        self.driver.set_entry_mode(direction, shift_display)?;
        Ok(())
    }

    /// Moves the cursor to the given column and row, both zero-based.
    ///
    /// # Errors
    /// - `LcdError::RowOutOfRange`, `LcdError::ColumnOutOfRange` if the position is off the
    ///   display.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> LcdResult<()> {
        self.ensure_ready()?;
        if row >= self.lines {
            return Err(LcdError::RowOutOfRange { row, lines: self.lines });
        }
        if col >= self.cols {
            return Err(LcdError::ColumnOutOfRange { col, cols: self.cols });
        }

        self.driver.set_ddram_address(self.row_addresses[row as usize] + col)?;
        self.col = col;
        self.row = row;
        self.addressing_mode = AddressingMode::Ddram;
        Ok(())
    }

    /// Writes a character at the cursor and advances it, wrapping to the next row at the end of
    /// the current one.
    ///
    /// The byte goes to the controller as-is: ASCII for most of the character ROM, `0..=7` for the
    /// custom glyphs.
    pub fn display(&mut self, character: u8) -> LcdResult<()> {
        self.ensure_ready()?;
        if self.col >= self.cols {
            self.change_row()?;
        }
        if self.addressing_mode != AddressingMode::Ddram {
            debug!("Restoring DDRAM address ({}, {})", self.col, self.row);
            self.set_cursor(self.col, self.row)?;
        }
        self.driver.send_data(character)?;
        self.col += 1;
        Ok(())
    }

    /// Writes a character at the given position. The cursor is left right after it, even if that's
    /// past the end of the row; the next [Self::display] call wraps.
    pub fn display_at(&mut self, col: u8, row: u8, character: u8) -> LcdResult<()> {
        self.set_cursor(col, row)?;
        self.driver.send_data(character)?;
        self.col += 1;
        Ok(())
    }

    fn change_row(&mut self) -> LcdResult<()> {
        let row = if self.row + 1 < self.lines { self.row + 1 } else { 0 };
        self.set_cursor(0, row)
    }

    /// Uploads a custom glyph into one of the CGRAM slots, so it can be displayed as character
    /// `location`.
    ///
    /// `glyph` holds one byte per row, top to bottom, with the lower 5 bits being the pixels. 8
    /// rows are used with the 5x8 font and 11 with the 5x11 one; any further rows are ignored.
    /// Locations past the last slot (7, or 3 with the 5x11 font) are clamped to it.
    ///
    /// # Errors
    /// - `LcdError::GlyphTooShort` if `glyph` has fewer rows than the font needs.
    pub fn add_char(&mut self, location: u8, glyph: &[u8]) -> LcdResult<()> {
        self.ensure_ready()?;

        let rows = self.font.glyph_rows();
        if glyph.len() < rows {
            return Err(LcdError::GlyphTooShort {
                expected: rows,
                actual: glyph.len(),
            });
        }

        let last_slot = self.font.glyph_slots() - 1;
        let location = if location > last_slot {
            warn!("Glyph location {} out of range, using {}", location, last_slot);
            last_slot
        } else {
            location
        };

        self.addressing_mode = AddressingMode::Cgram;
        self.driver.set_cgram_address(location << 3)?;
        for &row in &glyph[..rows] {
            self.driver.send_data(row)?;
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state == State::Ready
    }

    /// Tracked cursor position, `(col, row)`.
    pub fn cursor(&self) -> (u8, u8) {
        (self.col, self.row)
    }

    pub fn addressing_mode(&self) -> AddressingMode {
        self.addressing_mode
    }

    pub fn display_control(&self) -> DisplayControl {
        self.display_control
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn lines(&self) -> u8 {
        self.lines
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// DDRAM address of the first column of each row. Empty until initialized.
    pub fn row_addresses(&self) -> &[u8] {
        &self.row_addresses
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Gives the driver back, e.g. to get the pins back.
    pub fn release(self) -> D {
        self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::hd44780::driver::GpioHD44780Driver;
    use crate::lcd::hd44780::driver::recording::RecordingDriver;
    use crate::sim::{SimGpioDriver, SimRecorder, SimWiring};
    use crate::{GpioError, GpioPin, GpioResult};

    fn ready(lines: u8, cols: u8) -> HD44780Display<RecordingDriver> {
        let mut lcd = HD44780Display::new(RecordingDriver::default(), lines, cols).unwrap();
        lcd.init().unwrap();
        lcd.driver.sent.clear();
        lcd.driver.delays.clear();
        lcd
    }

    fn sim_display(
        lines: u8,
        cols: u8,
    ) -> (HD44780Display<GpioHD44780Driver<'static>>, SimRecorder) {
        let sim = SimGpioDriver::new(6);
        let pin = |index| -> Box<dyn GpioPin> { Box::new(sim.take_pin(index).unwrap()) };
        let driver = GpioHD44780Driver::new_4bit(
            pin(0),
            pin(1),
            [pin(2), pin(3), pin(4), pin(5)],
            Box::new(sim.delay()),
        );
        let lcd = HD44780Display::new(driver, lines, cols).unwrap();
        (lcd, sim.recorder())
    }

    #[test]
    fn row_addresses_follow_the_interleaved_layout() {
        for (lines, cols) in [(1, 8), (1, 16), (2, 16), (2, 40), (4, 16), (4, 20)] {
            let lcd = ready(lines, cols);
            assert_eq!(lcd.row_addresses().len(), lines as usize);
            for (i, &address) in lcd.row_addresses().iter().enumerate() {
                let i = i as u16;
                assert_eq!(address as u16, cols as u16 * (i / 2) + 0x40 * (i % 2));
            }
        }
        assert_eq!(ready(4, 20).row_addresses().to_vec(), vec![0x00, 0x40, 0x14, 0x54]);
    }

    #[test]
    fn rejects_invalid_geometry() {
        let err = HD44780Display::new(RecordingDriver::default(), 0, 16).unwrap_err();
        assert_eq!(err, LcdError::InvalidGeometry { lines: 0, cols: 16 });
        assert!(HD44780Display::new(RecordingDriver::default(), 2, 0).is_err());
        // The last row would end at 0x8F
        assert!(HD44780Display::new(RecordingDriver::default(), 4, 40).is_err());
        assert!(HD44780Display::new(RecordingDriver::default(), 1, 128).is_ok());
    }

    #[test]
    fn init_sequence_on_the_wire() {
        let (mut lcd, recorder) = sim_display(2, 16);
        lcd.init().unwrap();

        let wiring = SimWiring::default();
        let nibbles: Vec<u8> = recorder
            .latches(&wiring)
            .iter()
            .take(4)
            .map(|latch| latch.nibble)
            .collect();
        assert_eq!(nibbles, vec![0x3, 0x3, 0x3, 0x2]);

        let transfers = recorder.transfers(&wiring, 4);
        let bytes: Vec<u8> = transfers.iter().map(|transfer| transfer.byte).collect();
        assert_eq!(bytes, vec![0x28, 0x01, 0x06, 0x0C]);
        assert!(transfers.iter().all(|transfer| !transfer.rs));
        assert!(transfers[1].settle_us >= 2000);

        assert!(lcd.is_initialized());
        assert_eq!(lcd.cursor(), (0, 0));
        assert_eq!(lcd.display_control(), DisplayControl::new(true, false, false));
    }

    #[test]
    fn init_picks_the_5x11_font_on_wide_single_line_displays() {
        let mut lcd = HD44780Display::new(RecordingDriver::default(), 1, 16).unwrap();
        lcd.init().unwrap();
        assert!(lcd.driver().initialized);
        assert_eq!(lcd.font(), Font::Font5x11);
        assert_eq!(lcd.driver().commands()[0], 0x24);

        let mut lcd = HD44780Display::new(RecordingDriver::default(), 1, 8).unwrap();
        lcd.init().unwrap();
        assert_eq!(lcd.font(), Font::Font5x8);
        assert_eq!(lcd.driver().commands()[0], 0x20);
    }

    /// Fails every command equal to `failing`.
    #[derive(Debug, Default)]
    struct FailingDriver {
        inner: RecordingDriver,
        failing: u8,
    }

    impl HD44780Driver for FailingDriver {
        fn init_4bit(&mut self) -> GpioResult<()> {
            self.inner.init_4bit()
        }

        fn send_command(&mut self, command: u8) -> GpioResult<()> {
            if command == self.failing {
                return Err(GpioError::Io(std::io::ErrorKind::BrokenPipe));
            }
            self.inner.send_command(command)
        }

        fn send_data(&mut self, data: u8) -> GpioResult<()> {
            self.inner.send_data(data)
        }

        fn delay_us(&mut self, us: u32) {
            self.inner.delay_us(us)
        }
    }

    #[test]
    fn failed_init_leaves_the_display_uninitialized() {
        // Clear, entry mode, display control
        for failing in [0x01, 0x06, 0x0C] {
            let driver = FailingDriver { failing, ..FailingDriver::default() };
            let mut lcd = HD44780Display::new(driver, 2, 16).unwrap();
            assert_eq!(
                lcd.init(),
                Err(LcdError::Gpio(GpioError::Io(std::io::ErrorKind::BrokenPipe)))
            );
            assert!(!lcd.is_initialized());
            assert_eq!(lcd.display(b'A'), Err(LcdError::NotInitialized));
            assert!(lcd.driver().inner.data().is_empty());
        }
    }

    #[test]
    fn init_can_be_retried() {
        let driver = FailingDriver { failing: 0x01, ..FailingDriver::default() };
        let mut lcd = HD44780Display::new(driver, 2, 16).unwrap();
        assert!(lcd.init().is_err());
        lcd.driver.failing = 0xFF;
        lcd.init().unwrap();
        assert!(lcd.is_initialized());
        assert_eq!(lcd.display_control(), DisplayControl::new(true, false, false));
    }

    #[test]
    fn operations_need_init() {
        let mut lcd = HD44780Display::new(RecordingDriver::default(), 2, 16).unwrap();
        assert_eq!(lcd.clear(), Err(LcdError::NotInitialized));
        assert_eq!(lcd.display(b'A'), Err(LcdError::NotInitialized));
        assert_eq!(lcd.set_cursor(0, 0), Err(LcdError::NotInitialized));
        assert_eq!(lcd.add_char(0, &[0; 8]), Err(LcdError::NotInitialized));
        assert!(lcd.driver().sent.is_empty());
    }

    #[test]
    fn clear_sends_a_single_command_and_waits() {
        let (mut lcd, recorder) = sim_display(2, 16);
        lcd.init().unwrap();
        lcd.display(b'A').unwrap();
        lcd.add_char(1, &[0x1F; 8]).unwrap();
        recorder.clear();

        lcd.clear().unwrap();
        let transfers = recorder.transfers(&SimWiring::default(), 0);
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].byte, 0x01);
        assert!(!transfers[0].rs);
        assert!(transfers[0].settle_us >= 2000);
        assert_eq!(lcd.cursor(), (0, 0));
        assert_eq!(lcd.addressing_mode(), AddressingMode::Ddram);
    }

    #[test]
    fn home_resets_the_cursor() {
        let mut lcd = ready(2, 16);
        lcd.set_cursor(5, 1).unwrap();
        lcd.driver.sent.clear();

        lcd.home().unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x02]);
        assert_eq!(lcd.driver().delays, vec![2000]);
        assert_eq!(lcd.cursor(), (0, 0));
    }

    #[test]
    fn set_cursor_sets_the_ddram_address() {
        let mut lcd = ready(4, 20);
        lcd.set_cursor(3, 0).unwrap();
        lcd.set_cursor(0, 1).unwrap();
        lcd.set_cursor(19, 2).unwrap();
        lcd.set_cursor(7, 3).unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x83, 0xC0, 0x80 | 0x27, 0x80 | 0x5B]);
        assert_eq!(lcd.cursor(), (7, 3));
    }

    #[test]
    fn set_cursor_rejects_positions_off_the_display() {
        let mut lcd = ready(2, 16);
        assert_eq!(lcd.set_cursor(0, 2), Err(LcdError::RowOutOfRange { row: 2, lines: 2 }));
        assert_eq!(lcd.set_cursor(16, 0), Err(LcdError::ColumnOutOfRange { col: 16, cols: 16 }));
        assert_eq!(lcd.display_at(0, 5, b'x'), Err(LcdError::RowOutOfRange { row: 5, lines: 2 }));
        assert!(lcd.driver().sent.is_empty());
        assert_eq!(lcd.cursor(), (0, 0));
    }

    #[test]
    fn text_wraps_to_the_next_row() {
        let mut lcd = ready(2, 16);
        lcd.set_cursor(15, 0).unwrap();
        lcd.display(b'a').unwrap();
        assert_eq!(lcd.cursor(), (16, 0));
        lcd.driver.sent.clear();

        lcd.display(b'b').unwrap();
        assert_eq!(lcd.driver().sent, vec![(false, 0xC0), (true, b'b')]);
        assert_eq!(lcd.cursor(), (1, 1));
    }

    #[test]
    fn text_wraps_from_the_last_row_to_the_top() {
        let mut lcd = ready(2, 16);
        lcd.set_cursor(15, 1).unwrap();
        lcd.display(b'a').unwrap();
        lcd.driver.sent.clear();

        lcd.display(b'b').unwrap();
        assert_eq!(lcd.driver().sent, vec![(false, 0x80), (true, b'b')]);
        assert_eq!(lcd.cursor(), (1, 0));
    }

    #[test]
    fn single_line_displays_wrap_onto_themselves() {
        let mut lcd = ready(1, 8);
        for c in b"abcdefgh" {
            lcd.display(*c).unwrap();
        }
        lcd.driver.sent.clear();
        lcd.display(b'i').unwrap();
        assert_eq!(lcd.driver().sent, vec![(false, 0x80), (true, b'i')]);
    }

    #[test]
    fn display_at_writes_without_wrapping() {
        let mut lcd = ready(2, 16);
        lcd.display_at(15, 0, b'z').unwrap();
        assert_eq!(lcd.driver().sent, vec![(false, 0x8F), (true, b'z')]);
        assert_eq!(lcd.cursor(), (16, 0));
    }

    #[test]
    fn set_display_recomputes_every_flag() {
        let mut lcd = ready(2, 16);
        lcd.set_display(true, false, true).unwrap();
        lcd.set_display(true, true, true).unwrap();
        lcd.set_display(false, false, false).unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x0D, 0x0F, 0x08]);
        assert_eq!(lcd.display_control(), DisplayControl::default());
    }

    #[test]
    fn toggles_change_a_single_flag() {
        let mut lcd = ready(2, 16);
        lcd.show_cursor().unwrap();
        lcd.blink_cursor().unwrap();
        lcd.hide_text().unwrap();
        lcd.static_cursor().unwrap();
        lcd.show_text().unwrap();
        lcd.hide_cursor().unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x0E, 0x0F, 0x0B, 0x0A, 0x0E, 0x0C]);
    }

    #[test]
    fn set_direction_sets_the_entry_mode() {
        let mut lcd = ready(2, 16);
        lcd.set_direction(true, false).unwrap();
        lcd.set_direction(false, true).unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x06, 0x05]);
    }

    #[test]
    fn add_char_uploads_the_glyph() {
        let mut lcd = ready(2, 16);
        let glyph = [0x00, 0x0A, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00];
        lcd.add_char(2, &glyph).unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x40 | (2 << 3)]);
        assert_eq!(lcd.driver().data(), glyph.to_vec());
        assert_eq!(lcd.addressing_mode(), AddressingMode::Cgram);
    }

    #[test]
    fn display_after_add_char_restores_the_ddram_address() {
        let mut lcd = ready(2, 16);
        lcd.set_cursor(4, 1).unwrap();
        lcd.add_char(0, &[0x1F; 8]).unwrap();
        lcd.driver.sent.clear();

        lcd.display(b'A').unwrap();
        assert_eq!(lcd.driver().sent, vec![(false, 0x80 | 0x44), (true, b'A')]);
        assert_eq!(lcd.addressing_mode(), AddressingMode::Ddram);
        assert_eq!(lcd.cursor(), (5, 1));
    }

    #[test]
    fn add_char_clamps_the_location() {
        let mut lcd = ready(2, 16);
        lcd.add_char(9, &[0; 8]).unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x40 | (7 << 3)]);

        let mut lcd = ready(1, 16);
        lcd.add_char(5, &[0; 11]).unwrap();
        assert_eq!(lcd.driver().commands(), vec![0x40 | (3 << 3)]);
        assert_eq!(lcd.driver().data().len(), 11);
    }

    #[test]
    fn add_char_needs_a_full_glyph() {
        let mut lcd = ready(1, 16);
        assert_eq!(
            lcd.add_char(0, &[0; 8]),
            Err(LcdError::GlyphTooShort { expected: 11, actual: 8 })
        );
        assert!(lcd.driver().sent.is_empty());
        assert_eq!(lcd.addressing_mode(), AddressingMode::Ddram);

        // Extra rows are ignored
        let mut lcd = ready(2, 16);
        lcd.add_char(0, &[0x01; 11]).unwrap();
        assert_eq!(lcd.driver().data().len(), 8);
    }

    #[test]
    fn gpio_errors_are_passed_through() {
        // Pins are never configured as outputs without init
        let (lcd, _) = sim_display(2, 16);
        let mut driver = lcd.release();
        assert_eq!(driver.send_data(b'A'), Err(GpioError::NotOutput));
        assert_eq!(LcdError::from(GpioError::NotOutput), LcdError::Gpio(GpioError::NotOutput));
    }
}
