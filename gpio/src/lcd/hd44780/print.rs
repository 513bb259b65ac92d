use crate::lcd::hd44780::driver::HD44780Driver;
use crate::lcd::hd44780::{HD44780Display, LcdResult};
use log::warn;

pub trait DisplayExt {
    /// Prints a string at the cursor, wrapping like [HD44780Display::display].
    ///
    /// The character ROM only has ASCII in common with Unicode, so anything else is printed as `?`.
    fn print(&mut self, s: &str) -> LcdResult<()>;

    /// Prints raw character codes at the cursor. Use this for custom glyphs (`0..=7`) and the
    /// non-ASCII half of the character ROM.
    ///
    /// `0` is the first custom glyph, not a terminator.
    fn print_bytes(&mut self, bytes: &[u8]) -> LcdResult<()>;
}

impl<D: HD44780Driver> DisplayExt for HD44780Display<D> {
    fn print(&mut self, s: &str) -> LcdResult<()> {
        for c in s.chars() {
            if c.is_ascii() {
                self.display(c as u8)?;
            } else {
                warn!("Non-ASCII character: {}", c);
                self.display(b'?')?;
            }
        }
        Ok(())
    }

    fn print_bytes(&mut self, bytes: &[u8]) -> LcdResult<()> {
        for &byte in bytes {
            self.display(byte)?;
        }
        Ok(())
    }
}
