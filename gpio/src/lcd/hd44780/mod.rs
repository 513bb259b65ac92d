//! HD44780 character LCD module.
//!
//! Two layers:
//! - [driver] talks to the controller: instruction encoding ([driver::HD44780Driver]) and the
//!   4-bit GPIO transport ([driver::GpioHD44780Driver]);
//! - [HD44780Display] sits on top, runs the initialization sequence and keeps track of the cursor,
//!   so text wraps from one row to the next and writes after a glyph upload land where expected.
//!
//! ```no_run
//! use hd44780_gpio::{GpioDriver, StdDelay};
//! use hd44780_gpio::gpiod::GpiodDriver;
//! use hd44780_gpio::lcd::hd44780::{DisplayExt, HD44780Display};
//! use hd44780_gpio::lcd::hd44780::driver::GpioHD44780Driver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gpio = GpiodDriver::open("/dev/gpiochip0")?;
//! let driver = GpioHD44780Driver::new_4bit(
//!     gpio.get_pin(22)?,
//!     gpio.get_pin(17)?,
//!     [gpio.get_pin(26)?, gpio.get_pin(16)?, gpio.get_pin(20)?, gpio.get_pin(21)?],
//!     Box::new(StdDelay),
//! );
//! let mut lcd = HD44780Display::new(driver, 2, 16)?;
//! lcd.init()?;
//! lcd.print("Hello, world!")?;
//! # Ok(())
//! # }
//! ```

pub mod driver;
mod display;
mod print;

use crate::GpioError;
pub use display::*;
pub use print::*;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum LcdError {
    #[error("display is not initialized")]
    NotInitialized,
    #[error("invalid display geometry: {lines} lines of {cols} columns")]
    InvalidGeometry { lines: u8, cols: u8 },
    #[error("row {row} out of range, the display has {lines} lines")]
    RowOutOfRange { row: u8, lines: u8 },
    #[error("column {col} out of range, the display has {cols} columns")]
    ColumnOutOfRange { col: u8, cols: u8 },
    #[error("glyph has {actual} rows, the font needs {expected}")]
    GlyphTooShort { expected: usize, actual: usize },
    #[error("GPIO error: {0}")]
    Gpio(#[from] GpioError),
}

pub type LcdResult<T> = Result<T, LcdError>;
