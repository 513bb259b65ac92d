//! GPIO abstraction and a 4-bit HD44780 character LCD driver built on top of it.
//!
//! The [lcd::hd44780] module holds the driver itself. Pins come from a [GpioDriver], either the
//! [gpiod] backend on real hardware or the [sim] backend, which records everything it's asked to
//! do and is used by the tests and dry runs.

pub mod delay;
pub mod gpiod;
pub mod lcd;
pub mod sim;

use std::fmt::Debug;
use thiserror::Error;

pub use delay::*;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum GpioError {
    #[error("pin already in use")]
    AlreadyInUse,
    #[error("invalid argument")]
    InvalidArgument,
    #[error("the feature is not supported on this backend")]
    NotSupported,
    #[error("pin is not configured as an output")]
    NotOutput,
    #[error("IO error: {0}")]
    Io(std::io::ErrorKind),
}

impl From<std::io::Error> for GpioError {
    fn from(err: std::io::Error) -> Self {
        GpioError::Io(err.kind())
    }
}

pub type GpioResult<T> = Result<T, GpioError>;

pub trait GpioDriver: Debug {
    /// Gets the amount of GPIO pins available.
    fn count(&self) -> GpioResult<usize>;

    /// Gets the GPIO pin at the given index.
    ///
    /// # Errors
    /// - `GpioError::InvalidArgument` if the index is out of range.
    /// - `GpioError::AlreadyInUse` if the pin has been handed out and not dropped yet.
    fn get_pin(&self, index: usize) -> GpioResult<Box<dyn GpioPin + '_>>;
}

/// Specifies the active level of the GPIO pin.
///
/// By default, the active level is high.
///
/// Might be software-implemented.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum GpioActiveLevel {
    #[default] High,
    Low,
}

impl GpioActiveLevel {
    /// Gets the physical level that will be output on the pin for a logical value.
    pub fn get_state(&self, value: bool) -> bool {
        match self {
            GpioActiveLevel::High => value,
            GpioActiveLevel::Low => !value,
        }
    }
}

/// A single output line.
///
/// [GpioPin::set_output] has to be called once before the pin is driven; backends report
/// `GpioError::NotOutput` otherwise.
pub trait GpioPin: Debug {
    /// Configures the GPIO pin as an output.
    fn set_output(&mut self) -> GpioResult<()>;

    /// Drives the pin to the given logical level.
    fn write(&mut self, value: bool) -> GpioResult<()>;

    /// Drives the pin high (logically).
    fn set(&mut self) -> GpioResult<()> {
        self.write(true)
    }

    /// Drives the pin low (logically).
    fn clear(&mut self) -> GpioResult<()> {
        self.write(false)
    }

    /// Gets whether the GPIO pin supports active level.
    fn supports_active_level(&self) -> bool {
        false
    }
    /// Gets the active level of the GPIO pin.
    fn active_level(&self) -> GpioActiveLevel {
        GpioActiveLevel::High
    }
    /// Sets the active level of the GPIO pin.
    ///
    /// Takes effect the next time [GpioPin::set_output] is called.
    ///
    /// # Errors
    /// - `GpioError::NotSupported` if the pin does not support active level.
    fn set_active_level(&mut self, _level: GpioActiveLevel) -> GpioResult<()> {
        Err(GpioError::NotSupported)
    }
    fn with_active_level(mut self, level: GpioActiveLevel) -> GpioResult<Self>
    where
        Self: Sized,
    {
        self.set_active_level(level)?;
        Ok(self)
    }
}

impl<P: GpioPin + ?Sized> GpioPin for Box<P> {
    fn set_output(&mut self) -> GpioResult<()> {
        (**self).set_output()
    }

    fn write(&mut self, value: bool) -> GpioResult<()> {
        (**self).write(value)
    }

    fn supports_active_level(&self) -> bool {
        (**self).supports_active_level()
    }

    fn active_level(&self) -> GpioActiveLevel {
        (**self).active_level()
    }

    fn set_active_level(&mut self, level: GpioActiveLevel) -> GpioResult<()> {
        (**self).set_active_level(level)
    }
}
