use crate::lcd::hd44780::driver::HD44780Driver;
use crate::{Delay, GpioPin, GpioResult};
use log::{debug, trace};

/// Time the supply needs to stabilize after power-up before the controller accepts anything.
pub const POWER_ON_DELAY_US: u32 = 650_000;
/// Minimum time E has to stay at each level during a pulse.
pub const ENABLE_PULSE_US: u32 = 1;
/// Time the controller needs to latch and execute a regular instruction.
pub const SETTLE_DELAY_US: u32 = 100;

/// The 8-to-4-bit mode switch: nibbles and the delays that follow them.
const HANDSHAKE: [(u8, u32); 4] = [(0x03, 4500), (0x03, 4500), (0x03, 150), (0x02, 0)];

/// Driver for HD44780 controllers connected over GPIO pins, using the 4-bit data bus.
///
/// R/W has to be tied to ground: the driver never reads from the controller, so the busy flag
/// isn't available and every transfer waits a fixed time instead.
///
/// The driver owns its pins and its delay, so two drivers can't end up sharing a pin.
#[derive(Debug)]
pub struct GpioHD44780Driver<'a> {
    pin_rs: Box<dyn GpioPin + 'a>,
    pin_e: Box<dyn GpioPin + 'a>,
    /// D4, D5, D6, D7.
    data_bus: [Box<dyn GpioPin + 'a>; 4],
    delay: Box<dyn Delay + 'a>,
}

impl<'a> GpioHD44780Driver<'a> {
    /// Creates a new driver.
    ///
    /// # Parameters
    ///
    /// - `pin_rs`: Register select pin.
    /// - `pin_e`: Enable pin.
    /// - `data_bus`: D4, D5, D6 and D7, in that order.
    /// - `delay`: Delay used for all the bus timing.
    ///
    /// The pins don't have to be outputs yet, [HD44780Driver::init_4bit] configures them.
    pub fn new_4bit(
        pin_rs: Box<dyn GpioPin + 'a>,
        pin_e: Box<dyn GpioPin + 'a>,
        data_bus: [Box<dyn GpioPin + 'a>; 4],
        delay: Box<dyn Delay + 'a>,
    ) -> Self {
        GpioHD44780Driver {
            pin_rs,
            pin_e,
            data_bus,
            delay,
        }
    }

    fn pulse_enable(&mut self) -> GpioResult<()> {
        self.pin_e.clear()?;
        self.delay.delay_us(ENABLE_PULSE_US);
        self.pin_e.set()?;
        self.delay.delay_us(ENABLE_PULSE_US);
        self.pin_e.clear()?;
        self.delay.delay_us(SETTLE_DELAY_US);
        Ok(())
    }

    /// Drives D4..D7 with the lower 4 bits of `nibble` and latches them.
    fn write_nibble(&mut self, nibble: u8) -> GpioResult<()> {
        trace!("Writing nibble: {:04b}", nibble & 0x0F);
        for (bit, pin) in self.data_bus.iter_mut().enumerate() {
            pin.write(nibble & (1 << bit) != 0)?;
        }
        self.pulse_enable()
    }

    /// Sends a whole byte, high nibble first. RS has to be set by the caller.
    fn write(&mut self, data: u8) -> GpioResult<()> {
        self.write_nibble(data >> 4)?;
        self.write_nibble(data & 0x0F)
    }

    fn send(&mut self, data: u8, rs: bool) -> GpioResult<()> {
        trace!("Sending data: {:08b}, RS: {}", data, rs);
        self.pin_rs.write(rs)?;
        self.write(data)
    }
}

impl HD44780Driver for GpioHD44780Driver<'_> {
    fn init_4bit(&mut self) -> GpioResult<()> {
        debug!("Configuring HD44780 pins as outputs");
        self.pin_rs.set_output()?;
        self.pin_e.set_output()?;
        for pin in self.data_bus.iter_mut() {
            pin.set_output()?;
        }

        self.delay.delay_us(POWER_ON_DELAY_US);

        self.pin_rs.clear()?;
        self.pin_e.clear()?;

        // The controller may be in 8-bit mode, or halfway through a 4-bit transfer. Three times
        // 0x3 gets it into 8-bit mode from anywhere, 0x2 then switches to 4-bit mode.
        for (nibble, delay) in HANDSHAKE {
            self.write_nibble(nibble)?;
            if delay > 0 {
                self.delay.delay_us(delay);
            }
        }
        debug!("HD44780 switched to 4-bit mode");

        Ok(())
    }

    fn send_command(&mut self, command: u8) -> GpioResult<()> {
        self.send(command, false)
    }

    fn send_data(&mut self, data: u8) -> GpioResult<()> {
        self.send(data, true)
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
