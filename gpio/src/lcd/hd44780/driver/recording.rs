use crate::GpioResult;
use crate::lcd::hd44780::driver::HD44780Driver;

/// Driver that only remembers what it was asked to send.
#[derive(Debug, Default)]
pub(crate) struct RecordingDriver {
    pub initialized: bool,
    /// `(rs, byte)` pairs.
    pub sent: Vec<(bool, u8)>,
    pub delays: Vec<u32>,
}

impl RecordingDriver {
    pub fn commands(&self) -> Vec<u8> {
        self.sent
            .iter()
            .filter(|(rs, _)| !rs)
            .map(|(_, byte)| *byte)
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.sent
            .iter()
            .filter(|(rs, _)| *rs)
            .map(|(_, byte)| *byte)
            .collect()
    }
}

impl HD44780Driver for RecordingDriver {
    fn init_4bit(&mut self) -> GpioResult<()> {
        self.initialized = true;
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> GpioResult<()> {
        self.sent.push((false, command));
        Ok(())
    }

    fn send_data(&mut self, data: u8) -> GpioResult<()> {
        self.sent.push((true, data));
        Ok(())
    }

    fn delay_us(&mut self, us: u32) {
        self.delays.push(us);
    }
}
