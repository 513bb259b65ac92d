//! Simulated GPIO backend.
//!
//! Pins and delays handed out by a [SimGpioDriver] don't touch any hardware, they append
//! [SimEvent]s to a shared log instead. A [SimRecorder] reads the log back and can decode it into
//! the nibbles an HD44780 controller would latch, which is what the driver tests assert on. The
//! demo binary uses it for dry runs.
//!
//! Everything is single-threaded (`Rc`), same as the driver.

use crate::{Delay, GpioActiveLevel, GpioDriver, GpioError, GpioPin, GpioResult};
use bitvec::vec::BitVec;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// A single recorded action.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SimEvent {
    /// The pin at the index was configured as an output.
    SetOutput(usize),
    /// The pin at the index was driven to the given physical level.
    Write(usize, bool),
    /// A delay of the given amount of microseconds.
    Delay(u32),
}

#[derive(Debug)]
struct SimState {
    used_pins: RefCell<BitVec>,
    events: RefCell<Vec<SimEvent>>,
}

impl SimState {
    fn push(&self, event: SimEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Simulated GPIO chip with a fixed amount of pins.
pub struct SimGpioDriver {
    state: Rc<SimState>,
    count: usize,
}

impl SimGpioDriver {
    pub fn new(count: usize) -> Self {
        Self {
            state: Rc::new(SimState {
                used_pins: RefCell::new(BitVec::repeat(false, count)),
                events: RefCell::new(Vec::new()),
            }),
            count,
        }
    }

    /// Gets a handle to the event log of this chip.
    pub fn recorder(&self) -> SimRecorder {
        SimRecorder {
            state: self.state.clone(),
        }
    }

    /// Same as [GpioDriver::get_pin], but returns the owned pin, which doesn't borrow the driver.
    pub fn take_pin(&self, index: usize) -> GpioResult<SimPin> {
        if index >= self.count {
            return Err(GpioError::InvalidArgument);
        }

        let mut used_pins = self.state.used_pins.borrow_mut();
        if used_pins[index] {
            return Err(GpioError::AlreadyInUse);
        }
        used_pins.set(index, true);

        Ok(SimPin {
            state: self.state.clone(),
            index,
            active_level: GpioActiveLevel::High,
            output_level: None,
        })
    }

    /// Gets a delay that records into the same log as the pins.
    pub fn delay(&self) -> SimDelay {
        SimDelay {
            state: self.state.clone(),
        }
    }
}

impl Debug for SimGpioDriver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimGpioDriver({})", self.count)
    }
}

impl GpioDriver for SimGpioDriver {
    fn count(&self) -> GpioResult<usize> {
        Ok(self.count)
    }

    fn get_pin(&self, index: usize) -> GpioResult<Box<dyn GpioPin + '_>> {
        Ok(Box::new(self.take_pin(index)?))
    }
}

pub struct SimPin {
    state: Rc<SimState>,
    index: usize,
    active_level: GpioActiveLevel,
    /// Active level the pin was configured with, `None` until it's an output.
    output_level: Option<GpioActiveLevel>,
}

impl Debug for SimPin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimPin[{}]", self.index)
    }
}

impl GpioPin for SimPin {
    fn set_output(&mut self) -> GpioResult<()> {
        self.output_level = Some(self.active_level);
        self.state.push(SimEvent::SetOutput(self.index));
        Ok(())
    }

    fn write(&mut self, value: bool) -> GpioResult<()> {
        let output_level = self.output_level.ok_or(GpioError::NotOutput)?;
        let level = output_level.get_state(value);
        self.state.push(SimEvent::Write(self.index, level));
        Ok(())
    }

    fn supports_active_level(&self) -> bool {
        true
    }

    fn active_level(&self) -> GpioActiveLevel {
        self.active_level
    }

    fn set_active_level(&mut self, level: GpioActiveLevel) -> GpioResult<()> {
        self.active_level = level;
        Ok(())
    }
}

impl Drop for SimPin {
    fn drop(&mut self) {
        self.state.used_pins.borrow_mut().set(self.index, false);
    }
}

pub struct SimDelay {
    state: Rc<SimState>,
}

impl Debug for SimDelay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDelay")
    }
}

impl Delay for SimDelay {
    fn delay_us(&mut self, us: u32) {
        self.state.push(SimEvent::Delay(us));
    }
}

/// Which simulated pins are connected to which HD44780 inputs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SimWiring {
    pub rs: usize,
    pub e: usize,
    /// D4, D5, D6, D7.
    pub data: [usize; 4],
}

impl Default for SimWiring {
    fn default() -> Self {
        SimWiring {
            rs: 0,
            e: 1,
            data: [2, 3, 4, 5],
        }
    }
}

/// A nibble as latched by the controller on the falling edge of E.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SimLatch {
    /// Level of RS at the moment of latching.
    pub rs: bool,
    pub nibble: u8,
    /// Sum of the delays between this latch and the next one.
    pub settle_us: u64,
}

/// Two consecutive latches, put back together into a byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SimTransfer {
    pub rs: bool,
    pub byte: u8,
    /// Settle time after the low nibble.
    pub settle_us: u64,
}

/// Read access to the event log of a [SimGpioDriver].
#[derive(Clone)]
pub struct SimRecorder {
    state: Rc<SimState>,
}

impl Debug for SimRecorder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimRecorder({} events)", self.state.events.borrow().len())
    }
}

impl SimRecorder {
    pub fn events(&self) -> Vec<SimEvent> {
        self.state.events.borrow().clone()
    }

    /// Forgets all events recorded so far. Pin levels are forgotten as well, so only clear the log
    /// between complete transfers.
    pub fn clear(&self) {
        self.state.events.borrow_mut().clear();
    }

    pub fn delays(&self) -> Vec<u32> {
        self.state
            .events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SimEvent::Delay(us) => Some(*us),
                _ => None,
            })
            .collect()
    }

    /// Decodes the log into the nibbles the controller would have latched.
    pub fn latches(&self, wiring: &SimWiring) -> Vec<SimLatch> {
        let mut levels: HashMap<usize, bool> = HashMap::new();
        let mut latches: Vec<SimLatch> = Vec::new();

        for event in self.state.events.borrow().iter() {
            match *event {
                SimEvent::SetOutput(_) => {}
                SimEvent::Write(pin, level) => {
                    let previous = levels.insert(pin, level).unwrap_or(false);
                    if pin != wiring.e || !previous || level {
                        continue;
                    }
                    // Falling edge of E
                    let level_of = |pin: usize| levels.get(&pin).copied().unwrap_or(false);
                    let nibble = wiring
                        .data
                        .iter()
                        .enumerate()
                        .filter(|(_, pin)| level_of(**pin))
                        .fold(0u8, |acc, (bit, _)| acc | (1 << bit));
                    latches.push(SimLatch {
                        rs: level_of(wiring.rs),
                        nibble,
                        settle_us: 0,
                    });
                }
                SimEvent::Delay(us) => {
                    if let Some(last) = latches.last_mut() {
                        last.settle_us += us as u64;
                    }
                }
            }
        }

        latches
    }

    /// Decodes the log into bytes, skipping the given amount of leading nibbles first (the 4-bit
    /// handshake sends lone nibbles).
    pub fn transfers(&self, wiring: &SimWiring, skip_nibbles: usize) -> Vec<SimTransfer> {
        let latches: Vec<SimLatch> = self.latches(wiring).into_iter().skip(skip_nibbles).collect();
        latches
            .chunks_exact(2)
            .map(|pair| SimTransfer {
                rs: pair[1].rs,
                byte: (pair[0].nibble << 4) | pair[1].nibble,
                settle_us: pair[1].settle_us,
            })
            .collect()
    }
}
