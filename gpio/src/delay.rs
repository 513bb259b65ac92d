use std::fmt::Debug;
use std::thread::sleep;
use std::time::Duration;

/// Blocking delay used for the bus timing.
///
/// Implementations may overshoot the requested duration, but must never return early.
pub trait Delay: Debug {
    fn delay_us(&mut self, us: u32);
}

/// [Delay] backed by [std::thread::sleep].
#[derive(Copy, Clone, Debug, Default)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay_us(&mut self, us: u32) {
        sleep(Duration::from_micros(us as u64));
    }
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}
