//! Free-running tick counter

use crate::scheduler::is_due;

/// Monotonic 16-bit tick counter
///
/// Advanced by an external timer at a fixed rate and wraps at 65536.
/// Callers must use wrapping arithmetic on the returned values.
pub trait Clock {
    /// Current tick count
    fn now(&mut self) -> u16;

    /// Busy-wait until `deadline` has been reached
    fn wait_until(&mut self, deadline: u16) {
        while !is_due(self.now(), deadline) {
            core::hint::spin_loop();
        }
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now(&mut self) -> u16 {
        (**self).now()
    }

    fn wait_until(&mut self, deadline: u16) {
        (**self).wait_until(deadline)
    }
}
