//! Push buttons with press-edge detection
//!
//! Holding a button reports a single press. Contact bounce is not filtered
//! here; polling at the paddle task rate is slow enough for the buttons in
//! use.

use embedded_hal::digital::InputPin;
use rally_core::traits::{PaddleInput, PaddleMove};

/// Reports the released-to-pressed transition of a level signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    was_pressed: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { was_pressed: false }
    }

    /// Feed the current level; true on a new press
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        edge
    }
}

/// Single button on a GPIO input
pub struct Button<P> {
    pin: P,
    /// Pressed reads low (pull-up wiring)
    active_low: bool,
    edge: EdgeDetector,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            edge: EdgeDetector::new(),
        }
    }

    /// Button wired to ground with a pull-up
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Current level; a pin read error counts as released
    pub fn is_pressed(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(_) => false,
        }
    }

    /// True once per press
    pub fn poll_press(&mut self) -> bool {
        let pressed = self.is_pressed();
        self.edge.update(pressed)
    }
}

/// The two paddle buttons
pub struct PaddleButtons<P> {
    toward_top: Button<P>,
    toward_bottom: Button<P>,
    /// Second edge seen in the same poll
    pending: Option<PaddleMove>,
}

impl<P: InputPin> PaddleButtons<P> {
    pub fn new(toward_top: Button<P>, toward_bottom: Button<P>) -> Self {
        Self {
            toward_top,
            toward_bottom,
            pending: None,
        }
    }
}

impl<P: InputPin> PaddleInput for PaddleButtons<P> {
    fn poll_edge(&mut self) -> Option<PaddleMove> {
        if let Some(movement) = self.pending.take() {
            return Some(movement);
        }

        let top = self.toward_top.poll_press();
        let bottom = self.toward_bottom.poll_press();
        match (top, bottom) {
            (true, true) => {
                self.pending = Some(PaddleMove::TowardBottom);
                Some(PaddleMove::TowardTop)
            }
            (true, false) => Some(PaddleMove::TowardTop),
            (false, true) => Some(PaddleMove::TowardBottom),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock input pin reading a shared level
    struct MockPin<'a> {
        high: &'a Cell<bool>,
    }

    impl ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high.get())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high.get())
        }
    }

    #[test]
    fn test_edge_detector() {
        let mut edge = EdgeDetector::new();
        assert!(!edge.update(false));
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn test_active_low_button() {
        let level = Cell::new(true);
        let mut button = Button::active_low(MockPin { high: &level });
        assert!(!button.poll_press());

        level.set(false);
        assert!(button.is_pressed());
        assert!(button.poll_press());
        assert!(!button.poll_press());

        level.set(true);
        assert!(!button.poll_press());
    }

    #[test]
    fn test_paddle_buttons() {
        let top = Cell::new(true);
        let bottom = Cell::new(true);
        let mut buttons = PaddleButtons::new(
            Button::active_low(MockPin { high: &top }),
            Button::active_low(MockPin { high: &bottom }),
        );
        assert_eq!(buttons.poll_edge(), None);

        top.set(false);
        assert_eq!(buttons.poll_edge(), Some(PaddleMove::TowardTop));
        // held
        assert_eq!(buttons.poll_edge(), None);

        top.set(true);
        bottom.set(false);
        assert_eq!(buttons.poll_edge(), Some(PaddleMove::TowardBottom));
    }

    #[test]
    fn test_simultaneous_presses_are_both_reported() {
        let top = Cell::new(false);
        let bottom = Cell::new(false);
        let mut buttons = PaddleButtons::new(
            Button::active_low(MockPin { high: &top }),
            Button::active_low(MockPin { high: &bottom }),
        );
        assert_eq!(buttons.poll_edge(), Some(PaddleMove::TowardTop));
        assert_eq!(buttons.poll_edge(), Some(PaddleMove::TowardBottom));
        assert_eq!(buttons.poll_edge(), None);
    }
}
