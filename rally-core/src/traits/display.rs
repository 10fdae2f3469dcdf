//! Pixel display sink

/// Monochrome pixel display
///
/// Coordinates outside the display are ignored by implementations.
pub trait PixelDisplay {
    /// Turn a single pixel on or off
    fn set_pixel(&mut self, column: u8, row: u8, on: bool);

    /// Turn every pixel off
    fn clear(&mut self);

    /// Push pending changes to the hardware
    ///
    /// Called periodically by the display task. Multiplexed displays drive
    /// one scan line per call.
    fn refresh(&mut self);
}

impl<T: PixelDisplay + ?Sized> PixelDisplay for &mut T {
    fn set_pixel(&mut self, column: u8, row: u8, on: bool) {
        (**self).set_pixel(column, row, on)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn refresh(&mut self) {
        (**self).refresh()
    }
}
