use crate::impl_reading_traits;
use uniform_array_derive::UniformArray;

/// A single accelerometer sample in the device frame.
///
/// Android reports the acceleration including gravity, so a phone lying flat on a table
/// reads roughly `(0, 0, 9.81)`.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct AccelerometerReading<T> {
    /// The acceleration along the x-axis (right edge of the screen), in m/s².
    pub x: T,
    /// The acceleration along the y-axis (top edge of the screen), in m/s².
    pub y: T,
    /// The acceleration along the z-axis (out of the screen), in m/s².
    pub z: T,
}

impl<T> AccelerometerReading<T> {
    /// Initializes a new [`AccelerometerReading`] instance.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl_reading_traits!(AccelerometerReading, T);
