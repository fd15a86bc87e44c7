use crate::impl_reading_traits;
use uniform_array_derive::UniformArray;

/// A single magnetometer sample in the device frame.
#[derive(UniformArray)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct MagnetometerReading<T> {
    /// The magnetic field strength along the x-axis, in µT.
    pub x: T,
    /// The magnetic field strength along the y-axis, in µT.
    pub y: T,
    /// The magnetic field strength along the z-axis, in µT.
    pub z: T,
}

impl<T> MagnetometerReading<T> {
    /// Initializes a new [`MagnetometerReading`] instance.
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl_reading_traits!(MagnetometerReading, T);
