use crate::num_traits::DetectGimbalLock;
use core::fmt::{Debug, Display, Formatter};
use uniform_array_derive::UniformArray;

/// Roll, pitch and yaw of the device, in degrees.
///
/// Roll and yaw lie in `(-180, 180]`, pitch lies in `[-90, 90]`. An orientation is always
/// derived from the latest sensor vectors and never stored on its own.
#[derive(UniformArray, Copy, Clone, PartialEq)]
#[cfg_attr(test, ensure_uniform_type::ensure_uniform_type)]
#[repr(C)]
pub struct Orientation<T> {
    /// The rotation about the x-axis, in degrees.
    pub roll: T,
    /// The rotation about the y-axis, in degrees.
    pub pitch: T,
    /// The rotation about the z-axis, i.e. the tilt-compensated heading, in degrees.
    pub yaw: T,
}

impl<T> Orientation<T> {
    /// Initializes a new [`Orientation`] instance.
    #[inline(always)]
    pub const fn new(roll: T, pitch: T, yaw: T) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Determines whether the pitch is within `tolerance` degrees of ±90°.
    ///
    /// Close to these angles roll and yaw rotate about the same axis and the displayed
    /// model starts to flip around.
    pub fn is_gimbal_locked(&self, tolerance: T) -> bool
    where
        T: DetectGimbalLock<T>,
    {
        self.pitch.close_to_zenith_or_nadir(tolerance)
    }
}

impl<T> Default for Orientation<T>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(Default::default(), Default::default(), Default::default())
    }
}

impl<T> Debug for Orientation<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Orientation")
            .field(&self.roll)
            .field(&self.pitch)
            .field(&self.yaw)
            .finish()
    }
}

/// Formats as `Roll: r°, Pitch: p°, Yaw: y°`, passing the precision on to each angle.
impl<T> Display for Orientation<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "Roll: {:.*}°, Pitch: {:.*}°, Yaw: {:.*}°",
                precision, self.roll, precision, self.pitch, precision, self.yaw
            ),
            None => write!(
                f,
                "Roll: {}°, Pitch: {}°, Yaw: {}°",
                self.roll, self.pitch, self.yaw
            ),
        }
    }
}

impl<T> From<Orientation<T>> for (T, T, T) {
    fn from(value: Orientation<T>) -> Self {
        (value.roll, value.pitch, value.yaw)
    }
}
