//! Conversions between the device frame and the [`coordinate_frame`] types.
//!
//! Android reports sensor vectors in the device frame: x toward the right edge of the
//! screen, y toward the top edge and z out of the screen. For a phone lying flat with its
//! top edge pointing north this is East, North, Up.

use crate::types::Vector3;
use coordinate_frame::EastNorthUp;

/// The device frame, expressed as a [`coordinate_frame`] type.
pub type DeviceFrame<T> = EastNorthUp<T>;

impl<T> From<Vector3<T>> for EastNorthUp<T> {
    #[inline]
    fn from(value: Vector3<T>) -> Self {
        EastNorthUp::new(value.x, value.y, value.z)
    }
}

impl<T> From<EastNorthUp<T>> for Vector3<T>
where
    T: Clone,
{
    #[inline]
    fn from(value: EastNorthUp<T>) -> Self {
        Vector3::new(value.x(), value.y(), value.z())
    }
}
