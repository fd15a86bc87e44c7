//! Tilt-compensated compass.

use crate::types::{AccelerometerReading, MagnetometerReading, Orientation};
use crate::NormalizeAngle;
use num_traits::Float;

/// Derives roll, pitch and yaw (in degrees) from the latest accelerometer and
/// magnetometer readings.
///
/// Roll and pitch come from the direction of gravity; the magnetometer reading is then
/// projected back onto the horizontal plane using these angles to obtain a heading that
/// does not depend on how the device is tilted.
///
/// The function is total: degenerate inputs follow IEEE `atan2(0, 0) = 0`, so a zero
/// magnetometer reading yields a yaw of zero and a zero accelerometer reading a roll of
/// zero. Non-finite inputs propagate as NaN instead of panicking.
///
/// ## Arguments
/// * `accelerometer` - The accelerometer reading (gravity included).
/// * `magnetometer` - The magnetometer reading. Its magnitude does not matter.
pub fn calculate_orientation<T>(
    accelerometer: &AccelerometerReading<T>,
    magnetometer: &MagnetometerReading<T>,
) -> Orientation<T>
where
    T: Float + NormalizeAngle<T, Output = T>,
{
    let (ax, ay, az) = (accelerometer.x, accelerometer.y, accelerometer.z);
    let (mx, my, mz) = (magnetometer.x, magnetometer.y, magnetometer.z);

    let roll = ay.atan2(az);

    // Clamped so sqrt never sees a negative argument; NaN must pass through.
    let horizontal_sq = ay * ay + az * az;
    let horizontal = if horizontal_sq < T::zero() {
        T::zero()
    } else {
        horizontal_sq
    }
    .sqrt();
    let pitch = (-ax).atan2(horizontal);

    let (sin_roll, cos_roll) = roll.sin_cos();
    let (sin_pitch, cos_pitch) = pitch.sin_cos();

    let mx_comp = mx * cos_pitch + mz * sin_pitch;
    let my_comp = mx * sin_roll * sin_pitch + my * cos_roll - mz * sin_roll * cos_pitch;
    let yaw = (-my_comp).atan2(mx_comp);

    Orientation::new(
        roll.to_degrees().normalize_angle(),
        pitch.to_degrees(),
        yaw.to_degrees().normalize_angle(),
    )
}
