pub trait GimbalLockZenithNadir<T> {
    /// The value for the zenith, i.e. 90°.
    const ZENITH: T;

    /// The value for the nadir, i.e. -90°.
    const NADIR: T;
}

pub trait DetectGimbalLock<T>: GimbalLockZenithNadir<T> {
    /// Determines whether a Gimbal Lock situation is about to occur
    /// because the angle (provided in degrees) is close to 90° or -90°.
    ///
    /// ## Arguments
    /// * `tolerance` - The tolerance in degrees, e.g. 0.5°.
    fn close_to_zenith_or_nadir(&self, tolerance: T) -> bool;
}

pub trait NormalizeAngle<T> {
    type Output;

    /// Wraps an angle in degrees into the half-open range `(-180°, 180°]`.
    fn normalize_angle(self) -> Self::Output;
}

impl GimbalLockZenithNadir<f32> for f32 {
    const ZENITH: f32 = 90.0;
    const NADIR: f32 = -90.0;
}

impl GimbalLockZenithNadir<f64> for f64 {
    const ZENITH: f64 = 90.0;
    const NADIR: f64 = -90.0;
}

impl<T> DetectGimbalLock<T> for T
where
    T: Copy + num_traits::Float + GimbalLockZenithNadir<T>,
{
    #[inline]
    fn close_to_zenith_or_nadir(&self, tolerance: T) -> bool {
        (*self - T::ZENITH).abs() <= tolerance || (*self - T::NADIR).abs() <= tolerance
    }
}

impl NormalizeAngle<f32> for f32 {
    type Output = f32;

    #[inline]
    fn normalize_angle(self) -> Self::Output {
        let angle = self % 360.0;
        if angle <= -180.0 {
            angle + 360.0
        } else if angle > 180.0 {
            angle - 360.0
        } else {
            angle
        }
    }
}

impl NormalizeAngle<f64> for f64 {
    type Output = f64;

    #[inline]
    fn normalize_angle(self) -> Self::Output {
        let angle = self % 360.0;
        if angle <= -180.0 {
            angle + 360.0
        } else if angle > 180.0 {
            angle - 360.0
        } else {
            angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gimbal_lock_f32() {
        // The detection tolerance in degrees.
        const TOLERANCE: f32 = 0.5;

        // The value to use for testing the tolerance. We use a value less than
        // the tolerance here to account for floating-point rounding issues.
        const TOLERANCE_TEST: f32 = TOLERANCE * 0.99;

        assert!(!0.0_f32.close_to_zenith_or_nadir(TOLERANCE));
        assert!(!45.0_f32.close_to_zenith_or_nadir(TOLERANCE));
        assert!(!(-45.0_f32).close_to_zenith_or_nadir(TOLERANCE));

        assert!(90.0_f32.close_to_zenith_or_nadir(TOLERANCE));
        assert!((-90.0_f32).close_to_zenith_or_nadir(TOLERANCE));

        assert!((90.0_f32 - TOLERANCE_TEST).close_to_zenith_or_nadir(TOLERANCE));
        assert!((-90.0_f32 + TOLERANCE_TEST).close_to_zenith_or_nadir(TOLERANCE));
    }

    #[test]
    fn test_gimbal_lock_f64() {
        const TOLERANCE: f64 = 0.5;
        const TOLERANCE_TEST: f64 = TOLERANCE * 0.99;

        assert!(!0.0_f64.close_to_zenith_or_nadir(TOLERANCE));
        assert!(!89.0_f64.close_to_zenith_or_nadir(TOLERANCE));

        assert!(90.0_f64.close_to_zenith_or_nadir(TOLERANCE));
        assert!((-90.0_f64).close_to_zenith_or_nadir(TOLERANCE));
        assert!((90.0_f64 - TOLERANCE_TEST).close_to_zenith_or_nadir(TOLERANCE));
        assert!((-90.0_f64 + TOLERANCE_TEST).close_to_zenith_or_nadir(TOLERANCE));
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!((-180.0_f64).normalize_angle(), 180.0);
        assert_eq!(180.0_f64.normalize_angle(), 180.0);
        assert_eq!(190.0_f64.normalize_angle(), -170.0);
        assert_eq!((-190.0_f64).normalize_angle(), 170.0);
        assert_eq!(540.0_f64.normalize_angle(), 180.0);
        assert_eq!(12.5_f64.normalize_angle(), 12.5);
        assert_eq!((-180.0_f32).normalize_angle(), 180.0);
        assert!(f64::NAN.normalize_angle().is_nan());
    }
}
