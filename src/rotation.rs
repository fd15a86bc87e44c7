//! Elementary axis rotations and their composition.

use crate::types::{Orientation, Vector3};
use core::ops::Mul;
use num_traits::Float;

/// A 3×3 rotation matrix, stored row by row.
#[derive(Copy, Clone, PartialEq)]
pub struct RotationMatrix<T> {
    rows: [[T; 3]; 3],
}

impl<T> RotationMatrix<T>
where
    T: Float,
{
    /// Constructs a matrix from its rows.
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[l, o, o], [o, l, o], [o, o, l]])
    }

    /// A right-handed rotation about the x-axis by `roll` degrees.
    pub fn about_x(roll: T) -> Self {
        let (s, c) = roll.to_radians().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[l, o, o], [o, c, -s], [o, s, c]])
    }

    /// A right-handed rotation about the y-axis by `pitch` degrees.
    pub fn about_y(pitch: T) -> Self {
        let (s, c) = pitch.to_radians().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, o, s], [o, l, o], [-s, o, c]])
    }

    /// A right-handed rotation about the z-axis by `yaw` degrees.
    pub fn about_z(yaw: T) -> Self {
        let (s, c) = yaw.to_radians().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, -s, o], [s, c, o], [o, o, l]])
    }

    /// Builds the body-to-display rotation `Rz(yaw) · Ry(pitch) · Rx(roll)`.
    ///
    /// Applied to a column vector this rotates about x first, then about y, then about z.
    /// The order is fixed; any other order maps the same angles to a different pose.
    pub fn from_orientation(orientation: &Orientation<T>) -> Self {
        Self::about_z(orientation.yaw)
            * Self::about_y(orientation.pitch)
            * Self::about_x(orientation.roll)
    }

    /// Returns the transposed matrix, i.e. the inverse rotation.
    pub fn transpose(&self) -> Self {
        let r = &self.rows;
        Self::from_rows([
            [r[0][0], r[1][0], r[2][0]],
            [r[0][1], r[1][1], r[2][1]],
            [r[0][2], r[1][2], r[2][2]],
        ])
    }

    /// Rotates a single vector (column vector convention, `M · v`).
    #[inline]
    pub fn transform(&self, vector: &Vector3<T>) -> Vector3<T> {
        let [a, b, c] = self.rows;
        Vector3::new(
            a[0] * vector.x + a[1] * vector.y + a[2] * vector.z,
            b[0] * vector.x + b[1] * vector.y + b[2] * vector.z,
            c[0] * vector.x + c[1] * vector.y + c[2] * vector.z,
        )
    }

    /// The matrix rows.
    #[inline]
    pub fn rows(&self) -> &[[T; 3]; 3] {
        &self.rows
    }
}

impl<T> Mul<RotationMatrix<T>> for RotationMatrix<T>
where
    T: Float,
{
    type Output = RotationMatrix<T>;

    fn mul(self, rhs: RotationMatrix<T>) -> Self::Output {
        let (a, b) = (&self.rows, &rhs.rows);
        let cell = |i: usize, j: usize| a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        RotationMatrix::from_rows([
            [cell(0, 0), cell(0, 1), cell(0, 2)],
            [cell(1, 0), cell(1, 1), cell(1, 2)],
            [cell(2, 0), cell(2, 1), cell(2, 2)],
        ])
    }
}

impl<T> core::fmt::Debug for RotationMatrix<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.rows.iter()).finish()
    }
}

/// Rotates every point by the given orientation.
///
/// Each point is treated as a row vector and multiplied by `Rxᵗ · Ryᵗ · Rzᵗ`, which is the
/// same as rotating the column vector by [`RotationMatrix::from_orientation`]. The output
/// keeps the order of the input. Near ±90° pitch the result flips around (gimbal lock);
/// this is not corrected.
pub fn rotate_points<T, const N: usize>(
    points: &[Vector3<T>; N],
    orientation: &Orientation<T>,
) -> [Vector3<T>; N]
where
    T: Float,
{
    let rotation = RotationMatrix::from_orientation(orientation);
    points.map(|point| rotation.transform(&point))
}
