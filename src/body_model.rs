//! The point model of the phone that gets rotated for display.

use crate::rotation::rotate_points;
use crate::types::{Orientation, Vector3};
use num_traits::Float;

/// The number of points of a [`BodyModel`].
pub const BODY_POINTS: usize = 7;

/// The edges of the body model: the center connected to every axis marker.
pub const BODY_EDGES: [(Marker, Marker); 6] = [
    (Marker::Center, Marker::Length),
    (Marker::Center, Marker::NegativeLength),
    (Marker::Center, Marker::Width),
    (Marker::Center, Marker::NegativeWidth),
    (Marker::Center, Marker::Height),
    (Marker::Center, Marker::NegativeHeight),
];

/// The named points of the body model, in storage order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    Center = 0,
    /// Along +x.
    Length = 1,
    /// Along -x.
    NegativeLength = 2,
    /// Along +y.
    Width = 3,
    /// Along -y.
    NegativeWidth = 4,
    /// Along +z.
    Height = 5,
    /// Along -z.
    NegativeHeight = 6,
}

impl Marker {
    /// All markers, in storage order.
    pub const ALL: [Marker; BODY_POINTS] = [
        Marker::Center,
        Marker::Length,
        Marker::NegativeLength,
        Marker::Width,
        Marker::NegativeWidth,
        Marker::Height,
        Marker::NegativeHeight,
    ];

    /// The position of the marker in the point sequence.
    #[inline]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Marker::Center => "center",
            Marker::Length => "length",
            Marker::NegativeLength => "negative length",
            Marker::Width => "width",
            Marker::NegativeWidth => "negative width",
            Marker::Height => "height",
            Marker::NegativeHeight => "negative height",
        }
    }
}

/// A fixed set of seven points describing the observed body: the center and one marker
/// on each side of every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BodyModel<T> {
    points: [Vector3<T>; BODY_POINTS],
}

impl<T> BodyModel<T>
where
    T: Float,
{
    /// Builds a body model from its half extents along x, y and z.
    pub fn new(length: T, width: T, height: T) -> Self {
        let zero = T::zero();
        Self {
            points: [
                Vector3::new(zero, zero, zero),
                Vector3::new(length, zero, zero),
                Vector3::new(-length, zero, zero),
                Vector3::new(zero, width, zero),
                Vector3::new(zero, -width, zero),
                Vector3::new(zero, zero, height),
                Vector3::new(zero, zero, -height),
            ],
        }
    }

    /// The phone: 1 along x, 2 along y and 0.5 along z.
    pub fn phone() -> Self {
        let one = T::one();
        let two = one + one;
        Self::new(one, two, one / two)
    }

    /// The points, in [`Marker`] order.
    #[inline]
    pub fn points(&self) -> &[Vector3<T>; BODY_POINTS] {
        &self.points
    }

    /// The point of a single marker.
    #[inline]
    pub fn point(&self, marker: Marker) -> Vector3<T> {
        self.points[marker.index()]
    }

    /// Rotates all points by the given orientation.
    pub fn rotate(&self, orientation: &Orientation<T>) -> RotatedModel<T> {
        RotatedModel {
            points: rotate_points(&self.points, orientation),
        }
    }
}

impl<T> Default for BodyModel<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::phone()
    }
}

/// The body model after rotation by the current orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotatedModel<T> {
    points: [Vector3<T>; BODY_POINTS],
}

impl<T> RotatedModel<T>
where
    T: Copy,
{
    /// The rotated points, in [`Marker`] order.
    #[inline]
    pub fn points(&self) -> &[Vector3<T>; BODY_POINTS] {
        &self.points
    }

    /// The rotated point of a single marker.
    #[inline]
    pub fn point(&self, marker: Marker) -> Vector3<T> {
        self.points[marker.index()]
    }

    /// The start and end points of every edge in [`BODY_EDGES`].
    pub fn edges(&self) -> impl Iterator<Item = (Vector3<T>, Vector3<T>)> + '_ {
        BODY_EDGES
            .iter()
            .map(move |&(start, end)| (self.point(start), self.point(end)))
    }
}
