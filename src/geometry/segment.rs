use crate::math::angle_2d::{bearing, native_angle};
use crate::math::Point2;

/// A finite straight segment from `p1` to `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.p1, &self.p2)
    }

    /// Native planar angle in degrees, see [`native_angle`].
    #[must_use]
    pub fn native_angle(&self) -> f64 {
        native_angle(&self.p1, &self.p2)
    }

    /// Compass bearing in degrees, see [`bearing`].
    #[must_use]
    pub fn bearing(&self) -> f64 {
        bearing(&self.p1, &self.p2)
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.p1, &self.p2)
    }
}
