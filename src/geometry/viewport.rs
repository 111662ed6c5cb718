use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Segment;

/// An axis-aligned screen rectangle used for visibility tests.
///
/// `min` is the top-left corner and `max` the bottom-right corner, since y
/// grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    min: Point2,
    max: Point2,
}

impl Viewport {
    /// Creates a viewport from two opposite corners in any order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a coordinate is NaN or infinite.
    pub fn from_corners(a: Point2, b: Point2) -> Result<Self> {
        for (index, pt) in [a, b].iter().enumerate() {
            if !pt.x.is_finite() || !pt.y.is_finite() {
                return Err(GeometryError::NonFinite {
                    what: "viewport",
                    index,
                }
                .into());
            }
        }
        Ok(Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        })
    }

    /// Creates a viewport from its left, top, right and bottom bounds.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a bound is NaN or infinite.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self> {
        Self::from_corners(Point2::new(left, top), Point2::new(right, bottom))
    }

    /// Bounding rectangle of `points`, or `None` if `points` is empty.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a coordinate is NaN or infinite.
    pub fn from_points(points: &[Point2]) -> Result<Option<Self>> {
        let Some(first) = points.first() else {
            return Ok(None);
        };
        let mut rect = Self::from_corners(*first, *first)?;
        for pt in &points[1..] {
            rect = rect.extended(*pt)?;
        }
        Ok(Some(rect))
    }

    /// Returns a copy grown to include `pt`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if `pt` is not finite.
    pub fn extended(&self, pt: Point2) -> Result<Self> {
        let grown = Self::from_corners(pt, pt)?;
        Ok(Self {
            min: Point2::new(self.min.x.min(grown.min.x), self.min.y.min(grown.min.y)),
            max: Point2::new(self.max.x.max(grown.max.x), self.max.y.max(grown.max.y)),
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.min.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.min.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.max.x
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns `true` if `pt` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, pt: &Point2) -> bool {
        pt.x >= self.min.x && pt.x <= self.max.x && pt.y >= self.min.y && pt.y <= self.max.y
    }

    /// Corners in the order top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// The four border edges: top, right, bottom, left.
    #[must_use]
    pub fn boundary_edges(&self) -> [Segment; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }
}
