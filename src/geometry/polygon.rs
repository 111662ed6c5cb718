use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{polygon_orientation, Orientation};
use crate::math::Point2;

use super::Segment;

/// An ordered ring of screen points, optionally closed.
///
/// The polygon counts as closed when it has at least two points and the
/// last point repeats the first one. The repeated point is not a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from raw points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a coordinate is NaN or infinite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(GeometryError::NonFinite {
                what: "polygon",
                index,
            }
            .into());
        }
        Ok(Self { points })
    }

    /// Creates a polygon from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if a coordinate is NaN or infinite.
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// All stored points, including a closing duplicate if present.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns `true` if the last point repeats the first one.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// The distinct ring vertices, without the closing duplicate.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Number of ring vertices, without the closing duplicate.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// The wrapped edge list: edge `i` runs from vertex `i` to vertex `i + 1`,
    /// and the last edge returns to vertex 0.
    #[must_use]
    pub fn edges(&self) -> Vec<Segment> {
        let verts = self.vertices();
        let n = verts.len();
        (0..n)
            .map(|i| Segment::new(verts[i], verts[(i + 1) % n]))
            .collect()
    }

    /// Winding of the ring, see [`polygon_orientation`].
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        polygon_orientation(self.vertices())
    }

    /// Returns a closed copy, appending the first point if needed.
    #[must_use]
    pub fn closed(&self) -> Self {
        let mut points = self.points.clone();
        if !self.is_closed() {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        Self { points }
    }

    /// Returns a copy with the point order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }
}
