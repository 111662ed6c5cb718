use std::ops::Range;

use crate::geometry::{Segment, Viewport};
use crate::math::angle_2d::{angle_abs_diff, population_variance};

use super::visibility::Visibility;

/// A polygon boundary run that is a candidate for label placement.
///
/// Covers the edges `from..to` of the source polygon. Segments that are not
/// visible keep their bearing but have zero length and no index range.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSegment {
    line: Segment,
    length: f64,
    angle: f64,
    range: Option<Range<usize>>,
}

impl LabelSegment {
    /// A visible segment covering the single edge `index`.
    #[must_use]
    pub fn visible(line: Segment, index: usize) -> Self {
        Self {
            line,
            length: line.length(),
            angle: line.bearing(),
            range: Some(index..index + 1),
        }
    }

    /// An invalid placeholder for an edge outside the viewport.
    #[must_use]
    pub fn hidden(line: Segment) -> Self {
        Self {
            line,
            length: 0.0,
            angle: line.bearing(),
            range: None,
        }
    }

    /// Start and end point of the run.
    #[must_use]
    pub fn line(&self) -> &Segment {
        &self.line
    }

    /// Summed edge length, 0 for hidden segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Compass bearing in degrees of the first covered edge.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Half-open range of covered edge indices.
    #[must_use]
    pub fn index_range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// First covered edge index, or `None` for hidden segments.
    #[must_use]
    pub fn index_from(&self) -> Option<usize> {
        self.range.as_ref().map(|r| r.start)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.range.is_some()
    }

    /// Returns `true` if the bearings differ by less than `max_angle` degrees.
    #[must_use]
    pub fn has_same_angle(&self, other: &Self, max_angle: f64) -> bool {
        angle_abs_diff(self.angle, other.angle) < max_angle
    }

    /// Extends this run by the directly following run `next`.
    ///
    /// The end point, length and upper index bound are taken over from
    /// `next`; the bearing stays that of the first edge.
    pub fn absorb(&mut self, next: &Self) {
        self.line.p2 = next.line.p2;
        self.length += next.length;
        if let (Some(range), Some(next_range)) = (self.range.as_mut(), next.range.as_ref()) {
            range.end = next_range.end;
        }
    }
}

/// Result of [`annotate_lines`].
#[derive(Debug, Clone)]
pub struct AnnotatedLines {
    /// One entry per input edge, in edge order.
    pub segments: Vec<LabelSegment>,
    /// Population variance of consecutive bearing changes, if requested.
    pub variance: Option<f64>,
}

impl AnnotatedLines {
    /// Returns `true` if at least one entry is visible.
    #[must_use]
    pub fn has_valid(&self) -> bool {
        self.segments.iter().any(LabelSegment::is_valid)
    }
}

/// Tags every edge with length, bearing and visibility in `viewport`.
///
/// With `want_variance`, the circular bearing change between each edge and
/// the preceding entry is collected, visible or not, and the population
/// variance of those changes is returned alongside.
#[must_use]
pub fn annotate_lines(
    edges: &[Segment],
    viewport: &Viewport,
    mode: Visibility,
    want_variance: bool,
) -> AnnotatedLines {
    let mut segments: Vec<LabelSegment> = Vec::with_capacity(edges.len());
    let mut angle_changes = Vec::new();

    for (i, edge) in edges.iter().enumerate() {
        let entry = if mode.is_visible(edge, viewport) {
            LabelSegment::visible(*edge, i)
        } else {
            LabelSegment::hidden(*edge)
        };

        if want_variance {
            if let Some(prev) = segments.last() {
                angle_changes.push(angle_abs_diff(entry.angle, prev.angle));
            }
        }
        segments.push(entry);
    }

    AnnotatedLines {
        segments,
        variance: want_variance.then(|| population_variance(&angle_changes)),
    }
}
