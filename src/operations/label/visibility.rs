use crate::geometry::{Segment, Viewport};
use crate::math::intersect_2d::segments_intersect_2d;

/// How a segment has to relate to the viewport to count as visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Both endpoints inside the viewport.
    Inside,
    /// At least touching the viewport.
    Intersect,
}

impl Visibility {
    /// Tests `segment` against `viewport` under this mode.
    #[must_use]
    pub fn is_visible(self, segment: &Segment, viewport: &Viewport) -> bool {
        match self {
            Self::Inside => is_inside_rect(segment, viewport),
            Self::Intersect => intersects_rect(segment, viewport),
        }
    }
}

/// Returns `true` if both endpoints lie within `viewport`.
#[must_use]
pub fn is_inside_rect(segment: &Segment, viewport: &Viewport) -> bool {
    viewport.contains(&segment.p1) && viewport.contains(&segment.p2)
}

/// Returns `true` if an endpoint lies within `viewport` or the segment has a
/// bounded intersection with one of its border edges.
#[must_use]
pub fn intersects_rect(segment: &Segment, viewport: &Viewport) -> bool {
    viewport.contains(&segment.p1)
        || viewport.contains(&segment.p2)
        || viewport
            .boundary_edges()
            .iter()
            .any(|edge| segments_intersect_2d(&segment.p1, &segment.p2, &edge.p1, &edge.p2))
}
