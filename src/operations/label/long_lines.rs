use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Viewport};

use super::annotate::{annotate_lines, LabelSegment};
use super::ordering::sort_by_length;
use super::visibility::Visibility;

/// Bearing-change variance below which a polygon is considered circular,
/// in squared degrees.
pub const CIRCLE_VARIANCE_MAX: f64 = 100.0;

/// Parameters for [`LongPolygonLines`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLineParams {
    /// Maximum number of returned segments.
    pub limit: usize,
    /// Consecutive visible runs whose bearings differ by less than this many
    /// degrees are merged. Zero or less disables merging.
    pub max_merge_angle: f64,
    /// Whether to report if the polygon looks like a circle.
    pub detect_circle: bool,
}

impl Default for LabelLineParams {
    fn default() -> Self {
        Self {
            limit: usize::MAX,
            max_merge_angle: 0.0,
            detect_circle: false,
        }
    }
}

impl LabelLineParams {
    /// Checks that the merge angle is a usable number.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `max_merge_angle` is NaN or
    /// negative.
    pub fn validate(&self) -> Result<()> {
        if self.max_merge_angle.is_nan() || self.max_merge_angle < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "merge angle must be zero or positive, got {}",
                self.max_merge_angle
            ))
            .into());
        }
        Ok(())
    }
}

/// Result of [`LongPolygonLines::execute`].
#[derive(Debug, Clone)]
pub struct LongLines {
    /// Candidates ordered by descending length.
    pub segments: Vec<LabelSegment>,
    /// Circularity flag, present only when detection was requested.
    pub circle: Option<bool>,
}

/// Selects the longest visible boundary runs of a polygon for placing a
/// text label.
///
/// Edges fully inside the viewport are preferred. If there are none, edges
/// touching the viewport are used instead.
pub struct LongPolygonLines<'a> {
    polygon: &'a Polygon,
    viewport: &'a Viewport,
    params: LabelLineParams,
}

impl<'a> LongPolygonLines<'a> {
    /// Creates a new query with default parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon, viewport: &'a Viewport) -> Self {
        Self {
            polygon,
            viewport,
            params: LabelLineParams::default(),
        }
    }

    /// Replaces all parameters.
    #[must_use]
    pub fn with_params(mut self, params: LabelLineParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the maximum number of returned segments.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.params.limit = limit;
        self
    }

    /// Sets the bearing difference in degrees below which runs are merged.
    #[must_use]
    pub fn with_merge_angle(mut self, max_angle: f64) -> Self {
        self.params.max_merge_angle = max_angle;
        self
    }

    /// Requests the circularity flag.
    #[must_use]
    pub fn with_circle_detection(mut self) -> Self {
        self.params.detect_circle = true;
        self
    }

    /// Executes the selection.
    #[must_use]
    pub fn execute(&self) -> LongLines {
        let LabelLineParams {
            limit,
            max_merge_angle,
            detect_circle,
        } = self.params;

        let vertex_count = self.polygon.vertex_count();
        if vertex_count <= 2 || limit == 0 {
            debug!(vertex_count, limit, "no label lines for polygon");
            return LongLines {
                segments: Vec::new(),
                circle: detect_circle.then_some(false),
            };
        }

        let edges = self.polygon.edges();
        let mut lines = annotate_lines(&edges, self.viewport, Visibility::Inside, detect_circle);
        if !lines.has_valid() {
            debug!(
                edges = edges.len(),
                "no edge inside viewport, falling back to touching edges"
            );
            lines = annotate_lines(&edges, self.viewport, Visibility::Intersect, detect_circle);
        }

        let circle = lines
            .variance
            .map(|variance| variance > 0.0 && variance < CIRCLE_VARIANCE_MAX);

        let mut segments = lines.segments;
        if max_merge_angle > 0.0 {
            segments = merge_runs(segments, max_merge_angle);
        }

        let mut segments = sort_by_length(segments);
        segments.truncate(limit);
        trace!(selected = segments.len(), ?circle, "selected label lines");

        LongLines { segments, circle }
    }
}

/// Merges consecutive visible runs with similar bearings.
///
/// Hidden entries are dropped without ending a run. Each run is compared
/// against the bearing of the run it would extend.
fn merge_runs(segments: Vec<LabelSegment>, max_angle: f64) -> Vec<LabelSegment> {
    if !segments.iter().any(LabelSegment::is_valid) {
        return segments;
    }

    let mut merged: Vec<LabelSegment> = Vec::new();
    for seg in segments.into_iter().filter(LabelSegment::is_valid) {
        if let Some(last) = merged.last_mut() {
            if seg.has_same_angle(last, max_angle) {
                last.absorb(&seg);
                continue;
            }
        }
        merged.push(seg);
    }
    trace!(runs = merged.len(), "merged label lines");
    merged
}
