mod annotate;
mod long_lines;
mod ordering;
mod visibility;

pub use annotate::{annotate_lines, AnnotatedLines, LabelSegment};
pub use long_lines::{LabelLineParams, LongLines, LongPolygonLines, CIRCLE_VARIANCE_MAX};
pub use ordering::{goes_before, sort_by_length, LENGTH_TIE_TOLERANCE};
pub use visibility::{intersects_rect, is_inside_rect, Visibility};
