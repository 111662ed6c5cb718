pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeolabelError, Result};
pub use geometry::{Polygon, Segment, Viewport};
pub use math::polygon_2d::Orientation;
pub use operations::label::{LabelLineParams, LabelSegment, LongLines, LongPolygonLines};
