pub mod polygon;
pub mod segment;
pub mod viewport;

pub use polygon::Polygon;
pub use segment::Segment;
pub use viewport::Viewport;
