pub mod geometry;
pub mod format;

pub use format::{format_coordinate, format_point};
pub use geometry::{classify, classify_coords, Relationship, Segment, SegmentError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
