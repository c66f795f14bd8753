pub mod error;
pub mod quadtree;

pub use common::geometry::{Point, Quadrant, Region};
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, QuadTree, ScanOrder, ScanResult};
