use common::geometry::Region;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuadtreeError {
    #[error("quadtree region must be square (width: {width}, height: {height})")]
    NonSquareRegion { width: u64, height: u64 },

    #[error("point ({x}, {y}) is reserved as the empty slot marker")]
    ReservedPoint { x: u32, y: u32 },

    #[error("point ({x}, {y}) lies outside the quadtree bounds {bounds}")]
    OutOfBounds { x: u32, y: u32, bounds: Region },

    #[error("leaf for point ({x}, {y}) is full and too small to subdivide")]
    LeafAtMinimumSize { x: u32, y: u32 },

    #[error("no child node accepted point ({x}, {y})")]
    NoChildAccepted { x: u32, y: u32 },

    #[error("quadtree invariant violated: {0}")]
    InvariantViolation(String),
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
