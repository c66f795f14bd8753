use common::geometry::{Point, Quadrant, Region};
use smallvec::SmallVec;

pub(crate) type NodeId = u32;

pub(crate) const ROOT: NodeId = 0;
pub(crate) const LEAF_CAPACITY: usize = 4;

pub(crate) type LeafSlots = [Option<Point>; LEAF_CAPACITY];

pub(crate) enum NodeKind {
    Leaf { points: LeafSlots },
    Internal { children: [NodeId; 4] },
}

pub(crate) struct Node {
    pub(crate) region: Region,
    // Back-reference only; the arena owns every node.
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    #[inline(always)]
    pub(crate) fn new_leaf(region: Region, parent: Option<NodeId>) -> Self {
        Self {
            region,
            parent,
            kind: NodeKind::Leaf {
                points: [None; LEAF_CAPACITY],
            },
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    #[inline(always)]
    pub(crate) fn children(&self) -> Option<[NodeId; 4]> {
        match self.kind {
            NodeKind::Internal { children } => Some(children),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Stores `point` in the first free slot. Returns false when the node is
    /// internal or its slots are full.
    pub(crate) fn store(&mut self, point: Point) -> bool {
        let NodeKind::Leaf { points } = &mut self.kind else {
            return false;
        };
        match points.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(point);
                true
            }
            None => false,
        }
    }

    pub(crate) fn point_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf { points } => points.iter().flatten().count(),
            NodeKind::Internal { .. } => 0,
        }
    }
}

/// Scan line orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Vertical line at a fixed x; reports y-values.
    X,
    /// Horizontal line at a fixed y; reports x-values.
    Y,
}

impl Axis {
    /// Child visitation order for the scan walk.
    #[inline(always)]
    pub(crate) fn visit_order(self) -> [Quadrant; 4] {
        match self {
            Axis::X => [
                Quadrant::SouthWest,
                Quadrant::NorthWest,
                Quadrant::SouthEast,
                Quadrant::NorthEast,
            ],
            Axis::Y => [
                Quadrant::SouthEast,
                Quadrant::NorthEast,
                Quadrant::SouthWest,
                Quadrant::NorthWest,
            ],
        }
    }

    #[inline(always)]
    pub(crate) fn spans(self, region: &Region, coord: u32) -> bool {
        match self {
            Axis::X => region.spans_x(coord),
            Axis::Y => region.spans_y(coord),
        }
    }

    /// The coordinate a scan reports for `point`, if it lies on the line.
    #[inline(always)]
    pub(crate) fn project(self, point: Point, coord: u32) -> Option<u32> {
        match self {
            Axis::X => (point.x == coord).then_some(point.y),
            Axis::Y => (point.y == coord).then_some(point.x),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ScanFrame {
    pub(crate) node: NodeId,
    pub(crate) next_child: u8,
}

// A u32 domain is at most 33 levels deep, so the walk never spills.
pub(crate) type ScanStack = SmallVec<[ScanFrame; 64]>;
