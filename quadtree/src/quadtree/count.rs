use super::*;

impl QuadTree {
    /// Number of stored points with the given x coordinate.
    pub fn count_x(&self, x: u32) -> usize {
        self.count_line(ROOT, Axis::X, x)
    }

    /// Number of stored points with the given y coordinate.
    pub fn count_y(&self, y: u32) -> usize {
        self.count_line(ROOT, Axis::Y, y)
    }

    fn count_line(&self, node_id: NodeId, axis: Axis, coord: u32) -> usize {
        let node = self.node(node_id);
        if !axis.spans(&node.region, coord) {
            return 0;
        }
        match &node.kind {
            NodeKind::Leaf { points } => points
                .iter()
                .flatten()
                .filter(|point| axis.project(**point, coord).is_some())
                .count(),
            NodeKind::Internal { children } => children
                .iter()
                .map(|&child| self.count_line(child, axis, coord))
                .sum(),
        }
    }
}
