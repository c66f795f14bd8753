use super::*;

impl QuadTree {
    /// Whether `(x, y)` has been inserted. Coordinates outside the root region
    /// are never present.
    pub fn query(&self, x: u32, y: u32) -> bool {
        let point = Point::new(x, y);
        if !self.bounds().contains_point(point) {
            return false;
        }
        self.query_node(ROOT, point)
    }

    fn query_node(&self, node_id: NodeId, point: Point) -> bool {
        match &self.node(node_id).kind {
            NodeKind::Leaf { points } => points.contains(&Some(point)),
            NodeKind::Internal { children } => children
                .iter()
                .find(|&&child| self.node(child).region.contains_point(point))
                .map_or(false, |&child| self.query_node(child, point)),
        }
    }
}
