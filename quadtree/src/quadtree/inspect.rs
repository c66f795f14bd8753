use super::*;

impl QuadTree {
    /// The root region.
    pub fn bounds(&self) -> Region {
        self.node(ROOT).region
    }

    /// Number of stored points, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Depth of the deepest leaf; a tree that never split has height 0.
    pub fn height(&self) -> usize {
        (0..self.nodes.len() as NodeId)
            .filter(|&id| self.node(id).is_leaf())
            .map(|id| self.depth(id))
            .max()
            .unwrap_or(0)
    }

    fn depth(&self, node_id: NodeId) -> usize {
        std::iter::successors(self.node(node_id).parent, |&parent| {
            self.node(parent).parent
        })
        .count()
    }

    pub fn all_node_regions(&self, regions: &mut Vec<Region>) {
        regions.extend(self.nodes.iter().map(|node| node.region));
    }

    pub fn all_points(&self, points: &mut Vec<Point>) {
        for node in &self.nodes {
            if let NodeKind::Leaf { points: slots } = &node.kind {
                points.extend(slots.iter().flatten().copied());
            }
        }
    }

    /// Walks the whole arena and verifies the structural invariants: points
    /// sit inside their leaf, children tile their parent, parent links match
    /// and the point count is consistent.
    ///
    /// # Errors
    ///
    /// Returns [`QuadtreeError::InvariantViolation`] describing the first
    /// broken invariant.
    pub fn check_invariants(&self) -> QuadtreeResult<()> {
        let violation = |message: String| Err(QuadtreeError::InvariantViolation(message));

        if let Some(parent) = self.node(ROOT).parent {
            return violation(format!("root has parent {}", parent));
        }

        let mut stored = 0usize;
        for (index, node) in self.nodes.iter().enumerate() {
            match &node.kind {
                NodeKind::Leaf { points } => {
                    for point in points.iter().flatten() {
                        if point.is_empty() {
                            return violation(format!("node {} stores the empty marker", index));
                        }
                        if !node.region.contains_point(*point) {
                            return violation(format!(
                                "point {} outside leaf {} region {}",
                                point, index, node.region
                            ));
                        }
                    }
                    stored += node.point_count();
                }
                NodeKind::Internal { children } => {
                    let mut area = 0u128;
                    for (i, &child) in children.iter().enumerate() {
                        let child_node = self.node(child);
                        if child_node.parent != Some(index as NodeId) {
                            return violation(format!(
                                "node {} is not the parent of its child {}",
                                index, child
                            ));
                        }
                        if !node.region.contains_region(&child_node.region) {
                            return violation(format!(
                                "child region {} escapes parent {}",
                                child_node.region, node.region
                            ));
                        }
                        for &sibling in &children[i + 1..] {
                            if child_node.region.intersects(&self.node(sibling).region) {
                                return violation(format!(
                                    "children {} and {} of node {} overlap",
                                    child, sibling, index
                                ));
                            }
                        }
                        area += child_node.region.area();
                    }
                    if area != node.region.area() {
                        return violation(format!(
                            "children of node {} do not cover {}",
                            index, node.region
                        ));
                    }
                }
            }
        }

        if stored != self.len {
            return violation(format!(
                "{} points stored but {} recorded",
                stored, self.len
            ));
        }
        Ok(())
    }
}
