use super::*;
use tracing::{debug, trace, warn};

impl QuadTree {
    /// Inserts `(x, y)`, returning whether the point was stored.
    ///
    /// Duplicates are kept: inserting the same point twice uses two slots.
    pub fn insert(&mut self, x: u32, y: u32) -> bool {
        match self.try_insert(x, y) {
            Ok(()) => true,
            Err(err) => {
                debug!(x, y, %err, "insert rejected");
                false
            }
        }
    }

    /// Inserts `(x, y)`, reporting why the point could not be stored.
    ///
    /// # Errors
    ///
    /// Returns [`QuadtreeError::ReservedPoint`] for [`Point::EMPTY`],
    /// [`QuadtreeError::OutOfBounds`] for points outside the root region and
    /// [`QuadtreeError::LeafAtMinimumSize`] when more than four copies of a
    /// point pile up in a one-unit leaf.
    pub fn try_insert(&mut self, x: u32, y: u32) -> QuadtreeResult<()> {
        let point = Point::new(x, y);
        if point.is_empty() {
            return Err(QuadtreeError::ReservedPoint { x, y });
        }
        let bounds = self.bounds();
        if !bounds.contains_point(point) {
            return Err(QuadtreeError::OutOfBounds { x, y, bounds });
        }
        if self.place(ROOT, point)? {
            self.len += 1;
            Ok(())
        } else {
            Err(QuadtreeError::NoChildAccepted { x, y })
        }
    }

    /// Routes `point` down from `node_id`. `Ok(false)` means the node's region
    /// does not contain the point and nothing was touched.
    fn place(&mut self, node_id: NodeId, point: Point) -> QuadtreeResult<bool> {
        if !self.node(node_id).region.contains_point(point) {
            return Ok(false);
        }

        if self.node(node_id).is_leaf() {
            if self.node_mut(node_id).store(point) {
                return Ok(true);
            }
            self.subdivide(node_id, point)?;
        }

        if let Some(children) = self.node(node_id).children() {
            for child in children {
                if self.place(child, point)? {
                    return Ok(true);
                }
            }
        }

        warn!(
            x = point.x,
            y = point.y,
            region = %self.node(node_id).region,
            "insertion failed: no child accepted the point"
        );
        Err(QuadtreeError::NoChildAccepted {
            x: point.x,
            y: point.y,
        })
    }

    /// Turns the full leaf `node_id` into an internal node with four fresh
    /// leaves and moves its points down. `incoming` is only used for errors.
    fn subdivide(&mut self, node_id: NodeId, incoming: Point) -> QuadtreeResult<()> {
        let region = self.node(node_id).region;
        let Some(quadrants) = region.subdivide() else {
            return Err(QuadtreeError::LeafAtMinimumSize {
                x: incoming.x,
                y: incoming.y,
            });
        };

        let first = self.nodes.len() as NodeId;
        self.nodes.reserve(4);
        for quadrant in quadrants {
            self.nodes.push(Node::new_leaf(quadrant, Some(node_id)));
        }
        let children = [first, first + 1, first + 2, first + 3];
        let previous = std::mem::replace(
            &mut self.node_mut(node_id).kind,
            NodeKind::Internal { children },
        );
        trace!(region = %region, first_child = first, "subdivided leaf");

        if let NodeKind::Leaf { points } = previous {
            for point in points.into_iter().flatten() {
                // The children tile this region, so one of them always takes it.
                if !self.place(node_id, point)? {
                    return Err(QuadtreeError::NoChildAccepted {
                        x: point.x,
                        y: point.y,
                    });
                }
            }
        }
        Ok(())
    }
}
