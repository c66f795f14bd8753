use super::*;

/// Outcome of an axis scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Matches in the whole tree, independent of the buffer size.
    pub total: usize,
    /// Values written to the front of the buffer.
    pub written: usize,
    /// The buffer was too small; retry with `total` slots to get everything.
    pub overflow: bool,
}

impl QuadTree {
    /// Writes the y-values of points with x coordinate `x` into `out`.
    ///
    /// At most `out.len()` values are written; `ScanResult::total` always holds
    /// the full match count. Ordering follows [`Config::scan_order`].
    pub fn scan_x(&self, x: u32, out: &mut [u32]) -> ScanResult {
        self.scan(Axis::X, x, out)
    }

    /// Writes the x-values of points with y coordinate `y` into `out`.
    pub fn scan_y(&self, y: u32, out: &mut [u32]) -> ScanResult {
        self.scan(Axis::Y, y, out)
    }

    /// Every y-value on the vertical line at `x`.
    pub fn scan_x_all(&self, x: u32) -> Vec<u32> {
        let mut out = vec![0; self.count_x(x)];
        let result = self.scan_x(x, &mut out);
        out.truncate(result.written);
        out
    }

    /// Every x-value on the horizontal line at `y`.
    pub fn scan_y_all(&self, y: u32) -> Vec<u32> {
        let mut out = vec![0; self.count_y(y)];
        let result = self.scan_y(y, &mut out);
        out.truncate(result.written);
        out
    }

    fn scan(&self, axis: Axis, coord: u32, out: &mut [u32]) -> ScanResult {
        let mut sink = ScanSink::new(out, self.config.scan_order);
        self.walk_line(axis, coord, |points| {
            let start = sink.written;
            for value in points
                .iter()
                .flatten()
                .filter_map(|point| axis.project(*point, coord))
            {
                sink.push(value);
            }
            sink.finish_leaf(start);
        });
        sink.result()
    }

    /// Depth-first walk over the leaves crossed by a scan line.
    ///
    /// Each frame remembers which entry of the axis' visit order comes next;
    /// children the line misses are skipped without a push.
    fn walk_line<F>(&self, axis: Axis, coord: u32, mut visit_leaf: F)
    where
        F: FnMut(&LeafSlots),
    {
        if !axis.spans(&self.node(ROOT).region, coord) {
            return;
        }
        let order = axis.visit_order();
        let mut stack = ScanStack::new();
        stack.push(ScanFrame {
            node: ROOT,
            next_child: 0,
        });

        while let Some(frame) = stack.last_mut() {
            match &self.node(frame.node).kind {
                NodeKind::Leaf { points } => {
                    visit_leaf(points);
                    stack.pop();
                }
                NodeKind::Internal { children } => {
                    let Some(quadrant) = order.get(usize::from(frame.next_child)) else {
                        stack.pop();
                        continue;
                    };
                    frame.next_child += 1;
                    let child = children[quadrant.index()];
                    if axis.spans(&self.node(child).region, coord) {
                        stack.push(ScanFrame {
                            node: child,
                            next_child: 0,
                        });
                    }
                }
            }
        }
    }
}

/// Collects scan matches into a caller-sized buffer.
struct ScanSink<'a> {
    out: &'a mut [u32],
    order: ScanOrder,
    written: usize,
    total: usize,
}

impl<'a> ScanSink<'a> {
    fn new(out: &'a mut [u32], order: ScanOrder) -> Self {
        Self {
            out,
            order,
            written: 0,
            total: 0,
        }
    }

    fn push(&mut self, value: u32) {
        self.total += 1;
        match self.order {
            ScanOrder::Descending => self.push_descending(value),
            ScanOrder::PerLeaf => {
                if self.written < self.out.len() {
                    self.out[self.written] = value;
                    self.written += 1;
                }
            }
        }
    }

    /// Keeps `out[..written]` sorted descending, dropping the smallest value
    /// once the buffer is full.
    fn push_descending(&mut self, value: u32) {
        let capacity = self.out.len();
        if self.written < capacity {
            let pos = self.out[..self.written].partition_point(|&v| v >= value);
            self.out.copy_within(pos..self.written, pos + 1);
            self.out[pos] = value;
            self.written += 1;
        } else if capacity > 0 && value > self.out[capacity - 1] {
            let pos = self.out.partition_point(|&v| v >= value);
            self.out.copy_within(pos..capacity - 1, pos + 1);
            self.out[pos] = value;
        }
    }

    fn finish_leaf(&mut self, start: usize) {
        if self.order == ScanOrder::PerLeaf {
            self.out[start..self.written].sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    fn result(&self) -> ScanResult {
        ScanResult {
            total: self.total,
            written: self.written,
            overflow: self.total > self.out.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_sink_keeps_largest() {
        let mut out = [0u32; 3];
        let mut sink = ScanSink::new(&mut out, ScanOrder::Descending);
        for value in [4, 9, 1, 7, 7, 12, 3] {
            sink.push(value);
        }
        let result = sink.result();
        assert_eq!(result.total, 7);
        assert_eq!(result.written, 3);
        assert!(result.overflow);
        assert_eq!(out, [12, 9, 7]);
    }

    #[test]
    fn test_descending_sink_zero_capacity() {
        let mut out: [u32; 0] = [];
        let mut sink = ScanSink::new(&mut out, ScanOrder::Descending);
        sink.push(5);
        sink.push(6);
        assert_eq!(
            sink.result(),
            ScanResult {
                total: 2,
                written: 0,
                overflow: true
            }
        );
    }

    #[test]
    fn test_per_leaf_sink_sorts_only_the_batch() {
        let mut out = [0u32; 5];
        let mut sink = ScanSink::new(&mut out, ScanOrder::PerLeaf);
        sink.push(1);
        sink.push(2);
        sink.finish_leaf(0);
        let start = sink.written;
        sink.push(3);
        sink.push(8);
        sink.push(6);
        sink.push(9);
        sink.finish_leaf(start);
        let result = sink.result();
        assert_eq!(result.total, 6);
        assert_eq!(result.written, 5);
        assert_eq!(out, [2, 1, 8, 6, 3]);
    }

    #[test]
    fn test_walk_line_skips_missed_quadrants() {
        let mut tree = QuadTree::new(63, 63);
        for (x, y) in [(1, 1), (40, 1), (1, 40), (40, 40), (2, 2)] {
            assert!(tree.insert(x, y));
        }
        let mut leaves = 0;
        tree.walk_line(Axis::X, 1, |_| leaves += 1);
        assert_eq!(leaves, 2);
        let mut leaves = 0;
        tree.walk_line(Axis::Y, 64, |_| leaves += 1);
        assert_eq!(leaves, 0);
    }
}
