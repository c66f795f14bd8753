/// Order in which axis scans leave matches in the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// The buffer holds the largest matches, sorted in descending order.
    #[default]
    Descending,
    /// Matches are appended in traversal order and only each leaf's batch is
    /// sorted descending. Once the buffer is full further matches are only
    /// counted.
    PerLeaf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scan_order: ScanOrder,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scan_order: ScanOrder::Descending,
        }
    }
}
