mod config;
mod count;
mod insert;
mod inspect;
mod query;
mod scan;
mod types;

pub use config::{Config, ScanOrder};
pub use scan::ScanResult;

use crate::error::{QuadtreeError, QuadtreeResult};
use common::geometry::{Point, Region};
use types::*;

/// Point quadtree over a fixed square region `[0, xmax] x [0, ymax]`.
///
/// Leaves hold up to four points and split into four quadrants when a fifth
/// point arrives. Nodes live in a flat arena addressed by index; children are
/// owned by the arena and parents are plain back-references.
pub struct QuadTree {
    nodes: Vec<Node>,
    len: usize,
    config: Config,
}

impl QuadTree {
    /// Creates a tree covering `[0, xmax] x [0, ymax]`.
    ///
    /// # Panics
    ///
    /// Panics if the region is not square (`xmax != ymax`).
    pub fn new(xmax: u32, ymax: u32) -> Self {
        Self::new_with_config(xmax, ymax, Config::default())
    }

    /// # Panics
    ///
    /// Panics if the region is not square (`xmax != ymax`).
    pub fn new_with_config(xmax: u32, ymax: u32, config: Config) -> Self {
        match Self::try_new_with_config(xmax, ymax, config) {
            Ok(tree) => tree,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(xmax: u32, ymax: u32) -> QuadtreeResult<Self> {
        Self::try_new_with_config(xmax, ymax, Config::default())
    }

    pub fn try_new_with_config(xmax: u32, ymax: u32, config: Config) -> QuadtreeResult<Self> {
        let bounds = Region::from_origin(xmax, ymax);
        if !bounds.is_square() {
            return Err(QuadtreeError::NonSquareRegion {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        Ok(Self {
            nodes: vec![Node::new_leaf(bounds, None)],
            len: 0,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline(always)]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    #[inline(always)]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }
}

impl std::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds())
            .field("points", &self.len)
            .field("nodes", &self.nodes.len())
            .field("config", &self.config)
            .finish()
    }
}
