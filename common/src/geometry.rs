use rand::Rng;
use std::fmt;

/// An integer point. `Point::EMPTY` is reserved and never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// All coordinate bits set; marks an unused storage slot.
    pub const EMPTY: Point = Point {
        x: u32::MAX,
        y: u32::MAX,
    };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four sub-regions a region splits into. The discriminant is the
/// child slot used by the quadtree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Inclusive axis-aligned box. `y` grows southwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Region {
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        debug_assert!(
            min_x <= max_x && min_y <= max_y,
            "region corners out of order: ({}, {})-({}, {})",
            min_x,
            min_y,
            max_x,
            max_y
        );
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The region `[0, max_x] x [0, max_y]`.
    pub fn from_origin(max_x: u32, max_y: u32) -> Self {
        Self::new(0, 0, max_x, max_y)
    }

    // Widths are u64 so that the full u32 domain (2^32 wide) fits.
    pub fn width(&self) -> u64 {
        u64::from(self.max_x) - u64::from(self.min_x) + 1
    }

    pub fn height(&self) -> u64 {
        u64::from(self.max_y) - u64::from(self.min_y) + 1
    }

    pub fn area(&self) -> u128 {
        u128::from(self.width()) * u128::from(self.height())
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.spans_x(x) && self.spans_y(y)
    }

    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Whether the vertical line at `x` crosses this region.
    #[inline]
    pub fn spans_x(&self, x: u32) -> bool {
        x >= self.min_x && x <= self.max_x
    }

    /// Whether the horizontal line at `y` crosses this region.
    #[inline]
    pub fn spans_y(&self, y: u32) -> bool {
        y >= self.min_y && y <= self.max_y
    }

    pub fn contains_region(&self, other: &Region) -> bool {
        self.contains_point(other.top_left()) && self.contains_point(other.bottom_right())
    }

    pub fn intersects(&self, other: &Region) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    pub fn can_subdivide(&self) -> bool {
        self.width() >= 2 && self.height() >= 2
    }

    /// Splits into NW, NE, SW, SE (in `Quadrant::index` order).
    ///
    /// The west/north halves are `width / 2` and `height / 2` wide; the east and
    /// south quadrants take any odd remainder so the four children always tile
    /// this region exactly. Returns `None` for regions one unit wide or tall.
    pub fn subdivide(&self) -> Option<[Region; 4]> {
        if !self.can_subdivide() {
            return None;
        }
        let mid_x = self.min_x + (self.width() / 2) as u32;
        let mid_y = self.min_y + (self.height() / 2) as u32;
        Some([
            Region::new(self.min_x, self.min_y, mid_x - 1, mid_y - 1),
            Region::new(mid_x, self.min_y, self.max_x, mid_y - 1),
            Region::new(self.min_x, mid_y, mid_x - 1, self.max_y),
            Region::new(mid_x, mid_y, self.max_x, self.max_y),
        ])
    }

    pub fn quadrant(&self, quadrant: Quadrant) -> Option<Region> {
        self.subdivide().map(|regions| regions[quadrant.index()])
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.min_x..=self.max_x),
            rng.gen_range(self.min_y..=self.max_y),
        )
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]-[{}, {}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
