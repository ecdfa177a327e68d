pub mod border;
pub mod junction;
pub mod walker;

pub use border::{Border, BorderId};
pub use junction::detect_junctions;
pub use walker::TopologyWalker;

use crate::math::Point2;

/// Integer lattice coordinate of a grid corner.
///
/// Corner `(x, y)` sits between pixels `(x-1, y-1)`, `(x, y-1)`, `(x-1, y)`
/// and `(x, y)`; valid corners of a `W`×`H` raster span `[0, W]`×`[0, H]`.
/// Border paths and polygons are sequences of corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner {
    pub x: i32,
    pub y: i32,
}

impl Corner {
    /// Creates a corner at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring corner one unit along `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Converts to a float point for centroid and distance math.
    #[must_use]
    pub fn to_point2(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal traversal direction on the corner lattice, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All four cardinals, in trace priority order for junction fan-out.
    pub const CARDINALS: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Unit offset of this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
        }
    }

    /// 90° left turn (y-down frame: right → up).
    #[must_use]
    pub const fn turn_left(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }

    /// 90° right turn (y-down frame: right → down).
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }
}

/// Axis of a unit grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A unit edge together with its traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    pub origin: Corner,
    pub dir: Direction,
}

impl DirectedEdge {
    /// Creates a directed edge leaving `origin` along `dir`.
    #[must_use]
    pub const fn new(origin: Corner, dir: Direction) -> Self {
        Self { origin, dir }
    }

    /// Canonical identity of the underlying physical edge.
    ///
    /// Both traversal directions of one edge map to the same key, so a
    /// single visited-set insert covers the edge from either side.
    #[must_use]
    pub const fn key(self) -> EdgeKey {
        match self.dir {
            Direction::Right => EdgeKey {
                anchor: self.origin,
                axis: Axis::Horizontal,
            },
            Direction::Left => EdgeKey {
                anchor: Corner::new(self.origin.x - 1, self.origin.y),
                axis: Axis::Horizontal,
            },
            Direction::Down => EdgeKey {
                anchor: self.origin,
                axis: Axis::Vertical,
            },
            Direction::Up => EdgeKey {
                anchor: Corner::new(self.origin.x, self.origin.y - 1),
                axis: Axis::Vertical,
            },
        }
    }
}

/// Canonical identity of a unit grid edge: its left/top anchor corner plus
/// an axis. Hashable so every physical edge is visited at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub anchor: Corner,
    pub axis: Axis,
}
