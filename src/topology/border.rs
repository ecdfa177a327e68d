use crate::raster::Rgba8;

use super::Corner;

slotmap::new_key_type! {
    /// Unique identifier for a border in the scan result's arena.
    pub struct BorderId;
}

/// A traced boundary polyline between exactly two regions.
///
/// The path runs corner to corner; `color_left` is the region on the left
/// of the traversal direction, `color_right` on the right. Raw paths step
/// one lattice unit at a time; after simplification only dominant points
/// remain, with the endpoints untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    /// Ordered corner sequence.
    pub path: Vec<Corner>,
    /// Region color on the left of the traversal direction.
    pub color_left: Rgba8,
    /// Region color on the right of the traversal direction.
    pub color_right: Rgba8,
}

impl Border {
    /// Whether this border separates the given unordered color pair.
    #[must_use]
    pub fn separates(&self, a: Rgba8, b: Rgba8) -> bool {
        (self.color_left == a && self.color_right == b)
            || (self.color_left == b && self.color_right == a)
    }
}
