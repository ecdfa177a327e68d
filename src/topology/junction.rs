use std::collections::HashSet;

use crate::raster::Raster;

use super::Corner;

/// Finds every junction corner of the raster.
///
/// A corner is a junction when the four pixels touching it (out-of-bounds
/// reads are void) carry 3 or more distinct colors, or exactly 2 colors in
/// the diagonal "checkerboard" arrangement — which has no single dividing
/// edge and must act as a branch point. Pure function of the raster; the
/// walker may later grow the returned set with injected island nodes.
#[must_use]
pub fn detect_junctions<R: Raster + ?Sized>(raster: &R) -> HashSet<Corner> {
    let mut junctions = HashSet::new();

    for y in 0..=raster.height() {
        for x in 0..=raster.width() {
            let top_left = raster.sample(x - 1, y - 1);
            let top_right = raster.sample(x, y - 1);
            let bottom_left = raster.sample(x - 1, y);
            let bottom_right = raster.sample(x, y);

            let mut unique = 1;
            if top_right != top_left {
                unique += 1;
            }
            if bottom_left != top_left && bottom_left != top_right {
                unique += 1;
            }
            if bottom_right != top_left
                && bottom_right != top_right
                && bottom_right != bottom_left
            {
                unique += 1;
            }

            let checkerboard =
                bottom_left == top_right && bottom_right == top_left && top_left != top_right;

            if unique > 2 || checkerboard {
                junctions.insert(Corner::new(x, y));
            }
        }
    }

    junctions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::ascii_raster;

    #[test]
    fn uniform_raster_has_no_junctions() {
        let raster = ascii_raster(&["WWW", "WWW", "WWW"]);
        assert!(
            detect_junctions(&raster).is_empty(),
            "uniform map should produce no junctions"
        );
    }

    #[test]
    fn straight_divider_ends_are_junctions() {
        // RED over BLUE: the divider meets void at the image rim, giving a
        // tri-color corner on each side and nowhere else.
        let raster = ascii_raster(&["RRRR", "RRRR", "BBBB", "BBBB"]);
        let junctions = detect_junctions(&raster);
        assert_eq!(
            junctions,
            HashSet::from([Corner::new(0, 2), Corner::new(4, 2)]),
            "got {junctions:?}"
        );
    }

    #[test]
    fn tri_point_is_a_junction() {
        let raster = ascii_raster(&["RRGG", "RRGG", "BBBB", "BBBB"]);
        let junctions = detect_junctions(&raster);
        assert!(
            junctions.contains(&Corner::new(2, 2)),
            "tri-color meeting point missing from {junctions:?}"
        );
    }

    #[test]
    fn checkerboard_corner_is_a_junction() {
        let raster = ascii_raster(&["RW", "WR"]);
        let junctions = detect_junctions(&raster);
        assert!(
            junctions.contains(&Corner::new(1, 1)),
            "diagonal two-color corner missing from {junctions:?}"
        );
    }

    #[test]
    fn isolated_pixel_corners_are_not_junctions() {
        // Every corner of the lone GREEN pixel touches exactly 2 colors in
        // an L arrangement — islands have no natural branch point.
        let raster = ascii_raster(&["WWW", "WGW", "WWW"]);
        assert!(
            detect_junctions(&raster).is_empty(),
            "island corners must not be junctions"
        );
    }
}
