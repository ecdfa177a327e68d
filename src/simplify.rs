use crate::math::distance_2d::point_to_segment_dist;
use crate::topology::Corner;

/// Douglas-Peucker reduction of a border path.
///
/// Keeps the first and last point unconditionally, recursively keeps the
/// point farthest from the chord between the current endpoints whenever that
/// distance exceeds `tolerance`, and collapses the span to its endpoints
/// otherwise. Distance is clamped point-to-segment, so sharp turns near a
/// chord's extension are not undershot. Ties pick the lowest index, which
/// makes the reduction deterministic and idempotent. Paths shorter than 3
/// points pass through unchanged.
#[must_use]
pub fn simplify_path(path: &[Corner], tolerance: f64) -> Vec<Corner> {
    if path.len() < 3 {
        return path.to_vec();
    }

    let mut keep = vec![false; path.len()];
    keep[0] = true;
    keep[path.len() - 1] = true;
    simplify_span(path, 0, path.len() - 1, tolerance, &mut keep);

    path.iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect()
}

fn simplify_span(path: &[Corner], first: usize, last: usize, tolerance: f64, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let a = path[first].to_point2();
    let b = path[last].to_point2();

    // Strictly-greater comparison: the lowest index wins ties.
    let mut max_dist = 0.0;
    let mut split = first;
    for i in (first + 1)..last {
        let p = path[i].to_point2();
        let d = point_to_segment_dist(p.x, p.y, a.x, a.y, b.x, b.y);
        if d > max_dist {
            max_dist = d;
            split = i;
        }
    }

    if max_dist > tolerance {
        keep[split] = true;
        simplify_span(path, first, split, tolerance, keep);
        simplify_span(path, split, last, tolerance, keep);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn corners(points: &[(i32, i32)]) -> Vec<Corner> {
        points.iter().map(|&(x, y)| Corner::new(x, y)).collect()
    }

    #[test]
    fn straight_line_collapses_to_endpoints() {
        let path = corners(&[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        let simplified = simplify_path(&path, 0.5);
        assert_eq!(simplified, corners(&[(0, 2), (4, 2)]));
    }

    #[test]
    fn staircase_collapses_within_tolerance() {
        // Unit staircase deviates at most ~0.7 from its chord.
        let path = corners(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2), (3, 3)]);
        let simplified = simplify_path(&path, 1.0);
        assert_eq!(simplified, corners(&[(0, 0), (3, 3)]));
    }

    #[test]
    fn dominant_corner_survives() {
        let path = corners(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (3, 3)]);
        let simplified = simplify_path(&path, 0.5);
        assert_eq!(simplified, corners(&[(0, 0), (3, 0), (3, 3)]));
    }

    #[test]
    fn short_paths_pass_through() {
        let two = corners(&[(0, 0), (5, 5)]);
        assert_eq!(simplify_path(&two, 10.0), two);
        let one = corners(&[(1, 1)]);
        assert_eq!(simplify_path(&one, 10.0), one);
        assert_eq!(simplify_path(&[], 10.0), Vec::<Corner>::new());
    }

    #[test]
    fn zero_tolerance_keeps_every_bend() {
        let path = corners(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        let simplified = simplify_path(&path, 0.0);
        assert_eq!(simplified, path);
    }

    #[test]
    fn zero_tolerance_still_collapses_collinear_runs() {
        let path = corners(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(simplify_path(&path, 0.0), corners(&[(0, 0), (2, 0)]));
    }

    #[test]
    fn closed_loop_keeps_its_shape() {
        // First == last: the degenerate chord falls back to point distance,
        // so the ring's extremes survive.
        let path = corners(&[(2, 2), (3, 2), (3, 3), (2, 3), (2, 2)]);
        let simplified = simplify_path(&path, 0.5);
        assert_eq!(simplified, path);
    }

    proptest! {
        #[test]
        fn endpoints_always_preserved(
            points in prop::collection::vec((-20i32..20, -20i32..20), 1..40),
            tolerance in 0.0f64..4.0,
        ) {
            let path = corners(&points);
            let simplified = simplify_path(&path, tolerance);
            prop_assert!(!simplified.is_empty());
            prop_assert_eq!(simplified.first(), path.first());
            prop_assert_eq!(simplified.last(), path.last());
            prop_assert!(simplified.len() <= path.len());
        }

        #[test]
        fn simplification_is_idempotent(
            points in prop::collection::vec((-20i32..20, -20i32..20), 1..40),
            tolerance in 0.0f64..4.0,
        ) {
            let path = corners(&points);
            let once = simplify_path(&path, tolerance);
            let twice = simplify_path(&once, tolerance);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn survivors_are_a_subsequence(
            points in prop::collection::vec((-20i32..20, -20i32..20), 1..40),
            tolerance in 0.0f64..4.0,
        ) {
            let path = corners(&points);
            let simplified = simplify_path(&path, tolerance);
            let mut cursor = 0;
            for p in &simplified {
                let found = path[cursor..].iter().position(|q| q == p);
                prop_assert!(found.is_some(), "point {:?} out of order", p);
                cursor += found.unwrap() + 1;
            }
        }
    }
}
