use std::collections::HashMap;

use crate::topology::Corner;

/// A stitched boundary loop.
///
/// Closed loops repeat their first point as their last. `closed = false`
/// marks a best-effort partial loop from a malformed segment pool; it is
/// still emitted so no region data is silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub points: Vec<Corner>,
    pub closed: bool,
}

/// Stitches oriented border segments into boundary loops.
///
/// Repeatedly takes the lowest-index unused segment, then extends it with
/// any unused segment starting at the running endpoint (found through a
/// start-point lookup, skipping the duplicated shared point) until the loop
/// returns to its own start. Returns the loops plus the number that failed
/// to close.
#[must_use]
pub fn stitch_loops(segments: &[Vec<Corner>]) -> (Vec<Polygon>, usize) {
    let mut starts_at: HashMap<Corner, Vec<usize>> = HashMap::new();
    for (i, seg) in segments.iter().enumerate() {
        if let Some(&first) = seg.first() {
            starts_at.entry(first).or_default().push(i);
        }
    }

    let mut used = vec![false; segments.len()];
    let mut loops = Vec::new();
    let mut open = 0;

    for seed in 0..segments.len() {
        if used[seed] || segments[seed].is_empty() {
            continue;
        }
        used[seed] = true;

        let mut points = segments[seed].clone();
        let start = points[0];
        let mut end = points[points.len() - 1];

        while end != start {
            let next = starts_at
                .get(&end)
                .and_then(|candidates| candidates.iter().find(|&&i| !used[i]).copied());

            let Some(next) = next else {
                break;
            };

            used[next] = true;
            points.extend_from_slice(&segments[next][1..]);
            end = points[points.len() - 1];
        }

        if end != start {
            open += 1;
        }
        loops.push(Polygon {
            points,
            closed: end == start,
        });
    }

    (loops, open)
}
