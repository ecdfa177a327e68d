use std::collections::HashSet;

use tracing::debug;

use crate::error::ScanWarning;
use crate::raster::{Raster, Rgba8};

use super::{Border, Corner, DirectedEdge, Direction, EdgeKey};

/// Junction-to-junction border tracer with island injection.
///
/// Owns all per-scan mutable state: the visited-edge set and the junction
/// set (which grows when island nodes are injected). One walker serves one
/// scan; construct a fresh one per raster.
pub struct TopologyWalker<'a, R: Raster + ?Sized> {
    raster: &'a R,
    junctions: HashSet<Corner>,
    visited: HashSet<EdgeKey>,
    warnings: Vec<ScanWarning>,
    step_cap: u64,
}

impl<'a, R: Raster + ?Sized> TopologyWalker<'a, R> {
    /// Creates a walker over `raster` seeded with the detected junctions.
    #[must_use]
    pub fn new(raster: &'a R, junctions: HashSet<Corner>) -> Self {
        // Directed-edge count of the padded lattice; no well-formed trace
        // can run longer.
        let w = u64::from(raster.width().unsigned_abs());
        let h = u64::from(raster.height().unsigned_abs());
        let step_cap = 4 * (w + 2) * (h + 2);

        Self {
            raster,
            junctions,
            visited: HashSet::new(),
            warnings: Vec::new(),
            step_cap,
        }
    }

    /// Traces every border of the raster.
    ///
    /// Guarantee: every unit edge separating two differently-colored pixels
    /// appears in exactly one returned border. Recoverable defects (dead
    /// ends, cap hits) are returned as warnings alongside the borders.
    #[must_use]
    pub fn collect_borders(mut self) -> (Vec<Border>, Vec<ScanWarning>) {
        let mut borders = Vec::new();

        // Phase 1: trace from real junctions, in deterministic order.
        let mut seeds: Vec<Corner> = self.junctions.iter().copied().collect();
        seeds.sort_unstable_by_key(|c| (c.y, c.x));
        for node in seeds {
            self.trace_from_node(node, &mut borders);
        }

        // Phase 2: island sweep. Any border edge still unvisited belongs to
        // a closed ring no junction reaches; injecting a node there lets the
        // standard trace consume the whole ring on the spot, so one sweep
        // suffices.
        for y in 0..=self.raster.height() {
            for x in 0..=self.raster.width() {
                let corner = Corner::new(x, y);
                self.check_and_inject_island(corner, Direction::Right, &mut borders);
                self.check_and_inject_island(corner, Direction::Down, &mut borders);
            }
        }

        (borders, self.warnings)
    }

    fn check_and_inject_island(
        &mut self,
        corner: Corner,
        dir: Direction,
        borders: &mut Vec<Border>,
    ) {
        if self.visited.contains(&DirectedEdge::new(corner, dir).key()) {
            return;
        }
        let (a, b) = self.edge_colors(corner, dir);
        if a != b {
            debug!("injecting island node at ({}, {})", corner.x, corner.y);
            self.junctions.insert(corner);
            self.trace_from_node(corner, borders);
        }
    }

    fn trace_from_node(&mut self, node: Corner, borders: &mut Vec<Border>) {
        for dir in Direction::CARDINALS {
            if self.visited.contains(&DirectedEdge::new(node, dir).key()) {
                continue;
            }
            let (color_left, color_right) = self.edge_colors(node, dir);
            if color_left == color_right {
                continue;
            }
            if let Some(path) = self.trace_path(node, dir, color_left, color_right) {
                borders.push(Border {
                    path,
                    color_left,
                    color_right,
                });
            }
        }
    }

    /// Follows one border from a junction until it re-enters any junction.
    ///
    /// Continuation priority is straight, then left turn, then right turn;
    /// a candidate qualifies only if it separates the same unordered color
    /// pair. Returns `None` (with a warning recorded) on a dead end or when
    /// the safety cap is exceeded.
    fn trace_path(
        &mut self,
        start: Corner,
        start_dir: Direction,
        a: Rgba8,
        b: Rgba8,
    ) -> Option<Vec<Corner>> {
        let mut path = vec![start];
        let mut pos = start;
        let mut dir = start_dir;
        let mut steps: u64 = 0;

        self.mark_visited(pos, dir);

        loop {
            pos = pos.step(dir);
            path.push(pos);

            // Entering any junction, real or injected, ends the trace.
            if self.junctions.contains(&pos) {
                return Some(path);
            }

            let next = [dir, dir.turn_left(), dir.turn_right()]
                .into_iter()
                .find(|&d| self.continues_pair(pos, d, a, b));

            let Some(next) = next else {
                self.warnings.push(ScanWarning::DeadEndTrace {
                    start,
                    dir: start_dir,
                });
                return None;
            };

            self.mark_visited(pos, next);
            dir = next;

            steps += 1;
            if steps > self.step_cap {
                self.warnings.push(ScanWarning::TraceCapExceeded {
                    start,
                    dir: start_dir,
                    cap: self.step_cap,
                });
                return None;
            }
        }
    }

    /// The (left, right) pixel colors of the edge leaving `corner` along
    /// `dir`, relative to the traversal direction.
    fn edge_colors(&self, corner: Corner, dir: Direction) -> (Rgba8, Rgba8) {
        let Corner { x, y } = corner;
        match dir {
            Direction::Right => (self.raster.sample(x, y - 1), self.raster.sample(x, y)),
            Direction::Down => (self.raster.sample(x, y), self.raster.sample(x - 1, y)),
            Direction::Left => (
                self.raster.sample(x - 1, y),
                self.raster.sample(x - 1, y - 1),
            ),
            Direction::Up => (
                self.raster.sample(x - 1, y - 1),
                self.raster.sample(x, y - 1),
            ),
        }
    }

    fn continues_pair(&self, corner: Corner, dir: Direction, a: Rgba8, b: Rgba8) -> bool {
        let (c1, c2) = self.edge_colors(corner, dir);
        (c1 == a && c2 == b) || (c1 == b && c2 == a)
    }

    fn mark_visited(&mut self, pos: Corner, dir: Direction) {
        self.visited.insert(DirectedEdge::new(pos, dir).key());
    }
}
