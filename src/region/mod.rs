pub mod stitch;

pub use stitch::{stitch_loops, Polygon};

use std::collections::{HashMap, HashSet};

use slotmap::SlotMap;

use crate::error::ScanWarning;
use crate::math::{Point2, Vector2};
use crate::raster::Rgba8;
use crate::topology::{Border, BorderId, Corner};

/// A province: every output the scan derives for one color key.
///
/// The footprint may be disjoint (mainland plus islands), so a region owns
/// zero or more loops. The centroid is the unweighted vertex average — a
/// fast approximation that lands inside the largest landmass, good enough
/// for label placement.
#[derive(Debug, Clone)]
pub struct Region {
    /// The color key identifying this region.
    pub color: Rgba8,
    /// Boundary loops, wound with the region's interior on the left.
    pub polygons: Vec<Polygon>,
    /// Colors of adjacent regions. Never contains the void color.
    pub neighbors: HashSet<Rgba8>,
    /// Unweighted average of all polygon vertices.
    pub centroid: Point2,
    /// The borders bounding this region, in the scan's border arena.
    pub borders: Vec<BorderId>,
    /// Number of raster pixels carrying this region's color.
    pub pixel_count: usize,
}

/// Builds the region table from the scan's borders.
///
/// Each border contributes two oriented copies: as traced to its left color,
/// point-reversed to its right color, so every region's loops share one
/// winding convention (interior on the left). Left and right colors are
/// registered as mutual neighbors unless one side is void; the void color
/// itself never becomes a region. Open-loop stitch failures are reported
/// through `warnings`.
#[must_use]
pub fn build_regions(
    borders: &SlotMap<BorderId, Border>,
    pixel_counts: &HashMap<Rgba8, usize>,
    warnings: &mut Vec<ScanWarning>,
) -> HashMap<Rgba8, Region> {
    let mut segments: HashMap<Rgba8, Vec<Vec<Corner>>> = HashMap::new();
    let mut neighbors: HashMap<Rgba8, HashSet<Rgba8>> = HashMap::new();
    let mut bounding: HashMap<Rgba8, Vec<BorderId>> = HashMap::new();

    for (id, border) in borders {
        segments
            .entry(border.color_left)
            .or_default()
            .push(border.path.clone());
        register_neighbor(&mut neighbors, border.color_left, border.color_right);
        bounding.entry(border.color_left).or_default().push(id);

        // Reversed copy for the right side keeps the winding consistent.
        let mut reversed = border.path.clone();
        reversed.reverse();
        segments.entry(border.color_right).or_default().push(reversed);
        register_neighbor(&mut neighbors, border.color_right, border.color_left);
        bounding.entry(border.color_right).or_default().push(id);
    }

    // Sorted color order makes region and warning output deterministic.
    let mut colors: Vec<Rgba8> = segments.keys().copied().collect();
    colors.sort_unstable();

    let mut regions = HashMap::new();
    for color in colors {
        if color.is_void() {
            continue;
        }
        let Some(pool) = segments.remove(&color) else {
            continue;
        };

        let (polygons, open) = stitch_loops(&pool);
        for _ in 0..open {
            warnings.push(ScanWarning::OpenLoop { color });
        }

        regions.insert(
            color,
            Region {
                color,
                centroid: vertex_centroid(&polygons),
                polygons,
                neighbors: neighbors.remove(&color).unwrap_or_default(),
                borders: bounding.remove(&color).unwrap_or_default(),
                pixel_count: pixel_counts.get(&color).copied().unwrap_or(0),
            },
        );
    }

    regions
}

fn register_neighbor(
    neighbors: &mut HashMap<Rgba8, HashSet<Rgba8>>,
    me: Rgba8,
    neighbor: Rgba8,
) {
    // Void marks the map edge, not a province.
    if neighbor.is_void() {
        return;
    }
    neighbors.entry(me).or_default().insert(neighbor);
}

/// Unweighted average of every vertex across all loops.
#[allow(clippy::cast_precision_loss)]
fn vertex_centroid(polygons: &[Polygon]) -> Point2 {
    let mut sum = Vector2::zeros();
    let mut count = 0_usize;
    for polygon in polygons {
        for p in &polygon.points {
            sum += p.to_point2().coords;
            count += 1;
        }
    }
    if count == 0 {
        Point2::origin()
    } else {
        Point2::from(sum / count as f64)
    }
}
