use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::debug;

use crate::error::{MapError, RasterError, Result, ScanWarning};
use crate::raster::{color_histogram, Raster, Rgba8};
use crate::region::{build_regions, Region};
use crate::simplify::simplify_path;
use crate::topology::{detect_junctions, Border, BorderId, TopologyWalker};

/// Parameters of one scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Douglas-Peucker tolerance applied to every traced border.
    /// Must be non-negative; 0 keeps every bend.
    pub simplify_tolerance: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            simplify_tolerance: 1.0,
        }
    }
}

/// The complete result of one scan: simplified borders, the region table,
/// and any recoverable diagnostics. Owned by the caller; the scanner keeps
/// nothing between invocations.
#[derive(Debug)]
pub struct MapData {
    /// Raster width in pixels.
    pub width: i32,
    /// Raster height in pixels.
    pub height: i32,
    /// All traced borders, post-simplification, in trace order.
    pub borders: SlotMap<BorderId, Border>,
    /// One region per non-void color that borders anything.
    pub regions: HashMap<Rgba8, Region>,
    /// Recoverable defects encountered during the scan.
    pub warnings: Vec<ScanWarning>,
}

/// Converts a color-keyed raster into its vector topology.
///
/// Pipeline: junction detection → border tracing (with island injection) →
/// path simplification → loop stitching and region graph construction.
/// One synchronous CPU-bound pass; the raster is only read.
///
/// # Errors
///
/// Returns an error if the raster has no pixels or the tolerance is
/// negative. Everything else is recoverable and lands in
/// [`MapData::warnings`].
pub fn scan<R: Raster + ?Sized>(raster: &R, options: &ScanOptions) -> Result<MapData> {
    let width = raster.width();
    let height = raster.height();
    if width <= 0 || height <= 0 {
        return Err(RasterError::EmptyRaster { width, height }.into());
    }
    if options.simplify_tolerance < 0.0 {
        return Err(MapError::NegativeTolerance {
            value: options.simplify_tolerance,
        });
    }

    let junctions = detect_junctions(raster);
    debug!("detected {} junction corners", junctions.len());

    let walker = TopologyWalker::new(raster, junctions);
    let (raw_borders, mut warnings) = walker.collect_borders();
    debug!(
        "traced {} raw borders, {} warnings",
        raw_borders.len(),
        warnings.len()
    );

    let mut borders: SlotMap<BorderId, Border> = SlotMap::with_key();
    for border in raw_borders {
        let path = simplify_path(&border.path, options.simplify_tolerance);
        borders.insert(Border { path, ..border });
    }

    let pixel_counts = color_histogram(raster);
    let regions = build_regions(&borders, &pixel_counts, &mut warnings);
    debug!("built {} regions", regions.len());

    Ok(MapData {
        width,
        height,
        borders,
        regions,
        warnings,
    })
}
