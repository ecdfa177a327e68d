use thiserror::Error;

use crate::raster::Rgba8;
use crate::topology::{Corner, Direction};

/// Top-level error type for the provmap scanner.
#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("simplification tolerance {value} must be non-negative")]
    NegativeTolerance { value: f64 },
}

/// Errors related to raster input.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("raster has no pixels: {width}x{height}")]
    EmptyRaster { width: i32, height: i32 },

    #[error("pixel buffer holds {actual} colors, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// Recoverable conditions collected during a scan.
///
/// Warnings never abort the scan; they accompany the result so callers can
/// decide whether a partially degenerate map is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanWarning {
    /// A trace found no continuing edge before reaching a junction.
    /// The partial border was discarded.
    #[error("dead-end trace from {start} heading {dir:?}")]
    DeadEndTrace { start: Corner, dir: Direction },

    /// A trace exceeded the safety iteration cap. Treated as a dead end.
    #[error("trace from {start} heading {dir:?} exceeded {cap} steps")]
    TraceCapExceeded {
        start: Corner,
        dir: Direction,
        cap: u64,
    },

    /// A region's segment pool could not be stitched into a closed loop.
    /// The partial loop was emitted with `closed = false`.
    #[error("region {color:?} has an unclosed boundary loop")]
    OpenLoop { color: Rgba8 },
}

/// Convenience type alias for results using [`MapError`].
pub type Result<T> = std::result::Result<T, MapError>;
